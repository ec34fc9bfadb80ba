use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::entity::{Attempt, AttemptAnswerRow};
use crate::web::schema::{RecordShape, Shape};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AttemptsQuery {
    pub quizids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AttemptResponse {
    id: i64,
    quizid: i64,
    userid: i64,
    timestart: i64,
    timefinish: i64,
    questions: Vec<AttemptQuestionResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AttemptQuestionResponse {
    id: i64,
    mark: f64,
    answer: String,
}

impl AttemptResponse {
    pub fn from_parts(attempt: Attempt, questions: Vec<AttemptQuestionResponse>) -> Self {
        Self {
            id: attempt.id(),
            quizid: attempt.quiz_id(),
            userid: attempt.user_id(),
            timestart: attempt.time_start(),
            timefinish: attempt.time_finish(),
            questions,
        }
    }
}

impl From<&AttemptAnswerRow> for AttemptQuestionResponse {
    fn from(row: &AttemptAnswerRow) -> Self {
        Self {
            id: row.question_id,
            mark: row.mark,
            answer: row.answer.clone(),
        }
    }
}

pub static ATTEMPTS_PARAMETERS: LazyLock<RecordShape> = LazyLock::new(|| {
    RecordShape::new(vec![(
        "quizids",
        Shape::list("List of quiz IDs.", Shape::int("Quiz ID")),
    )])
});

pub static ATTEMPTS_RETURNS: LazyLock<Shape> = LazyLock::new(|| {
    Shape::list(
        "List of attempts.",
        Shape::record(vec![
            ("id", Shape::int("Attempt ID")),
            ("quizid", Shape::int("Quiz ID")),
            ("userid", Shape::int("User ID")),
            (
                "timestart",
                Shape::int("Timestamp of when this attempt was started."),
            ),
            (
                "timefinish",
                Shape::int("Timestamp of when this attempt was finished."),
            ),
            (
                "questions",
                Shape::list(
                    "Per-question results for this attempt.",
                    Shape::record(vec![
                        ("id", Shape::int("Question ID")),
                        ("mark", Shape::float("Mark received")),
                        ("answer", Shape::raw("Answer given")),
                    ]),
                ),
            ),
        ]),
    )
});
