use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::entity::{Quiz, QuizSlotRow};
use crate::model::shaping;
use crate::web::schema::{RecordShape, Shape};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct QuizzesQuery {
    pub courseids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct QuizResponse {
    id: i64,
    name: String,
    courseid: i64,
    coursemoduleid: i64,
    questions: Vec<QuizQuestionResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct QuizQuestionResponse {
    id: i64,
    maxmarks: f64,
}

impl QuizResponse {
    pub fn from_parts(quiz: Quiz, questions: Vec<QuizQuestionResponse>) -> Self {
        Self {
            id: quiz.id(),
            name: quiz.name().to_string(),
            courseid: quiz.course_id(),
            coursemoduleid: quiz.course_module_id(),
            questions,
        }
    }
}

impl From<&QuizSlotRow> for QuizQuestionResponse {
    fn from(row: &QuizSlotRow) -> Self {
        Self {
            id: row.question_id,
            maxmarks: shaping::effective_mark(row.max_mark, row.default_mark),
        }
    }
}

pub static QUIZZES_PARAMETERS: LazyLock<RecordShape> = LazyLock::new(|| {
    RecordShape::new(vec![(
        "courseids",
        Shape::list("List of course IDs.", Shape::int("Course ID")),
    )])
});

pub static QUIZZES_RETURNS: LazyLock<Shape> = LazyLock::new(|| {
    Shape::list(
        "List of quizzes.",
        Shape::record(vec![
            ("id", Shape::int("Quiz ID")),
            ("name", Shape::text("Quiz Name")),
            ("courseid", Shape::int("Course ID")),
            ("coursemoduleid", Shape::int("Course Module ID")),
            (
                "questions",
                Shape::list(
                    "Questions in this quiz.",
                    Shape::record(vec![
                        ("id", Shape::int("Question ID")),
                        (
                            "maxmarks",
                            Shape::float("Maximum marks for this question."),
                        ),
                    ]),
                ),
            ),
        ]),
    )
});
