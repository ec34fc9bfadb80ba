use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::entity::Question;
use crate::render::{RenderContext, TextRenderer};
use crate::web::schema::{RecordShape, Shape};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct QuestionsQuery {
    pub quizids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct QuestionResponse {
    id: i64,
    name: String,
    text: String,
    r#type: String,
    defaultmarks: f64,
    quizzes: Vec<i64>,
    revisions: Vec<i64>,
    questionbankentryid: i64,
}

impl QuestionResponse {
    /// Shape a stored question for output, rendering its name and text in
    /// the given course-module scope.
    pub fn render(
        question: &Question,
        renderer: &dyn TextRenderer,
        ctx: RenderContext,
        quizzes: Vec<i64>,
        revisions: Vec<i64>,
    ) -> Self {
        Self {
            id: question.id(),
            name: renderer.format_string(question.name(), ctx),
            text: renderer.format_text(question.question_text(), ctx),
            r#type: question.qtype().to_string(),
            defaultmarks: question.default_mark(),
            quizzes,
            revisions,
            questionbankentryid: question.bank_entry_id(),
        }
    }
}

pub static QUESTIONS_PARAMETERS: LazyLock<RecordShape> = LazyLock::new(|| {
    RecordShape::new(vec![(
        "quizids",
        Shape::list("List of quiz IDs.", Shape::int("Quiz ID")),
    )])
});

pub static QUESTIONS_RETURNS: LazyLock<Shape> = LazyLock::new(|| {
    Shape::list(
        "List of questions.",
        Shape::record(vec![
            ("id", Shape::int("Question ID")),
            ("name", Shape::text("Question name")),
            ("text", Shape::raw("Question text")),
            ("type", Shape::text("Question type")),
            (
                "defaultmarks",
                Shape::float("Default marks for this question."),
            ),
            (
                "quizzes",
                Shape::list("Quizzes using this question.", Shape::int("Quiz ID")),
            ),
            (
                "revisions",
                Shape::list(
                    "All revisions of this question.",
                    Shape::int("Question ID"),
                ),
            ),
            (
                "questionbankentryid",
                Shape::int("The question bank entry id for this question"),
            ),
        ]),
    )
});

#[cfg(test)]
mod test {
    use super::*;
    use crate::web::schema::FieldType;

    #[test]
    fn questions_parameters_declaration() {
        assert_eq!(QUESTIONS_PARAMETERS.len(), 1);

        let list = QUESTIONS_PARAMETERS
            .field("quizids")
            .and_then(Shape::as_list)
            .unwrap();
        assert_eq!(list.description(), "List of quiz IDs.");
        assert!(list.required());

        let element = list.element().as_scalar().unwrap();
        assert_eq!(element.field_type(), FieldType::Int);
        assert_eq!(element.description(), "Quiz ID");
        assert!(element.required());
    }

    #[test]
    fn questions_returns_declaration() {
        let record = QUESTIONS_RETURNS
            .as_list()
            .unwrap()
            .element()
            .as_record()
            .unwrap();
        assert_eq!(record.len(), 8);

        let id = record.field("id").and_then(Shape::as_scalar).unwrap();
        assert_eq!(id.field_type(), FieldType::Int);
        assert_eq!(id.description(), "Question ID");

        let name = record.field("name").and_then(Shape::as_scalar).unwrap();
        assert_eq!(name.field_type(), FieldType::Text);
        assert_eq!(name.description(), "Question name");

        let text = record.field("text").and_then(Shape::as_scalar).unwrap();
        assert_eq!(text.field_type(), FieldType::Raw);
        assert_eq!(text.description(), "Question text");

        let qtype = record.field("type").and_then(Shape::as_scalar).unwrap();
        assert_eq!(qtype.field_type(), FieldType::Text);
        assert_eq!(qtype.description(), "Question type");

        let defaultmarks = record
            .field("defaultmarks")
            .and_then(Shape::as_scalar)
            .unwrap();
        assert_eq!(defaultmarks.field_type(), FieldType::Float);
        assert_eq!(defaultmarks.description(), "Default marks for this question.");

        let quizzes = record.field("quizzes").and_then(Shape::as_list).unwrap();
        let quizzes_element = quizzes.element().as_scalar().unwrap();
        assert_eq!(quizzes_element.field_type(), FieldType::Int);
        assert_eq!(quizzes_element.description(), "Quiz ID");
        assert!(quizzes_element.required());

        let revisions = record.field("revisions").and_then(Shape::as_list).unwrap();
        let revisions_element = revisions.element().as_scalar().unwrap();
        assert_eq!(revisions_element.field_type(), FieldType::Int);
        assert_eq!(revisions_element.description(), "Question ID");
        assert!(revisions_element.required());

        let bank_entry = record
            .field("questionbankentryid")
            .and_then(Shape::as_scalar)
            .unwrap();
        assert_eq!(bank_entry.field_type(), FieldType::Int);
        assert_eq!(
            bank_entry.description(),
            "The question bank entry id for this question"
        );
    }

    #[test]
    fn question_response_conforms_to_declaration() {
        let response = vec![QuestionResponse {
            id: 9,
            name: "Yes or no".to_string(),
            text: "<p>Is water wet?</p>".to_string(),
            r#type: "truefalse".to_string(),
            defaultmarks: 1.0,
            quizzes: vec![3, 5],
            revisions: vec![9, 14],
            questionbankentryid: 4,
        }];
        let value = serde_json::to_value(&response).unwrap();
        assert!(QUESTIONS_RETURNS.validate(&value).is_ok());

        // the raw-identifier field serializes under its declared name
        assert!(value[0].get("type").is_some());
    }
}
