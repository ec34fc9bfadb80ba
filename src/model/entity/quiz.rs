use crate::model::{ModelManager, error::DatabaseResult};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A quiz joined with its course-module placement.
#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Quiz {
    id: i64,
    course_id: i64,
    name: String,
    course_module_id: i64,
}

impl Quiz {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course_module_id(&self) -> i64 {
        self.course_module_id
    }
}

impl Quiz {
    pub async fn all_by_course(mm: &ModelManager, course_id: i64) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT q.id, q.course_id, q.name, cm.id AS course_module_id
            FROM quizzes q
            JOIN course_modules cm ON cm.quiz_id = q.id
            WHERE q.course_id = $1
            ORDER BY q.id
            "#,
        )
        .bind(course_id)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}

// Utils

/// One question attached to a quiz, with the default mark it falls back to.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct QuizSlotRow {
    pub quiz_id: i64,
    pub question_id: i64,
    pub slot: i32,
    pub max_mark: Option<f64>,
    pub default_mark: f64,
}

impl QuizSlotRow {
    pub async fn all_by_quizzes(mm: &ModelManager, quiz_ids: &[i64]) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT s.quiz_id, s.question_id, s.slot, s.max_mark, q.default_mark
            FROM quiz_slots s
            JOIN questions q ON q.id = s.question_id
            WHERE s.quiz_id = ANY($1)
            ORDER BY s.quiz_id, s.slot
            "#,
        )
        .bind(quiz_ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }

    pub async fn all_by_questions(
        mm: &ModelManager,
        question_ids: &[i64],
    ) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT s.quiz_id, s.question_id, s.slot, s.max_mark, q.default_mark
            FROM quiz_slots s
            JOIN questions q ON q.id = s.question_id
            WHERE s.question_id = ANY($1)
            ORDER BY s.quiz_id, s.slot
            "#,
        )
        .bind(question_ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CourseModuleRow {
    pub id: i64,
    pub course_id: i64,
    pub quiz_id: i64,
}

impl CourseModuleRow {
    pub async fn all_by_quizzes(mm: &ModelManager, quiz_ids: &[i64]) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            "SELECT id, course_id, quiz_id FROM course_modules WHERE quiz_id = ANY($1) ORDER BY id",
        )
        .bind(quiz_ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}
