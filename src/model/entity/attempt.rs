use crate::model::{ModelManager, error::DatabaseResult};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Attempt {
    id: i64,
    quiz_id: i64,
    user_id: i64,
    time_start: i64,
    time_finish: i64,
}

impl Attempt {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn quiz_id(&self) -> i64 {
        self.quiz_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn time_start(&self) -> i64 {
        self.time_start
    }

    pub fn time_finish(&self) -> i64 {
        self.time_finish
    }
}

impl Attempt {
    pub async fn all_by_quiz(mm: &ModelManager, quiz_id: i64) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT id, quiz_id, user_id, time_start, time_finish
            FROM quiz_attempts
            WHERE quiz_id = $1
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}

// Utils

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct AttemptAnswerRow {
    pub attempt_id: i64,
    pub question_id: i64,
    pub slot: i32,
    pub mark: f64,
    pub answer: String,
}

impl AttemptAnswerRow {
    pub async fn all_by_attempts(
        mm: &ModelManager,
        attempt_ids: &[i64],
    ) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT attempt_id, question_id, slot, mark, answer
            FROM attempt_answers
            WHERE attempt_id = ANY($1)
            ORDER BY attempt_id, slot
            "#,
        )
        .bind(attempt_ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}
