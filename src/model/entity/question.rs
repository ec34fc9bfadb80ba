use crate::model::{ModelManager, error::DatabaseResult};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// One version of a question bank entry, as stored.
#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Question {
    id: i64,
    bank_entry_id: i64,
    version: i32,
    name: String,
    question_text: String,
    qtype: String,
    default_mark: f64,
}

impl Question {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn bank_entry_id(&self) -> i64 {
        self.bank_entry_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn qtype(&self) -> &str {
        &self.qtype
    }

    pub fn default_mark(&self) -> f64 {
        self.default_mark
    }
}

impl Question {
    pub async fn all_by_ids(mm: &ModelManager, ids: &[i64]) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT id, bank_entry_id, version, name, question_text, qtype, default_mark
            FROM questions
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}

// Utils

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct QuestionRevisionRow {
    pub question_id: i64,
    pub bank_entry_id: i64,
    pub version: i32,
}

impl QuestionRevisionRow {
    pub async fn all_by_bank_entries(
        mm: &ModelManager,
        bank_entry_ids: &[i64],
    ) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            r#"
            SELECT id AS question_id, bank_entry_id, version
            FROM questions
            WHERE bank_entry_id = ANY($1)
            ORDER BY bank_entry_id, version
            "#,
        )
        .bind(bank_entry_ids)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}
