use crate::model::{ModelManager, error::DatabaseResult};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Course {
    id: i64,
    category_id: i64,
    fullname: String,
}

impl Course {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

impl Course {
    pub async fn all_by_category(mm: &ModelManager, category_id: i64) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as(
            "SELECT id, category_id, fullname FROM courses WHERE category_id = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(mm.executor())
        .await?;
        Ok(result)
    }
}
