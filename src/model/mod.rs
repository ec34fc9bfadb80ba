mod database;
pub use database::DbConnection;

pub mod entity;

mod error;
pub use error::{DatabaseError, DatabaseResult};

pub mod shaping;

use sqlx::PgPool;

/// Names the kind of record a failed lookup was after, for error reporting.
#[derive(Debug, Clone)]
pub enum ResourceType {
    Category,
    Course,
    CourseModule,
    Quiz,
    Question,
    Attempt,
    User,
}

#[derive(Debug, Clone)]
pub struct ModelManager {
    database: DbConnection,
}

impl ModelManager {
    pub fn new(conn: DbConnection) -> Self {
        Self { database: conn }
    }

    pub fn executor(&self) -> &PgPool {
        self.database.pool()
    }
}
