pub mod attempts;
pub mod courses;
pub mod questions;
pub mod quizzes;
pub mod users;
