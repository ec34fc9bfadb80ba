mod course;
pub use course::Course;

mod quiz;
pub use quiz::{CourseModuleRow, Quiz, QuizSlotRow};

mod question;
pub use question::{Question, QuestionRevisionRow};

mod attempt;
pub use attempt::{Attempt, AttemptAnswerRow};

mod user;
pub use user::User;
