pub mod error;
pub mod pagination;
pub mod quiz;
pub mod trivia;

pub use error::QueryError;
pub use trivia::{ListQuery, QuestionPage, QuestionRepository, QuizOutcome, TriviaService};
