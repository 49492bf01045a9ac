pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

// Listing
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

// Quiz
pub const ALL_CATEGORIES_ID: i64 = 0;

// Response messages
pub const QUESTION_CREATED_MESSAGE: &str = "201 Question successfully created";
pub const QUIZ_EXHAUSTED_MESSAGE: &str = "no more quiz questions left!";

/// Body field that turns `POST /questions` into a search.
pub const SEARCH_TERM_FIELD: &str = "searchTerm";

// Server defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "tracing=info,axum=debug,trivia=debug";
