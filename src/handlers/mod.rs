pub mod categories;
pub mod questions;
pub mod quizzes;

use serde::{Deserialize, Serialize};

use crate::services::{pagination::page_number, QuestionPage};

#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    page: Option<String>,
}

impl PageParams {
    fn page(&self) -> usize {
        page_number(self.page.as_deref())
    }
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    #[serde(flatten)]
    page: QuestionPage,
}

impl From<QuestionPage> for QuestionsResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            page,
        }
    }
}
