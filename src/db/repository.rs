use std::future::Future;

use color_eyre::Result;

use super::models::{Category, Question};
use super::Db;
use crate::models::NewQuestion;
use crate::services::trivia::QuestionRepository;

impl QuestionRepository for Db {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send {
        Db::categories(self)
    }

    fn all_questions(&self) -> impl Future<Output = Result<Vec<Question>>> + Send {
        Db::all_questions(self)
    }

    fn search_questions(&self, term: &str) -> impl Future<Output = Result<Vec<Question>>> + Send {
        Db::search_questions(self, term)
    }

    fn questions_in_category(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Vec<Question>>> + Send {
        Db::questions_in_category(self, category_id)
    }

    fn get_question(
        &self,
        question_id: i64,
    ) -> impl Future<Output = Result<Option<Question>>> + Send {
        Db::get_question(self, question_id)
    }

    fn question_ids(
        &self,
        category_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<i64>>> + Send {
        Db::question_ids(self, category_id)
    }

    fn insert_question(
        &self,
        new: &NewQuestion,
    ) -> impl Future<Output = Result<Option<Question>>> + Send {
        Db::insert_question(self, new)
    }

    fn delete_question(&self, question_id: i64) -> impl Future<Output = Result<bool>> + Send {
        Db::delete_question(self, question_id)
    }
}
