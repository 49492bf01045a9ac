use color_eyre::Result;

use super::models::Question;
use super::Db;
use crate::models::NewQuestion;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Db {
    /// Every question in insertion (id) order.
    pub async fn all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains `term`, ignoring case. An empty term matches everything.
    /// Case folding happens here rather than in SQLite, whose `lower()` only folds ASCII.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let questions = self
            .all_questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        Ok(questions)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"
        ))
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Ids of the quiz candidates, optionally restricted to one category.
    pub async fn question_ids(&self, category_id: Option<i64>) -> Result<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT id FROM questions WHERE ?1 IS NULL OR category = ?1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Insert a question. Returns `None` when the category does not exist, in
    /// which case nothing is written. The existence check and the insert are
    /// one statement, so the row appears atomically with its fresh id.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            SELECT ?1, ?2, ?3, ?4
            WHERE EXISTS (SELECT 1 FROM categories WHERE id = ?3)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_optional(&self.pool)
        .await?;

        match &question {
            Some(q) => tracing::info!("new question created with id: {}", q.id),
            None => tracing::warn!("question rejected: unknown category {}", new.category),
        }

        Ok(question)
    }

    /// Returns whether a row was removed.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("question {question_id} deleted");
        }
        Ok(deleted)
    }
}
