use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use color_eyre::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use serde_json::Value;

use super::error::QueryError;
use super::pagination::{paginate, Page};
use super::quiz::{self, CategoryScope};
use crate::db::models::{Category, Question};
use crate::db::Db;
use crate::models::{NewQuestion, QuestionDraft};
use crate::names;

// ---------------------------------------------------------------------------
// QuestionRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository: Send + Sync {
    fn categories(&self) -> impl std::future::Future<Output = Result<Vec<Category>>> + Send;

    fn all_questions(&self) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn search_questions(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn questions_in_category(
        &self,
        category_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;

    fn get_question(
        &self,
        question_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Question>>> + Send;

    fn question_ids(
        &self,
        category_id: Option<i64>,
    ) -> impl std::future::Future<Output = Result<Vec<i64>>> + Send;

    /// `None` when the category is unknown; nothing is written in that case.
    fn insert_question(
        &self,
        new: &NewQuestion,
    ) -> impl std::future::Future<Output = Result<Option<Question>>> + Send;

    /// Whether a row was removed.
    fn delete_question(
        &self,
        question_id: i64,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Request and response types
// ---------------------------------------------------------------------------

/// Parameters of a read request. At most one filter applies: search wins over
/// category, category wins over the plain listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub search_term: Option<String>,
    pub category: Option<i64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: names::DEFAULT_PAGE,
            search_term: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope<'a> {
    Search(&'a str),
    Category(i64),
    All,
}

impl ListQuery {
    pub fn scope(&self) -> ReadScope<'_> {
        match (&self.search_term, self.category) {
            (Some(term), _) => ReadScope::Search(term),
            (None, Some(category_id)) => ReadScope::Category(category_id),
            (None, None) => ReadScope::All,
        }
    }
}

/// Response envelope shared by every read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Name of the first category in the catalog. Not derived from the filter.
    pub current_category: Option<String>,
    pub categories: BTreeMap<i64, String>,
}

pub enum QuizOutcome {
    /// The next question to ask.
    Question(Question),
    /// Every eligible question has been asked.
    Exhausted,
}

// ---------------------------------------------------------------------------
// TriviaService
// ---------------------------------------------------------------------------

pub struct TriviaService<R: QuestionRepository = Db, G: RngCore + Send = StdRng> {
    repo: R,
    rng: Arc<Mutex<G>>,
}

impl<R: QuestionRepository + Clone, G: RngCore + Send> Clone for TriviaService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            rng: Arc::clone(&self.rng),
        }
    }
}

impl<R: QuestionRepository> TriviaService<R, StdRng> {
    pub fn new(repo: R) -> Self {
        Self::with_rng(repo, StdRng::from_entropy())
    }

    /// Deterministic quiz selection.
    pub fn seeded(repo: R, seed: u64) -> Self {
        Self::with_rng(repo, StdRng::seed_from_u64(seed))
    }
}

impl<R: QuestionRepository, G: RngCore + Send> TriviaService<R, G> {
    pub fn with_rng(repo: R, rng: G) -> Self {
        Self {
            repo,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub async fn categories(&self) -> Result<BTreeMap<i64, String>, QueryError> {
        let categories = self.repo.categories().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
    }

    /// List, search, or filter questions. An empty page is `NotFound`, whether
    /// nothing matched or the page lies past the end.
    pub async fn list(&self, query: &ListQuery) -> Result<QuestionPage, QueryError> {
        let questions = match query.scope() {
            ReadScope::Search(term) => self.repo.search_questions(term).await?,
            ReadScope::Category(category_id) => {
                self.repo.questions_in_category(category_id).await?
            }
            ReadScope::All => self.repo.all_questions().await?,
        };

        let page = paginate(questions, query.page, names::QUESTIONS_PER_PAGE);
        if page.items.is_empty() {
            tracing::warn!(
                "no questions for {:?} on page {} (total {})",
                query.scope(),
                query.page,
                page.total
            );
            return Err(QueryError::NotFound);
        }

        self.envelope(page).await
    }

    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, QueryError> {
        let new = draft.validate().map_err(|reason| {
            tracing::warn!("question rejected: {reason}");
            QueryError::Validation(reason)
        })?;

        self.repo
            .insert_question(&new)
            .await?
            .ok_or(QueryError::Validation("category does not exist"))
    }

    /// Delete a question and return the first page of what remains.
    pub async fn delete(&self, question_id: i64) -> Result<QuestionPage, QueryError> {
        if !self.repo.delete_question(question_id).await? {
            tracing::warn!("question {question_id} not found for deletion");
            return Err(QueryError::NotFound);
        }

        let remaining = self.repo.all_questions().await?;
        self.envelope(paginate(remaining, names::DEFAULT_PAGE, names::QUESTIONS_PER_PAGE))
            .await
    }

    /// Pick a random question in `category_id` (0 for all) that is not among
    /// `previous`.
    pub async fn next_quiz_question(
        &self,
        previous: &Value,
        category_id: i64,
    ) -> Result<QuizOutcome, QueryError> {
        let excluded = quiz::exclusion_set(previous).inspect_err(|e| {
            tracing::error!("unusable previous questions {previous}: {e}");
        })?;

        let scope = CategoryScope::from_id(category_id);
        let candidates = self.repo.question_ids(scope.category_id()).await?;

        let picked = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| QueryError::Internal("quiz rng lock poisoned"))?;
            quiz::select_next(&candidates, &excluded, &mut *rng)
        };

        let Some(question_id) = picked else {
            tracing::info!(
                "quiz exhausted for {scope:?} after {} questions",
                excluded.len()
            );
            return Ok(QuizOutcome::Exhausted);
        };

        let question = self
            .repo
            .get_question(question_id)
            .await?
            .ok_or(QueryError::NotFound)?;

        Ok(QuizOutcome::Question(question))
    }

    async fn envelope(&self, page: Page<Question>) -> Result<QuestionPage, QueryError> {
        let categories = self.repo.categories().await?;
        let current_category = categories.first().map(|c| c.name.clone());

        Ok(QuestionPage {
            questions: page.items,
            total_questions: page.total,
            current_category,
            categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
