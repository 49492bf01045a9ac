use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{PageParams, QuestionsResponse};
use crate::{
    models::QuestionDraft,
    names,
    rejections::AppError,
    services::{pagination::page_number, ListQuery},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_or_search_questions),
        )
        .route(names::QUESTION_URL, delete(delete_question))
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    page: Option<String>,
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Body of `POST /questions`: a search when it carries `searchTerm`,
/// otherwise a new question.
enum QuestionsBody {
    Search(String),
    Create(QuestionDraft),
}

impl TryFrom<Map<String, Value>> for QuestionsBody {
    type Error = AppError;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(term) = body.remove(names::SEARCH_TERM_FIELD) {
            let term = match term {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(AppError::BadRequest("searchTerm must be a scalar"))
                }
            };
            return Ok(Self::Search(term));
        }

        let draft = serde_json::from_value(Value::Object(body)).map_err(|e| {
            tracing::warn!("could not decode question body: {e}");
            AppError::BadRequest("could not decode question body")
        })?;
        Ok(Self::Create(draft))
    }
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    message: &'static str,
}

async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Query(params) = params?;
    let query = ListQuery {
        page: page_number(params.page.as_deref()),
        search_term: params.search_term,
        category: params.category.and_then(|c| c.trim().parse().ok()),
    };
    let page = state.trivia.list(&query).await?;

    Ok(Json(page.into()))
}

async fn create_or_search_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let Json(body) = body?;

    match QuestionsBody::try_from(body)? {
        QuestionsBody::Search(search_term) => {
            let query = ListQuery {
                page: params.page(),
                search_term: Some(search_term),
                category: None,
            };
            let page = state.trivia.list(&query).await?;
            Ok(Json(QuestionsResponse::from(page)).into_response())
        }
        QuestionsBody::Create(draft) => {
            let question = state.trivia.create(draft).await?;
            let body = CreatedResponse {
                success: true,
                created: question.id,
                message: names::QUESTION_CREATED_MESSAGE,
            };
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
    }
}

async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Path(question_id) = path?;

    let page = state.trivia.delete(question_id).await?;

    Ok(Json(page.into()))
}
