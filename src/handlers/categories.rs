use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{PageParams, QuestionsResponse};
use crate::{names, rejections::AppError, services::ListQuery, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.trivia.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn category_questions(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Path(category_id) = path?;
    let Query(params) = params?;

    let query = ListQuery {
        page: params.page(),
        search_term: None,
        category: Some(category_id),
    };
    let page = state.trivia.list(&query).await?;

    Ok(Json(page.into()))
}
