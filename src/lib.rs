pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use axum::Router;

use services::TriviaService;

#[derive(Clone)]
pub struct AppState {
    pub trivia: TriviaService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .fallback(rejections::not_found)
        .with_state(state)
}
