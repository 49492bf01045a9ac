use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    db::models::Question,
    models::deserialize_string_or_i64,
    names,
    rejections::AppError,
    services::QuizOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(play_quiz))
}

#[derive(Deserialize)]
struct QuizBody {
    /// Kept raw: a non-list value is an internal failure, not a decoding one.
    #[serde(default, alias = "previousQuestions")]
    previous_questions: Value,
    #[serde(default, alias = "quizCategory")]
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    id: i64,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuizResponse {
    Next {
        success: bool,
        question: Question,
    },
    Exhausted {
        success: bool,
        question: &'static str,
        message: &'static str,
    },
}

async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(body) = body?;
    let category_id = body
        .quiz_category
        .map_or(names::ALL_CATEGORIES_ID, |c| c.id);

    let response = match state
        .trivia
        .next_quiz_question(&body.previous_questions, category_id)
        .await?
    {
        QuizOutcome::Question(question) => QuizResponse::Next {
            success: true,
            question,
        },
        QuizOutcome::Exhausted => QuizResponse::Exhausted {
            success: true,
            question: "",
            message: names::QUIZ_EXHAUSTED_MESSAGE,
        },
    };

    Ok(Json(response))
}
