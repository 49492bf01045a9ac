use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::QueryError;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Unprocessable(&'static str),
    Internal(&'static str),
    MethodNotAllowed,
    BadRequest(&'static str),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::Unprocessable(reason) => {
                tracing::debug!("unprocessable request: {reason}");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
            AppError::Internal(reason) => {
                tracing::error!("internal error: {reason}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            AppError::BadRequest(reason) => {
                tracing::debug!("bad request: {reason}");
                (StatusCode::BAD_REQUEST, "bad request")
            }
        };

        let body = ErrorBody {
            success: false,
            error: code.as_u16(),
            message,
        };
        (code, Json(body)).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound => AppError::NotFound,
            QueryError::Validation(reason) => AppError::Unprocessable(reason),
            QueryError::Internal(reason) => AppError::Internal(reason),
            QueryError::Store(report) => {
                tracing::error!("store failure: {report:?}");
                AppError::Internal("store failure")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("could not decode request body: {rejection}");
        AppError::BadRequest("could not decode request body")
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("could not decode query string: {rejection}");
        AppError::BadRequest("could not decode query string")
    }
}

/// Path ids that are not integers address nothing.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("unmatched path: {rejection}");
        AppError::NotFound
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
