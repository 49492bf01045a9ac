use thiserror::Error;

/// Failure kinds surfaced by the question query and quiz engine.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Nothing matched: unknown id, an empty result set, or a page past the end.
    #[error("resource not found")]
    NotFound,

    /// A write was refused. Nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// Input the engine cannot process at all. Not retryable.
    #[error("internal error: {0}")]
    Internal(&'static str),

    #[error("store failure: {0}")]
    Store(color_eyre::Report),
}

impl From<color_eyre::Report> for QueryError {
    fn from(report: color_eyre::Report) -> Self {
        QueryError::Store(report)
    }
}
