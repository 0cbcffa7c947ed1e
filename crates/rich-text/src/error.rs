use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("diff() called with non-document")]
    NotADocument,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
