//! Input errors.

use thiserror::Error;

use crate::types::MatrixError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("not a valid integer: {0:?}")]
    InvalidInteger(String),

    #[error("matrix order must be a positive integer, got {0}")]
    NonPositiveOrder(i128),

    #[error("expected {expected} entries, found {found}")]
    RowLength { expected: usize, found: usize },

    #[error("invalid matrix JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input ended before the matrix was complete")]
    UnexpectedEof,
}
