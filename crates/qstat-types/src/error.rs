use thiserror::Error;

#[derive(Error, Debug)]
pub enum QstatError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Grid shape mismatch: expected {expected:?}, got {got:?}")]
    GridMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QstatError {
    /// Wrap a plotting-backend error, which is generic over the backend
    /// and therefore cannot carry a `#[from]` conversion.
    pub fn render(err: impl std::fmt::Display) -> Self {
        QstatError::Render(err.to_string())
    }
}

pub type QstatResult<T> = Result<T, QstatError>;
