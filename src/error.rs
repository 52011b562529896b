//! Error types for the health assessment service

use axum::http::StatusCode;
use thiserror::Error;

/// Result type alias for assessment operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

#[derive(Error, Debug)]
pub enum AssessmentError {

    // =============================
    // Request Errors
    // =============================

    /// Malformed or missing form field. Rendered verbatim to the caller.
    #[error("Error: {0}")]
    Validation(String),

    /// An uploaded document produced no usable text.
    #[error("{0}")]
    Extraction(String),

    #[error("Feature unavailable: {0}")]
    Unavailable(String),

    // =============================
    // Processing Errors
    // =============================

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl AssessmentError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status the API layer answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Extraction(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
