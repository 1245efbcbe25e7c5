//! Error types for the external boundaries and the request handler.

use reqwest::StatusCode;

/// Failures talking to the literature search service.
#[derive(Debug, thiserror::Error)]
pub enum LiteratureError {
    /// Connection problems and non-success statuses.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("search response has no esearchresult.idlist")]
    MissingIdList,
}

/// Failures talking to the text generation service.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("completion contained no message content")]
    EmptyCompletion,
}

/// Structural request failures surfaced as non-200 responses.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Body is not UTF-8 or not JSON. Detail is logged only.
    #[error("Invalid JSON in request body")]
    InvalidJson(String),

    #[error("Both supplements are required")]
    MissingSupplements,

    /// Detail is kept for logging only; callers see the generic message.
    #[error("Internal server error")]
    Internal(String),
}

impl HandlerError {
    /// HTTP status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidJson(_) | Self::MissingSupplements => 400,
            Self::Internal(_) => 500,
        }
    }
}
