//! Error types for the summarizer

use thiserror::Error;

/// Errors that can occur while requesting a summary
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service rejected the request; carries the service's own
    /// error message when one was embedded in the response
    #[error("{0}")]
    Service(String),

    /// A 2xx response whose body did not carry a candidate text
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Network-level failure before any response was read
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
