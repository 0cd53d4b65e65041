//! Service error types.

use thiserror::Error;

/// Errors that can occur when calling a storefront service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The session token was missing or rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// Requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::JsonError(e.to_string())
    }
}
