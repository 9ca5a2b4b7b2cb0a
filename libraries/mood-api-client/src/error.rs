//! Error types for the MoodTunes API client.

use thiserror::Error;

/// Errors that can occur when talking to the MoodTunes backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-2xx response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid credentials
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

impl ApiError {
    /// Classify a send failure, separating connection problems
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::Unreachable(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }

    /// Build a `Server` error from a failed response, consuming its body
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ApiError::Server { status, message }
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
