// ABOUTME: Error types for Blogger API operations
// ABOUTME: Distinguishes transport failures, HTTP status failures, and missing credentials

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BloggerError {
    #[error("Missing required secret: {0}")]
    MissingCredential(&'static str),

    #[error("{operation} failed with status {status}: {body}")]
    Status {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid response from {operation}: {message}")]
    InvalidResponse { operation: String, message: String },
}

impl BloggerError {
    /// Transport failures, rate limiting, and server errors are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::MissingCredential(_) | Self::InvalidResponse { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BloggerError>;
