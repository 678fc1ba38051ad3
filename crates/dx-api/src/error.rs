//! Backend client error types.

use thiserror::Error;

/// Errors that can occur when talking to the diagnosis backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend `message`/`error` field, or the raw response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Whether the backend could not be reached at all.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout())
    }
}
