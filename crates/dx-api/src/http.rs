//! Shared HTTP response helpers for backend endpoints.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`ApiError::Api`] carrying the backend's own error
//! message) and JSON decoding so endpoint modules stay focused on request
//! construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`], `Retry-After`
///   parsed as seconds (60 s when absent or unparseable).
/// - **Non-success status** → [`ApiError::Api`] with the status code and the
///   backend's `message` or `error` field, falling back to the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON, naming the target type on failure.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    decode(&body)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        ApiError::Parse(format!(
            "expected {}: {e}",
            std::any::type_name::<T>().rsplit("::").next().unwrap_or("value")
        ))
    })
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Pull a human-readable message out of an error body.
///
/// Flask-style backends answer `{"message": ".."}` or `{"error": ".."}`; any
/// other non-empty body is returned trimmed.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = map.get(key) {
                return Some(text.clone());
            }
        }
    }
    Some(trimmed.to_string())
}
