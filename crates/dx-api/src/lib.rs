//! # dx-api
//!
//! Async HTTP client for the certainty-factor diagnosis backend.
//!
//! The backend owns all inference: it stores users and answers, runs the
//! backward-chaining certainty-factor computation, and renders exports. This
//! crate only shapes requests and decodes responses into `dx-core` entities.
//!
//! Endpoint groups:
//! - [`users`]: registration and user lookup
//! - [`diagnosis`]: hypotheses, symptoms, answers, diagnosis, history
//! - [`export`]: Excel/PDF report downloads

pub mod diagnosis;
pub mod export;
pub mod users;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

use dx_config::ApiConfig;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (e.g. `http://localhost:5000/api`).
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidBaseUrl`] when `base_url` is not an absolute HTTP(S)
    /// URL, [`ApiError::Http`] when the underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path starting with `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| ApiError::InvalidBaseUrl(raw.to_string()))?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
