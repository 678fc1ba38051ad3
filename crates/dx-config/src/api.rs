//! Diagnosis backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default backend base URL (the API the web client talked to in development).
fn default_base_url() -> String {
    String::from("http://localhost:5000/api")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("dxwiz/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (e.g. `http://host/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject settings the HTTP client cannot work with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an empty or non-HTTP base URL, or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
