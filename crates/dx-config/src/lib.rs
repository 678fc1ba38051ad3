//! # dx-config
//!
//! Layered configuration loading for dxwiz using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DXWIZ_*` prefix, `__` as separator)
//! 2. Project-level `.dxwiz/config.toml`
//! 3. User-level `~/.config/dxwiz/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `DXWIZ_API__BASE_URL` -> `api.base_url`,
//! `DXWIZ_GENERAL__STATE_DIR` -> `general.state_dir`, etc.
//!
//! ```no_run
//! use dx_config::DxConfig;
//!
//! let config = DxConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".dxwiz/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DxConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DxConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`DxConfig::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] when a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] when the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the workspace root.
    ///
    /// # Errors
    ///
    /// Same as [`DxConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`DxConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DXWIZ_").split("__"))
    }

    /// Check cross-field constraints after merging.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if self.general.state_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.state_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dxwiz").join("config.toml"))
    }

    /// Walk up from `CARGO_MANIFEST_DIR` looking for `.env`, falling back to
    /// the current directory. Missing files are ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
