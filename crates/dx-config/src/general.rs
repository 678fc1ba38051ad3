//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_state_dir() -> String {
    String::from(".dxwiz")
}

fn default_export_dir() -> String {
    String::from(".")
}

/// Default row limit for history listings.
const fn default_history_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding `session.json`.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Directory exported reports are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Default row limit for `dxw results`.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            export_dir: default_export_dir(),
            history_limit: default_history_limit(),
        }
    }
}
