use std::path::PathBuf;

use anyhow::Context;
use dx_api::ApiClient;
use dx_config::DxConfig;

use crate::cli::GlobalFlags;
use crate::prompt::{self, Prompter};
use crate::session_store::SessionStore;
use crate::ui;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DxConfig,
    pub api: ApiClient,
    pub store: SessionStore,
    pub prompter: Box<dyn Prompter>,
}

impl AppContext {
    /// Build the backend client and locate the session file. `--state`
    /// overrides `general.state_dir`.
    pub fn init(config: DxConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let api = ApiClient::from_config(&config.api).context("failed to build backend client")?;

        let state_dir = flags
            .state
            .as_deref()
            .map_or_else(|| PathBuf::from(&config.general.state_dir), PathBuf::from);
        let store = SessionStore::new(state_dir);
        tracing::debug!(
            base_url = api.base_url(),
            session = %store.path().display(),
            "context ready"
        );

        Ok(Self {
            config,
            api,
            store,
            prompter: prompt::for_terminal(ui::prefs().interactive),
        })
    }

    #[must_use]
    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }
}
