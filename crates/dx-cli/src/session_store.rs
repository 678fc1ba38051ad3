//! On-disk persistence for the diagnosis session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use dx_core::session::DiagnosisSession;

pub const SESSION_FILE: &str = "session.json";

/// `<state_dir>/session.json`, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(SESSION_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session. A missing file is an empty session; state
    /// whose prerequisites are gone is dropped with a warning.
    pub fn load(&self) -> anyhow::Result<DiagnosisSession> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no saved session");
            return Ok(DiagnosisSession::new());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session file {}", self.path.display()))?;
        let mut session: DiagnosisSession = serde_json::from_str(&raw).with_context(|| {
            format!(
                "session file {} is corrupt; run 'dxw session reset'",
                self.path.display()
            )
        })?;

        if session.repair() {
            tracing::warn!(
                path = %self.path.display(),
                "saved session was inconsistent; dropped steps whose prerequisites are missing"
            );
        }
        Ok(session)
    }

    pub fn save(&self, session: &DiagnosisSession) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(session).context("failed to serialize session")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("failed to rename to {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the session file. Returns whether one existed.
    pub fn clear(&self) -> anyhow::Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error)
                .with_context(|| format!("failed to remove {}", self.path.display())),
        }
    }
}
