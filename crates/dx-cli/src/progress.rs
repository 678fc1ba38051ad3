use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown while waiting on the backend. Inert when progress output is
/// disabled (non-TTY, `--quiet`, or JSON output).
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.magenta} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// Run `future` behind a spinner, clearing it on success and leaving
/// `failure` on screen otherwise.
pub async fn with_spinner<T, E, F>(message: &str, failure: &str, future: F) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let spinner = Progress::spinner(message);
    match future.await {
        Ok(value) => {
            spinner.finish_clear();
            Ok(value)
        }
        Err(error) => {
            spinner.finish_err(failure);
            Err(error)
        }
    }
}
