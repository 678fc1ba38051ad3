use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub interactive: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && flags.format == OutputFormat::Table
                && std::env::var_os("NO_COLOR").is_none()
        }
    };
    console::set_colors_enabled(color);
    console::set_colors_enabled_stderr(color);

    let progress = is_tty && !flags.quiet && flags.format != OutputFormat::Json;
    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        color,
        progress,
        interactive,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        interactive: false,
        term_width: None,
    })
}

/// Print a hint for humans on stderr. Silent in quiet and machine-readable modes.
pub fn hint(flags: &GlobalFlags, message: &str) {
    if flags.quiet || !flags.human() {
        return;
    }
    eprintln!("{}", console::style(message).dim());
}
