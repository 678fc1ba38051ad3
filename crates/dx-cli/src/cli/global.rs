use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// When to emit ANSI color.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub state: Option<String>,
    pub color: ColorMode,
}

impl GlobalFlags {
    /// Whether prose (banners, hints, dashboards) should be printed instead of
    /// machine-readable output.
    #[must_use]
    pub fn human(&self) -> bool {
        self.format == OutputFormat::Table
    }
}
