use clap::Subcommand;

/// Local session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Show saved state and which steps are reachable.
    Show,
    /// Forget everything and start over.
    Reset,
}
