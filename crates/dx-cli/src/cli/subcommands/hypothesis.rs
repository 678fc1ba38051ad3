use clap::Subcommand;

/// Hypothesis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HypothesisCommands {
    /// List every hypothesis.
    List,
    /// Show a hypothesis and its symptoms.
    Show { id: i64 },
    /// Select the hypothesis to screen for.
    Select { id: i64 },
}
