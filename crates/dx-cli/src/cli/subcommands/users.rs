use clap::Subcommand;

/// Registered user commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UsersCommands {
    /// List registered users.
    List,
    /// Show a user by ID.
    Show { id: i64 },
}
