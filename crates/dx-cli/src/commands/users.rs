use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UsersCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `dxw users`.
pub async fn handle(action: &UsersCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UsersCommands::List => {
            let users = with_spinner("Loading users...", "Could not load users", ctx.api.list_users())
                .await
                .context("failed to fetch users")?;
            output(&users, flags.format)
        }
        UsersCommands::Show { id } => {
            let user = with_spinner("Loading user...", "Could not load user", ctx.api.get_user(*id))
                .await
                .with_context(|| format!("failed to fetch user {id}"))?;
            output(&user, flags.format)
        }
    }
}
