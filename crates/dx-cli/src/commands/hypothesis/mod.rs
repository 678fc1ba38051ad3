mod list;
mod select;
mod show;

pub use select::choose;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HypothesisCommands;
use crate::context::AppContext;

/// Handle `dxw hypothesis`.
pub async fn handle(
    action: &HypothesisCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HypothesisCommands::List => list::run(ctx, flags).await,
        HypothesisCommands::Show { id } => show::run(*id, ctx, flags).await,
        HypothesisCommands::Select { id } => select::run(*id, ctx, flags).await,
    }
}
