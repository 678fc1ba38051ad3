use anyhow::{Context, bail};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResultsArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `dxw results`.
pub async fn handle(args: &ResultsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = if args.all {
        None
    } else {
        let session = ctx.store.load()?;
        match session.user_id() {
            Some(id) => Some(id),
            None => bail!("no user in the session; run 'dxw identity' or pass --all"),
        }
    };

    let mut results = with_spinner(
        "Loading results...",
        "Could not load results",
        ctx.api.list_results(user_id),
    )
    .await
    .context("failed to fetch diagnosis results")?;

    results.truncate(effective_limit(args.limit, ctx.config.general.history_limit));
    output(&results, flags.format)
}
