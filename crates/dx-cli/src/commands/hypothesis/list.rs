use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let hypotheses = with_spinner(
        "Loading hypotheses...",
        "Could not load hypotheses",
        ctx.api.list_hypotheses(),
    )
    .await
    .context("failed to fetch hypotheses")?;

    output(&hypotheses, flags.format)
}
