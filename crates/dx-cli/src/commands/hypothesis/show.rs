use anyhow::Context;
use console::style;
use dx_core::entities::{Hypothesis, Symptom};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct HypothesisDetail {
    #[serde(flatten)]
    hypothesis: Hypothesis,
    symptoms: Vec<Symptom>,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (hypothesis, symptoms) = with_spinner(
        "Loading hypothesis...",
        "Could not load hypothesis",
        async { tokio::try_join!(ctx.api.get_hypothesis(id), ctx.api.symptoms_for(id)) },
    )
    .await
    .with_context(|| format!("failed to fetch hypothesis {id}"))?;

    if !flags.human() {
        return output(&HypothesisDetail { hypothesis, symptoms }, flags.format);
    }

    println!("{} {}", style(format!("#{}", hypothesis.id)).dim(), style(&hypothesis.name).bold());
    if !hypothesis.description.is_empty() {
        println!("{}", hypothesis.description);
    }
    if !hypothesis.recommendation.is_empty() {
        println!("{} {}", style("Recommendation:").bold(), hypothesis.recommendation);
    }
    println!();
    output(&symptoms, flags.format)
}
