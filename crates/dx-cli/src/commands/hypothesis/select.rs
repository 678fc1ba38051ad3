use anyhow::{Context, bail};
use dx_core::entities::Hypothesis;
use dx_core::enums::WizardStep;
use dx_core::session::DiagnosisSession;

use crate::cli::GlobalFlags;
use crate::commands::shared::guard::require;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;
use crate::ui;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.store.load()?;
    require(&session, WizardStep::Hypothesis)?;

    let hypothesis = with_spinner(
        "Loading hypothesis...",
        "Could not load hypothesis",
        ctx.api.get_hypothesis(id),
    )
    .await
    .with_context(|| format!("failed to fetch hypothesis {id}"))?;

    apply(ctx, &mut session, hypothesis.clone())?;
    output(&hypothesis, flags.format)?;
    ui::hint(flags, "Next: 'dxw questionnaire'.");
    Ok(())
}

/// Record `hypothesis` as the one being screened for and persist the session.
pub fn apply(
    ctx: &AppContext,
    session: &mut DiagnosisSession,
    hypothesis: Hypothesis,
) -> anyhow::Result<()> {
    let changed = session.hypothesis().is_some_and(|current| current.id != hypothesis.id);
    session.select_hypothesis(hypothesis)?;
    if changed {
        tracing::info!("hypothesis changed; previous answers discarded");
    }
    ctx.store.save(session)
}

/// Let the user pick a hypothesis from the backend's list.
pub async fn choose(ctx: &AppContext, session: &mut DiagnosisSession) -> anyhow::Result<Hypothesis> {
    require(session, WizardStep::Hypothesis)?;

    let hypotheses = with_spinner(
        "Loading hypotheses...",
        "Could not load hypotheses",
        ctx.api.list_hypotheses(),
    )
    .await
    .context("failed to fetch hypotheses")?;
    if hypotheses.is_empty() {
        bail!("the diagnosis backend has no hypotheses configured");
    }

    let index = pick(&hypotheses, session.hypothesis(), ctx.prompter())?;
    let hypothesis = hypotheses[index].clone();
    apply(ctx, session, hypothesis.clone())?;
    Ok(hypothesis)
}

fn pick(
    hypotheses: &[Hypothesis],
    current: Option<&Hypothesis>,
    prompter: &dyn crate::prompt::Prompter,
) -> anyhow::Result<usize> {
    let items: Vec<String> = hypotheses.iter().map(item_label).collect();
    let default = current.and_then(|c| hypotheses.iter().position(|h| h.id == c.id));
    prompter.select("Which hypothesis do you want to test?", &items, default)
}

fn item_label(hypothesis: &Hypothesis) -> String {
    if hypothesis.description.is_empty() {
        hypothesis.name.clone()
    } else {
        let summary: String = hypothesis.description.chars().take(60).collect();
        format!("{}: {summary}", hypothesis.name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::prompt::scripted::ScriptedPrompter;

    fn hypothesis(id: i64, name: &str, description: &str) -> Hypothesis {
        Hypothesis {
            id,
            name: name.into(),
            description: description.into(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn labels_include_short_description() {
        assert_eq!(item_label(&hypothesis(1, "Ringan", "")), "Ringan");
        let long = "x".repeat(100);
        assert_eq!(
            item_label(&hypothesis(2, "Berat", &long)).chars().count(),
            "Berat: ".len() + 60
        );
    }

    #[test]
    fn current_selection_is_the_default() {
        let list = vec![
            hypothesis(1, "Ringan", ""),
            hypothesis(2, "Sedang", ""),
            hypothesis(3, "Berat", ""),
        ];
        let prompter = ScriptedPrompter::new([""]);
        let index = pick(&list, Some(&list[2]), &prompter).unwrap();
        assert_eq!(index, 2);
    }
}
