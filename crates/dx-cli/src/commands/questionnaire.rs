//! `dxw questionnaire`: rate every symptom of the selected hypothesis and
//! ask the backend for a diagnosis.

use anyhow::{Context, bail};
use console::style;
use dx_core::answers::{check_complete, set_certainty};
use dx_core::entities::{Answer, Symptom};
use dx_core::enums::{CertaintyLevel, WizardStep};
use dx_core::responses::QuestionnaireResponse;
use dx_core::session::DiagnosisSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionnaireArgs;
use crate::commands::shared::guard::require;
use crate::commands::shared::parse::parse_answer;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;
use crate::prompt::Prompter;
use crate::ui;

/// Handle `dxw questionnaire`.
pub async fn handle(
    args: &QuestionnaireArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.store.load()?;
    require(&session, WizardStep::Questionnaire)?;

    let preset = args
        .answer
        .iter()
        .map(|raw| parse_answer(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let response = complete(ctx, &mut session, &preset).await?;
    if flags.human() {
        println!(
            "{} {:.2}%",
            style(format!("{}:", response.result.hypothesis.name)).bold(),
            response.result.confidence()
        );
        ui::hint(flags, "Next: 'dxw dashboard' for the full result.");
        Ok(())
    } else {
        output(&response, flags.format)
    }
}

/// Run the questionnaire for the selected hypothesis and store the result.
pub async fn complete(
    ctx: &AppContext,
    session: &mut DiagnosisSession,
    preset: &[Answer],
) -> anyhow::Result<QuestionnaireResponse> {
    require(session, WizardStep::Questionnaire)?;
    let (Some(user_id), Some(hypothesis)) = (session.user_id(), session.hypothesis().cloned())
    else {
        bail!("the session has no user or hypothesis; run 'dxw session show'");
    };

    let symptoms = with_spinner(
        "Loading questions...",
        "Could not load questions",
        ctx.api.symptoms_for(hypothesis.id),
    )
    .await
    .with_context(|| format!("failed to fetch symptoms for hypothesis {}", hypothesis.id))?;
    if symptoms.is_empty() {
        bail!("hypothesis '{}' has no symptoms to ask about", hypothesis.name);
    }

    let answers = collect_answers(&symptoms, session.seed_answers(&symptoms), preset, ctx.prompter())?;
    session.save_answers(answers.clone())?;
    ctx.store.save(session)?;

    let result = with_spinner("Diagnosing...", "Diagnosis failed", async {
        ctx.api.save_answers(user_id, &answers).await?;
        ctx.api.diagnose(user_id, hypothesis.id, &answers).await
    })
    .await
    .context("failed to run the diagnosis")?;
    tracing::info!(percentage = result.percentage, "diagnosis complete");

    session.save_result(result.clone())?;
    ctx.store.save(session)?;

    Ok(QuestionnaireResponse {
        hypothesis,
        answers,
        result,
    })
}

/// Apply `preset` answers, prompt for the rest, and check every symptom is
/// answered exactly once.
pub fn collect_answers(
    symptoms: &[Symptom],
    mut answers: Vec<Answer>,
    preset: &[Answer],
    prompter: &dyn Prompter,
) -> anyhow::Result<Vec<Answer>> {
    for answer in preset {
        set_certainty(&mut answers, answer.symptom_id, answer.certainty)?;
    }

    let items: Vec<String> = CertaintyLevel::ALL
        .iter()
        .map(|level| format!("{} ({level})", level.label()))
        .collect();
    let total = symptoms.len();

    for (position, symptom) in symptoms.iter().enumerate() {
        if preset.iter().any(|a| a.symptom_id == symptom.id) {
            continue;
        }
        let Some(answer) = answers.iter_mut().find(|a| a.symptom_id == symptom.id) else {
            continue;
        };
        let default = CertaintyLevel::ALL.iter().position(|l| *l == answer.certainty);
        let prompt = question(position + 1, total, symptom);
        let index = prompter.select(&prompt, &items, default)?;
        answer.certainty = CertaintyLevel::ALL[index];
    }

    check_complete(symptoms, &answers)?;
    Ok(answers)
}

fn question(number: usize, total: usize, symptom: &Symptom) -> String {
    match &symptom.code {
        Some(code) => format!("[{number}/{total}] {code} {}", symptom.statement),
        None => format!("[{number}/{total}] {}", symptom.statement),
    }
}
