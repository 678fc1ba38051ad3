//! `dxw start`: walk through every step interactively.

use anyhow::bail;
use console::style;
use dx_core::enums::{ExportFormat, WizardStep};
use dx_core::session::DiagnosisSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{IdentityArgs, StartArgs};
use crate::commands::{dashboard, export, hypothesis, identity, questionnaire};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterResult {
    Export(ExportFormat),
    StartOver,
    Quit,
}

const MENU: [(&str, AfterResult); 4] = [
    ("Export all results to Excel", AfterResult::Export(ExportFormat::Excel)),
    ("Export all results to PDF", AfterResult::Export(ExportFormat::Pdf)),
    ("Start over", AfterResult::StartOver),
    ("Quit", AfterResult::Quit),
];

/// Handle `dxw start`.
pub async fn handle(args: &StartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.prompter().is_interactive() {
        bail!("'dxw start' needs an interactive terminal; run the step commands instead (see 'dxw --help')");
    }

    let mut session = ctx.store.load()?;
    if args.reset {
        session.reset();
        ctx.store.save(&session)?;
    }

    banner();
    confirm_resume(ctx, &mut session)?;

    loop {
        run_steps(ctx, &mut session).await?;
        dashboard::show(&dashboard::view(&session)?, flags)?;

        loop {
            match menu(ctx)? {
                AfterResult::Export(format) => {
                    let target = export::target_path(None, &ctx.config.general.export_dir, format);
                    match export::download(ctx, format, &target).await {
                        Ok(response) => {
                            if !flags.human() {
                                output(&response, flags.format)?;
                            }
                        }
                        Err(error) => eprintln!("{} {error:#}", style("Export failed:").red()),
                    }
                }
                AfterResult::StartOver => {
                    session.reset();
                    ctx.store.save(&session)?;
                    break;
                }
                AfterResult::Quit => return Ok(()),
            }
        }
    }
}

/// Run whichever steps are still missing until a result exists.
async fn run_steps(ctx: &AppContext, session: &mut DiagnosisSession) -> anyhow::Result<()> {
    while let Some(step) = pending_step(session) {
        heading(step);
        match step {
            WizardStep::Home | WizardStep::Identity => {
                identity::register(&IdentityArgs::default(), ctx, session).await?;
            }
            WizardStep::Hypothesis => {
                hypothesis::choose(ctx, session).await?;
            }
            WizardStep::Questionnaire | WizardStep::Dashboard => {
                questionnaire::complete(ctx, session, &[]).await?;
            }
        }
    }
    Ok(())
}

/// The step that has to be completed next, or `None` once the dashboard is
/// reachable.
fn pending_step(session: &DiagnosisSession) -> Option<WizardStep> {
    match session.furthest_step() {
        WizardStep::Dashboard => None,
        step => Some(step),
    }
}

fn confirm_resume(ctx: &AppContext, session: &mut DiagnosisSession) -> anyhow::Result<()> {
    let Some(profile) = session.profile() else {
        return Ok(());
    };
    if session.user_id().is_none() {
        return Ok(());
    }

    let prompt = format!(
        "Continue the saved screening for {} (at the {} step)?",
        profile.full_name,
        session.furthest_step()
    );
    if !ctx.prompter().confirm(&prompt, true)? {
        session.reset();
        ctx.store.save(session)?;
    }
    Ok(())
}

fn menu(ctx: &AppContext) -> anyhow::Result<AfterResult> {
    let items: Vec<String> = MENU.iter().map(|(label, _)| (*label).to_string()).collect();
    let index = ctx
        .prompter()
        .select("What would you like to do next?", &items, Some(MENU.len() - 1))?;
    Ok(MENU[index].1)
}

fn banner() {
    eprintln!("{}", style("Online game addiction screening").bold().magenta());
    eprintln!(
        "{}",
        style("Certainty-factor diagnosis with backward chaining. Four short steps.").dim()
    );
}

fn heading(step: WizardStep) {
    let number = WizardStep::ALL
        .iter()
        .position(|s| *s == step)
        .unwrap_or_default();
    eprintln!();
    eprintln!(
        "{}",
        style(format!("Step {number} of 4: {step}")).bold().underlined()
    );
}
