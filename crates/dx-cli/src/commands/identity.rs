//! `dxw identity`: the identity form.

use anyhow::Context;
use chrono::Datelike;
use console::style;
use dx_core::entities::{RegisteredUser, UserProfile};
use dx_core::enums::{Gender, WizardStep};
use dx_core::errors::CoreError;
use dx_core::responses::IdentityResponse;
use dx_core::session::DiagnosisSession;
use dx_core::validation::{PROGRAM_OPTIONS, PROGRAM_OTHER, ProfileDraft, ProfileField, cohort_options};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdentityArgs;
use crate::commands::shared::guard::require;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;
use crate::prompt::Prompter;
use crate::ui;

const FIELDS: [ProfileField; 6] = [
    ProfileField::FullName,
    ProfileField::Age,
    ProfileField::CohortYear,
    ProfileField::Program,
    ProfileField::Residence,
    ProfileField::Gender,
];

/// Handle `dxw identity`.
pub async fn handle(args: &IdentityArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.store.load()?;
    require(&session, WizardStep::Identity)?;

    let user = register(args, ctx, &mut session).await?;
    output(
        &IdentityResponse {
            user,
            next_step: WizardStep::Hypothesis,
        },
        flags.format,
    )?;
    ui::hint(
        flags,
        "Next: 'dxw hypothesis list', then 'dxw hypothesis select <id>'.",
    );
    Ok(())
}

/// Collect and validate the form, register with the backend, and record the
/// new user in the session.
pub async fn register(
    args: &IdentityArgs,
    ctx: &AppContext,
    session: &mut DiagnosisSession,
) -> anyhow::Result<RegisteredUser> {
    let profile = collect_profile(
        args,
        session.profile(),
        ctx.prompter(),
        chrono::Utc::now().year(),
    )?;

    let user = with_spinner(
        "Registering with the diagnosis service...",
        "Registration failed",
        ctx.api.create_user(&profile),
    )
    .await
    .context("failed to register with the diagnosis backend")?;
    tracing::info!(user_id = user.id, "registered");

    session.save_profile(profile);
    session.save_user_id(user.id)?;
    ctx.store.save(session)?;
    Ok(user)
}

/// Build a valid profile from flags, the saved profile, and prompts.
///
/// Fields passed as flags are never prompted for unless they fail
/// validation; everything else is asked with the saved value as default.
/// Without a terminal nothing is asked and every invalid field is reported.
pub fn collect_profile(
    args: &IdentityArgs,
    existing: Option<&UserProfile>,
    prompter: &dyn Prompter,
    current_year: i32,
) -> anyhow::Result<UserProfile> {
    let base = existing.map(ProfileDraft::from_profile).unwrap_or_default();
    let mut draft = ProfileDraft {
        full_name: args.name.clone().unwrap_or(base.full_name),
        age: args.age.clone().unwrap_or(base.age),
        cohort_year: args.cohort.clone().unwrap_or(base.cohort_year),
        program: args.program.clone().unwrap_or(base.program),
        custom_program: args.other_program.clone().unwrap_or(base.custom_program),
        residence: args.residence.clone().unwrap_or(base.residence),
        gender: args.gender.clone().unwrap_or(base.gender),
    };
    if args.other_program.is_some() && args.program.is_none() {
        draft.program = PROGRAM_OTHER.to_string();
    }

    if !prompter.is_interactive() {
        return draft
            .validate(current_year)
            .map_err(|errors| CoreError::InvalidProfile(errors).into());
    }

    let mut pending: Vec<ProfileField> = FIELDS
        .into_iter()
        .filter(|field| !given(args, *field))
        .collect();

    loop {
        for field in &pending {
            ask(*field, &mut draft, prompter, current_year)?;
        }

        match draft.validate(current_year) {
            Ok(profile) => return Ok(profile),
            Err(errors) => {
                for error in &errors.errors {
                    eprintln!("  {} {}", style("✘").red(), error.message);
                }
                pending = FIELDS
                    .into_iter()
                    .filter(|field| errors.message_for(*field).is_some())
                    .collect();
            }
        }
    }
}

const fn given(args: &IdentityArgs, field: ProfileField) -> bool {
    match field {
        ProfileField::FullName => args.name.is_some(),
        ProfileField::Age => args.age.is_some(),
        ProfileField::CohortYear => args.cohort.is_some(),
        ProfileField::Program => args.program.is_some() || args.other_program.is_some(),
        ProfileField::Residence => args.residence.is_some(),
        ProfileField::Gender => args.gender.is_some(),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn ask(
    field: ProfileField,
    draft: &mut ProfileDraft,
    prompter: &dyn Prompter,
    current_year: i32,
) -> anyhow::Result<()> {
    match field {
        ProfileField::FullName => {
            draft.full_name = prompter.input("Full name", non_empty(&draft.full_name))?;
        }
        ProfileField::Age => {
            draft.age = prompter.input("Age", non_empty(&draft.age))?;
        }
        ProfileField::CohortYear => {
            let years: Vec<String> = cohort_options(current_year)
                .iter()
                .map(ToString::to_string)
                .collect();
            let default = years.iter().position(|y| *y == draft.cohort_year.trim());
            let index = prompter.select("Cohort year", &years, default)?;
            draft.cohort_year.clone_from(&years[index]);
        }
        ProfileField::Program => {
            let programs: Vec<String> = PROGRAM_OPTIONS.iter().map(ToString::to_string).collect();
            let default = programs.iter().position(|p| *p == draft.program.trim());
            let index = prompter.select("Study program", &programs, default)?;
            draft.program.clone_from(&programs[index]);
            if draft.program == PROGRAM_OTHER {
                draft.custom_program =
                    prompter.input("Your study program", non_empty(&draft.custom_program))?;
            } else {
                draft.custom_program.clear();
            }
        }
        ProfileField::Residence => {
            draft.residence = prompter.input("Residence (city)", non_empty(&draft.residence))?;
        }
        ProfileField::Gender => {
            let labels: Vec<String> = Gender::ALL
                .iter()
                .map(|g| format!("{} ({})", g.label(), g.wire_value()))
                .collect();
            let default = draft
                .gender
                .parse::<Gender>()
                .ok()
                .and_then(|current| Gender::ALL.iter().position(|g| *g == current));
            let index = prompter.select("Gender", &labels, default)?;
            draft.gender = Gender::ALL[index].wire_value().to_string();
        }
    }
    Ok(())
}
