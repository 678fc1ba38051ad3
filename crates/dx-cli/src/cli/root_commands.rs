use std::path::PathBuf;

use clap::{Args, Subcommand};
use dx_core::enums::ExportFormat;

use crate::cli::subcommands::{HypothesisCommands, SessionCommands, UsersCommands};
use crate::commands::shared::parse::parse_enum;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the whole screening interactively, resuming where you left off.
    Start(StartArgs),
    /// Step 1: fill in and register your identity.
    Identity(IdentityArgs),
    /// Step 2: browse and select the hypothesis to screen for.
    Hypothesis {
        #[command(subcommand)]
        action: HypothesisCommands,
    },
    /// Step 3: answer the questionnaire and run the diagnosis.
    Questionnaire(QuestionnaireArgs),
    /// Step 4: show the diagnosis result.
    Dashboard,
    /// Download the backend's result report.
    Export(ExportArgs),
    /// Diagnosis history stored by the backend.
    Results(ResultsArgs),
    /// Registered users.
    Users {
        #[command(subcommand)]
        action: UsersCommands,
    },
    /// Inspect or reset the local session.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct StartArgs {
    /// Discard the saved session and start from the identity step.
    #[arg(long)]
    pub reset: bool,
}

/// Identity form fields. Anything omitted is prompted for.
#[derive(Clone, Debug, Default, Args)]
pub struct IdentityArgs {
    /// Full name (letters, spaces, apostrophes, periods)
    #[arg(long)]
    pub name: Option<String>,
    /// Age in years (15-50)
    #[arg(long)]
    pub age: Option<String>,
    /// Cohort (enrolment) year, within the last ten years
    #[arg(long)]
    pub cohort: Option<String>,
    /// Study program; use "Lainnya" together with --other-program
    #[arg(long)]
    pub program: Option<String>,
    /// Study program not in the list
    #[arg(long)]
    pub other_program: Option<String>,
    /// City of residence
    #[arg(long)]
    pub residence: Option<String>,
    /// Gender: male/Laki-laki or female/Perempuan
    #[arg(long)]
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct QuestionnaireArgs {
    /// Pre-set an answer as SYMPTOM_ID=VALUE (0, 0.2 .. 1.0, or a level name)
    #[arg(long, value_name = "SYMPTOM_ID=VALUE")]
    pub answer: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Report format: excel or pdf
    #[arg(id = "report_format", value_name = "FORMAT", value_parser = parse_export_format)]
    pub report: ExportFormat,
    /// Where to write the file (defaults to general.export_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the download URL instead of downloading
    #[arg(long)]
    pub url_only: bool,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ResultsArgs {
    /// Show every user's results, not just the current session's
    #[arg(long)]
    pub all: bool,
    /// Max rows to show (defaults to general.history_limit)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

fn parse_export_format(raw: &str) -> anyhow::Result<ExportFormat> {
    parse_enum(raw, "export format")
}
