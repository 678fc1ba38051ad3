//! Cross-cutting error types for dxwiz.
//!
//! Transport and configuration errors (`ApiError`, `ConfigError`) live in
//! their own crates. Everything the session store and form validation can
//! reject is expressed here.

use thiserror::Error;

use crate::enums::WizardStep;
use crate::validation::ValidationErrors;

/// Errors raised by the session store and the questionnaire/identity rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A wizard step was requested before its required state exists.
    #[error("Step '{step}' is not available yet: {reason} (complete '{redirect}' first)")]
    StepLocked {
        step: WizardStep,
        redirect: WizardStep,
        reason: String,
    },

    /// The identity form has one or more invalid fields.
    #[error("Invalid identity data: {0}")]
    InvalidProfile(ValidationErrors),

    /// Two answers target the same symptom.
    #[error("Symptom {symptom_id} was answered more than once")]
    DuplicateAnswer { symptom_id: i64 },

    /// An answer targets a symptom that is not part of the questionnaire.
    #[error("Symptom {symptom_id} is not part of this questionnaire")]
    UnknownSymptom { symptom_id: i64 },

    /// A questionnaire symptom has no answer.
    #[error("Symptom {symptom_id} has not been answered")]
    MissingAnswer { symptom_id: i64 },

    /// A certainty value outside the questionnaire scale.
    #[error("Invalid certainty: {0}")]
    InvalidCertainty(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidProfile(errors)
    }
}
