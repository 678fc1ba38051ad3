//! CLI response types returned by `dxw` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `dxw session show`, `dxw identity`, `dxw questionnaire`, `dxw dashboard`,
//! and `dxw export`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Answer, DiagnosisResult, Hypothesis, RegisteredUser, UserProfile};
use crate::enums::{ExportFormat, WizardStep};

/// Reachability of one wizard step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StepStatus {
    pub step: WizardStep,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<WizardStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response from `dxw session show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SessionView {
    pub current_step: WizardStep,
    pub user_id: Option<i64>,
    pub profile: Option<UserProfile>,
    pub hypothesis: Option<Hypothesis>,
    pub answered: usize,
    pub result: Option<DiagnosisResult>,
    pub steps: Vec<StepStatus>,
    pub updated_at: Option<String>,
}

/// Response from `dxw identity`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdentityResponse {
    pub user: RegisteredUser,
    pub next_step: WizardStep,
}

/// Response from `dxw questionnaire`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionnaireResponse {
    pub hypothesis: Hypothesis,
    pub answers: Vec<Answer>,
    pub result: DiagnosisResult,
}

/// Response from `dxw dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardView {
    pub user_id: i64,
    pub profile: Option<UserProfile>,
    pub hypothesis: String,
    pub percentage: f64,
    pub uncertainty: f64,
    pub description: String,
    pub recommendation: String,
}

impl DashboardView {
    #[must_use]
    pub fn new(user_id: i64, profile: Option<UserProfile>, result: &DiagnosisResult) -> Self {
        Self {
            user_id,
            profile,
            hypothesis: result.hypothesis.name.clone(),
            percentage: result.confidence(),
            uncertainty: result.uncertainty(),
            description: result.hypothesis.description.clone(),
            recommendation: result.hypothesis.recommendation.clone(),
        }
    }
}

/// Response from `dxw export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub format: ExportFormat,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}
