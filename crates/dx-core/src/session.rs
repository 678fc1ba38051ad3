//! The diagnosis session store.
//!
//! One [`DiagnosisSession`] carries everything a screening run accumulates:
//!
//! ```text
//! profile → user_id → hypothesis → answers → result
//! ```
//!
//! Each piece is only meaningful when everything to its left is present.
//! Mutators refuse to write a piece whose prerequisites are missing, and
//! rewriting an upstream piece clears whatever depended on it. [`guard`]
//! answers whether a wizard step is reachable and, if not, where to send the
//! user instead.
//!
//! [`guard`]: DiagnosisSession::guard

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers;
use crate::entities::{Answer, DiagnosisResult, Hypothesis, Symptom, UserProfile};
use crate::enums::WizardStep;
use crate::errors::CoreError;
use crate::responses::{SessionView, StepStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosisSession {
    #[serde(default)]
    profile: Option<UserProfile>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    hypothesis: Option<Hypothesis>,
    #[serde(default)]
    answers: Vec<Answer>,
    #[serde(default)]
    result: Option<DiagnosisResult>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl DiagnosisSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- accessors ----------------------------------------------------------

    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    #[must_use]
    pub const fn hypothesis(&self) -> Option<&Hypothesis> {
        self.hypothesis.as_ref()
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub const fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// True when nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.user_id.is_none()
            && self.hypothesis.is_none()
            && self.answers.is_empty()
            && self.result.is_none()
    }

    // -- mutators -----------------------------------------------------------

    /// Store a validated identity. A new identity means a new backend user, so
    /// the user id and everything downstream are cleared.
    pub fn save_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.user_id = None;
        self.clear_from_hypothesis();
        self.touch();
    }

    /// Store the id the backend assigned on registration.
    ///
    /// # Errors
    ///
    /// [`CoreError::StepLocked`] when no profile has been saved.
    pub fn save_user_id(&mut self, user_id: i64) -> Result<(), CoreError> {
        if self.profile.is_none() {
            return Err(locked(
                WizardStep::Hypothesis,
                WizardStep::Identity,
                "fill in your identity first",
            ));
        }
        self.user_id = Some(user_id);
        self.touch();
        Ok(())
    }

    /// Select the hypothesis to screen for. Switching to a different
    /// hypothesis discards answers and result collected for the old one.
    ///
    /// # Errors
    ///
    /// [`CoreError::StepLocked`] when the identity step is incomplete.
    pub fn select_hypothesis(&mut self, hypothesis: Hypothesis) -> Result<(), CoreError> {
        self.guard(WizardStep::Hypothesis)?;
        let changed = self
            .hypothesis
            .as_ref()
            .is_none_or(|current| current.id != hypothesis.id);
        if changed {
            self.answers.clear();
            self.result = None;
        }
        self.hypothesis = Some(hypothesis);
        self.touch();
        Ok(())
    }

    /// Store questionnaire answers. Any earlier result no longer matches and
    /// is cleared.
    ///
    /// # Errors
    ///
    /// [`CoreError::StepLocked`] without a selected hypothesis, or
    /// [`CoreError::DuplicateAnswer`] when a symptom appears twice.
    pub fn save_answers(&mut self, answers: Vec<Answer>) -> Result<(), CoreError> {
        self.guard(WizardStep::Questionnaire)?;
        answers::check_unique(&answers)?;
        self.answers = answers;
        self.result = None;
        self.touch();
        Ok(())
    }

    /// Store the backend's diagnosis.
    ///
    /// # Errors
    ///
    /// [`CoreError::StepLocked`] when no answers have been saved.
    pub fn save_result(&mut self, result: DiagnosisResult) -> Result<(), CoreError> {
        self.guard(WizardStep::Questionnaire)?;
        if self.answers.is_empty() {
            return Err(locked(
                WizardStep::Dashboard,
                WizardStep::Questionnaire,
                "answer the questionnaire first",
            ));
        }
        self.result = Some(result);
        self.touch();
        Ok(())
    }

    /// Start over: every entity returns to empty together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop state whose prerequisites are missing (e.g. a hand-edited session
    /// file). Returns `true` if anything was removed.
    pub fn repair(&mut self) -> bool {
        let before = self.clone();
        if self.profile.is_none() {
            self.user_id = None;
        }
        if self.user_id.is_none() {
            self.hypothesis = None;
        }
        if self.hypothesis.is_none() {
            self.answers.clear();
        }
        if self.answers.is_empty() || answers::check_unique(&self.answers).is_err() {
            self.answers.clear();
            self.result = None;
        }
        *self != before
    }

    // -- guards -------------------------------------------------------------

    /// Check whether `step` is reachable from the current state.
    ///
    /// # Errors
    ///
    /// [`CoreError::StepLocked`] naming the earliest step whose required state
    /// is missing.
    pub fn guard(&self, step: WizardStep) -> Result<(), CoreError> {
        match step {
            WizardStep::Home | WizardStep::Identity => Ok(()),
            WizardStep::Hypothesis => self.require_user(step),
            WizardStep::Questionnaire => {
                self.require_user(step)?;
                self.require_hypothesis(step)
            }
            WizardStep::Dashboard => {
                self.require_user(step)?;
                self.require_hypothesis(step)?;
                if self.result.is_none() {
                    return Err(locked(
                        step,
                        WizardStep::Questionnaire,
                        "there is no diagnosis result yet",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Highest step whose guard passes; where a resumed wizard should land.
    #[must_use]
    pub fn furthest_step(&self) -> WizardStep {
        WizardStep::ALL
            .into_iter()
            .rev()
            .find(|step| self.guard(*step).is_ok())
            .unwrap_or(WizardStep::Identity)
    }

    /// Reachability of every step, for display.
    #[must_use]
    pub fn step_statuses(&self) -> Vec<StepStatus> {
        WizardStep::ALL
            .into_iter()
            .map(|step| match self.guard(step) {
                Ok(()) => StepStatus {
                    step,
                    reachable: true,
                    redirect: None,
                    reason: None,
                },
                Err(CoreError::StepLocked {
                    redirect, reason, ..
                }) => StepStatus {
                    step,
                    reachable: false,
                    redirect: Some(redirect),
                    reason: Some(reason),
                },
                Err(other) => StepStatus {
                    step,
                    reachable: false,
                    redirect: None,
                    reason: Some(other.to_string()),
                },
            })
            .collect()
    }

    /// Snapshot of the session for display.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            current_step: self.furthest_step(),
            user_id: self.user_id,
            profile: self.profile.clone(),
            hypothesis: self.hypothesis.clone(),
            answered: self.answers.len(),
            result: self.result.clone(),
            steps: self.step_statuses(),
            updated_at: self.updated_at.map(|ts| ts.to_rfc3339()),
        }
    }

    /// Initial answers for `symptoms`, reusing anything already answered.
    #[must_use]
    pub fn seed_answers(&self, symptoms: &[Symptom]) -> Vec<Answer> {
        answers::seed_answers(symptoms, &self.answers)
    }

    fn require_user(&self, step: WizardStep) -> Result<(), CoreError> {
        if self.user_id.is_none() {
            return Err(locked(
                step,
                WizardStep::Identity,
                "fill in your identity first",
            ));
        }
        Ok(())
    }

    fn require_hypothesis(&self, step: WizardStep) -> Result<(), CoreError> {
        if self.hypothesis.is_none() {
            return Err(locked(
                step,
                WizardStep::Hypothesis,
                "select a hypothesis first",
            ));
        }
        Ok(())
    }

    fn clear_from_hypothesis(&mut self) {
        self.hypothesis = None;
        self.answers.clear();
        self.result = None;
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

fn locked(step: WizardStep, redirect: WizardStep, reason: &str) -> CoreError {
    CoreError::StepLocked {
        step,
        redirect,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{CertaintyLevel, Gender};
    use pretty_assertions::assert_eq;

    fn profile() -> UserProfile {
        UserProfile {
            full_name: "Siti Aminah".into(),
            age: 20,
            cohort_year: 2023,
            program: "Psikologi".into(),
            residence: "Surabaya".into(),
            gender: Gender::Female,
        }
    }

    fn hypothesis(id: i64) -> Hypothesis {
        Hypothesis {
            id,
            name: format!("Tier {id}"),
            description: "desc".into(),
            recommendation: "rec".into(),
        }
    }

    fn result_for(id: i64) -> DiagnosisResult {
        DiagnosisResult {
            hypothesis: hypothesis(id),
            percentage: 76.5,
        }
    }

    fn at_questionnaire() -> DiagnosisSession {
        let mut session = DiagnosisSession::new();
        session.save_profile(profile());
        session.save_user_id(7).unwrap();
        session.select_hypothesis(hypothesis(1)).unwrap();
        session
    }

    fn completed() -> DiagnosisSession {
        let mut session = at_questionnaire();
        session
            .save_answers(vec![
                Answer::new(10, CertaintyLevel::Certain),
                Answer::new(11, CertaintyLevel::Unlikely),
            ])
            .unwrap();
        session.save_result(result_for(1)).unwrap();
        session
    }

    fn redirect_of(err: CoreError) -> WizardStep {
        match err {
            CoreError::StepLocked { redirect, .. } => redirect,
            other => panic!("expected StepLocked, got {other:?}"),
        }
    }

    #[test]
    fn fresh_session_only_reaches_identity() {
        let session = DiagnosisSession::new();
        assert!(session.is_empty());
        assert!(session.guard(WizardStep::Home).is_ok());
        assert!(session.guard(WizardStep::Identity).is_ok());
        for step in [
            WizardStep::Hypothesis,
            WizardStep::Questionnaire,
            WizardStep::Dashboard,
        ] {
            let err = session.guard(step).unwrap_err();
            assert_eq!(redirect_of(err), WizardStep::Identity);
        }
        assert_eq!(session.furthest_step(), WizardStep::Identity);
    }

    #[test]
    fn profile_alone_does_not_unlock_hypothesis() {
        let mut session = DiagnosisSession::new();
        session.save_profile(profile());
        assert!(session.guard(WizardStep::Hypothesis).is_err());
        session.save_user_id(3).unwrap();
        assert!(session.guard(WizardStep::Hypothesis).is_ok());
        assert_eq!(session.furthest_step(), WizardStep::Hypothesis);
    }

    #[test]
    fn user_id_requires_profile() {
        let mut session = DiagnosisSession::new();
        let err = session.save_user_id(1).unwrap_err();
        assert_eq!(redirect_of(err), WizardStep::Identity);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn hypothesis_requires_user() {
        let mut session = DiagnosisSession::new();
        session.save_profile(profile());
        assert!(session.select_hypothesis(hypothesis(1)).is_err());
        assert!(session.hypothesis().is_none());
    }

    #[test]
    fn questionnaire_redirects_to_hypothesis_when_missing() {
        let mut session = DiagnosisSession::new();
        session.save_profile(profile());
        session.save_user_id(9).unwrap();
        let err = session.guard(WizardStep::Questionnaire).unwrap_err();
        assert_eq!(redirect_of(err), WizardStep::Hypothesis);
        let err = session.save_answers(vec![]).unwrap_err();
        assert_eq!(redirect_of(err), WizardStep::Hypothesis);
    }

    #[test]
    fn dashboard_requires_result() {
        let session = at_questionnaire();
        let err = session.guard(WizardStep::Dashboard).unwrap_err();
        assert_eq!(redirect_of(err), WizardStep::Questionnaire);
        assert_eq!(session.furthest_step(), WizardStep::Questionnaire);

        let done = completed();
        assert!(done.guard(WizardStep::Dashboard).is_ok());
        assert_eq!(done.furthest_step(), WizardStep::Dashboard);
    }

    #[test]
    fn result_requires_answers() {
        let mut session = at_questionnaire();
        let err = session.save_result(result_for(1)).unwrap_err();
        assert_eq!(redirect_of(err), WizardStep::Questionnaire);
    }

    #[test]
    fn duplicate_answers_are_rejected() {
        let mut session = at_questionnaire();
        let err = session
            .save_answers(vec![
                Answer::new(10, CertaintyLevel::Certain),
                Answer::new(10, CertaintyLevel::Likely),
            ])
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateAnswer { symptom_id: 10 }));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn new_answers_clear_stale_result() {
        let mut session = completed();
        session
            .save_answers(vec![Answer::new(10, CertaintyLevel::Likely)])
            .unwrap();
        assert!(session.result().is_none());
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn switching_hypothesis_clears_answers_and_result() {
        let mut same = completed();
        same.select_hypothesis(hypothesis(1)).unwrap();
        assert_eq!(same.answers().len(), 2);
        assert!(same.result().is_some());

        let mut switched = completed();
        switched.select_hypothesis(hypothesis(2)).unwrap();
        assert!(switched.answers().is_empty());
        assert!(switched.result().is_none());
        assert_eq!(switched.hypothesis().map(|h| h.id), Some(2));
    }

    #[test]
    fn new_profile_clears_everything_downstream() {
        let mut session = completed();
        session.save_profile(profile());
        assert!(session.profile().is_some());
        assert_eq!(session.user_id(), None);
        assert!(session.hypothesis().is_none());
        assert!(session.answers().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn reset_empties_every_entity() {
        let mut session = completed();
        assert!(session.updated_at().is_some());
        session.reset();
        assert_eq!(session, DiagnosisSession::default());
        assert!(session.is_empty());
    }

    #[test]
    fn seed_answers_reuses_saved_answers() {
        let session = completed();
        let symptoms = vec![
            Symptom {
                id: 10,
                code: None,
                statement: "a".into(),
            },
            Symptom {
                id: 12,
                code: None,
                statement: "b".into(),
            },
        ];
        let seeded = session.seed_answers(&symptoms);
        assert_eq!(
            seeded,
            vec![
                Answer::new(10, CertaintyLevel::Certain),
                Answer::new(12, CertaintyLevel::NotAtAll),
            ]
        );
    }

    #[test]
    fn repair_drops_orphaned_state() {
        let json = serde_json::json!({
            "user_id": 4,
            "hypothesis": { "id": 1, "nama": "Tier 1", "deskripsi": "", "solusi": "" },
            "answers": [{ "symptom_id": 1, "nilai_keyakinan": 0.8 }]
        });
        let mut session: DiagnosisSession = serde_json::from_value(json).unwrap();
        assert!(session.repair());
        assert!(session.is_empty());

        let mut healthy = completed();
        assert!(!healthy.repair());
    }

    #[test]
    fn step_statuses_report_redirects() {
        let statuses = at_questionnaire().step_statuses();
        let dashboard = statuses
            .iter()
            .find(|s| s.step == WizardStep::Dashboard)
            .unwrap();
        assert!(!dashboard.reachable);
        assert_eq!(dashboard.redirect, Some(WizardStep::Questionnaire));
        assert!(statuses.iter().filter(|s| s.reachable).count() == 4);
    }

    #[test]
    fn session_roundtrips_through_json() {
        let session = completed();
        let json = serde_json::to_string(&session).unwrap();
        let back: DiagnosisSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
