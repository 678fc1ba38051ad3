use dx_core::enums::WizardStep;
use dx_core::errors::CoreError;
use dx_core::session::DiagnosisSession;

/// Refuse to run `step` when the session has not reached it, pointing at
/// the command to run first.
pub fn require(session: &DiagnosisSession, step: WizardStep) -> anyhow::Result<()> {
    match session.guard(step) {
        Ok(()) => Ok(()),
        Err(CoreError::StepLocked {
            redirect, reason, ..
        }) => Err(anyhow::anyhow!(
            "the {step} step is locked: {reason}. Run '{}' first.",
            redirect.command()
        )),
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use dx_core::enums::WizardStep;
    use dx_core::session::DiagnosisSession;

    use super::require;

    #[test]
    fn identity_is_always_open() {
        assert!(require(&DiagnosisSession::new(), WizardStep::Identity).is_ok());
    }

    #[test]
    fn locked_step_names_redirect_command() {
        let err = require(&DiagnosisSession::new(), WizardStep::Questionnaire).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("questionnaire step is locked"), "{message}");
        assert!(message.contains("'dxw identity'"), "{message}");
    }
}
