//! Waitlist sign-up: the form's state machine and the submit call.

use serde::Serialize;

use crate::utils::api::{Api, SubmitError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
    Failed,
}

/// Editing -> Submitting -> Submitted, or back to an editable Failed state
/// that keeps what the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreregisterForm {
    fields: Registration,
    status: SubmitStatus,
}

impl PreregisterForm {
    pub fn fields(&self) -> &Registration {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.status, SubmitStatus::Editing | SubmitStatus::Failed)
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn set_name(&mut self, name: String) {
        if self.is_editable() {
            self.fields.name = name;
        }
    }

    pub fn set_email(&mut self, email: String) {
        if self.is_editable() {
            self.fields.email = email;
        }
    }

    /// Both fields are required; nothing else is validated here.
    pub fn can_submit(&self) -> bool {
        self.is_editable()
            && !self.fields.name.trim().is_empty()
            && !self.fields.email.trim().is_empty()
    }

    /// Moves to `Submitting` and returns the payload, or `None` if a submit
    /// isn't allowed right now.
    pub fn begin_submit(&mut self) -> Option<Registration> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.fields.clone())
    }

    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubmitStatus::Submitted,
            Err(_) => SubmitStatus::Failed,
        };
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.status == SubmitStatus::Failed)
            .then_some("Something went wrong while joining the waitlist. Please try again.")
    }
}

pub async fn submit(endpoint: &str, registration: &Registration) -> Result<(), SubmitError> {
    Api::post(endpoint).json(registration)?.send().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PreregisterForm {
        let mut form = PreregisterForm::default();
        form.set_name("Ada Lovelace".into());
        form.set_email("ada@example.com".into());
        form
    }

    #[test]
    fn empty_fields_block_submit() {
        let mut form = PreregisterForm::default();
        assert!(form.begin_submit().is_none());
        form.set_name("Ada".into());
        form.set_email("   ".into());
        assert!(!form.can_submit());
        assert_eq!(form.status(), SubmitStatus::Editing);
    }

    #[test]
    fn submit_disables_resubmission_while_pending() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert!(form.is_loading());
        assert!(form.begin_submit().is_none());
        form.set_name("changed".into());
        assert_eq!(form.fields().name, "Ada Lovelace");
    }

    #[test]
    fn success_reaches_submitted() {
        let mut form = filled();
        form.begin_submit();
        form.finish(&Ok(()));
        assert_eq!(form.status(), SubmitStatus::Submitted);
        assert!(!form.can_submit());
        assert!(form.error_message().is_none());
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut form = filled();
        form.begin_submit();
        form.finish(&Err(SubmitError::Status(503)));
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert!(form.error_message().is_some());
        assert_eq!(form.fields().name, "Ada Lovelace");
        assert_eq!(form.fields().email, "ada@example.com");
        assert!(form.is_editable());
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut form = filled();
        form.finish(&Ok(()));
        assert_eq!(form.status(), SubmitStatus::Editing);
    }

    #[test]
    fn payload_serializes_as_name_and_email() {
        let body = serde_json::to_value(filled().fields()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Ada Lovelace", "email": "ada@example.com" })
        );
    }
}
