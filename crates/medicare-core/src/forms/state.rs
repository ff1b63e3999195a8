//! Submission state machine for create-type screens.

use serde::Serialize;
use tracing::debug;

use super::draft::Draft;
use super::gateway::SubmitGateway;
use crate::error::{MedicareError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    Editing,
    Submitting,
}

/// A draft plus its `Editing`/`Submitting` state.
///
/// At most one submission is in flight: `begin_submit` refuses while the form
/// is `Submitting`. A successful submission resets the draft; a failed one
/// keeps it and records the error.
#[derive(Debug, Clone)]
pub struct CreateForm<D: Draft> {
    draft: D,
    state: FormState,
    last_error: Option<MedicareError>,
}

impl<D: Draft> Default for CreateForm<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> CreateForm<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            state: FormState::Editing,
            last_error: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn last_error(&self) -> Option<&MedicareError> {
        self.last_error.as_ref()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == FormState::Editing
    }

    fn in_flight(&self) -> MedicareError {
        MedicareError::SubmissionInFlight {
            form: D::FORM.to_string(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.state == FormState::Submitting {
            return Err(self.in_flight());
        }
        self.draft.set(name, value)
    }

    /// Discards the draft and any recorded error.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.state = FormState::Editing;
        self.last_error = None;
    }

    /// `Editing -> Submitting`, handing out a snapshot of the draft.
    ///
    /// Validation failures keep the form in `Editing`.
    pub fn begin_submit(&mut self) -> Result<D> {
        if self.state == FormState::Submitting {
            return Err(self.in_flight());
        }
        if let Err(err) = self.draft.validate() {
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.state = FormState::Submitting;
        self.last_error = None;
        Ok(self.draft.clone())
    }

    /// `Submitting -> Editing` with the gateway outcome.
    pub fn finish_submit(&mut self, outcome: Result<u32>) -> Result<u32> {
        self.state = FormState::Editing;
        match outcome {
            Ok(id) => {
                debug!("[Form] {} submission accepted as #{}", D::FORM, id);
                self.draft = D::default();
                self.last_error = None;
                Ok(id)
            }
            Err(err) => {
                debug!("[Form] {} submission failed: {}", D::FORM, err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Runs a full submission against `gateway`.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<u32>
    where
        G: SubmitGateway<D> + ?Sized,
    {
        let draft = self.begin_submit()?;
        let outcome = gateway.create(draft).await;
        self.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::PatientDraft;
    use async_trait::async_trait;

    struct AcceptingGateway;

    #[async_trait]
    impl SubmitGateway<PatientDraft> for AcceptingGateway {
        async fn create(&self, _draft: PatientDraft) -> Result<u32> {
            Ok(6)
        }
    }

    struct RejectingGateway;

    #[async_trait]
    impl SubmitGateway<PatientDraft> for RejectingGateway {
        async fn create(&self, _draft: PatientDraft) -> Result<u32> {
            Err(MedicareError::submission_failed("backend unavailable"))
        }
    }

    fn filled_form() -> CreateForm<PatientDraft> {
        let mut form = CreateForm::new();
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "555"),
            ("dateOfBirth", "1815-12-10"),
            ("gender", "Female"),
        ] {
            form.set_field(name, value).unwrap();
        }
        form
    }

    #[test]
    fn test_validation_failure_stays_editing() {
        let mut form: CreateForm<PatientDraft> = CreateForm::new();
        let err = form.begin_submit().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.last_error(), Some(&err));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        assert!(!form.is_submit_enabled());
        assert!(matches!(
            form.begin_submit(),
            Err(MedicareError::SubmissionInFlight { .. })
        ));
        assert!(form.set_field("city", "London").is_err());
    }

    #[tokio::test]
    async fn test_successful_submit_resets_draft() {
        let mut form = filled_form();
        let id = form.submit(&AcceptingGateway).await.unwrap();

        assert_eq!(id, 6);
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.draft(), &PatientDraft::default());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let mut form = filled_form();
        let err = form.submit(&RejectingGateway).await.unwrap_err();

        assert!(err.is_submission_failed());
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.draft().first_name, "Ada");
        assert!(form.last_error().is_some());
    }
}
