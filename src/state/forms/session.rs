//! Per-session submission state machine
//!
//! `AwaitingBranch → Editing → Submitting → Submitted | Failed`.
//! A failed session keeps its values and may be submitted again.
//! Contact sessions have no branch and start in `Editing`.

use super::branch::{AgeAnswer, Branch, BranchSelector, RegistrationForm};
use super::field::FieldValue;
use super::model::{FormError, FormModel};
use super::schema::{contact_fields, CONTACT_FORM_NAME};
use super::steps::{Advance, StepController};
use uuid::Uuid;

/// Lifecycle phase of a form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingBranch,
    Editing,
    Submitting,
    Submitted,
    Failed(String),
}

/// A validated snapshot handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub session_id: Uuid,
    pub target: &'static str,
    pub fields: Vec<(&'static str, FieldValue)>,
}

#[derive(Debug, Clone)]
enum Body {
    Registration {
        selector: BranchSelector,
        form: Option<RegistrationForm>,
    },
    Contact {
        model: FormModel,
        steps: StepController,
    },
}

/// One user's pass through a form, from first interaction to submission
#[derive(Debug, Clone)]
pub struct FormSession {
    id: Uuid,
    phase: Phase,
    body: Body,
}

impl FormSession {
    /// Interest registration, starting at the age gate
    pub fn registration() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::AwaitingBranch,
            body: Body::Registration {
                selector: BranchSelector::default(),
                form: None,
            },
        }
    }

    /// Contact page message form
    pub fn contact() -> Self {
        let model = FormModel::new(contact_fields());
        let steps = StepController::single(&model);
        Self {
            id: Uuid::new_v4(),
            phase: Phase::Editing,
            body: Body::Contact { model, steps },
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn branch(&self) -> Option<Branch> {
        match &self.body {
            Body::Registration { form, .. } => form.as_ref().map(RegistrationForm::branch),
            Body::Contact { .. } => None,
        }
    }

    /// Intake form name for this session, once known
    pub fn target(&self) -> Option<&'static str> {
        match &self.body {
            Body::Registration { form, .. } => form.as_ref().map(|f| f.branch().target()),
            Body::Contact { .. } => Some(CONTACT_FORM_NAME),
        }
    }

    pub fn model(&self) -> Option<&FormModel> {
        match &self.body {
            Body::Registration { form, .. } => form.as_ref().map(RegistrationForm::model),
            Body::Contact { model, .. } => Some(model),
        }
    }

    pub fn steps(&self) -> Option<&StepController> {
        match &self.body {
            Body::Registration { form, .. } => form.as_ref().map(RegistrationForm::steps),
            Body::Contact { steps, .. } => Some(steps),
        }
    }

    fn parts_mut(&mut self) -> Option<(&mut FormModel, &mut StepController)> {
        match &mut self.body {
            Body::Registration { form, .. } => form.as_mut().map(RegistrationForm::parts_mut),
            Body::Contact { model, steps } => Some((model, steps)),
        }
    }

    /// Model for edits; None before the branch is chosen or once submitted
    pub fn model_mut(&mut self) -> Option<&mut FormModel> {
        if !self.is_editable() {
            return None;
        }
        self.parts_mut().map(|(model, _)| model)
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.phase, Phase::Editing | Phase::Failed(_))
    }

    /// Answer the age gate; only valid once, on registration sessions
    pub fn choose_branch(&mut self, answer: AgeAnswer) -> Result<Branch, FormError> {
        let Body::Registration { selector, form } = &mut self.body else {
            return Err(FormError::BranchAlreadySelected);
        };
        let built = selector.choose(answer)?;
        let branch = built.branch();
        *form = Some(built);
        self.phase = Phase::Editing;
        Ok(branch)
    }

    /// Advance the step controller. On the final step a successful
    /// advance is reported as `Complete` and nothing moves.
    pub fn advance(&mut self) -> Result<Advance, FormError> {
        self.ensure_editable()?;
        let (model, steps) = self.parts_mut().ok_or(FormError::BranchNotSelected)?;
        Ok(steps.advance(model))
    }

    pub fn retreat(&mut self) -> Result<usize, FormError> {
        self.ensure_editable()?;
        let (_, steps) = self.parts_mut().ok_or(FormError::BranchNotSelected)?;
        Ok(steps.retreat())
    }

    /// Validate everything and move to `Submitting`, returning what to send.
    /// Rejected while a previous attempt is still outstanding.
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, FormError> {
        self.ensure_editable()?;
        let session_id = self.id;
        let target = self.target().ok_or(FormError::BranchNotSelected)?;
        let (model, steps) = self.parts_mut().ok_or(FormError::BranchNotSelected)?;
        if !steps.is_last() {
            return Err(FormError::NotOnFinalStep);
        }
        let errors = model.validate_all();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }
        let fields = model.snapshot();
        self.phase = Phase::Submitting;
        tracing::info!(%session_id, form_name = target, fields = fields.len(), "submitting form");
        Ok(SubmissionRequest {
            session_id,
            target,
            fields,
        })
    }

    /// Apply the gateway outcome; the error string is the diagnostic
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        if self.phase != Phase::Submitting {
            tracing::warn!(session_id = %self.id, phase = ?self.phase, "unexpected submission outcome");
            return;
        }
        self.phase = match outcome {
            Ok(()) => Phase::Submitted,
            Err(reason) => Phase::Failed(reason),
        };
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        match self.phase {
            Phase::AwaitingBranch => Err(FormError::BranchNotSelected),
            Phase::Submitting => Err(FormError::SubmissionInFlight),
            Phase::Submitted => Err(FormError::AlreadySubmitted),
            Phase::Editing | Phase::Failed(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_minor() -> FormSession {
        let mut session = FormSession::registration();
        session.choose_branch(AgeAnswer::Under).unwrap();
        let model = session.model_mut().unwrap();
        model.set_text("email", "x@y.com").unwrap();
        model.set_text("phone", "5551234567").unwrap();
        model.set_bool("smsOptIn", false).unwrap();
        model.set_bool("emailOptIn", true).unwrap();
        session
    }

    fn filled_adult() -> FormSession {
        let mut session = FormSession::registration();
        session.choose_branch(AgeAnswer::Over).unwrap();
        let model = session.model_mut().unwrap();
        model.set_text("fullName", "Jo").unwrap();
        model.set_text("state", "Texas").unwrap();
        model.set_text("email", "a@b.com").unwrap();
        model.set_text("phone", "1234567890").unwrap();
        model.set_bool("ageConfirmation", true).unwrap();
        session
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_registration_waits_for_branch() {
            let mut session = FormSession::registration();
            assert_eq!(session.phase(), &Phase::AwaitingBranch);
            assert!(session.model().is_none());
            assert!(session.model_mut().is_none());
            assert_eq!(session.advance(), Err(FormError::BranchNotSelected));
            assert_eq!(
                session.begin_submit().unwrap_err(),
                FormError::BranchNotSelected
            );
        }

        #[test]
        fn test_choose_branch_moves_to_editing() {
            let mut session = FormSession::registration();
            assert_eq!(session.choose_branch(AgeAnswer::Over), Ok(Branch::Adult));
            assert_eq!(session.phase(), &Phase::Editing);
            assert_eq!(session.target(), Some("interest-form-over-21"));
        }

        #[test]
        fn test_branch_cannot_change() {
            let mut session = FormSession::registration();
            session.choose_branch(AgeAnswer::Under).unwrap();
            assert_eq!(
                session.choose_branch(AgeAnswer::Over),
                Err(FormError::BranchAlreadySelected)
            );
            assert_eq!(session.branch(), Some(Branch::Minor));
            assert!(session.model().unwrap().field("fullName").is_none());
        }

        #[test]
        fn test_contact_starts_editing() {
            let session = FormSession::contact();
            assert_eq!(session.phase(), &Phase::Editing);
            assert_eq!(session.target(), Some("contact-form"));
            assert!(session.branch().is_none());
        }

        #[test]
        fn test_contact_has_no_age_gate() {
            let mut session = FormSession::contact();
            assert!(session.choose_branch(AgeAnswer::Over).is_err());
        }

        #[test]
        fn test_sessions_have_distinct_ids() {
            assert_ne!(FormSession::contact().id(), FormSession::contact().id());
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_minor_submission_request() {
            let mut session = filled_minor();
            let request = session.begin_submit().unwrap();
            assert_eq!(request.target, "interest-form-under-21");
            assert_eq!(request.session_id, session.id());
            assert_eq!(
                request.fields,
                vec![
                    ("email", FieldValue::Text("x@y.com".into())),
                    ("phone", FieldValue::Text("5551234567".into())),
                    ("emailOptIn", FieldValue::Bool(true)),
                    ("smsOptIn", FieldValue::Bool(false)),
                ]
            );
            assert_eq!(session.phase(), &Phase::Submitting);
        }

        #[test]
        fn test_in_flight_submit_is_rejected() {
            let mut session = filled_minor();
            session.begin_submit().unwrap();
            assert_eq!(
                session.begin_submit().unwrap_err(),
                FormError::SubmissionInFlight
            );
            assert!(session.model_mut().is_none());
        }

        #[test]
        fn test_success_is_terminal() {
            let mut session = filled_minor();
            session.begin_submit().unwrap();
            session.finish_submit(Ok(()));
            assert_eq!(session.phase(), &Phase::Submitted);
            assert_eq!(
                session.begin_submit().unwrap_err(),
                FormError::AlreadySubmitted
            );
        }

        #[test]
        fn test_failure_keeps_values_and_allows_retry() {
            let mut session = filled_minor();
            session.begin_submit().unwrap();
            session.finish_submit(Err("status 500".into()));
            assert_eq!(session.phase(), &Phase::Failed("status 500".into()));
            assert_eq!(
                session.model().unwrap().field("email").unwrap().as_text(),
                "x@y.com"
            );
            assert!(session.begin_submit().is_ok());
        }

        #[test]
        fn test_invalid_form_is_not_submitted() {
            let mut session = FormSession::contact();
            match session.begin_submit() {
                Err(FormError::Invalid(errors)) => assert_eq!(errors.len(), 3),
                other => panic!("expected Invalid, got {other:?}"),
            }
            assert_eq!(session.phase(), &Phase::Editing);
        }

        #[test]
        fn test_padded_email_is_not_submitted() {
            let mut session = filled_minor();
            session
                .model_mut()
                .unwrap()
                .set_text("email", "  x@y.com ")
                .unwrap();
            match session.begin_submit() {
                Err(FormError::Invalid(errors)) => {
                    assert_eq!(
                        errors,
                        vec![("email", "Please enter a valid email address.".to_string())]
                    );
                }
                other => panic!("expected Invalid, got {other:?}"),
            }
            assert_eq!(session.phase(), &Phase::Editing);
        }

        #[test]
        fn test_adult_must_reach_last_step_first() {
            let mut session = filled_adult();
            assert_eq!(session.begin_submit(), Err(FormError::NotOnFinalStep));
            assert_eq!(session.phase(), &Phase::Editing);

            assert_eq!(session.advance(), Ok(Advance::Moved(1)));
            let request = session.begin_submit().unwrap();
            assert_eq!(request.target, "interest-form-over-21");
            assert_eq!(request.fields.len(), 8);
        }

        #[test]
        fn test_adult_final_step_requires_consent() {
            let mut session = filled_adult();
            session.advance().unwrap();
            session
                .model_mut()
                .unwrap()
                .set_bool("ageConfirmation", false)
                .unwrap();
            match session.begin_submit() {
                Err(FormError::Invalid(errors)) => {
                    assert_eq!(errors, vec![(
                        "ageConfirmation",
                        "You must confirm that you are 21 years or older.".to_string()
                    )]);
                }
                other => panic!("expected Invalid, got {other:?}"),
            }
        }

        #[test]
        fn test_stray_outcome_is_ignored() {
            let mut session = filled_minor();
            session.finish_submit(Ok(()));
            assert_eq!(session.phase(), &Phase::Editing);
        }
    }

    mod steps {
        use super::*;

        #[test]
        fn test_advance_and_retreat() {
            let mut session = filled_adult();
            assert_eq!(session.advance(), Ok(Advance::Moved(1)));
            assert_eq!(session.retreat(), Ok(0));
        }

        #[test]
        fn test_no_step_changes_while_submitting() {
            let mut session = filled_minor();
            session.begin_submit().unwrap();
            assert_eq!(session.retreat(), Err(FormError::SubmissionInFlight));
        }
    }
}
