//! Age gate and the two registration variants it selects

use super::model::{FormError, FormModel};
use super::schema::{
    adult_fields, minor_fields, ADULT_FORM_NAME, ADULT_STEPS, MINOR_FORM_NAME,
};
use super::steps::StepController;

/// Answer to "are you 21 or older?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeAnswer {
    #[default]
    Unknown,
    Over,
    Under,
}

/// Which registration form the session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Adult,
    Minor,
}

impl Branch {
    /// Intake form name posted as `form-name`
    pub fn target(&self) -> &'static str {
        match self {
            Branch::Adult => ADULT_FORM_NAME,
            Branch::Minor => MINOR_FORM_NAME,
        }
    }
}

/// A registration form with its own schema and steps.
/// The variants never share state.
#[derive(Debug, Clone)]
pub enum RegistrationForm {
    Adult {
        model: FormModel,
        steps: StepController,
    },
    Minor {
        model: FormModel,
        steps: StepController,
    },
}

impl RegistrationForm {
    pub fn new(branch: Branch) -> Self {
        match branch {
            Branch::Adult => RegistrationForm::Adult {
                model: FormModel::new(adult_fields()),
                steps: StepController::new(ADULT_STEPS),
            },
            Branch::Minor => {
                let model = FormModel::new(minor_fields());
                let steps = StepController::single(&model);
                RegistrationForm::Minor { model, steps }
            }
        }
    }

    pub fn branch(&self) -> Branch {
        match self {
            RegistrationForm::Adult { .. } => Branch::Adult,
            RegistrationForm::Minor { .. } => Branch::Minor,
        }
    }

    pub fn model(&self) -> &FormModel {
        match self {
            RegistrationForm::Adult { model, .. } | RegistrationForm::Minor { model, .. } => model,
        }
    }

    pub fn parts_mut(&mut self) -> (&mut FormModel, &mut StepController) {
        match self {
            RegistrationForm::Adult { model, steps } | RegistrationForm::Minor { model, steps } => {
                (model, steps)
            }
        }
    }

    pub fn steps(&self) -> &StepController {
        match self {
            RegistrationForm::Adult { steps, .. } | RegistrationForm::Minor { steps, .. } => steps,
        }
    }
}

/// Records the age answer once per session
#[derive(Debug, Clone, Default)]
pub struct BranchSelector {
    answer: AgeAnswer,
}

impl BranchSelector {
    #[cfg(test)]
    pub fn answer(&self) -> AgeAnswer {
        self.answer
    }

    pub fn branch(&self) -> Option<Branch> {
        match self.answer {
            AgeAnswer::Unknown => None,
            AgeAnswer::Over => Some(Branch::Adult),
            AgeAnswer::Under => Some(Branch::Minor),
        }
    }

    /// Lock in the answer and build the matching form.
    /// A second choice is rejected and leaves the selector unchanged.
    pub fn choose(&mut self, answer: AgeAnswer) -> Result<RegistrationForm, FormError> {
        if self.answer != AgeAnswer::Unknown {
            return Err(FormError::BranchAlreadySelected);
        }
        self.answer = answer;
        let branch = self.branch().ok_or(FormError::BranchNotSelected)?;
        tracing::info!(form_name = branch.target(), "registration branch selected");
        Ok(RegistrationForm::new(branch))
    }
}
