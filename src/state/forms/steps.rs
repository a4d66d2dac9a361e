//! Step controller for multi-step forms

use super::model::{FieldErrors, FormModel};

/// A named group of fields shown together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub fields: Vec<&'static str>,
}

/// Outcome of an advance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step
    Moved(usize),
    /// The last step validated; the form may be submitted
    Complete,
    /// The current step has invalid fields; the step did not change
    Blocked(FieldErrors),
}

/// Tracks the active step and gates forward movement on validation
#[derive(Debug, Clone)]
pub struct StepController {
    steps: Vec<Step>,
    current: usize,
}

impl StepController {
    /// Controller over explicit step groups
    pub fn new(steps: &[(&'static str, &[&'static str])]) -> Self {
        let steps = steps
            .iter()
            .map(|&(name, fields)| Step {
                name,
                fields: fields.to_vec(),
            })
            .collect();
        Self { steps, current: 0 }
    }

    /// A single implicit step containing every field of the model
    pub fn single(model: &FormModel) -> Self {
        Self {
            steps: vec![Step {
                name: "form",
                fields: model.fields().iter().map(|f| f.name).collect(),
            }],
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Validate the current group and move forward if it passes
    pub fn advance(&mut self, model: &mut FormModel) -> Advance {
        let errors = model.validate_fields(&self.steps[self.current].fields);
        if !errors.is_empty() {
            tracing::debug!(
                step = self.current_step().name,
                invalid = errors.len(),
                "step advance blocked"
            );
            return Advance::Blocked(errors);
        }
        if self.is_last() {
            return Advance::Complete;
        }
        self.current += 1;
        Advance::Moved(self.current)
    }

    /// Move back one step without validating
    pub fn retreat(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Whether the field belongs to the current step
    pub fn shows(&self, field: &str) -> bool {
        self.current_step().fields.contains(&field)
    }
}
