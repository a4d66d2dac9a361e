//! In-memory record of one form session's values and errors

use super::field::{FieldValue, FormField};
use thiserror::Error;

/// Errors raised by form operations (not validation failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{0}` does not accept that value type")]
    TypeMismatch(String),
    #[error("a branch has already been chosen for this session")]
    BranchAlreadySelected,
    #[error("no branch has been chosen yet")]
    BranchNotSelected,
    #[error("the form is not on its final step")]
    NotOnFinalStep,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("the form has already been submitted")]
    AlreadySubmitted,
    #[error("the form has invalid fields")]
    Invalid(Vec<(&'static str, String)>),
}

/// Ordered field → message pairs
pub type FieldErrors = Vec<(&'static str, String)>;

/// Field values and error state for one schema
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FormField>,
    active_field_index: usize,
}

impl FormModel {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FormField, FormError> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).map(|f| &f.value)
    }

    /// Set a value and clear that field's error. Does not revalidate.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let field = self.field_mut(name)?;
        if !field.value.same_type(&value) {
            return Err(FormError::TypeMismatch(name.to_string()));
        }
        field.set(value);
        Ok(())
    }

    /// Convenience for text fields
    pub fn set_text(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        self.set(name, FieldValue::Text(value.to_string()))
    }

    /// Convenience for checkbox fields
    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<(), FormError> {
        self.set(name, FieldValue::Bool(value))
    }

    /// Ordered (name, value) pairs for every field
    pub fn snapshot(&self) -> Vec<(&'static str, FieldValue)> {
        self.fields.iter().map(|f| (f.name, f.value.clone())).collect()
    }

    /// Whether the field differs from its default
    pub fn is_dirty(&self, name: &str) -> bool {
        self.field(name).is_some_and(FormField::is_dirty)
    }

    /// Whether the field was edited since the last reset
    pub fn is_touched(&self, name: &str) -> bool {
        self.field(name).is_some_and(FormField::is_touched)
    }

    #[cfg(test)]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    /// Errors currently recorded on fields, in schema order
    pub fn errors(&self) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|f| f.error.clone().map(|e| (f.name, e)))
            .collect()
    }

    /// Validate a single field, recording the outcome
    pub fn validate_field(&mut self, name: &str) -> Result<Option<String>, FormError> {
        let field = self.field_mut(name)?;
        Ok(field.validate().err().map(|e| e.message))
    }

    /// Validate the named fields, returning the failures in schema order
    pub fn validate_fields(&mut self, names: &[&str]) -> FieldErrors {
        self.fields
            .iter_mut()
            .filter(|f| names.contains(&f.name))
            .filter_map(|f| f.validate().err().map(|e| (f.name, e.message)))
            .collect()
    }

    /// Validate every field in the schema
    pub fn validate_all(&mut self) -> FieldErrors {
        self.fields
            .iter_mut()
            .filter_map(|f| f.validate().err().map(|e| (f.name, e.message)))
            .collect()
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(FormField::reset);
        self.active_field_index = 0;
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    /// Whether any field was edited
    pub fn has_changes(&self) -> bool {
        self.fields.iter().any(FormField::is_dirty)
    }

    /// Index of a field by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
