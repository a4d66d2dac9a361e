//! Form field value objects

use super::validator::{validate, FieldKind, ValidationError};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Whether the value has the same variant as `other`
    pub fn same_type(&self, other: &FieldValue) -> bool {
        matches!(
            (self, other),
            (FieldValue::Text(_), FieldValue::Text(_)) | (FieldValue::Bool(_), FieldValue::Bool(_))
        )
    }
}

/// Represents a single form field with its configuration, value and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub default: FieldValue,
    pub error: Option<String>,
    pub is_multiline: bool,
    /// Edited at least once since creation or the last reset
    touched: bool,
}

impl FormField {
    /// Create a new text field with an empty default
    pub fn text(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self::with_default(name, label, kind, FieldValue::Text(String::new()))
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, kind)
        }
    }

    /// Create a new choice field preset to `initial` (may be empty)
    pub fn choice(name: &'static str, label: &'static str, kind: FieldKind, initial: &str) -> Self {
        Self::with_default(name, label, kind, FieldValue::Text(initial.to_string()))
    }

    /// Create a new checkbox field
    pub fn checkbox(name: &'static str, label: &'static str, kind: FieldKind, initial: bool) -> Self {
        Self::with_default(name, label, kind, FieldValue::Bool(initial))
    }

    fn with_default(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        default: FieldValue,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            value: default.clone(),
            default,
            error: None,
            is_multiline: false,
            touched: false,
        }
    }

    /// Get the text value (returns empty string for boolean fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    /// Get the boolean value (returns false for text fields)
    pub fn as_bool(&self) -> bool {
        match &self.value {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Replace the value, clearing any recorded error
    pub fn set(&mut self, value: FieldValue) {
        self.value = value;
        self.error = None;
        self.touched = true;
    }

    /// Whether the value differs from the schema default
    pub fn is_dirty(&self) -> bool {
        self.value != self.default
    }

    /// Whether the field was edited, even if it now holds its default again
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Restore the default value and clear the error
    pub fn reset(&mut self) {
        self.set(self.default.clone());
        self.touched = false;
    }

    /// Run the field's rule and record the outcome
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = validate(&self.kind, &self.value);
        self.error = result.as_ref().err().map(|e| e.message.clone());
        result
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
            self.error = None;
            self.touched = true;
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
            self.error = None;
            self.touched = true;
        }
    }

    /// Flip a checkbox
    pub fn toggle(&mut self) {
        if let FieldValue::Bool(b) = self.value {
            self.set(FieldValue::Bool(!b));
        }
    }

    /// Step through the options of a choice field, wrapping around.
    /// An empty or unknown value moves to the first (or last) option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice { options, .. } = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.as_text());
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.set(FieldValue::Text(options[next].to_string()));
    }

    /// Jump to the next option starting with `c` (case-insensitive)
    pub fn jump_to_choice(&mut self, c: char) {
        let FieldKind::Choice { options, .. } = self.kind else {
            return;
        };
        let c = c.to_ascii_lowercase();
        let matches: Vec<&str> = options
            .iter()
            .copied()
            .filter(|o| o.chars().next().map(|f| f.to_ascii_lowercase()) == Some(c))
            .collect();
        if matches.is_empty() {
            return;
        }
        let next = match matches.iter().position(|o| *o == self.as_text()) {
            Some(i) => matches[(i + 1) % matches.len()],
            None => matches[0],
        };
        self.set(FieldValue::Text(next.to_string()));
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.value, self.kind) {
            (FieldValue::Bool(true), _) => "[x]".to_string(),
            (FieldValue::Bool(false), _) => "[ ]".to_string(),
            (FieldValue::Text(s), FieldKind::Choice { .. }) if s.is_empty() => {
                "Select...".to_string()
            }
            (FieldValue::Text(s), _) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICK: FieldKind = FieldKind::Choice {
        options: &["any", "phone", "email"],
        message: "Please choose a contact method.",
    };

    #[test]
    fn test_text_field_defaults_to_empty() {
        let field = FormField::text("email", "Email Address", FieldKind::Email);
        assert_eq!(field.as_text(), "");
        assert!(!field.is_dirty());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_set_clears_error() {
        let mut field = FormField::text("email", "Email Address", FieldKind::Email);
        assert!(field.validate().is_err());
        assert!(field.error.is_some());
        field.set(FieldValue::Text("still bad".into()));
        assert!(field.error.is_none());
    }

    #[test]
    fn test_touched_survives_returning_to_default() {
        let mut field = FormField::text("email", "Email Address", FieldKind::Email);
        assert!(!field.is_touched());
        field.push_char('a');
        field.pop_char();
        assert!(!field.is_dirty());
        assert!(field.is_touched());
        field.reset();
        assert!(!field.is_touched());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut field = FormField::text("email", "Email Address", FieldKind::Email);
        let _ = field.validate();
        field.push_char('a');
        assert!(field.error.is_none());
        let _ = field.validate();
        field.pop_char();
        assert!(field.error.is_none());
    }

    #[test]
    fn test_toggle_flips_checkbox() {
        let mut field = FormField::checkbox("smsOptIn", "SMS", FieldKind::OptIn, false);
        field.toggle();
        assert!(field.as_bool());
        assert!(field.is_dirty());
        field.toggle();
        assert!(!field.as_bool());
    }

    #[test]
    fn test_push_char_ignored_on_checkbox() {
        let mut field = FormField::checkbox("smsOptIn", "SMS", FieldKind::OptIn, false);
        field.push_char('x');
        assert_eq!(field.value, FieldValue::Bool(false));
    }

    #[test]
    fn test_cycle_choice_wraps() {
        let mut field = FormField::choice("contactPreference", "Preferred", PICK, "any");
        field.cycle_choice(false);
        assert_eq!(field.as_text(), "email");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "any");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "phone");
    }

    #[test]
    fn test_cycle_choice_from_empty() {
        let mut field = FormField::choice("contactPreference", "Preferred", PICK, "");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "any");

        let mut field = FormField::choice("contactPreference", "Preferred", PICK, "");
        field.cycle_choice(false);
        assert_eq!(field.as_text(), "email");
    }

    #[test]
    fn test_jump_to_choice_cycles_matches() {
        const STATES: FieldKind = FieldKind::Choice {
            options: &["Texas", "Tennessee", "Utah"],
            message: "Please select your state of residence.",
        };
        let mut field = FormField::choice("state", "State", STATES, "");
        field.jump_to_choice('t');
        assert_eq!(field.as_text(), "Texas");
        field.jump_to_choice('T');
        assert_eq!(field.as_text(), "Tennessee");
        field.jump_to_choice('t');
        assert_eq!(field.as_text(), "Texas");
        field.jump_to_choice('z');
        assert_eq!(field.as_text(), "Texas");
    }

    #[test]
    fn test_reset_restores_default() {
        let mut field = FormField::checkbox("emailOptIn", "Email", FieldKind::OptIn, true);
        field.toggle();
        field.reset();
        assert!(field.as_bool());
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_display_value() {
        let checkbox = FormField::checkbox("emailOptIn", "Email", FieldKind::OptIn, true);
        assert_eq!(checkbox.display_value(), "[x]");
        let choice = FormField::choice("contactPreference", "Preferred", PICK, "");
        assert_eq!(choice.display_value(), "Select...");
    }

    #[test]
    fn test_same_type() {
        assert!(FieldValue::Bool(true).same_type(&FieldValue::Bool(false)));
        assert!(!FieldValue::Bool(true).same_type(&FieldValue::Text(String::new())));
    }
}
