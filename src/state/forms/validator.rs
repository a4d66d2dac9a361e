//! Field validation rules
//!
//! Every field carries a [`FieldKind`] which selects exactly one rule.
//! Validation is a pure function of the kind and the candidate value.

use super::field::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// local@domain.tld, no whitespace, dot-containing domain
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;
const MIN_PHONE_DIGITS: usize = 10;

/// Validation failure carrying the message shown inline under the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// The rule applied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Person name, at least two non-blank characters
    Name { message: &'static str },
    /// Email address
    Email,
    /// Phone number, formatting characters tolerated
    Phone,
    /// Free text, at least ten non-blank characters
    Message,
    /// One of a fixed set of options
    Choice {
        options: &'static [&'static str],
        message: &'static str,
    },
    /// Checkbox that must be ticked
    Confirmation { message: &'static str },
    /// Optional checkbox
    OptIn,
}

impl FieldKind {
    /// Whether values of this kind are booleans
    pub fn is_boolean(&self) -> bool {
        matches!(self, FieldKind::Confirmation { .. } | FieldKind::OptIn)
    }
}

/// Check a candidate value against the rule for its kind
pub fn validate(kind: &FieldKind, value: &FieldValue) -> Result<(), ValidationError> {
    match (kind, value) {
        (FieldKind::Name { message }, FieldValue::Text(s)) => {
            if s.trim().chars().count() >= MIN_NAME_CHARS {
                Ok(())
            } else {
                Err(ValidationError::new(message))
            }
        }
        (FieldKind::Email, FieldValue::Text(s)) => {
            // Checked as submitted; surrounding whitespace is not stripped
            if EMAIL_RE.is_match(s) {
                Ok(())
            } else {
                Err(ValidationError::new("Please enter a valid email address."))
            }
        }
        (FieldKind::Phone, FieldValue::Text(s)) => validate_phone(s),
        (FieldKind::Message, FieldValue::Text(s)) => {
            if s.trim().chars().count() >= MIN_MESSAGE_CHARS {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "Message must be at least 10 characters.",
                ))
            }
        }
        (FieldKind::Choice { options, message }, FieldValue::Text(s)) => {
            if !s.is_empty() && options.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::new(message))
            }
        }
        (FieldKind::Confirmation { message }, FieldValue::Bool(checked)) => {
            if *checked {
                Ok(())
            } else {
                Err(ValidationError::new(message))
            }
        }
        (FieldKind::OptIn, FieldValue::Bool(_)) => Ok(()),
        _ => Err(ValidationError::new("Unexpected value type.")),
    }
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("Please enter a valid phone number.");

    let value = value.trim();
    if value.chars().count() < MIN_PHONE_DIGITS {
        return Err(invalid());
    }
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ');
    if !value.chars().all(allowed) {
        return Err(invalid());
    }
    if value.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldKind = FieldKind::Name {
        message: "Full name must be at least 2 characters.",
    };

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    mod name {
        use super::*;

        #[test]
        fn test_two_characters_is_the_boundary() {
            assert!(validate(&NAME, &text("Jo")).is_ok());
            assert!(validate(&NAME, &text("J")).is_err());
        }

        #[test]
        fn test_whitespace_is_trimmed() {
            assert!(validate(&NAME, &text("  J  ")).is_err());
            assert!(validate(&NAME, &text(" Jo ")).is_ok());
        }

        #[test]
        fn test_error_message_comes_from_kind() {
            let err = validate(&NAME, &text("")).unwrap_err();
            assert_eq!(err.message, "Full name must be at least 2 characters.");
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            assert!(validate(&NAME, &text("Ž")).is_err());
            assert!(validate(&NAME, &text("Žo")).is_ok());
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(validate(&FieldKind::Email, &text("a@b.com")).is_ok());
            assert!(validate(&FieldKind::Email, &text("john.doe+x@mail.example.org")).is_ok());
        }

        #[test]
        fn test_rejects_missing_parts() {
            for bad in ["", "john", "john@", "@example.com", "john@example", "a b@c.com"] {
                assert!(
                    validate(&FieldKind::Email, &text(bad)).is_err(),
                    "{bad} should be rejected"
                );
            }
        }

        #[test]
        fn test_rejects_trailing_dot_domain() {
            assert!(validate(&FieldKind::Email, &text("a@b.")).is_err());
        }

        #[test]
        fn test_rejects_surrounding_whitespace() {
            for bad in ["  x@y.com ", " x@y.com", "x@y.com\n"] {
                assert!(
                    validate(&FieldKind::Email, &text(bad)).is_err(),
                    "{bad:?} should be rejected"
                );
            }
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_ten_digits_pass() {
            assert!(validate(&FieldKind::Phone, &text("1234567890")).is_ok());
        }

        #[test]
        fn test_formatting_characters_are_tolerated() {
            assert!(validate(&FieldKind::Phone, &text("(123) 456-7890")).is_ok());
            assert!(validate(&FieldKind::Phone, &text("+1 555.123.4567")).is_ok());
        }

        #[test]
        fn test_too_short_fails() {
            assert!(validate(&FieldKind::Phone, &text("555-1234")).is_err());
        }

        #[test]
        fn test_letters_fail() {
            assert!(validate(&FieldKind::Phone, &text("555-CALL-NOW")).is_err());
        }

        #[test]
        fn test_formatting_does_not_count_as_digits() {
            assert!(validate(&FieldKind::Phone, &text("(12) 345-678")).is_err());
        }
    }

    mod message {
        use super::*;

        #[test]
        fn test_ten_characters_is_the_boundary() {
            assert!(validate(&FieldKind::Message, &text("0123456789")).is_ok());
            assert!(validate(&FieldKind::Message, &text("012345678")).is_err());
        }

        #[test]
        fn test_padding_does_not_count() {
            assert!(validate(&FieldKind::Message, &text("   hello    ")).is_err());
        }
    }

    mod choice {
        use super::*;

        const PICK: FieldKind = FieldKind::Choice {
            options: &["Texas", "Utah"],
            message: "Please select your state of residence.",
        };

        #[test]
        fn test_member_passes() {
            assert!(validate(&PICK, &text("Texas")).is_ok());
        }

        #[test]
        fn test_empty_fails() {
            let err = validate(&PICK, &text("")).unwrap_err();
            assert_eq!(err.message, "Please select your state of residence.");
        }

        #[test]
        fn test_non_member_fails() {
            assert!(validate(&PICK, &text("Ontario")).is_err());
            assert!(validate(&PICK, &text("texas")).is_err());
        }
    }

    mod booleans {
        use super::*;

        const CONFIRM: FieldKind = FieldKind::Confirmation {
            message: "You must confirm that you are 21 years or older.",
        };

        #[test]
        fn test_confirmation_requires_true() {
            assert!(validate(&CONFIRM, &FieldValue::Bool(true)).is_ok());
            assert!(validate(&CONFIRM, &FieldValue::Bool(false)).is_err());
        }

        #[test]
        fn test_opt_in_accepts_either() {
            assert!(validate(&FieldKind::OptIn, &FieldValue::Bool(true)).is_ok());
            assert!(validate(&FieldKind::OptIn, &FieldValue::Bool(false)).is_ok());
        }

        #[test]
        fn test_is_boolean() {
            assert!(CONFIRM.is_boolean());
            assert!(FieldKind::OptIn.is_boolean());
            assert!(!FieldKind::Email.is_boolean());
        }
    }

    #[test]
    fn test_type_mismatch_is_an_error_not_a_panic() {
        assert!(validate(&FieldKind::Email, &FieldValue::Bool(true)).is_err());
        assert!(validate(&FieldKind::OptIn, &text("yes")).is_err());
    }

    #[test]
    fn test_validation_is_pure() {
        let kinds = [NAME, FieldKind::Email, FieldKind::Phone, FieldKind::Message];
        let values = ["", "Jo", "a@b.com", "1234567890", "long enough message"];
        for kind in &kinds {
            for value in values {
                let first = validate(kind, &text(value));
                let second = validate(kind, &text(value));
                assert_eq!(first, second);
            }
        }
    }
}
