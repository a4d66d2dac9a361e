//! `application/x-www-form-urlencoded` body for the intake endpoint

use crate::state::{FieldValue, CONTACT_FORM_NAME};

/// Honeypot field the intake service checks for spam
pub const HONEYPOT_FIELD: &str = "bot-field";

/// Wire form of a single value: booleans as yes/no, text as-is
pub fn encode_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(true) => "yes".to_string(),
        FieldValue::Bool(false) => "no".to_string(),
        FieldValue::Text(s) => s.clone(),
    }
}

/// Registration forms carry the honeypot; the contact form posts bare
fn carries_honeypot(target: &str) -> bool {
    target != CONTACT_FORM_NAME
}

/// Ordered key/value pairs: form name, every field, then the honeypot
/// where the form has one
pub fn form_pairs(target: &str, fields: &[(&str, FieldValue)]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(fields.len() + 2);
    pairs.push(("form-name".to_string(), target.to_string()));
    pairs.extend(
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), encode_value(value))),
    );
    if carries_honeypot(target) {
        pairs.push((HONEYPOT_FIELD.to_string(), String::new()));
    }
    pairs
}

/// Serialise the pairs as a urlencoded body
pub fn encode_body(target: &str, fields: &[(&str, FieldValue)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form_pairs(target, fields))
        .finish()
}
