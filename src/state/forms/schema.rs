//! Field schemas for the registration and contact forms

use super::field::FormField;
use super::validator::FieldKind;

pub const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

pub const CONTACT_PREFERENCES: &[&str] = &["any", "phone", "email", "text"];

/// Human label for a contact preference option
pub fn contact_preference_label(value: &str) -> &'static str {
    match value {
        "any" => "Any method (recommended)",
        "phone" => "Phone call",
        "email" => "Email",
        "text" => "Text message",
        _ => "",
    }
}

/// Intake form names, sent as `form-name`
pub const ADULT_FORM_NAME: &str = "interest-form-over-21";
pub const MINOR_FORM_NAME: &str = "interest-form-under-21";
pub const CONTACT_FORM_NAME: &str = "contact-form";

const STATE: FieldKind = FieldKind::Choice {
    options: US_STATES,
    message: "Please select your state of residence.",
};

const CONTACT_PREFERENCE: FieldKind = FieldKind::Choice {
    options: CONTACT_PREFERENCES,
    message: "Please choose a contact method.",
};

const AGE_CONFIRMATION: FieldKind = FieldKind::Confirmation {
    message: "You must confirm that you are 21 years or older.",
};

/// 21+ registration: basic info followed by preferences and consent
pub fn adult_fields() -> Vec<FormField> {
    vec![
        FormField::text(
            "fullName",
            "Full Name",
            FieldKind::Name {
                message: "Full name must be at least 2 characters.",
            },
        ),
        FormField::choice("state", "State of Residence", STATE, ""),
        FormField::text("email", "Email Address", FieldKind::Email),
        FormField::text("phone", "Phone Number", FieldKind::Phone),
        FormField::choice(
            "contactPreference",
            "Preferred Contact Method",
            CONTACT_PREFERENCE,
            "any",
        ),
        FormField::checkbox(
            "emailOptIn",
            "I agree to receive email communications about offers and updates.",
            FieldKind::OptIn,
            true,
        ),
        FormField::checkbox(
            "smsOptIn",
            "I agree to receive SMS text messages about offers and updates.",
            FieldKind::OptIn,
            false,
        ),
        FormField::checkbox(
            "ageConfirmation",
            "I confirm that I am 21 years or older and agree to the terms and conditions.",
            AGE_CONFIRMATION,
            false,
        ),
    ]
}

/// Step groups of the 21+ form, by step name
pub const ADULT_STEPS: &[(&str, &[&str])] = &[
    ("basic-info", &["fullName", "state", "email", "phone"]),
    (
        "preferences-and-consent",
        &["contactPreference", "emailOptIn", "smsOptIn", "ageConfirmation"],
    ),
];

/// Under-21 registration: contact details only
pub fn minor_fields() -> Vec<FormField> {
    vec![
        FormField::text("email", "Email Address", FieldKind::Email),
        FormField::text("phone", "Phone Number", FieldKind::Phone),
        FormField::checkbox(
            "emailOptIn",
            "I agree to receive email communications about offers and updates.",
            FieldKind::OptIn,
            true,
        ),
        FormField::checkbox(
            "smsOptIn",
            "I agree to receive SMS text messages about offers and updates.",
            FieldKind::OptIn,
            false,
        ),
    ]
}

/// Contact page message form
pub fn contact_fields() -> Vec<FormField> {
    vec![
        FormField::text(
            "name",
            "Name",
            FieldKind::Name {
                message: "Name must be at least 2 characters.",
            },
        ),
        FormField::text("email", "Email", FieldKind::Email),
        FormField::multiline("message", "Message", FieldKind::Message),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(fields: &[FormField]) -> Vec<&'static str> {
        fields.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_fifty_states() {
        assert_eq!(US_STATES.len(), 50);
        let unique: HashSet<_> = US_STATES.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_adult_steps_cover_every_field_once() {
        let mut grouped: Vec<&str> = ADULT_STEPS.iter().flat_map(|(_, f)| f.iter().copied()).collect();
        let mut all = names(&adult_fields());
        grouped.sort_unstable();
        all.sort_unstable();
        assert_eq!(grouped, all);
    }

    #[test]
    fn test_adult_defaults() {
        let fields = adult_fields();
        let get = |n: &str| fields.iter().find(|f| f.name == n).unwrap();
        assert_eq!(get("contactPreference").as_text(), "any");
        assert!(get("emailOptIn").as_bool());
        assert!(!get("smsOptIn").as_bool());
        assert!(!get("ageConfirmation").as_bool());
        assert_eq!(get("state").as_text(), "");
    }

    #[test]
    fn test_minor_schema_has_no_adult_only_fields() {
        let minor = names(&minor_fields());
        for adult_only in ["fullName", "state", "contactPreference", "ageConfirmation"] {
            assert!(!minor.contains(&adult_only));
        }
    }

    #[test]
    fn test_contact_message_is_multiline() {
        let fields = contact_fields();
        assert!(fields[2].is_multiline);
        assert!(!fields[0].is_multiline);
    }

    #[test]
    fn test_contact_preference_labels() {
        for option in CONTACT_PREFERENCES {
            assert!(!contact_preference_label(option).is_empty());
        }
        assert_eq!(contact_preference_label("fax"), "");
    }
}
