//! Form domain layer
//!
//! Validation rules, form models, step control, the age-gated branch
//! selector and the per-session submission state machine.

mod branch;
mod field;
mod model;
mod schema;
mod session;
mod steps;
mod validator;

pub use branch::{AgeAnswer, Branch};
pub use field::{FieldValue, FormField};
pub use model::FormError;
pub use schema::{contact_preference_label, CONTACT_FORM_NAME};
pub use session::{FormSession, Phase, SubmissionRequest};
pub use steps::{Advance, StepController};
pub use validator::FieldKind;
