//! Reusable UI components

mod button;
mod dialog;

pub use button::{Button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, wrap_text};
