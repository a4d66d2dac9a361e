//! Centered modal dialogs

mod base;
mod error_dialog;

pub use base::wrap_text;
pub use error_dialog::render_error_dialog;
