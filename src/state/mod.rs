//! Funnel state: views, history, and form sessions

mod app_state;
mod forms;

pub use app_state::*;
pub use forms::*;
