//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `interest_form`: Age gate and the stepped registration form
//! - `contact_form`: Contact page with message form and booking details

mod contact_form;
mod field_renderer;
mod interest_form;

pub use contact_form::{booking_lines, draw_contact};
pub use interest_form::draw_interest;

use crate::state::{FormSession, Phase};
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Lay out the fields of the session's current step, top to bottom
fn draw_step_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    let (Some(model), Some(steps)) = (session.model(), session.steps()) else {
        return;
    };
    let editable = session.is_editable();
    let visible: Vec<(usize, _)> = model
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| steps.shows(f.name))
        .collect();

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|(_, f)| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, (index, field)) in visible.into_iter().enumerate() {
        let is_active = editable && model.active_field() == index;
        draw_field(frame, chunks[slot], field, is_active);
    }
}

/// Status line under a form, driven by the session phase
fn phase_hint(session: &FormSession) -> Option<&'static str> {
    match session.phase() {
        Phase::Submitting => Some("Submitting..."),
        Phase::Failed(_) => Some("The last attempt failed. Your answers are kept; submit to retry."),
        _ => None,
    }
}
