//! UI module for rendering the TUI

mod components;
mod faq;
mod forms;
mod home;
mod layout;
mod thank_you;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Interest => forms::draw_interest(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
        View::Faq => faq::draw(frame, main_area, app),
        View::ThankYou | View::ThankYouUnder21 => thank_you::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog overlay (modal, drawn last)
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.errors.len());
    }
}
