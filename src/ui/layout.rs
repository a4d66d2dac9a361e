//! Layout components (header navigation, status bar)

use super::components::{Button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::BRAND;
use crate::platform::{BACK_SHORTCUT, COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Phase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header navigation: (key, label, view)
const NAV_ITEMS: &[(&str, &str, View)] = &[
    ("h", "Home", View::Home),
    ("i", "Register", View::Interest),
    ("c", "Contact", View::Contact),
    ("f", "FAQ", View::Faq),
];

/// Split the screen into header and content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the brand and the navigation buttons
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(BRAND.len() as u16 + 2)];
    constraints.extend(NAV_ITEMS.iter().map(|_| Constraint::Length(14)));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {BRAND}"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, Rect { y: area.y + 1, height: 1, ..chunks[0] });

    // Form views lock the shortcut keys, so dim the buttons there
    let enabled = !app.state.current_view.is_form_view();
    for (idx, (key, label, view)) in NAV_ITEMS.iter().enumerate() {
        let is_selected = match view {
            View::Interest => matches!(
                app.state.current_view,
                View::Interest | View::ThankYou | View::ThankYouUnder21
            ),
            _ => app.state.current_view == *view,
        };
        let button = Button::new(label)
            .key(key)
            .selected(is_selected)
            .enabled(enabled);
        frame.render_widget(button, chunks[idx + 1]);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Intake mode
    let mode = if app.config.dry_run {
        Span::styled(" ○ dry run ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(mode);

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Home => "Enter:get started  h/i/c/f:nav  q:quit".to_string(),
        View::Faq => "j/k:nav  Enter:expand  Esc:back".to_string(),
        View::ThankYou => format!("{COPY_LINK_SHORTCUT}:copy booking link  Enter:home"),
        View::ThankYouUnder21 => "Enter:home  Esc:back".to_string(),
        View::Interest => match app.state.registration.as_ref().map(|s| s.phase()) {
            Some(Phase::AwaitingBranch) => "←/→:choose  y/n:answer  Enter:confirm".to_string(),
            Some(Phase::Submitted) => "Enter:continue  Esc:back".to_string(),
            _ => format!(
                "Tab:next  Space:toggle  ←/→:choose  Enter:continue  {BACK_SHORTCUT}:prev step  ^R:clear  Esc:leave"
            ),
        },
        View::Contact => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:send  ^R:clear  {COPY_LINK_SHORTCUT}:copy booking link  Esc:leave"
        ),
    }
}
