//! Contact page: message form beside the contact details

use super::field_renderer::draw_help_text;
use super::{draw_step_fields, phase_hint};
use crate::app::App;
use crate::content::{CONTACT_EMAIL, CONTACT_INTRO, CONTACT_PHONE, CONTACT_SENT};
use crate::platform::{COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw contact form (left) and details panel (right)
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(36), // Details panel
        ])
        .split(area);

    draw_message_form(frame, main_chunks[0], app);
    draw_details(frame, main_chunks[1], app);
}

fn draw_message_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Send Us a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = app.state.contact.as_ref() else {
        return;
    };

    if *session.phase() == Phase::Submitted {
        let sent = Paragraph::new(Line::from(Span::styled(
            CONTACT_SENT,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true });
        let area = inner.inner(Margin::new(1, 1));
        frame.render_widget(sent, Rect { height: 2, ..area });
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Min(4),    // Fields
            Constraint::Length(1), // Phase hint
            Constraint::Length(1), // Help
        ])
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(CONTACT_INTRO)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    draw_step_fields(frame, chunks[1], session);

    if let Some(hint) = phase_hint(session) {
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::Yellow))),
            chunks[2],
        );
    }

    draw_help_text(
        frame,
        chunks[3],
        &format!("{SUBMIT_SHORTCUT}: send message  Enter: new line in message"),
    );
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get in Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled("Email", label)),
        Line::from(CONTACT_EMAIL),
        Line::from(""),
        Line::from(Span::styled("Phone", label)),
        Line::from(CONTACT_PHONE),
        Line::from(""),
        Line::from(Span::styled("Book a call", label)),
    ];
    lines.extend(booking_lines(app));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Booking link from the scheduling widget, or a quiet fallback
pub fn booking_lines(app: &App) -> Vec<Line<'static>> {
    match app.scheduler.link() {
        Some(link) => vec![
            Line::from(Span::styled(
                link.to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(
                format!("{COPY_LINK_SHORTCUT} to copy"),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Scheduling is unavailable right now.",
            Style::default().fg(Color::DarkGray),
        ))],
    }
}
