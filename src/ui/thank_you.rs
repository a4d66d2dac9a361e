//! Thank-you pages for both registration branches

use super::forms::booking_lines;
use crate::app::App;
use crate::content::{THANK_YOU, THANK_YOU_UNDER_21};
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Thank You ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = match app.state.current_view {
        View::ThankYouUnder21 => THANK_YOU_UNDER_21,
        _ => THANK_YOU,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Thank you for registering!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(body),
    ];
    if app.state.current_view.has_scheduler() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Want to talk sooner? Book a call:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(booking_lines(app));
    }

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(lines.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(inner);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered[1]);
}
