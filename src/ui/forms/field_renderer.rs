//! Field rendering utilities for forms

use crate::state::{contact_preference_label, FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, including its error line
pub fn field_height(field: &FormField) -> u16 {
    let body = if field.kind.is_boolean() {
        1
    } else if field.is_multiline {
        6
    } else {
        3
    };
    body + 1
}

/// Draw a form field with its inline error below it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let body_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + body_area.height,
        height: 1,
        ..area
    };

    if field.kind.is_boolean() {
        draw_checkbox(frame, body_area, field, is_active);
    } else {
        draw_input(frame, body_area, field, is_active);
    }

    if let Some(error) = &field.error {
        let line = Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}

fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let box_style = if field.as_bool() {
        style.fg(Color::Green)
    } else {
        style
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", field.display_value()), box_style),
        Span::styled(field.label, style),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn draw_input(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let has_error = field.error.is_some();
    let accent = match (is_active, has_error) {
        (_, true) => Color::Red,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = match field.kind {
        FieldKind::Choice { .. } => {
            let shown = match field.name {
                "contactPreference" => contact_preference_label(field.as_text()).to_string(),
                _ => field.display_value(),
            };
            let arrows = if is_active { "◂ " } else { "" };
            let tail = if is_active { " ▸" } else { "" };
            Paragraph::new(Line::from(vec![
                Span::styled(arrows, style),
                Span::styled(shown, style),
                Span::styled(tail, style),
            ]))
        }
        _ if field.is_multiline => {
            let mut lines: Vec<Line> = field
                .as_text()
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
            Paragraph::new(lines).style(style)
        }
        _ => Paragraph::new(Line::from(vec![
            Span::styled(field.as_text().to_string(), style),
            cursor,
        ])),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a line of help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
