//! Bordered button widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// A one-line label in a rounded box; the selected button is highlighted
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    key: Option<&'a str>,
    selected: bool,
    enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            key: None,
            selected: false,
            enabled: true,
        }
    }

    /// Show a shortcut key before the label
    pub fn key(mut self, key: &'a str) -> Self {
        self.key = Some(key);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn label_style(&self) -> Style {
        match (self.selected, self.enabled) {
            (true, _) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::DarkGray),
            (false, true) => Style::default(),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let style = self.label_style();

        let mut spans = Vec::with_capacity(2);
        if let Some(key) = self.key {
            spans.push(Span::styled(
                format!("{key} "),
                style.add_modifier(Modifier::UNDERLINED),
            ));
        }
        spans.push(Span::styled(self.label, style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }
}
