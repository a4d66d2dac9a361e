//! FAQ accordion

use super::components::wrap_text;
use crate::app::App;
use crate::content::FAQ;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let faq = &app.state.faq;
    let block = Block::default()
        .title(" Frequently Asked Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let answer_width = block.inner(area).width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = FAQ
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_open = faq.is_open(idx);
            let marker = if is_open { "▾" } else { "▸" };
            let style = if idx == faq.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut lines = vec![Line::from(Span::styled(
                format!("{marker} {}", item.question),
                style,
            ))];
            if is_open {
                let answer = Style::default().fg(Color::Gray);
                lines.extend(
                    wrap_text(item.answer, answer_width.max(20))
                        .into_iter()
                        .map(|l| Line::from(Span::styled(format!("    {l}"), answer))),
                );
                lines.push(Line::from(""));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    // The list state scrolls the selected question into view
    let mut state = ListState::default().with_selected(Some(faq.selected));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
