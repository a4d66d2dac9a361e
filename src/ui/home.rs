//! Landing page: hero, how it works, testimonials

use super::components::{Button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::{
    HERO_CTA, HERO_SUBTITLE, HERO_TITLE, HOW_IT_WORKS, HOW_IT_WORKS_INTRO, TESTIMONIALS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Hero
            Constraint::Length(BUTTON_HEIGHT), // CTA
            Constraint::Length(1),
            Constraint::Min(8),    // How it works
            Constraint::Length(6), // Testimonials
        ])
        .margin(1)
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(HERO_SUBTITLE),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    let cta = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(HERO_CTA.len() as u16 + 8),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
    frame.render_widget(Button::new(HERO_CTA).key("⏎").selected(true), cta[1]);

    draw_how_it_works(frame, chunks[3]);
    draw_testimonials(frame, chunks[4]);
}

fn draw_how_it_works(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" How It Works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(HOW_IT_WORKS_INTRO)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            HOW_IT_WORKS
                .iter()
                .map(|_| Constraint::Ratio(1, HOW_IT_WORKS.len() as u32)),
        )
        .split(rows[1]);

    for (column, (number, title, body)) in columns.iter().zip(HOW_IT_WORKS) {
        let text = vec![
            Line::from(vec![
                Span::styled(
                    format!("{number} "),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(*body),
        ];
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }),
            Rect {
                width: column.width.saturating_sub(2),
                ..*column
            },
        );
    }
}

fn draw_testimonials(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" What Our Clients Say ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            TESTIMONIALS
                .iter()
                .map(|_| Constraint::Ratio(1, TESTIMONIALS.len() as u32)),
        )
        .split(inner);

    for (column, (quote, initials)) in columns.iter().zip(TESTIMONIALS) {
        let text = vec![
            Line::from(Span::styled(
                format!("\"{quote}\""),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("- {initials}"),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), *column);
    }
}
