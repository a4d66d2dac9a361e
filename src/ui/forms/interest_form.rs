//! Interest registration: age gate, then the branch form in steps

use super::field_renderer::draw_help_text;
use super::{draw_step_fields, phase_hint};
use crate::app::App;
use crate::content::{AGE_GATE_PROMPT, MINOR_INTRO, REGISTRATION_SENT};
use crate::platform::{BACK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AgeGateChoice, Branch, FormSession, Phase, StepController};
use crate::ui::components::{Button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the interest view for the current registration session
pub fn draw_interest(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Register Your Interest ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = app.state.registration.as_ref() else {
        return;
    };
    match session.phase() {
        Phase::AwaitingBranch => draw_age_gate(frame, inner, app.state.age_gate_choice),
        Phase::Submitted => draw_confirmation(frame, inner),
        _ => draw_form(frame, inner, session),
    }
}

fn draw_age_gate(frame: &mut Frame, area: Rect, choice: AgeGateChoice) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),             // Prompt
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new(Line::from(Span::styled(
        AGE_GATE_PROMPT,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[1]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(26),
            Constraint::Length(2),
            Constraint::Length(26),
            Constraint::Min(0),
        ])
        .split(chunks[2]);
    let over = Button::new("Yes, I'm 21 or older")
        .key("y")
        .selected(choice == AgeGateChoice::Over);
    let under = Button::new("No, I'm under 21")
        .key("n")
        .selected(choice == AgeGateChoice::Under);
    frame.render_widget(over, buttons[1]);
    frame.render_widget(under, buttons[3]);
}

fn draw_form(frame: &mut Frame, area: Rect, session: &FormSession) {
    let intro = match session.branch() {
        Some(Branch::Minor) => MINOR_INTRO,
        _ => "",
    };
    let intro_height = if intro.is_empty() { 0 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro_height), // Branch intro
            Constraint::Length(2),            // Step indicator
            Constraint::Min(4),               // Fields
            Constraint::Length(1),            // Phase hint
            Constraint::Length(1),            // Help
        ])
        .margin(1)
        .split(area);

    if !intro.is_empty() {
        let paragraph = Paragraph::new(intro)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[0]);
    }

    if let Some(steps) = session.steps() {
        if steps.total() > 1 {
            frame.render_widget(Paragraph::new(step_indicator(steps)), chunks[1]);
        }
    }

    draw_step_fields(frame, chunks[2], session);

    let flagged = session.model().map_or(0, |m| m.errors().len());
    if let Some(hint) = phase_hint(session) {
        let color = match session.phase() {
            Phase::Failed(_) => Color::Red,
            _ => Color::Yellow,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(color))),
            chunks[3],
        );
    } else if flagged > 0 {
        let text = format!("⚠ {flagged} field(s) need attention");
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Red))),
            chunks[3],
        );
    }

    let last = session.steps().map_or(true, StepController::is_last);
    let help = if last {
        format!("Enter/{SUBMIT_SHORTCUT}: submit  {BACK_SHORTCUT}: previous step")
    } else {
        "Enter: next step".to_string()
    };
    draw_help_text(frame, chunks[4], &help);
}

/// "● ○  Step 1 of 2: Basic Info"
fn step_indicator(steps: &StepController) -> Line<'static> {
    let mut spans: Vec<Span> = (0..steps.total())
        .map(|i| {
            if i == steps.current() {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    spans.push(Span::raw(format!(
        " Step {} of {}: {}",
        steps.current() + 1,
        steps.total(),
        step_title(steps.current_step().name)
    )));
    Line::from(spans)
}

fn step_title(name: &str) -> &str {
    match name {
        "basic-info" => "Basic Info",
        "preferences-and-consent" => "Preferences & Consent",
        other => other,
    }
}

fn draw_confirmation(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "✓ Thank you!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(REGISTRATION_SENT),
        Line::from(""),
        Line::from(Span::styled(
            "Redirecting... (Enter to continue now)",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7), Constraint::Min(0)])
        .split(area);
    frame.render_widget(paragraph, centered[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_titles() {
        assert_eq!(step_title("basic-info"), "Basic Info");
        assert_eq!(step_title("preferences-and-consent"), "Preferences & Consent");
        assert_eq!(step_title("form"), "form");
    }
}
