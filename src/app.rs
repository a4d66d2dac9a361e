//! Application state and core logic

use crate::analytics;
use crate::config::FunnelConfig;
use crate::platform;
use crate::gateway::{GatewayError, SubmissionGateway, SubmissionReceipt};
use crate::scheduling::SchedulingEmbed;
use crate::state::{
    Advance, AgeAnswer, AgeGateChoice, AppState, FieldKind, FormError, FormSession,
    PendingRedirect, Phase, SubmissionRequest, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Result of a submission task, tagged with the session that started it
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub session_id: Uuid,
    pub result: Result<SubmissionReceipt, GatewayError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: FunnelConfig,
    /// Scheduling widget for the contact and thank-you views
    pub scheduler: SchedulingEmbed,
    gateway: Arc<dyn SubmissionGateway>,
    outcomes_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FunnelConfig, gateway: Arc<dyn SubmissionGateway>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let scheduler = SchedulingEmbed::new(config.booking_url.clone());
        analytics::page_view(View::Home);
        Self {
            state: AppState::default(),
            config,
            scheduler,
            gateway,
            outcomes_tx,
            outcomes_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Apply finished submissions and fire due redirects
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.apply_outcome(outcome);
        }
        if let Some(redirect) = self.state.pending_redirect {
            if redirect.is_due(now) {
                self.state.pending_redirect = None;
                self.navigate(redirect.to);
            }
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        let from = self.state.current_view;
        self.leave(from);
        self.state.view_history.push(from);
        self.enter(view);
    }

    /// Go back to the previous non-form view
    pub fn go_back(&mut self) {
        let mut target = View::Home;
        while let Some(view) = self.state.view_history.pop() {
            if !view.is_form_view() {
                target = view;
                break;
            }
        }
        let from = self.state.current_view;
        self.leave(from);
        self.enter(target);
    }

    fn leave(&mut self, view: View) {
        if view.has_scheduler() {
            self.scheduler.unmount();
        }
        let session = match view {
            View::Interest => self.state.registration.take(),
            View::Contact => self.state.contact.take(),
            _ => None,
        };
        if let Some(session) = session {
            match session.phase() {
                Phase::Submitting => {
                    tracing::warn!(session_id = %session.id(), "left form with a submission in flight")
                }
                Phase::Editing | Phase::Failed(_)
                    if session.model().is_some_and(|m| m.has_changes()) =>
                {
                    analytics::interaction(view, "abandoned")
                }
                _ => {}
            }
        }
        self.state.pending_redirect = None;
        self.state.status_message = None;
    }

    fn enter(&mut self, view: View) {
        self.state.current_view = view;
        match view {
            View::Interest => {
                self.state.registration = Some(FormSession::registration());
                self.state.age_gate_choice = AgeGateChoice::default();
            }
            View::Contact => self.state.contact = Some(FormSession::contact()),
            _ => {}
        }
        if view.has_scheduler() {
            self.scheduler.mount();
        }
        analytics::page_view(view);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if platform::is_copy_link(&key) {
            if self.state.current_view.has_scheduler() {
                self.copy_booking_link();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Interest => self.handle_interest_key(key),
            View::Contact => self.handle_form_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Home | View::ThankYou | View::ThankYouUnder21 => self.handle_page_key(key),
        }
        Ok(())
    }

    /// Navigation shortcuts shared by the non-form views
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let target = match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                return true;
            }
            KeyCode::Char('h') => View::Home,
            KeyCode::Char('i') => View::Interest,
            KeyCode::Char('c') => View::Contact,
            KeyCode::Char('f') => View::Faq,
            _ => return false,
        };
        self.navigate(target);
        true
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match (self.state.current_view, key.code) {
            (View::Home, KeyCode::Enter) => {
                analytics::interaction(View::Home, "cta");
                self.navigate(View::Interest);
            }
            (View::ThankYou | View::ThankYouUnder21, KeyCode::Enter) => self.navigate(View::Home),
            (_, KeyCode::Esc) => self.go_back(),
            _ => {}
        }
    }

    fn handle_faq_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.faq.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.faq.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.faq.toggle();
                analytics::interaction(View::Faq, "toggle");
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_interest_key(&mut self, key: KeyEvent) {
        let phase = self.state.registration.as_ref().map(|s| s.phase().clone());
        match phase {
            Some(Phase::AwaitingBranch) => self.handle_age_gate_key(key),
            Some(Phase::Submitted) => match key.code {
                KeyCode::Enter => self.finish_redirect_now(),
                KeyCode::Esc => self.go_back(),
                _ => {}
            },
            Some(_) => self.handle_form_key(key),
            None => {
                if key.code == KeyCode::Esc {
                    self.go_back();
                }
            }
        }
    }

    fn handle_age_gate_key(&mut self, key: KeyEvent) {
        let answer = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.age_gate_choice = self.state.age_gate_choice.toggle();
                return;
            }
            KeyCode::Char('y') => AgeAnswer::Over,
            KeyCode::Char('n') => AgeAnswer::Under,
            KeyCode::Enter => match self.state.age_gate_choice {
                AgeGateChoice::Over => AgeAnswer::Over,
                AgeGateChoice::Under => AgeAnswer::Under,
            },
            KeyCode::Esc => {
                self.go_back();
                return;
            }
            _ => return,
        };
        self.choose_age(answer);
    }

    /// Answer the age gate for the registration session
    pub fn choose_age(&mut self, answer: AgeAnswer) {
        let Some(session) = self.state.registration.as_mut() else {
            return;
        };
        match session.choose_branch(answer) {
            Ok(branch) => analytics::interaction(View::Interest, branch.target()),
            Err(e) => tracing::debug!(error = %e, "age answer ignored"),
        }
    }

    /// Key handling shared by the registration and contact forms
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('s') if ctrl => self.advance_or_submit(),
            KeyCode::Char('b') if ctrl => self.retreat(),
            KeyCode::Char('r') if ctrl => self.clear_form(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => {
                if self.active_field_kind().is_some_and(|(_, multiline)| multiline) {
                    self.edit_active_field(|f| f.push_char('\n'));
                } else {
                    self.advance_or_submit();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                self.edit_active_field(|f| f.cycle_choice(forward));
            }
            KeyCode::Backspace => self.edit_active_field(|f| f.pop_char()),
            KeyCode::Char(c) if !ctrl => match self.active_field_kind() {
                Some((kind, _)) if kind.is_boolean() => {
                    if c == ' ' {
                        self.edit_active_field(|f| f.toggle());
                    }
                }
                Some((FieldKind::Choice { .. }, _)) => {
                    self.edit_active_field(|f| f.jump_to_choice(c))
                }
                Some(_) => self.edit_active_field(|f| f.push_char(c)),
                None => {}
            },
            _ => {}
        }
    }

    fn active_field_kind(&self) -> Option<(FieldKind, bool)> {
        let model = self.state.active_session()?.model()?;
        let field = model.fields().get(model.active_field())?;
        Some((field.kind, field.is_multiline))
    }

    fn edit_active_field(&mut self, edit: impl FnOnce(&mut crate::state::FormField)) {
        if let Some(field) = self
            .state
            .active_session_mut()
            .and_then(FormSession::model_mut)
            .and_then(|m| m.active_field_mut())
        {
            edit(field);
        }
    }

    /// Move focus among the fields of the current step, wrapping around
    fn move_focus(&mut self, forward: bool) {
        let Some(session) = self.state.active_session_mut() else {
            return;
        };
        let visible = visible_fields(session);
        let Some(model) = session.model_mut() else {
            return;
        };
        if visible.is_empty() {
            return;
        }
        // Check the field being left once it has been edited
        if let Some(name) = model.fields().get(model.active_field()).map(|f| f.name) {
            if model.is_touched(name) {
                if let Ok(Some(error)) = model.validate_field(name) {
                    tracing::debug!(field = name, %error, "field invalid on focus change");
                }
            }
        }
        let position = visible.iter().position(|i| *i == model.active_field());
        let next = match (position, forward) {
            (None, _) => visible[0],
            (Some(p), true) => visible[(p + 1) % visible.len()],
            (Some(0), false) => visible[visible.len() - 1],
            (Some(p), false) => visible[p - 1],
        };
        model.set_active_field(next);
    }

    /// Focus the first field of the current step, or a named field
    fn focus(&mut self, field: Option<&str>) {
        let Some(session) = self.state.active_session_mut() else {
            return;
        };
        let visible = visible_fields(session);
        let Some(model) = session.model_mut() else {
            return;
        };
        let target = field
            .and_then(|name| model.index_of(name))
            .or_else(|| visible.first().copied());
        if let Some(index) = target {
            model.set_active_field(index);
        }
    }

    /// Enter / Ctrl+S: move to the next step, or submit from the last one
    pub fn advance_or_submit(&mut self) {
        let Some(session) = self.state.active_session_mut() else {
            return;
        };
        let on_last = session.steps().is_some_and(|s| s.is_last());
        if on_last {
            self.submit_active();
            return;
        }
        match session.advance() {
            Ok(Advance::Moved(step)) => {
                tracing::debug!(step, "advanced to next step");
                self.state.status_message = None;
                self.focus(None);
            }
            Ok(Advance::Blocked(errors)) => {
                let first = errors.first().map(|(name, _)| *name);
                self.set_status(fix_fields_message(errors.len()));
                self.focus(first);
            }
            Ok(Advance::Complete) => self.submit_active(),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Ctrl+B: back one step, no validation
    pub fn retreat(&mut self) {
        let Some(session) = self.state.active_session_mut() else {
            return;
        };
        if session.retreat().is_ok() {
            self.state.status_message = None;
            self.focus(None);
        }
    }

    /// Ctrl+R: restore every field of the active form to its default
    pub fn clear_form(&mut self) {
        if let Some(model) = self
            .state
            .active_session_mut()
            .and_then(FormSession::model_mut)
        {
            model.reset();
            self.set_status("Form cleared.");
            self.focus(None);
        }
    }

    /// Validate and hand the active form to the gateway
    pub fn submit_active(&mut self) {
        let Some(session) = self.state.active_session_mut() else {
            return;
        };
        match session.begin_submit() {
            Ok(request) => {
                self.set_status("Submitting...");
                self.spawn_submission(request);
            }
            Err(FormError::Invalid(errors)) => {
                let first = errors.first().map(|(name, _)| *name);
                self.set_status(fix_fields_message(errors.len()));
                self.focus(first);
            }
            Err(FormError::SubmissionInFlight) => {
                self.set_status("Submission in progress, please wait.")
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn spawn_submission(&self, request: SubmissionRequest) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let result = gateway.submit(request.target, &request.fields).await;
            // The receiver only goes away on shutdown
            let _ = tx.send(SubmissionOutcome {
                session_id: request.session_id,
                result,
            });
        });
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let session = [
            self.state.registration.as_mut(),
            self.state.contact.as_mut(),
        ]
        .into_iter()
        .flatten()
        .find(|s| s.id() == outcome.session_id);

        let Some(session) = session else {
            tracing::debug!(session_id = %outcome.session_id, "dropping outcome for abandoned form");
            return;
        };

        match outcome.result {
            Ok(receipt) => {
                tracing::debug!(form_name = %receipt.target, status = receipt.status, "applying submission outcome");
                session.finish_submit(Ok(()));
                let branch = session.branch();
                self.set_status(format!(
                    "Submitted at {}",
                    receipt.submitted_at.format("%H:%M:%S UTC")
                ));
                if let Some(branch) = branch {
                    self.state.pending_redirect = Some(PendingRedirect::after(
                        View::thank_you_for(branch),
                        self.config.redirect_delay(),
                    ));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission failed");
                session.finish_submit(Err(e.to_string()));
                self.state.status_message = None;
                self.push_error(e.user_message());
            }
        }
    }

    /// Skip the confirmation delay after a successful registration
    fn finish_redirect_now(&mut self) {
        if let Some(redirect) = self.state.pending_redirect.take() {
            self.navigate(redirect.to);
        }
    }

    fn copy_booking_link(&mut self) {
        let Some(link) = self.scheduler.link().map(str::to_string) else {
            self.set_status("Scheduling is unavailable right now.");
            return;
        };
        match copy_to_clipboard(&link) {
            Ok(()) => {
                analytics::interaction(self.state.current_view, "copy_booking_link");
                self.set_status("Booking link copied!");
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                self.set_status(format!("Book a call at {link}"));
            }
        }
    }

    /// Wait for one submission to finish and apply it
    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(outcome) = self.outcomes_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }
}

/// Indices of the fields shown on the session's current step
fn visible_fields(session: &FormSession) -> Vec<usize> {
    let (Some(model), Some(steps)) = (session.model(), session.steps()) else {
        return Vec::new();
    };
    model
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| steps.shows(f.name))
        .map(|(i, _)| i)
        .collect()
}

fn fix_fields_message(count: usize) -> String {
    if count == 1 {
        "Please fix the highlighted field.".to_string()
    } else {
        format!("Please fix the {count} highlighted fields.")
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
