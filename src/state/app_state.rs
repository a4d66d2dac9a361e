//! Application state definitions

use super::forms::{Branch, FormSession};
use crate::content::FAQ;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero landing page
    #[default]
    Home,
    /// Age gate and registration form
    Interest,
    Contact,
    Faq,
    ThankYou,
    ThankYouUnder21,
}

impl View {
    /// Views that own a form session
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Interest | View::Contact)
    }

    /// Views that embed the scheduling widget
    pub fn has_scheduler(&self) -> bool {
        matches!(self, View::Contact | View::ThankYou)
    }

    /// Route-style name used for page-view events
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Interest => "/interest",
            View::Contact => "/contact",
            View::Faq => "/faq",
            View::ThankYou => "/thank-you",
            View::ThankYouUnder21 => "/thank-you-under-21",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Interest => "Register Your Interest",
            View::Contact => "Contact Us",
            View::Faq => "Frequently Asked Questions",
            View::ThankYou => "Thank You",
            View::ThankYouUnder21 => "Thank You",
        }
    }

    /// Thank-you destination for a registration branch
    pub fn thank_you_for(branch: Branch) -> Self {
        match branch {
            Branch::Adult => View::ThankYou,
            Branch::Minor => View::ThankYouUnder21,
        }
    }
}

/// FAQ accordion: one item open at a time
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    pub selected: usize,
    pub open: Option<usize>,
}

impl FaqState {
    pub fn select_next(&mut self) {
        if self.selected + 1 < FAQ.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the selected item, closing any other; close it if already open
    pub fn toggle(&mut self) {
        self.open = if self.open == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Navigation scheduled for later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRedirect {
    pub to: View,
    pub at: Instant,
}

impl PendingRedirect {
    pub fn after(to: View, delay: Duration) -> Self {
        Self {
            to,
            at: Instant::now() + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.at
    }
}

/// Which button on the age gate is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeGateChoice {
    #[default]
    Over,
    Under,
}

impl AgeGateChoice {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Over => Self::Under,
            Self::Under => Self::Over,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub view_history: Vec<View>,
    /// Interest registration session, present while on the Interest view
    pub registration: Option<FormSession>,
    /// Contact form session, present while on the Contact view
    pub contact: Option<FormSession>,
    pub age_gate_choice: AgeGateChoice,
    pub faq: FaqState,
    pub pending_redirect: Option<PendingRedirect>,
    /// Error queue shown as a modal dialog
    pub errors: Vec<String>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// The session bound to the current view, if any
    pub fn active_session(&self) -> Option<&FormSession> {
        match self.current_view {
            View::Interest => self.registration.as_ref(),
            View::Contact => self.contact.as_ref(),
            _ => None,
        }
    }

    pub fn active_session_mut(&mut self) -> Option<&mut FormSession> {
        match self.current_view {
            View::Interest => self.registration.as_mut(),
            View::Contact => self.contact.as_mut(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod faq {
        use super::*;

        #[test]
        fn test_toggle_opens_and_closes() {
            let mut faq = FaqState::default();
            faq.toggle();
            assert!(faq.is_open(0));
            faq.toggle();
            assert!(!faq.is_open(0));
        }

        #[test]
        fn test_only_one_item_open() {
            let mut faq = FaqState::default();
            faq.toggle();
            faq.select_next();
            faq.toggle();
            assert!(!faq.is_open(0));
            assert!(faq.is_open(1));
        }

        #[test]
        fn test_selection_is_clamped() {
            let mut faq = FaqState::default();
            faq.select_prev();
            assert_eq!(faq.selected, 0);
            for _ in 0..100 {
                faq.select_next();
            }
            assert_eq!(faq.selected, FAQ.len() - 1);
        }
    }

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_form_views() {
            assert!(View::Interest.is_form_view());
            assert!(View::Contact.is_form_view());
            assert!(!View::Faq.is_form_view());
        }

        #[test]
        fn test_thank_you_per_branch() {
            assert_eq!(View::thank_you_for(Branch::Adult), View::ThankYou);
            assert_eq!(View::thank_you_for(Branch::Minor), View::ThankYouUnder21);
        }

        #[test]
        fn test_scheduler_views() {
            assert!(View::Contact.has_scheduler());
            assert!(View::ThankYou.has_scheduler());
            assert!(!View::ThankYouUnder21.has_scheduler());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_queue_is_fifo() {
            let mut state = AppState::default();
            state.push_error("first".into());
            state.push_error("second".into());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error();
        }
    }

    #[test]
    fn test_redirect_is_due_after_delay() {
        let redirect = PendingRedirect::after(View::ThankYou, Duration::from_millis(50));
        assert!(!redirect.is_due(Instant::now()));
        assert!(redirect.is_due(Instant::now() + Duration::from_millis(60)));
    }

    #[test]
    fn test_active_session_follows_view() {
        let mut state = AppState {
            registration: Some(FormSession::registration()),
            contact: Some(FormSession::contact()),
            ..Default::default()
        };
        assert!(state.active_session().is_none());
        state.current_view = View::Contact;
        assert_eq!(
            state.active_session().map(FormSession::id),
            state.contact.as_ref().map(FormSession::id)
        );
    }

    #[test]
    fn test_age_gate_choice_toggles() {
        assert_eq!(AgeGateChoice::Over.toggle(), AgeGateChoice::Under);
        assert_eq!(AgeGateChoice::Under.toggle(), AgeGateChoice::Over);
    }
}
