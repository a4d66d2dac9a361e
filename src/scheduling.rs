//! Third-party scheduling widget
//!
//! The booking page is an opaque collaborator: it is mounted when a view
//! that embeds it is entered and unmounted when that view is left. Load
//! failures degrade to a non-functional embed and never surface as errors.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EmbedState {
    Unmounted,
    Mounted(Url),
    Degraded,
}

/// Scheduling embed for the booking page
#[derive(Debug, Clone)]
pub struct SchedulingEmbed {
    booking_url: String,
    state: EmbedState,
}

impl SchedulingEmbed {
    pub fn new(booking_url: impl Into<String>) -> Self {
        Self {
            booking_url: booking_url.into(),
            state: EmbedState::Unmounted,
        }
    }

    pub fn mount(&mut self) {
        if matches!(self.state, EmbedState::Mounted(_)) {
            return;
        }
        self.state = match Url::parse(&self.booking_url) {
            Ok(url) => {
                tracing::debug!(%url, "scheduling widget mounted");
                EmbedState::Mounted(url)
            }
            Err(e) => {
                tracing::warn!(url = %self.booking_url, error = %e, "scheduling widget unavailable");
                EmbedState::Degraded
            }
        };
    }

    pub fn unmount(&mut self) {
        if self.state != EmbedState::Unmounted {
            tracing::debug!("scheduling widget unmounted");
        }
        self.state = EmbedState::Unmounted;
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        matches!(self.state, EmbedState::Mounted(_))
    }

    /// Booking link to show, if the widget loaded
    pub fn link(&self) -> Option<&str> {
        match &self.state {
            EmbedState::Mounted(url) => Some(url.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKING: &str = "https://calendly.com/sbmgservice2024/30min";

    #[test]
    fn test_mount_and_unmount() {
        let mut embed = SchedulingEmbed::new(BOOKING);
        assert!(!embed.is_mounted());
        embed.mount();
        assert!(embed.is_mounted());
        assert_eq!(embed.link(), Some(BOOKING));
        embed.unmount();
        assert!(!embed.is_mounted());
        assert!(embed.link().is_none());
    }

    #[test]
    fn test_bad_url_degrades_silently() {
        let mut embed = SchedulingEmbed::new("not a url");
        embed.mount();
        assert!(!embed.is_mounted());
        assert!(embed.link().is_none());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut embed = SchedulingEmbed::new(BOOKING);
        embed.mount();
        embed.mount();
        assert!(embed.is_mounted());
    }
}
