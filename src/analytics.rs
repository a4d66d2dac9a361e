//! Fire-and-forget analytics events
//!
//! Events go out as structured tracing events on the `analytics` target;
//! a subscriber layer can forward them anywhere.

use crate::state::View;

pub fn page_view(view: View) {
    tracing::info!(target: "analytics", event = "page_view", path = view.path());
}

pub fn interaction(view: View, action: &'static str) {
    tracing::info!(target: "analytics", event = "interaction", path = view.path(), action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::EnvFilter;

    struct CountAnalytics(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for CountAnalytics {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() == "analytics" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn events_written(filter: &str) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(CountAnalytics(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            page_view(View::Home);
            interaction(View::Interest, "abandoned");
        });
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_default_filter_keeps_analytics() {
        assert_eq!(events_written(crate::DEFAULT_LOG_FILTER), 2);
    }

    #[test]
    fn test_analytics_can_be_silenced() {
        assert_eq!(events_written("interest_funnel=info,analytics=off"), 0);
    }
}
