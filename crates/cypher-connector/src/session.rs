use std::sync::atomic::{AtomicBool, Ordering};

/// State shared across every translation performed against one built schema.
///
/// The session owns the once-per-process style warnings, so restarting the
/// host (or building a fresh session in tests) resets them.
#[derive(Debug, Default)]
pub struct TranslationSession {
    union_key_warning_shown: AtomicBool,
}

impl TranslationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warns the first time a type-prefixed union input key is seen.
    pub(crate) fn warn_union_key_prefix(&self, field_name: &str, type_name: &str) {
        if !self.union_key_warning_shown.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                field = field_name,
                member = type_name,
                "type-prefixed union input keys are deprecated, nest the input under the member type instead",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tracing::{span, Event, Metadata};

    use super::*;

    struct EventCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    #[test]
    fn union_key_warning_fires_once_per_session() {
        let events = Arc::new(AtomicUsize::new(0));
        let session = TranslationSession::new();

        tracing::subscriber::with_default(EventCounter(events.clone()), || {
            session.warn_union_key_prefix("search", "Genre");
            session.warn_union_key_prefix("search", "Person");
        });

        assert_eq!(events.load(Ordering::Relaxed), 1);
        assert!(session.union_key_warning_shown.load(Ordering::Relaxed));
    }

    #[test]
    fn fresh_session_warns_again() {
        let events = Arc::new(AtomicUsize::new(0));

        tracing::subscriber::with_default(EventCounter(events.clone()), || {
            TranslationSession::new().warn_union_key_prefix("search", "Genre");
            TranslationSession::new().warn_union_key_prefix("search", "Genre");
        });

        assert_eq!(events.load(Ordering::Relaxed), 2);
    }
}
