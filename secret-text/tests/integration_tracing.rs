//! Integration tests for the tracing module.
//!
//! A small capturing subscriber records every event so the tests can check
//! that fields carry hints and that `expose` leaves an audit event.

#![cfg(feature = "tracing")]

use std::{
    fmt,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use secret_text::{RedactHint, Secret, TracingRedacted, TracingRedactedExt};
use tracing::{
    Event, Metadata, Subscriber,
    field::{Field, Visit},
    span,
};

#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    level: tracing::Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FieldCollector<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Default)]
struct CapturingSubscriber {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    next_id: AtomicU64,
}

impl Subscriber for CapturingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Vec::new();
        event.record(&mut FieldCollector(&mut fields));
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            fields,
        });
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let subscriber = CapturingSubscriber::default();
    let events = Arc::clone(&subscriber.events);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

mod fields {
    use super::*;

    #[test]
    fn display_field_carries_hint() {
        let password = Secret::with_hints("hunter2", [RedactHint::Redacted]);

        let events = capture(|| tracing::info!(password = %password, "login attempt"));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("password"), Some("[REDACTED]"));
        assert_eq!(events[0].field("message"), Some("login attempt"));
    }

    #[test]
    fn tracing_redacted_field_carries_hint() {
        let token = Secret::with_hints("tok_123", [RedactHint::FiveX]);

        let events = capture(|| tracing::warn!(token = token.tracing_redacted()));

        assert_eq!(events[0].field("token"), Some("XXXXX"));
    }

    #[test]
    fn debug_field_carries_hint() {
        let token = Secret::new("tok_123");

        let events = capture(|| tracing::debug!(?token));

        assert_eq!(events[0].field("token"), Some(r#"Secret("*****")"#));
        assert!(events.iter().all(|e| e.fields.iter().all(|(_, v)| !v.contains("tok_123"))));
    }

    #[test]
    fn marker_covers_references() {
        fn assert_tracing_redacted<T: TracingRedacted + ?Sized>() {}

        assert_tracing_redacted::<Secret>();
        assert_tracing_redacted::<&Secret>();
    }
}

mod audit {
    use super::*;

    #[test]
    fn expose_emits_trace_event_with_hint() {
        let secret = Secret::with_hints("db-password", [RedactHint::custom("<db>")]);

        let events = capture(|| {
            assert_eq!(secret.expose(), "db-password");
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, "secret_text::audit");
        assert_eq!(event.level, tracing::Level::TRACE);
        assert_eq!(event.field("hint"), Some("<db>"));
        assert!(event.fields.iter().all(|(_, v)| !v.contains("db-password")));
    }

    #[test]
    fn into_inner_is_audited() {
        let secret = Secret::new("value");

        let events = capture(|| {
            let _ = secret.into_inner();
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("hint"), Some("*****"));
    }

    #[test]
    fn rendering_is_not_audited() {
        let secret = Secret::new("value");

        let events = capture(|| {
            let _ = secret.to_string();
            let _ = format!("{secret:?}");
            let _ = secret.marshal_text();
        });

        assert!(events.is_empty());
    }
}
