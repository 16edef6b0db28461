use logerr::config;
use logerr::hook::{with_sink, TracingSink};
use logerr::optional::OptionalValue;
use logerr::outcome::Outcome;
use serial_test::serial;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Debug, Default, Clone)]
struct Captured {
    target: String,
    level: Option<Level>,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

impl Visit for Captured {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }
}

#[derive(Clone, Default)]
struct Collector {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Subscriber for Collector {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut captured = Captured {
            target: event.metadata().target().to_string(),
            level: Some(*event.metadata().level()),
            fields: Vec::new(),
        };
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn collect(f: impl FnOnce()) -> Vec<Captured> {
    let collector = Collector::default();
    let events = collector.events.clone();
    tracing::subscriber::with_default(collector, || with_sink(Arc::new(TracingSink), f));
    let events = events.lock().unwrap().clone();
    events
}

#[test]
#[serial]
fn tracing_sink_forwards_fields_under_logerr_target() {
    config::reset_config();
    let events = collect(|| {
        let _ = OptionalValue::<i32>::absent("cache miss");
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.target, "logerr");
    assert_eq!(event.level, Some(Level::WARN));
    assert_eq!(event.field("kind"), Some("OptionalValue absent"));
    assert_eq!(event.field("reason"), Some("cache miss"));
    assert!(event.field("message").is_some_and(|message| message.ends_with(" - cache miss")));
}

#[test]
#[serial]
fn critical_maps_to_error_with_flag() {
    config::reset_config();
    assert!(config::configure(config::ConfigOverrides::new().level("CRITICAL")).is_success());

    let events = collect(|| {
        let _ = Outcome::<(), &str>::failure("meltdown");
    });
    config::reset_config();

    assert_eq!(events[0].level, Some(Level::ERROR));
    assert_eq!(events[0].field("critical"), Some("true"));
    assert_eq!(events[0].field("error"), Some("meltdown"));
}
