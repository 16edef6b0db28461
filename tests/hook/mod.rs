use crate::support::capture;
use logerr::config::{self, ConfigOverrides, Level, LibraryOverrides};
use logerr::hook::{self, CallSite, FieldValue, LogRecord, LogSink, MemorySink, RecordKind};
use logerr::optional::OptionalValue;
use logerr::outcome::Outcome;
use logerr::utils::log_event;
use serial_test::serial;
use std::sync::Arc;

pub mod tracing_sink;

fn apply(overrides: ConfigOverrides) {
    config::reset_config();
    assert!(config::configure(overrides).is_success());
}

#[test]
#[serial]
fn absences_downgrade_error_to_warning() {
    config::reset_config();
    let (_, records) = capture(|| {
        let _ = OptionalValue::<i32>::absent("gone");
        let _ = Outcome::<i32, &str>::failure("broken");
    });

    assert_eq!(records[0].kind, RecordKind::Absence);
    assert_eq!(records[0].level, Level::Warning);
    assert_eq!(records[1].kind, RecordKind::Failure);
    assert_eq!(records[1].level, Level::Error);
}

#[test]
#[serial]
fn configured_level_applies_to_both_kinds() {
    apply(ConfigOverrides::new().level("CRITICAL"));
    let (_, records) = capture(|| {
        let _ = OptionalValue::<i32>::absent("gone");
        let _ = Outcome::<i32, &str>::failure("broken");
    });
    assert!(records.iter().all(|record| record.level == Level::Critical));
    config::reset_config();
}

#[test]
#[serial]
fn disabled_logging_emits_nothing() {
    apply(ConfigOverrides::new().enabled(false));
    let (value, records) = capture(|| OptionalValue::<i32>::absent("quiet"));
    assert_eq!(value.reason(), Some("quiet"));
    assert!(records.is_empty());
    config::reset_config();
}

#[test]
#[serial]
fn default_message_names_function_and_line() {
    config::reset_config();
    let site = CallSite::new("src/billing/invoice.rs", 42, 5).with_function("billing::invoice::total");
    let (_, records) = capture(|| OptionalValue::<i32>::absent_at("no line items", site));

    let record = &records[0];
    assert_eq!(record.message, "OptionalValue absent in total:42 - no line items");
    assert_eq!(record.text("function"), Some("total"));
    assert_eq!(record.text("file"), Some("src/billing/invoice.rs"));
    assert_eq!(record.number("line"), Some(42));
    assert_eq!(record.text("library"), Some("billing"));
    assert_eq!(record.text("reason"), Some("no line items"));
}

#[test]
#[serial]
fn capture_flags_gate_fields_and_message() {
    apply(ConfigOverrides::new().capture_function_name(false).capture_lineno(false));
    let site = CallSite::new("src/billing/invoice.rs", 42, 5).with_function("total");
    let (_, records) = capture(|| Outcome::<(), &str>::failure_at("timeout", site.clone()));
    assert_eq!(records[0].message, "Outcome failure in src/billing/invoice.rs:? - timeout");
    assert_eq!(records[0].field("function"), None);
    assert_eq!(records[0].field("line"), None);

    apply(
        ConfigOverrides::new()
            .capture_function_name(false)
            .capture_filename(false)
            .capture_lineno(false),
    );
    let (_, records) = capture(|| Outcome::<(), &str>::failure_at("timeout", site));
    assert_eq!(records[0].message, "Outcome failure in <?>:? - timeout");
    assert_eq!(records[0].field("file"), None);

    config::reset_config();
}

#[test]
#[serial]
fn format_template_is_interpolated() {
    apply(ConfigOverrides::new().format("[{library}] {kind}|{function}|{line}|{reason}|{missing}"));
    let site = CallSite::new("src/auth/login.rs", 12, 1).with_function("app::auth::login");
    let (_, records) = capture(|| OptionalValue::<i32>::absent_at("no session", site));

    assert_eq!(records[0].message, "[auth] OptionalValue absent|login|12|no session|{missing}");
    config::reset_config();
}

#[test]
#[serial]
fn libraries_resolve_by_module_prefix() {
    apply(
        ConfigOverrides::new()
            .library("app::db", LibraryOverrides::new().enabled(false))
            .library("app", LibraryOverrides::new().level("INFO")),
    );

    let db = CallSite::new("src/db/pool.rs", 1, 1).with_module("app::db::pool");
    let api = CallSite::new("src/api/routes.rs", 1, 1).with_module("app::api");
    let (_, records) = capture(|| {
        let _ = Outcome::<(), &str>::failure_at("pool exhausted", db);
        let _ = Outcome::<(), &str>::failure_at("bad request", api);
    });

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("error"), Some("bad request"));
    assert_eq!(records[0].text("library"), Some("app"));
    assert_eq!(records[0].level, Level::Info);
    config::reset_config();
}

#[test]
#[serial]
fn libraries_fall_back_to_parent_directory() {
    apply(ConfigOverrides::new().library("vendor", LibraryOverrides::new().level("DEBUG")));
    let site = CallSite::new("third_party/vendor/client.rs", 9, 1);
    let (_, records) = capture(|| Outcome::<(), &str>::failure_at("handshake", site));

    assert_eq!(records[0].text("library"), Some("vendor"));
    assert_eq!(records[0].level, Level::Debug);
    config::reset_config();
}

#[test]
#[serial]
fn unresolvable_site_gets_unknown_library() {
    config::reset_config();
    let (_, records) = capture(|| OptionalValue::<i32>::absent_at("x", CallSite::new("main.rs", 1, 1)));
    assert_eq!(records[0].text("library"), Some("unknown"));
}

#[test]
#[serial]
fn locals_are_reported_only_when_enabled() {
    config::reset_config();
    let site = || CallSite::new("src/jobs/run.rs", 3, 1).with_local("job_id", &7).with_local("queue", &"high");

    let (_, records) = capture(|| OptionalValue::<i32>::absent_at("stalled", site()));
    assert_eq!(records[0].field("locals"), None);

    apply(ConfigOverrides::new().capture_locals(true).format("{reason} ({locals})"));
    let (_, records) = capture(|| OptionalValue::<i32>::absent_at("stalled", site()));
    assert_eq!(
        records[0].field("locals"),
        Some(&FieldValue::Locals(vec![("job_id", "7".to_string()), ("queue", "\"high\"".to_string())]))
    );
    assert_eq!(records[0].message, "stalled (job_id=7, queue=\"high\")");
    config::reset_config();
}

#[test]
#[serial]
fn log_event_goes_through_the_same_pipeline() {
    apply(ConfigOverrides::new().format("{kind}: {reason}"));
    let (_, records) = capture(|| log_event(Level::Info, "cache warmed"));

    let record = &records[0];
    assert_eq!(record.kind, RecordKind::Event);
    assert_eq!(record.level, Level::Info);
    assert_eq!(record.message, "cache warmed");
    assert_eq!(record.field("reason"), None);
    assert!(record.text("file").is_some_and(|file| file.ends_with("mod.rs")));

    apply(ConfigOverrides::new().enabled(false));
    let (_, records) = capture(|| log_event(Level::Critical, "ignored"));
    assert!(records.is_empty());
    config::reset_config();
}

#[test]
#[serial]
fn manual_log_functions_emit_records() {
    config::reset_config();
    let site = CallSite::new("src/io/read.rs", 8, 1);
    let (_, records) = capture(|| {
        hook::log_absence("manual absence", &site);
        hook::log_failure(&"manual failure", &site);
    });
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text("reason"), Some("manual absence"));
    assert_eq!(records[1].text("error"), Some("manual failure"));
}

struct PanickingSink;

impl LogSink for PanickingSink {
    fn emit(&self, _record: &LogRecord) {
        panic!("sink is broken");
    }
}

#[test]
#[serial]
fn panicking_sink_never_escapes() {
    config::reset_config();
    let value = hook::with_sink(Arc::new(PanickingSink), || OptionalValue::<i32>::absent("still fine"));
    assert_eq!(value.reason(), Some("still fine"));
}

struct ReentrantSink {
    inner: MemorySink,
}

impl LogSink for ReentrantSink {
    fn emit(&self, record: &LogRecord) {
        self.inner.emit(record);
        let _ = OptionalValue::<i32>::absent("produced while emitting");
    }
}

#[test]
#[serial]
fn records_produced_inside_a_sink_are_dropped() {
    config::reset_config();
    let sink = Arc::new(ReentrantSink { inner: MemorySink::new() });
    let _ = hook::with_sink(sink.clone(), || OptionalValue::<i32>::absent("outer"));

    assert_eq!(sink.inner.messages().len(), 1);
    assert!(sink.inner.messages()[0].ends_with(" - outer"));
}

#[test]
#[serial]
fn scoped_sinks_nest_and_restore() {
    config::reset_config();
    let outer = Arc::new(MemorySink::new());
    let inner = Arc::new(MemorySink::new());

    hook::with_sink(outer.clone(), || {
        let _ = OptionalValue::<i32>::absent("one");
        hook::with_sink(inner.clone(), || {
            let _ = OptionalValue::<i32>::absent("two");
        });
        let _ = OptionalValue::<i32>::absent("three");
    });

    assert_eq!(outer.len(), 2);
    assert_eq!(inner.len(), 1);
}

#[test]
#[serial]
fn global_sink_receives_records_from_other_threads() {
    config::reset_config();
    let sink = Arc::new(MemorySink::new());
    hook::set_sink(sink.clone());

    std::thread::spawn(|| {
        let _ = Outcome::<(), &str>::failure("worker failed");
    })
    .join()
    .unwrap();

    hook::reset_sink();
    assert!(sink.messages().iter().any(|message| message.ends_with(" - worker failed")));
}
