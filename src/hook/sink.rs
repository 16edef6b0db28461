//! Destinations for log records produced by the hook.
//!
//! The hook hands every record to the current [`LogSink`]. Unless replaced,
//! that is [`TracingSink`], which forwards to the `tracing` ecosystem under the
//! `logerr` target. A sink can be replaced process-wide with [`set_sink`] or
//! for the current thread only with [`with_sink`].
//!
//! # Examples
//!
//! ```
//! use logerr::hook::{with_sink, MemorySink};
//! use logerr::optional::OptionalValue;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let _ = with_sink(sink.clone(), || OptionalValue::<u32>::silent("expected"));
//! assert!(sink.is_empty());
//! ```
use crate::config::Level;
use core::cell::RefCell;
use core::fmt::{self, Display};
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// What produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A loud `OptionalValue::Absent` construction.
    Absence,
    /// A loud `Outcome::Failure` construction.
    Failure,
    /// A manual [`log_event`](crate::utils::log_event) call.
    Event,
}

impl RecordKind {
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            RecordKind::Absence => "OptionalValue absent",
            RecordKind::Failure => "Outcome failure",
            RecordKind::Event => "event",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value of one structured field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    U32(u32),
    Locals(Vec<(&'static str, String)>),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(text) => f.write_str(text),
            FieldValue::U32(number) => write!(f, "{number}"),
            FieldValue::Locals(locals) => {
                for (i, (name, value)) in locals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                Ok(())
            },
        }
    }
}

/// Structured fields attached to a record, in insertion order.
pub type Fields = SmallVec<[(&'static str, FieldValue); 6]>;

/// One emission from the hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub kind: RecordKind,
    pub message: String,
    pub fields: Fields,
}

impl LogRecord {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }

    /// The field as text, if it is a string field.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.field(name)? {
            FieldValue::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<u32> {
        match self.field(name)? {
            FieldValue::U32(number) => Some(*number),
            _ => None,
        }
    }
}

/// Receives records. Implementations should not block for long; they run
/// synchronously inside the constructor that produced the record.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

/// Forwards records to `tracing` under the `logerr` target.
///
/// `CRITICAL` has no `tracing` counterpart and is emitted at `ERROR` with a
/// `critical = true` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

macro_rules! forward {
    ($level:expr, $record:expr, $locals:expr, $critical:expr) => {
        tracing::event!(
            target: "logerr",
            $level,
            kind = $record.kind.label(),
            library = $record.text("library"),
            function = $record.text("function"),
            file = $record.text("file"),
            line = $record.number("line"),
            reason = $record.text("reason"),
            error = $record.text("error"),
            locals = $locals,
            critical = $critical,
            "{}",
            $record.message
        )
    };
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let locals = record.field("locals").map(ToString::to_string);
        let locals = locals.as_deref();
        match record.level {
            Level::Debug => forward!(tracing::Level::DEBUG, record, locals, false),
            Level::Info => forward!(tracing::Level::INFO, record, locals, false),
            Level::Warning => forward!(tracing::Level::WARN, record, locals, false),
            Level::Error => forward!(tracing::Level::ERROR, record, locals, false),
            Level::Critical => forward!(tracing::Level::ERROR, record, locals, true),
        }
    }
}

/// Keeps every record in memory. Meant for tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

static GLOBAL_SINK: Lazy<RwLock<Arc<dyn LogSink>>> =
    Lazy::new(|| RwLock::new(Arc::new(TracingSink)));

thread_local! {
    static SCOPED_SINK: RefCell<Option<Arc<dyn LogSink>>> = const { RefCell::new(None) };
}

/// Replaces the process-wide sink.
pub fn set_sink(sink: Arc<dyn LogSink>) {
    *GLOBAL_SINK.write().unwrap_or_else(PoisonError::into_inner) = sink;
}

/// Restores [`TracingSink`] as the process-wide sink.
pub fn reset_sink() {
    set_sink(Arc::new(TracingSink));
}

/// Runs `f` with `sink` receiving every record produced on this thread.
///
/// The previous sink is restored when `f` returns or unwinds. Scopes nest.
pub fn with_sink<T>(sink: Arc<dyn LogSink>, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<Arc<dyn LogSink>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            let _ = SCOPED_SINK.try_with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = SCOPED_SINK
        .try_with(|slot| slot.borrow_mut().replace(sink))
        .ok()
        .flatten();
    let _restore = Restore(previous);
    f()
}

/// The sink records go to from this thread right now.
pub(crate) fn current_sink() -> Arc<dyn LogSink> {
    SCOPED_SINK
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| Arc::clone(&GLOBAL_SINK.read().unwrap_or_else(PoisonError::into_inner)))
}
