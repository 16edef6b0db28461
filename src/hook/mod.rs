//! The logging hook fired when an absence or failure is created loudly.
//!
//! For each loud construction the hook:
//!
//! 1. reads the active [`LoggingConfig`] and stops if logging is disabled,
//! 2. resolves the library name from the [`CallSite`] (module path prefixes,
//!    then the file's parent directory) and applies that library's overrides,
//! 3. picks the level, reporting absences at `WARNING` where `ERROR` would apply,
//! 4. renders the message from `format` or the default
//!    `"<kind> in <function>:<line> - <reason-or-error>"`,
//! 5. emits a [`LogRecord`] to the current [`LogSink`].
//!
//! Template placeholders: `{kind}`, `{function}`, `{file}`, `{line}`,
//! `{library}` and `{locals}`, plus `{reason}` for absences and `{error}` for
//! failures. Any other placeholder is left as written.
//!
//! The hook never panics. A panicking sink or `Display` impl is swallowed, and
//! records produced while a record is being emitted on the same thread are
//! dropped.
use crate::config::{get_config, LibraryConfig, Level, LoggingConfig};
use core::cell::Cell;
use core::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub mod call_site;
mod format;
pub mod sink;

pub use call_site::CallSite;
pub use sink::{
    reset_sink, set_sink, with_sink, FieldValue, Fields, LogRecord, LogSink, MemorySink,
    RecordKind, TracingSink,
};

thread_local! {
    static EMITTING: Cell<bool> = const { Cell::new(false) };
}

/// Reports an absence as if an `Absent` had been built loudly at `site`.
pub fn log_absence(reason: &str, site: &CallSite) {
    dispatch(RecordKind::Absence, &reason, site, None);
}

/// Reports a failure as if a `Failure` had been built loudly at `site`.
pub fn log_failure(error: &dyn Display, site: &CallSite) {
    dispatch(RecordKind::Failure, error, site, None);
}

pub(crate) fn log_event(level: Level, message: &str, site: &CallSite) {
    dispatch(RecordKind::Event, &message, site, Some(level));
}

fn dispatch(kind: RecordKind, payload: &dyn Display, site: &CallSite, level: Option<Level>) {
    let config = get_config();
    if !config.enabled {
        return;
    }

    let Ok(false) = EMITTING.try_with(|flag| flag.replace(true)) else {
        return;
    };

    struct Reset;

    impl Drop for Reset {
        fn drop(&mut self) {
            let _ = EMITTING.try_with(|flag| flag.set(false));
        }
    }

    let _reset = Reset;
    let _ = catch_unwind(AssertUnwindSafe(|| emit(&config, kind, payload, site, level)));
}

fn emit(
    config: &LoggingConfig,
    kind: RecordKind,
    payload: &dyn Display,
    site: &CallSite,
    level: Option<Level>,
) {
    let (library, overrides) = resolve_library(config, site);
    if overrides.and_then(|lib| lib.enabled) == Some(false) {
        return;
    }

    let level = level.unwrap_or_else(|| {
        let level = overrides.and_then(|lib| lib.level).unwrap_or(config.level);
        match (kind, level) {
            (RecordKind::Absence, Level::Error) => Level::Warning,
            _ => level,
        }
    });

    let payload = payload.to_string();
    let function = site.function().filter(|_| config.capture_function_name);
    let file = Some(site.file()).filter(|_| config.capture_filename);
    let line = Some(site.line()).filter(|_| config.capture_lineno);
    let locals = Some(site.locals()).filter(|locals| config.capture_locals && !locals.is_empty());

    let mut fields = Fields::new();
    if let Some(function) = function {
        fields.push(("function", FieldValue::Str(function.to_string())));
    }
    if let Some(file) = file {
        fields.push(("file", FieldValue::Str(file.to_string())));
    }
    if let Some(line) = line {
        fields.push(("line", FieldValue::U32(line)));
    }
    if let Some(locals) = locals {
        fields.push(("locals", FieldValue::Locals(locals.to_vec())));
    }
    fields.push(("library", FieldValue::Str(library.to_string())));
    match kind {
        RecordKind::Absence => fields.push(("reason", FieldValue::Str(payload.clone()))),
        RecordKind::Failure => fields.push(("error", FieldValue::Str(payload.clone()))),
        RecordKind::Event => {},
    }

    let message = match (kind, config.format.as_deref()) {
        (RecordKind::Event, _) => payload,
        (_, Some(template)) => format::render(template, |name| match name {
            "kind" => Some(kind.to_string()),
            "reason" if kind == RecordKind::Absence => Some(payload.clone()),
            "error" if kind == RecordKind::Failure => Some(payload.clone()),
            "function" => Some(function.unwrap_or("<?>").to_string()),
            "file" => Some(file.unwrap_or("<?>").to_string()),
            "line" => Some(line.map_or_else(|| "?".to_string(), |line| line.to_string())),
            "library" => Some(library.to_string()),
            "locals" => Some(
                locals
                    .map(|locals| FieldValue::Locals(locals.to_vec()).to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }),
        (_, None) => {
            let location = function.or(file).unwrap_or("<?>");
            match line {
                Some(line) => format!("{kind} in {location}:{line} - {payload}"),
                None => format!("{kind} in {location}:? - {payload}"),
            }
        },
    };

    sink::current_sink().emit(&LogRecord { level, kind, message, fields });
}

/// Finds the most specific `libraries` entry for `site`, falling back to the
/// site's default label with no overrides.
fn resolve_library<'c>(
    config: &'c LoggingConfig,
    site: &CallSite,
) -> (&'static str, Option<&'c LibraryConfig>) {
    site.library_candidates()
        .into_iter()
        .find_map(|candidate| config.library(candidate).map(|lib| (candidate, Some(lib))))
        .unwrap_or_else(|| (site.default_library(), None))
}
