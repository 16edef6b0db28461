//! Small helpers built on the containers and the hook.

use crate::config::Level;
use crate::hook::{self, CallSite};
use crate::optional::core::OptionalValue;
use crate::types::Fault;

pub(crate) const ALL_CALLABLES_FAILED: &str = "All callables failed";

/// Runs `callables` in order and returns the first value produced without
/// panicking.
///
/// Panics along the way are swallowed. If every callable panics, or there are
/// none, the result is a logged `Absent("All callables failed")`.
///
/// # Examples
///
/// ```
/// use logerr::utils::first_present;
///
/// let primary = || -> String { panic!("primary cache down") };
/// let replica = || "from replica".to_string();
///
/// let sources: Vec<Box<dyn FnOnce() -> String>> = vec![Box::new(primary), Box::new(replica)];
/// assert_eq!(first_present(sources).unwrap_or_default(), "from replica");
/// ```
#[track_caller]
pub fn first_present<T, F, I>(callables: I) -> OptionalValue<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> T,
{
    let site = CallSite::caller();
    callables
        .into_iter()
        .find_map(|callable| Fault::capture(callable).ok())
        .map_or_else(
            || OptionalValue::absent_at(ALL_CALLABLES_FAILED, site),
            OptionalValue::Present,
        )
}

/// Emits `message` through the hook at `level`, as if it were an absence or
/// failure built here. `enabled`, per-library overrides and capture flags all
/// apply; the `format` template does not.
///
/// # Examples
///
/// ```
/// use logerr::config::Level;
/// use logerr::utils::log_event;
///
/// log_event(Level::Info, "cache warmed");
/// ```
#[track_caller]
pub fn log_event(level: Level, message: &str) {
    hook::log_event(level, message, &CallSite::caller());
}
