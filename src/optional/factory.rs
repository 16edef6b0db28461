//! Free functions building [`OptionalValue`]s from nullable values, fallible
//! callables and predicates. Every absence they produce is logged.

use crate::hook::CallSite;
use crate::optional::core::OptionalValue;
use crate::types::Fault;
use core::fmt::Debug;

pub(crate) const VALUE_WAS_NONE: &str = "Value was None";
pub(crate) const CALLABLE_RETURNED_NONE: &str = "Callable returned None";

/// `Some` becomes `Present`, `None` a logged absence.
///
/// # Examples
///
/// ```
/// use logerr::optional::from_nullable;
/// use std::collections::HashMap;
///
/// let settings = HashMap::from([("database_url", "postgres://localhost/db")]);
/// let url = from_nullable(settings.get("database_url").copied())
///     .unwrap_or("sqlite://default.db");
/// assert_eq!(url, "postgres://localhost/db");
///
/// assert_eq!(from_nullable(None::<&str>).unwrap_or("default"), "default");
/// ```
#[track_caller]
pub fn from_nullable<T>(value: Option<T>) -> OptionalValue<T> {
    match value {
        Some(value) => OptionalValue::Present(value),
        None => OptionalValue::absent(VALUE_WAS_NONE),
    }
}

/// Runs `f`; `None` and panics both become logged absences.
///
/// # Examples
///
/// ```
/// use logerr::optional::from_callable;
///
/// assert_eq!(from_callable(|| "42".parse::<i32>().ok()).unwrap_or(0), 42);
/// assert!(from_callable(|| None::<i32>).is_absent());
/// assert!(from_callable(|| -> Option<i32> { panic!("boom") }).is_absent());
/// ```
#[track_caller]
pub fn from_callable<T, F>(f: F) -> OptionalValue<T>
where
    F: FnOnce() -> Option<T>,
{
    match Fault::capture(f) {
        Ok(Some(value)) => OptionalValue::Present(value),
        Ok(None) => OptionalValue::absent(CALLABLE_RETURNED_NONE),
        Err(fault) => OptionalValue::from_fault(fault),
    }
}

/// `Present(value)` if `predicate` accepts it, otherwise a logged absence.
///
/// The reason is `message` when given, or `"Value <value> failed predicate"`.
/// A panicking predicate yields an absence describing the panic.
///
/// # Examples
///
/// ```
/// use logerr::optional::from_predicate;
///
/// assert_eq!(from_predicate(42, |x| *x > 30, None).unwrap_or(0), 42);
///
/// let small = from_predicate(5, |x| *x > 30, Some("Number too small"));
/// assert_eq!(small.reason(), Some("Number too small"));
/// ```
#[track_caller]
pub fn from_predicate<T, P>(value: T, predicate: P, message: Option<&str>) -> OptionalValue<T>
where
    T: Debug,
    P: FnOnce(&T) -> bool,
{
    from_predicate_at(value, predicate, message, CallSite::caller())
}

/// [`from_predicate`] with an explicit call site.
pub fn from_predicate_at<T, P>(
    value: T,
    predicate: P,
    message: Option<&str>,
    site: CallSite,
) -> OptionalValue<T>
where
    T: Debug,
    P: FnOnce(&T) -> bool,
{
    match Fault::capture(|| predicate(&value)) {
        Ok(true) => OptionalValue::Present(value),
        Ok(false) => {
            let reason = match message {
                Some(message) => message.to_string(),
                None => format!("Value {value:?} failed predicate"),
            };
            OptionalValue::absent_at(reason, site)
        },
        Err(fault) => OptionalValue::absent_at(fault.to_string(), site),
    }
}

/// Reusable form of [`from_predicate`].
///
/// Absences produced by the returned function are reported at the location
/// where `predicate_filter` was called.
///
/// # Examples
///
/// ```
/// use logerr::optional::{predicate_filter, OptionalValue};
///
/// let is_email = predicate_filter(|s: &String| s.contains('@'), Some("Invalid email"));
/// let user = OptionalValue::present("user@example.com".to_string());
/// assert!(user.chain(&is_email).is_present());
/// assert!(is_email("nobody".to_string()).is_absent());
/// ```
#[track_caller]
pub fn predicate_filter<T, P>(predicate: P, message: Option<&str>) -> impl Fn(T) -> OptionalValue<T>
where
    T: Debug,
    P: Fn(&T) -> bool,
{
    let site = CallSite::caller();
    let message = message.map(str::to_string);
    move |value| from_predicate_at(value, &predicate, message.as_deref(), site.clone())
}
