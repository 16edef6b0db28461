//! Free functions building [`Outcome`]s from callables, optionals and
//! predicates. Every failure they produce is logged.

use crate::hook::CallSite;
use crate::outcome::core::Outcome;
use crate::types::Fault;
use core::fmt::Display;

/// Runs `f`, turning a panic into a logged `Failure(Fault)`.
///
/// # Examples
///
/// ```
/// use logerr::outcome::from_callable;
///
/// assert_eq!(from_callable(|| 6 * 7).unwrap_or(0), 42);
///
/// let crashed = from_callable(|| -> i32 { panic!("division by zero") });
/// assert_eq!(crashed.error().map(|f| f.message()), Some("division by zero"));
/// ```
#[track_caller]
pub fn from_callable<T, F>(f: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> T,
{
    match Fault::capture(f) {
        Ok(value) => Outcome::Success(value),
        Err(fault) => Outcome::failure(fault),
    }
}

/// `Some` becomes `Success`, `None` a logged `Failure(error)`.
///
/// # Examples
///
/// ```
/// use logerr::outcome::from_optional;
///
/// let found = from_optional(Some(3), "not found".to_string());
/// assert_eq!(found.unwrap_or(0), 3);
///
/// let missing = from_optional(None::<i32>, "not found".to_string());
/// assert_eq!(missing.error().map(String::as_str), Some("not found"));
/// ```
#[track_caller]
pub fn from_optional<T, E>(value: Option<T>, error: E) -> Outcome<T, E>
where
    E: Display,
{
    match value {
        Some(value) => Outcome::Success(value),
        None => Outcome::failure(error),
    }
}

/// `Success(value)` if `predicate` accepts it, otherwise a logged
/// `Failure(error)`. A panicking predicate yields a failure built from the
/// panic.
///
/// # Examples
///
/// ```
/// use logerr::outcome::from_predicate;
///
/// let adult = from_predicate(30, |age| *age >= 18, "too young".to_string());
/// assert!(adult.is_success());
///
/// let minor = from_predicate(12, |age| *age >= 18, "too young".to_string());
/// assert_eq!(minor.error().map(String::as_str), Some("too young"));
/// ```
#[track_caller]
pub fn from_predicate<T, E, P>(value: T, predicate: P, error: E) -> Outcome<T, E>
where
    E: From<Fault> + Display,
    P: FnOnce(&T) -> bool,
{
    from_predicate_at(value, predicate, error, CallSite::caller())
}

/// [`from_predicate`] with an explicit call site.
pub fn from_predicate_at<T, E, P>(value: T, predicate: P, error: E, site: CallSite) -> Outcome<T, E>
where
    E: From<Fault> + Display,
    P: FnOnce(&T) -> bool,
{
    match Fault::capture(|| predicate(&value)) {
        Ok(true) => Outcome::Success(value),
        Ok(false) => Outcome::failure_at(error, site),
        Err(fault) => Outcome::failure_at(E::from(fault), site),
    }
}

/// Reusable form of [`from_predicate`].
///
/// Failures produced by the returned function carry a clone of `error` and
/// are reported at the location where `predicate_validator` was called.
///
/// # Examples
///
/// ```
/// use logerr::outcome::{predicate_validator, Outcome};
///
/// let positive = predicate_validator(|n: &i32| *n > 0, "must be positive".to_string());
/// assert_eq!(positive(5), Outcome::success(5));
/// assert!(Outcome::<i32, String>::success(-1).chain(&positive).is_failure());
/// ```
#[track_caller]
pub fn predicate_validator<T, E, P>(predicate: P, error: E) -> impl Fn(T) -> Outcome<T, E>
where
    E: Clone + From<Fault> + Display,
    P: Fn(&T) -> bool,
{
    let site = CallSite::caller();
    move |value| from_predicate_at(value, &predicate, error.clone(), site.clone())
}
