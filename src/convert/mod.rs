//! Conversions between the containers and their std counterparts.
//!
//! Every conversion here is silent: the value being converted either already
//! carries an absence or failure that was reported when it was built, or it
//! comes from std code that never went through the hook. Use the extension
//! traits in [`crate::traits`] when a `None` or `Err` should be reported.
//!
//! # Examples
//!
//! ```
//! use logerr::convert::*;
//! use logerr::optional::OptionalValue;
//! use logerr::outcome::Outcome;
//!
//! let from_std: OptionalValue<i32> = Some(3).into();
//! assert_eq!(from_std, OptionalValue::present(3));
//!
//! let outcome = optional_to_outcome(OptionalValue::<i32>::empty(), "missing");
//! assert_eq!(outcome, Outcome::silent_failure("missing"));
//!
//! let back: Result<i32, &str> = outcome.into();
//! assert_eq!(back, Err("missing"));
//! ```

use crate::optional::core::{OptionalValue, EMPTY_REASON};
use crate::outcome::core::Outcome;
use core::fmt::Display;

/// `Some` becomes `Present`; `None` becomes `Absent("Empty option")`.
impl<T> From<Option<T>> for OptionalValue<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent(EMPTY_REASON.to_string()),
        }
    }
}

/// Drops the reason of an absence.
impl<T> From<OptionalValue<T>> for Option<T> {
    #[inline]
    fn from(value: OptionalValue<T>) -> Self {
        value.into_option()
    }
}

/// Keeps the reason of an absence as the error.
impl<T> From<OptionalValue<T>> for Result<T, String> {
    #[inline]
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Present(value) => Ok(value),
            OptionalValue::Absent(reason) => Err(reason),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts an `OptionalValue` to an `Outcome`, using `error` for an absence.
///
/// # Arguments
///
/// * `value` - The optional value to convert
/// * `error` - The error reported in place of an absence
///
/// # Returns
///
/// * `Success(v)` if the value is present
/// * `Failure(error)` otherwise, without logging
///
/// # Examples
///
/// ```
/// use logerr::convert::optional_to_outcome;
/// use logerr::optional::OptionalValue;
/// use logerr::outcome::Outcome;
///
/// let present = optional_to_outcome(OptionalValue::present(1), "none");
/// assert_eq!(present, Outcome::success(1));
/// ```
#[inline]
pub fn optional_to_outcome<T, E>(value: OptionalValue<T>, error: E) -> Outcome<T, E> {
    value.ok_or(error)
}

/// Converts an `Outcome` to an `OptionalValue` whose absence reason is the
/// error's text.
///
/// # Examples
///
/// ```
/// use logerr::convert::outcome_to_optional;
/// use logerr::outcome::Outcome;
///
/// let failed = Outcome::<i32, &str>::silent_failure("disk full");
/// assert_eq!(outcome_to_optional(failed).reason(), Some("disk full"));
/// ```
#[inline]
pub fn outcome_to_optional<T, E>(outcome: Outcome<T, E>) -> OptionalValue<T>
where
    E: Display,
{
    outcome.ok()
}

/// Removes one level of nesting; the outer absence wins.
///
/// # Examples
///
/// ```
/// use logerr::convert::flatten_optional;
/// use logerr::optional::OptionalValue;
///
/// let nested = OptionalValue::present(OptionalValue::<i32>::silent("inner"));
/// assert_eq!(flatten_optional(nested).reason(), Some("inner"));
/// ```
#[inline]
pub fn flatten_optional<T>(value: OptionalValue<OptionalValue<T>>) -> OptionalValue<T> {
    match value {
        OptionalValue::Present(inner) => inner,
        OptionalValue::Absent(reason) => OptionalValue::Absent(reason),
    }
}

/// Removes one level of nesting; the outer failure wins.
#[inline]
pub fn flatten_outcome<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    match outcome {
        Outcome::Success(inner) => inner,
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}
