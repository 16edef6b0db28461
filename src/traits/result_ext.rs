//! Extension trait lifting `Result` into a reported [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use logerr::traits::ResultExt;
//!
//! fn read_threshold(raw: &str) -> u32 {
//!     raw.parse::<u32>()
//!         .into_outcome()
//!         .map_err(|e| e.to_string())
//!         .unwrap_or(10)
//! }
//!
//! assert_eq!(read_threshold("25"), 25);
//! assert_eq!(read_threshold("lots"), 10);
//! ```

use crate::hook::CallSite;
use crate::outcome::core::Outcome;
use core::fmt::Display;

/// Converts a `Result` into a loud [`Outcome`].
///
/// The failure is reported once, at the location of the `into_outcome` call,
/// so later combinators on the returned outcome stay silent.
pub trait ResultExt<T, E> {
    /// `Ok(v)` becomes `Success(v)`; `Err(e)` becomes `Failure(e)` and is
    /// reported at the caller's location.
    #[track_caller]
    fn into_outcome(self) -> Outcome<T, E>;

    /// Maps the error first, then reports the mapped error.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::traits::ResultExt;
    ///
    /// let opened = std::fs::read_to_string("/definitely/not/here.toml")
    ///     .into_outcome_with(|e| format!("loading settings: {e}"));
    /// assert!(opened.error().is_some_and(|e| e.starts_with("loading settings")));
    /// ```
    #[track_caller]
    fn into_outcome_with<G, F>(self, op: F) -> Outcome<T, G>
    where
        G: Display,
        F: FnOnce(E) -> G;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure_at(error, CallSite::caller()),
        }
    }

    #[inline]
    #[track_caller]
    fn into_outcome_with<G, F>(self, op: F) -> Outcome<T, G>
    where
        G: Display,
        F: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure_at(op(error), CallSite::caller()),
        }
    }
}
