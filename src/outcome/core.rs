use crate::hook::{self, CallSite};
use crate::optional::OptionalValue;
use crate::types::{Fault, InvalidUnwrap};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const WAS_SUCCESS: &str = "Outcome was a success";

/// Success with a `T` or failure with an `E`.
///
/// Building a failure with [`failure`](Self::failure), a factory, or a
/// combinator whose callback panicked is *loud*: the logging hook fires once
/// with the caller's location. Writing `Outcome::Failure(..)` directly or
/// calling [`silent_failure`](Self::silent_failure) is *silent*, and a
/// failure that merely propagates through `map`, `chain` or `map_err` is
/// never reported twice.
///
/// Combinators that run caller code on the way to an `E` require
/// `E: From<Fault>`, so a caught panic can take the error's place.
///
/// # Examples
///
/// ```
/// use logerr::outcome::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success("21")
///     .map(|s| s.parse::<i32>().unwrap())
///     .map(|n| n * 2);
/// assert_eq!(parsed, Outcome::success(42));
///
/// let bounded = Outcome::<i32, String>::success(5)
///     .chain(|x| if x > 0 { Outcome::silent_failure("boom".to_string()) } else { Outcome::success(x) })
///     .unwrap_or(-1);
/// assert_eq!(bounded, -1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure and logs it with the caller's location.
    #[track_caller]
    pub fn failure(error: E) -> Self
    where
        E: Display,
    {
        Self::failure_at(error, CallSite::caller())
    }

    /// Creates a failure and logs it with an explicit call site.
    pub fn failure_at(error: E, site: CallSite) -> Self
    where
        E: Display,
    {
        hook::log_failure(&error, &site);
        Self::Failure(error)
    }

    /// Creates a failure without logging.
    #[inline]
    pub fn silent_failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// A loud failure built from a caught panic.
    #[track_caller]
    pub fn from_fault(fault: Fault) -> Self
    where
        E: From<Fault> + Display,
    {
        Self::failure(E::from(fault))
    }

    /// `true` for `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::success(1).is_success());
    /// assert!(!Outcome::<i32, &str>::silent_failure("e").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error, if this is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::outcome::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::silent_failure("timeout");
    /// assert_eq!(failed.error(), Some(&"timeout"));
    /// ```
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrows both sides.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success value.
    ///
    /// To hand the error itself to the caller instead, use
    /// `outcome.into_result()?`.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidUnwrap`] message showing the error.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{}", InvalidUnwrap::failure(&error)),
        }
    }

    /// # Panics
    ///
    /// Panics with `msg` followed by the error if this is a failure.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("{}", InvalidUnwrap::expected(msg, &format_args!("{error:?}")))
            },
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidUnwrap`] message showing the value if this is
    /// a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Success(value) => panic!("{}", InvalidUnwrap::success(&value)),
            Self::Failure(error) => error,
        }
    }

    /// Non-panicking form of [`unwrap`](Self::unwrap).
    pub fn try_unwrap(self) -> Result<T, InvalidUnwrap>
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(InvalidUnwrap::failure(&error)),
        }
    }

    /// Returns the value, or `default` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(3).unwrap_or(0), 3);
    /// assert_eq!(Outcome::<i32, &str>::silent_failure("e").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the value or computes one from the error.
    ///
    /// # Panics
    ///
    /// If `f` panics, this panics with an [`InvalidUnwrap`] message naming the
    /// callback failure.
    #[track_caller]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => match Fault::capture(|| f(error)) {
                Ok(value) => value,
                Err(fault) => panic!("{}", InvalidUnwrap::callback(&fault)),
            },
        }
    }

    /// Converts into a std `Result` without logging.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transforms the success value; a panic in `f` becomes a logged failure.
    #[track_caller]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<Fault> + Display,
    {
        match self {
            Self::Success(value) => match Fault::capture(|| f(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(fault) => Outcome::from_fault(fault),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error.
    ///
    /// The new error describes a failure that was already reported, so it is
    /// not logged; a panic in `op` is a new failure and is.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::silent_failure("timeout");
    /// let mapped = failed.map_err(|e| format!("upstream: {e}"));
    /// assert_eq!(mapped.error().map(String::as_str), Some("upstream: timeout"));
    /// ```
    #[track_caller]
    pub fn map_err<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
        G: From<Fault> + Display,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => match Fault::capture(|| op(error)) {
                Ok(mapped) => Outcome::Failure(mapped),
                Err(fault) => Outcome::from_fault(fault),
            },
        }
    }

    /// Flat-map on the success value; failures short-circuit silently.
    #[track_caller]
    pub fn chain<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        E: From<Fault> + Display,
    {
        match self {
            Self::Success(value) => match Fault::capture(|| f(value)) {
                Ok(next) => next,
                Err(fault) => Outcome::from_fault(fault),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovery hook: runs `op` on the error and returns its outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::outcome::Outcome;
    ///
    /// let retried: Outcome<i32, String> = Outcome::<i32, &str>::silent_failure("retry later")
    ///     .or_else(|e| {
    ///         if e.contains("retry") {
    ///             Outcome::success(99)
    ///         } else {
    ///             Outcome::silent_failure("permanent failure".to_string())
    ///         }
    ///     });
    /// assert_eq!(retried, Outcome::success(99));
    /// ```
    #[track_caller]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
        G: From<Fault> + Display,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => match Fault::capture(|| op(error)) {
                Ok(recovered) => recovered,
                Err(fault) => Outcome::from_fault(fault),
            },
        }
    }

    /// Replaces a failure with `Success(default)`.
    #[inline]
    pub fn or_default(self, default: T) -> Outcome<T, E> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::Success(default),
        }
    }

    /// Calls `f` with the success value. A panic in `f` is ignored.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            let _ = Fault::capture(|| f(value));
        }
        self
    }

    /// Calls `f` with the error. A panic in `f` is ignored.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            let _ = Fault::capture(|| f(error));
        }
        self
    }

    /// The success value as an [`OptionalValue`]; a failure becomes a silent
    /// absence whose reason is the error text.
    pub fn ok(self) -> OptionalValue<T>
    where
        E: Display,
    {
        match self {
            Self::Success(value) => OptionalValue::Present(value),
            Self::Failure(error) => OptionalValue::Absent(error.to_string()),
        }
    }

    /// The error as an [`OptionalValue`]; silent either way.
    pub fn err(self) -> OptionalValue<E> {
        match self {
            Self::Success(_) => OptionalValue::Absent(WAS_SUCCESS.to_string()),
            Self::Failure(error) => OptionalValue::Present(error),
        }
    }

    /// Total order treating every failure as equal, and below every success.
    pub fn cmp_by_success(&self, other: &Self) -> Ordering
    where
        T: Ord,
    {
        match (self, other) {
            (Self::Success(a), Self::Success(b)) => a.cmp(b),
            (Self::Success(_), Self::Failure(_)) => Ordering::Greater,
            (Self::Failure(_), Self::Success(_)) => Ordering::Less,
            (Self::Failure(_), Self::Failure(_)) => Ordering::Equal,
        }
    }
}

/// `Success(<value>)` or `Failure(<error>)`.
impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

/// Every failure is less than every success; failures order by error and
/// successes by value.
impl<T: PartialOrd, E: PartialOrd> PartialOrd for Outcome<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Success(a), Self::Success(b)) => a.partial_cmp(b),
            (Self::Success(_), Self::Failure(_)) => Some(Ordering::Greater),
            (Self::Failure(_), Self::Success(_)) => Some(Ordering::Less),
            (Self::Failure(a), Self::Failure(b)) => a.partial_cmp(b),
        }
    }
}

impl<T: Ord, E: Ord> Ord for Outcome<T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Failure(a), Self::Failure(b)) => a.cmp(b),
            _ => self.cmp_by_success(other),
        }
    }
}
