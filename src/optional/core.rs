use crate::hook::{self, CallSite};
use crate::outcome::Outcome;
use crate::types::{Fault, InvalidUnwrap};
use core::cmp::Ordering;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const EMPTY_REASON: &str = "Empty option";
pub(crate) const MAPPED_TO_EMPTY: &str = "map function returned no value";
pub(crate) const FAILED_FILTER: &str = "Value did not pass filter predicate";

/// An optional value that remembers why it is missing.
///
/// `OptionalValue<T>` is either `Present(T)` or `Absent(reason)`. Creating an
/// absence through [`absent`](Self::absent), a factory or a combinator that
/// discovers a new absence is *loud*: the logging hook fires once, at
/// construction, with the caller's location. Writing the variant directly,
/// [`silent`](Self::silent) and [`empty`](Self::empty) are *silent*.
///
/// Combinators never run caller code unguarded. A panic inside a callback is
/// caught at the combinator and becomes a loud `Absent` describing the panic.
/// Propagating an existing absence (`map` on `Absent` and so on) is silent.
///
/// # Examples
///
/// ```
/// use logerr::optional::OptionalValue;
///
/// let doubled = OptionalValue::present(5)
///     .map(|x| x * 2)
///     .filter(|x| *x > 5)
///     .unwrap_or(0);
/// assert_eq!(doubled, 10);
///
/// let missing = OptionalValue::<i32>::silent("no such user");
/// assert_eq!(missing.reason(), Some("no such user"));
/// assert_eq!(missing.unwrap_or(-1), -1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionalValue<T> {
    Present(T),
    Absent(String),
}

impl<T> OptionalValue<T> {
    /// Wraps a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absence and logs it with the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// let missing = OptionalValue::<String>::absent("profile not cached");
    /// assert!(missing.is_absent());
    /// ```
    #[track_caller]
    pub fn absent(reason: impl Into<String>) -> Self {
        Self::absent_at(reason, CallSite::caller())
    }

    /// Creates an absence and logs it with an explicit call site.
    pub fn absent_at(reason: impl Into<String>, site: CallSite) -> Self {
        let reason = reason.into();
        hook::log_absence(&reason, &site);
        Self::Absent(reason)
    }

    /// Creates an absence without logging, for absences that are part of
    /// normal control flow.
    #[inline]
    pub fn silent(reason: impl Into<String>) -> Self {
        Self::Absent(reason.into())
    }

    /// A silent absence with the reason `"Empty option"`.
    #[inline]
    pub fn empty() -> Self {
        Self::Absent(EMPTY_REASON.to_string())
    }

    /// A loud absence describing a caught panic.
    #[track_caller]
    pub fn from_fault(fault: Fault) -> Self {
        Self::absent(fault.to_string())
    }

    /// `true` for `Present`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// assert!(OptionalValue::present(1).is_present());
    /// assert!(!OptionalValue::<i32>::empty().is_present());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// `true` for `Absent`.
    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// The recorded reason, if absent.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Present(_) => None,
            Self::Absent(reason) => Some(reason),
        }
    }

    /// Borrows the value. An absence keeps a copy of its reason.
    #[inline]
    pub fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent(reason) => OptionalValue::Absent(reason.clone()),
        }
    }

    /// Mutably borrows the value. An absence keeps a copy of its reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// let mut count = OptionalValue::present(1);
    /// if let OptionalValue::Present(n) = count.as_mut() {
    ///     *n += 1;
    /// }
    /// assert_eq!(count, OptionalValue::present(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> OptionalValue<&mut T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent(reason) => OptionalValue::Absent(reason.clone()),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidUnwrap`] message carrying the reason if absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(reason) => panic!("{}", InvalidUnwrap::absent(&reason)),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` followed by the reason if absent.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(reason) => panic!("{}", InvalidUnwrap::expected(msg, &reason)),
        }
    }

    /// Non-panicking form of [`unwrap`](Self::unwrap).
    pub fn try_unwrap(self) -> Result<T, InvalidUnwrap> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent(reason) => Err(InvalidUnwrap::absent(&reason)),
        }
    }

    /// Returns the value, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(3).unwrap_or(0), 3);
    /// assert_eq!(OptionalValue::<i32>::silent("none").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => default,
        }
    }

    /// Returns the value, or `T::default()` when absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the value or computes one.
    ///
    /// # Panics
    ///
    /// If `f` panics, this panics with an [`InvalidUnwrap`] message naming the
    /// callback failure.
    #[track_caller]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => match Fault::capture(f) {
                Ok(value) => value,
                Err(fault) => panic!("{}", InvalidUnwrap::callback(&fault)),
            },
        }
    }

    /// Converts into a std `Option`, dropping the reason.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Transforms the value.
    ///
    /// A panic in `f` yields a loud absence; an existing absence passes
    /// through silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(4).map(|x| x + 1), OptionalValue::present(5));
    ///
    /// let failed = OptionalValue::present("x").map(|s| s.parse::<i32>().unwrap());
    /// assert!(failed.reason().unwrap().starts_with("panic: "));
    /// ```
    #[track_caller]
    pub fn map<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => match Fault::capture(|| f(value)) {
                Ok(mapped) => OptionalValue::Present(mapped),
                Err(fault) => OptionalValue::from_fault(fault),
            },
            Self::Absent(reason) => OptionalValue::Absent(reason),
        }
    }

    /// Like [`map`](Self::map), for functions that may produce no value.
    ///
    /// `None` from `f` is a new absence and is logged.
    #[track_caller]
    pub fn filter_map<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => match Fault::capture(|| f(value)) {
                Ok(Some(mapped)) => OptionalValue::Present(mapped),
                Ok(None) => OptionalValue::absent(MAPPED_TO_EMPTY),
                Err(fault) => OptionalValue::from_fault(fault),
            },
            Self::Absent(reason) => OptionalValue::Absent(reason),
        }
    }

    /// Flat-map: runs `f` on the value and returns its result as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    ///
    /// fn half(x: i32) -> OptionalValue<i32> {
    ///     if x % 2 == 0 {
    ///         OptionalValue::present(x / 2)
    ///     } else {
    ///         OptionalValue::silent("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(OptionalValue::present(8).chain(half).chain(half), OptionalValue::present(2));
    /// assert!(OptionalValue::present(3).chain(half).is_absent());
    /// ```
    #[track_caller]
    pub fn chain<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        match self {
            Self::Present(value) => match Fault::capture(|| f(value)) {
                Ok(next) => next,
                Err(fault) => OptionalValue::from_fault(fault),
            },
            Self::Absent(reason) => OptionalValue::Absent(reason),
        }
    }

    /// Falls back to `f` when absent.
    #[track_caller]
    pub fn or_else<F>(self, f: F) -> OptionalValue<T>
    where
        F: FnOnce() -> OptionalValue<T>,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent(_) => match Fault::capture(f) {
                Ok(fallback) => fallback,
                Err(fault) => Self::from_fault(fault),
            },
        }
    }

    /// Keeps the value only if `predicate` holds.
    ///
    /// A rejected value or a panicking predicate is a new, logged absence.
    #[track_caller]
    pub fn filter<P>(self, predicate: P) -> OptionalValue<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => match Fault::capture(|| predicate(&value)) {
                Ok(true) => Self::Present(value),
                Ok(false) => Self::absent(FAILED_FILTER),
                Err(fault) => Self::from_fault(fault),
            },
            Self::Absent(reason) => Self::Absent(reason),
        }
    }

    /// Converts into an [`Outcome`], using `error` for an absence.
    ///
    /// The absence was already reported when it was created, so the
    /// resulting failure is silent.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent(_) => Outcome::Failure(error),
        }
    }

    /// Like [`ok_or`](Self::ok_or), building the error from the reason.
    ///
    /// # Panics
    ///
    /// A panic in `f` is not caught; `f` is an error constructor, not part of
    /// the combinator algebra.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(String) -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent(reason) => Outcome::Failure(f(reason)),
        }
    }

    /// Total order treating every absence as equal, and below every
    /// present value.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::optional::OptionalValue;
    /// use std::cmp::Ordering;
    ///
    /// let a = OptionalValue::<i32>::silent("a");
    /// let b = OptionalValue::<i32>::silent("b");
    /// assert_eq!(a.cmp_by_presence(&b), Ordering::Equal);
    /// assert_eq!(a.cmp_by_presence(&OptionalValue::present(0)), Ordering::Less);
    /// ```
    pub fn cmp_by_presence(&self, other: &Self) -> Ordering
    where
        T: Ord,
    {
        match (self, other) {
            (Self::Present(a), Self::Present(b)) => a.cmp(b),
            (Self::Present(_), Self::Absent(_)) => Ordering::Greater,
            (Self::Absent(_), Self::Present(_)) => Ordering::Less,
            (Self::Absent(_), Self::Absent(_)) => Ordering::Equal,
        }
    }
}

/// `Present(<value>)` or `Absent(<reason>)`.
impl<T: Display> Display for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({value})"),
            Self::Absent(reason) => write!(f, "Absent({reason})"),
        }
    }
}

impl<T> Default for OptionalValue<T> {
    /// A silent [`empty`](OptionalValue::empty) absence.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Every absence is less than every present value. Absences order by
/// reason so the order agrees with `Eq`; see
/// [`cmp_by_presence`](OptionalValue::cmp_by_presence) for an order that
/// ignores reasons.
impl<T: PartialOrd> PartialOrd for OptionalValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Present(a), Self::Present(b)) => a.partial_cmp(b),
            (Self::Present(_), Self::Absent(_)) => Some(Ordering::Greater),
            (Self::Absent(_), Self::Present(_)) => Some(Ordering::Less),
            (Self::Absent(a), Self::Absent(b)) => a.partial_cmp(b),
        }
    }
}

impl<T: Ord> Ord for OptionalValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Absent(a), Self::Absent(b)) => a.cmp(b),
            _ => self.cmp_by_presence(other),
        }
    }
}
