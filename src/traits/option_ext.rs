use crate::hook::CallSite;
use crate::optional::core::OptionalValue;

/// Converts an `Option` into a loud [`OptionalValue`].
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Present(v)`; `None` becomes `Absent(reason)` and is
    /// reported at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use logerr::traits::OptionExt;
    ///
    /// let users = ["ada", "grace"];
    /// let third = users.get(2).into_optional("no third user");
    /// assert_eq!(third.reason(), Some("no third user"));
    /// ```
    #[track_caller]
    fn into_optional<S: Into<String>>(self, reason: S) -> OptionalValue<T>;

    /// Like [`into_optional`](Self::into_optional), building the reason only
    /// when the value is missing.
    #[track_caller]
    fn into_optional_with<S, F>(self, reason: F) -> OptionalValue<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    #[track_caller]
    fn into_optional<S: Into<String>>(self, reason: S) -> OptionalValue<T> {
        match self {
            Some(value) => OptionalValue::Present(value),
            None => OptionalValue::absent_at(reason, CallSite::caller()),
        }
    }

    #[inline]
    #[track_caller]
    fn into_optional_with<S, F>(self, reason: F) -> OptionalValue<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Some(value) => OptionalValue::Present(value),
            None => OptionalValue::absent_at(reason(), CallSite::caller()),
        }
    }
}
