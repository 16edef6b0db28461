//! Macros that build loud absences and failures with full call-site context.
//!
//! `#[track_caller]` gives every loud constructor its file, line and column.
//! These macros also record the module path and the enclosing function, which
//! library resolution and the `{function}` placeholder rely on:
//!
//! - [`macro@crate::call_site`] - a [`CallSite`](crate::hook::CallSite) for the
//!   current location.
//! - [`macro@crate::absent`] - a loud `Absent` with a formatted reason.
//! - [`macro@crate::failure`] - a loud `Failure`.
//!
//! Both constructors accept `; name = value, ..` after the payload to attach
//! local values, reported when `capture_locals` is enabled.
//!
//! # Examples
//!
//! ```
//! use logerr::{absent, failure};
//! use logerr::optional::OptionalValue;
//! use logerr::outcome::Outcome;
//!
//! fn find_user(id: u32) -> OptionalValue<String> {
//!     absent!("user {id} not found")
//! }
//!
//! fn charge(amount: i64) -> Outcome<(), String> {
//!     failure!(format!("cannot charge {amount}"); amount = amount)
//! }
//!
//! assert_eq!(find_user(7).reason(), Some("user 7 not found"));
//! assert!(charge(-5).is_failure());
//! ```

/// Captures the current file, line, column, module path and enclosing
/// function as a [`CallSite`](crate::hook::CallSite).
///
/// # Examples
///
/// ```
/// let site = logerr::call_site!();
/// assert_eq!(site.file(), file!());
/// assert!(site.module().is_some());
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn f() {}
        $crate::hook::CallSite::new(file!(), line!(), column!())
            .with_module(module_path!())
            .with_function($crate::hook::call_site::enclosing_function(
                ::core::any::type_name_of_val(&f),
            ))
    }};
}

/// Builds a loud [`OptionalValue::Absent`](crate::optional::OptionalValue::Absent).
///
/// # Syntax
///
/// - `absent!("format {}", args)` - reason from `format!` arguments
/// - `absent!("format {}", args; name = value, ..)` - plus captured locals
/// - `absent!(reason; name = value, ..)` - any `Into<String>` reason plus captured locals
///
/// # Examples
///
/// ```
/// use logerr::absent;
/// use logerr::optional::OptionalValue;
///
/// let key = "timeout";
/// let missing: OptionalValue<u64> = absent!("setting {key} missing"; key = key);
/// assert_eq!(missing.reason(), Some("setting timeout missing"));
/// ```
#[macro_export]
macro_rules! absent {
    ($fmt:literal $(, $arg:expr)*; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::optional::OptionalValue::absent_at(
            format!($fmt $(, $arg)*),
            $crate::call_site!()$(.with_local(stringify!($name), &$value))+,
        )
    };
    ($reason:expr; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::optional::OptionalValue::absent_at(
            $reason,
            $crate::call_site!()$(.with_local(stringify!($name), &$value))+,
        )
    };
    ($($arg:tt)+) => {
        $crate::optional::OptionalValue::absent_at(format!($($arg)+), $crate::call_site!())
    };
}

/// Builds a loud [`Outcome::Failure`](crate::outcome::Outcome::Failure).
///
/// # Syntax
///
/// - `failure!(error)` - any `Display` error value
/// - `failure!(error; name = value, ..)` - plus captured locals
///
/// # Examples
///
/// ```
/// use logerr::failure;
/// use logerr::outcome::Outcome;
///
/// let attempts = 3;
/// let gave_up: Outcome<(), &str> = failure!("retries exhausted"; attempts = attempts);
/// assert_eq!(gave_up.error(), Some(&"retries exhausted"));
/// ```
#[macro_export]
macro_rules! failure {
    ($error:expr; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::outcome::Outcome::failure_at(
            $error,
            $crate::call_site!()$(.with_local(stringify!($name), &$value))+,
        )
    };
    ($error:expr $(,)?) => {
        $crate::outcome::Outcome::failure_at($error, $crate::call_site!())
    };
}
