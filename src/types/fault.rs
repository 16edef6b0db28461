use core::fmt::{self, Display};
use std::any::Any;
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A panic caught at a combinator boundary.
///
/// Callbacks handed to `map`, `chain`, `filter` and friends may panic. The
/// combinator catches the unwind once, wraps the payload in a `Fault` and turns
/// it into the failure variant of the container it returns.
///
/// Catching does not silence the panic hook: the installed hook (by default
/// the one printing `thread '..' panicked at ..` to stderr) still runs before
/// the unwind reaches the boundary. Install a quieter hook with
/// [`std::panic::set_hook`] if that output is unwanted.
///
/// # Examples
///
/// ```
/// use logerr::types::Fault;
///
/// let ok = Fault::capture(|| 21 * 2);
/// assert_eq!(ok, Ok(42));
///
/// let err = Fault::capture(|| -> u8 { panic!("bad input {}", 7) });
/// assert_eq!(err.unwrap_err().message(), "bad input 7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a fault from a message, for callers that want to report a
    /// failure in the same shape a caught panic has.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Runs `f`, converting an unwinding panic into a `Fault`.
    ///
    /// The panic hook still runs first, see the type docs.
    #[inline]
    pub fn capture<T, F>(f: F) -> Result<T, Fault>
    where
        F: FnOnce() -> T,
    {
        catch_unwind(AssertUnwindSafe(f)).map_err(Self::from_payload)
    }

    /// Builds a fault from a raw panic payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(text) => *text,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(text) => (*text).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.message)
    }
}

impl Error for Fault {}

impl From<Fault> for String {
    #[inline]
    fn from(fault: Fault) -> Self {
        fault.to_string()
    }
}
