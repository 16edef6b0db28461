use crate::types::Fault;
use core::fmt::{self, Debug, Display};
use std::error::Error;

/// Misuse of a terminal extraction operation.
///
/// `unwrap`, `expect`, `unwrap_err` and `unwrap_or_else` panic with the
/// `Display` text of this type; the `try_unwrap` variants return it instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidUnwrap {
    message: String,
}

impl InvalidUnwrap {
    #[inline]
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub(crate) fn absent(reason: &str) -> Self {
        Self::new(format!("called `OptionalValue::unwrap()` on an `Absent` value: {reason}"))
    }

    pub(crate) fn failure(error: &dyn Debug) -> Self {
        Self::new(format!("called `Outcome::unwrap()` on a `Failure` value: {error:?}"))
    }

    pub(crate) fn success(value: &dyn Debug) -> Self {
        Self::new(format!("called `Outcome::unwrap_err()` on a `Success` value: {value:?}"))
    }

    pub(crate) fn expected(msg: &str, detail: &dyn Display) -> Self {
        Self::new(format!("{msg}: {detail}"))
    }

    pub(crate) fn callback(fault: &Fault) -> Self {
        Self::new(format!("unwrap_or_else callback failed: {}", fault.message()))
    }

    /// The full description, as used for the panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for InvalidUnwrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for InvalidUnwrap {}
