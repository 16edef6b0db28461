use crate::config::Level;
use core::fmt::{self, Display};
use std::error::Error;

/// Rejected configuration input.
///
/// Returned inside a `Failure` by [`configure`](crate::config::configure); the
/// active configuration is left untouched when this is produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidConfig {
    field: String,
    value: String,
}

impl InvalidConfig {
    pub(crate) fn level(field: &str, value: &str) -> Self {
        Self { field: field.to_string(), value: value.to_string() }
    }

    /// Dotted path of the rejected key, e.g. `level` or `libraries.db.level`.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The rejected value, verbatim.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': must be one of ", self.field, self.value)?;
        for (i, level) in Level::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(level.as_str())?;
        }
        Ok(())
    }
}

impl Error for InvalidConfig {}
