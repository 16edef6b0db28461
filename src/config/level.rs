use crate::config::InvalidConfig;
use core::fmt::{self, Display};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity at which absences and failures are reported.
///
/// The set is closed. Parsing is case-sensitive and only accepts the
/// upper-case names.
///
/// # Examples
///
/// ```
/// use logerr::config::Level;
///
/// assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warning));
/// assert!("warning".parse::<Level>().is_err());
/// assert!(Level::Debug < Level::Critical);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Every level, lowest severity first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Parses a level name, naming `field` in the error on failure.
    pub(crate) fn parse_for(field: &str, value: &str) -> Result<Level, InvalidConfig> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| InvalidConfig::level(field, value))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = InvalidConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse_for("level", s)
    }
}
