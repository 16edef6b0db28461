//! Process-wide logging configuration.
//!
//! The active [`LoggingConfig`] is an immutable snapshot behind a shared
//! pointer. Readers take a clone of the pointer and never observe a partially
//! applied update; [`configure`] merges overrides onto the current snapshot,
//! validates the result and publishes it in a single store.
//!
//! # Examples
//!
//! ```
//! use logerr::config::{self, ConfigOverrides, Level};
//!
//! let applied = config::configure(ConfigOverrides::new().level("DEBUG"));
//! assert!(applied.is_success());
//! assert_eq!(config::get_config().level, Level::Debug);
//!
//! let rejected = config::configure(ConfigOverrides::new().level("LOUD"));
//! assert!(rejected.is_failure());
//! assert_eq!(config::get_config().level, Level::Debug);
//!
//! config::reset_config();
//! assert_eq!(config::get_config().level, Level::Error);
//! ```
use crate::hook::CallSite;
use crate::outcome::Outcome;
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

pub mod error;
pub mod level;
pub mod overrides;

pub use error::InvalidConfig;
pub use level::Level;
pub use overrides::{ConfigOverrides, LibraryOverrides};

/// Per-library override. Unset fields fall back to the global setting.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    pub enabled: Option<bool>,
    pub level: Option<Level>,
}

/// Governs whether and how absence/failure construction is logged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: Level,
    /// Message template; see [`crate::hook`] for the placeholders.
    pub format: Option<String>,
    pub libraries: BTreeMap<String, LibraryConfig>,
    pub capture_function_name: bool,
    pub capture_filename: bool,
    pub capture_lineno: bool,
    pub capture_locals: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            format: None,
            libraries: BTreeMap::new(),
            capture_function_name: true,
            capture_filename: true,
            capture_lineno: true,
            capture_locals: false,
        }
    }
}

impl LoggingConfig {
    #[inline]
    pub fn library(&self, name: &str) -> Option<&LibraryConfig> {
        self.libraries.get(name)
    }

    /// `false` when logging is off globally or for `name`.
    pub fn should_log_for(&self, name: &str) -> bool {
        self.enabled && self.library(name).and_then(|lib| lib.enabled).unwrap_or(true)
    }

    /// The per-library level if one is set, otherwise the global level.
    pub fn level_for(&self, name: &str) -> Level {
        self.library(name).and_then(|lib| lib.level).unwrap_or(self.level)
    }

    /// Returns a new snapshot with `overrides` applied, or the first invalid
    /// value found. `self` is never modified.
    pub fn merged(&self, overrides: &ConfigOverrides) -> Result<LoggingConfig, InvalidConfig> {
        let level = match overrides.level.as_deref() {
            Some(raw) => Level::parse_for("level", raw)?,
            None => self.level,
        };

        let mut libraries = self.libraries.clone();
        for (name, lib) in &overrides.libraries {
            let lib_level = match lib.level.as_deref() {
                Some(raw) => Some(Level::parse_for(&format!("libraries.{name}.level"), raw)?),
                None => None,
            };
            let entry = libraries.entry(name.clone()).or_default();
            if lib.enabled.is_some() {
                entry.enabled = lib.enabled;
            }
            if lib_level.is_some() {
                entry.level = lib_level;
            }
        }

        Ok(LoggingConfig {
            enabled: overrides.enabled.unwrap_or(self.enabled),
            level,
            format: match &overrides.format {
                Some(format) => format.clone(),
                None => self.format.clone(),
            },
            libraries,
            capture_function_name: overrides
                .capture_function_name
                .unwrap_or(self.capture_function_name),
            capture_filename: overrides.capture_filename.unwrap_or(self.capture_filename),
            capture_lineno: overrides.capture_lineno.unwrap_or(self.capture_lineno),
            capture_locals: overrides.capture_locals.unwrap_or(self.capture_locals),
        })
    }
}

static ACTIVE: Lazy<RwLock<Arc<LoggingConfig>>> =
    Lazy::new(|| RwLock::new(Arc::new(LoggingConfig::default())));

/// Returns the active configuration snapshot.
pub fn get_config() -> Arc<LoggingConfig> {
    let guard = ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Merges `overrides` onto the active configuration.
///
/// Fields absent from `overrides` keep their current value and `libraries`
/// entries are merged key by key. An invalid level anywhere in `overrides`
/// yields a logged `Failure` and leaves the active configuration unchanged.
#[track_caller]
pub fn configure(overrides: ConfigOverrides) -> Outcome<(), InvalidConfig> {
    let site = CallSite::caller();
    let applied = {
        let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
        match active.merged(&overrides) {
            Ok(next) => {
                *active = Arc::new(next);
                Ok(())
            },
            Err(invalid) => Err(invalid),
        }
    };
    // The write lock is released before a failure is built: the hook reads it.
    match applied {
        Ok(()) => Outcome::Success(()),
        Err(invalid) => Outcome::failure_at(invalid, site),
    }
}

/// Restores the default configuration.
pub fn reset_config() {
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *active = Arc::new(LoggingConfig::default());
}
