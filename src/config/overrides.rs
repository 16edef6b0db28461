#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A partial configuration update, applied with
/// [`configure`](crate::config::configure).
///
/// Every field is optional; `None` means "keep the current value". Levels are
/// carried as strings and validated when the update is applied.
///
/// With the `serde` feature this deserializes from a plain mapping using the
/// keys `enabled`, `level`, `format`, `libraries`, `capture_function_name`,
/// `capture_filename`, `capture_lineno` and `capture_locals`. An explicit
/// `"format": null` clears the template.
///
/// # Examples
///
/// ```
/// use logerr::config::{ConfigOverrides, LibraryOverrides};
///
/// let overrides = ConfigOverrides::new()
///     .level("WARNING")
///     .library("vendored_client", LibraryOverrides::new().enabled(false))
///     .capture_locals(true);
///
/// assert_eq!(overrides.level.as_deref(), Some("WARNING"));
/// assert_eq!(overrides.libraries.len(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub enabled: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub level: Option<String>,
    /// `Some(None)` clears the template, `None` keeps it. Only a set value is
    /// serialized, so an unset template never turns into `null`.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")
    )]
    pub format: Option<Option<String>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
    pub libraries: BTreeMap<String, LibraryOverrides>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub capture_function_name: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub capture_filename: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub capture_lineno: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub capture_locals: Option<bool>,
}

/// Partial update of one `libraries` entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryOverrides {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub enabled: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub level: Option<String>,
}

impl ConfigOverrides {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[inline]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[inline]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(Some(template.into()));
        self
    }

    #[inline]
    pub fn clear_format(mut self) -> Self {
        self.format = Some(None);
        self
    }

    #[inline]
    pub fn library(mut self, name: impl Into<String>, overrides: LibraryOverrides) -> Self {
        self.libraries.insert(name.into(), overrides);
        self
    }

    #[inline]
    pub fn capture_function_name(mut self, capture: bool) -> Self {
        self.capture_function_name = Some(capture);
        self
    }

    #[inline]
    pub fn capture_filename(mut self, capture: bool) -> Self {
        self.capture_filename = Some(capture);
        self
    }

    #[inline]
    pub fn capture_lineno(mut self, capture: bool) -> Self {
        self.capture_lineno = Some(capture);
        self
    }

    #[inline]
    pub fn capture_locals(mut self, capture: bool) -> Self {
        self.capture_locals = Some(capture);
        self
    }
}

impl LibraryOverrides {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[inline]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

// Distinguishes a missing key (field default, `None`) from an explicit null.
#[cfg(feature = "serde")]
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
