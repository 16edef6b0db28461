//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use logerr::prelude::*;
//!
//! fn lookup(id: u32) -> OptionalValue<&'static str> {
//!     from_nullable((id == 1).then_some("ada"))
//! }
//!
//! assert_eq!(lookup(1).unwrap_or("guest"), "ada");
//! assert_eq!(lookup(2).unwrap_or("guest"), "guest");
//! assert_eq!(from_callable(|| Some(7)).unwrap_or(0), 7);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`absent!`], [`failure!`], [`call_site!`]
//! - **Types**: [`OptionalValue`], [`Outcome`], [`CallSite`], [`Fault`]
//! - **Traits**: [`OptionExt`], [`ResultExt`]
//! - **Functions**: the optional factories ([`from_nullable`], [`from_callable`],
//!   [`from_predicate`], [`predicate_filter`]), [`predicate_validator`],
//!   [`configure`], [`first_present`]

// Macros
pub use crate::{absent, call_site, failure};

// Core types
pub use crate::hook::CallSite;
pub use crate::optional::{
    from_callable, from_nullable, from_predicate, predicate_filter, OptionalValue,
};
pub use crate::outcome::{predicate_validator, Outcome};
pub use crate::types::Fault;

// Configuration
pub use crate::config::{configure, ConfigOverrides, Level};

// Traits
pub use crate::traits::{OptionExt, ResultExt};

pub use crate::utils::first_present;
