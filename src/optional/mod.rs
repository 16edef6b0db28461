//! The optional-value container and its factories.
//!
//! [`OptionalValue`] is `Present(T)` or `Absent(reason)`. Absences created
//! loudly are reported through the [`hook`](crate::hook) as they are built;
//! absences that merely propagate are not reported again.
//!
//! # Examples
//!
//! ```
//! use logerr::optional::{self, OptionalValue};
//!
//! let port = optional::from_nullable(Some("8080"))
//!     .filter_map(|raw| raw.parse::<u16>().ok())
//!     .filter(|port| *port >= 1024)
//!     .unwrap_or(3000);
//! assert_eq!(port, 8080);
//!
//! let fallback = OptionalValue::<u16>::empty().or_else(|| OptionalValue::present(3000));
//! assert_eq!(fallback, OptionalValue::present(3000));
//! ```
pub mod core;
pub mod factory;
pub mod iter;

pub use self::core::*;
pub use self::factory::*;
pub use self::iter::*;
