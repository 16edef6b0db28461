//! The success-or-failure container and its factories.
//!
//! [`Outcome`] is `Success(T)` or `Failure(E)`. It converts to and from
//! [`Result`] without logging, so `?` works through
//! [`into_result`](Outcome::into_result).
//!
//! # Examples
//!
//! ```
//! use logerr::outcome::{self, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(e) => Outcome::failure(format!("bad port '{raw}': {e}")),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1).unwrap_or(3000);
//! assert_eq!(port, 8081);
//!
//! let checked = outcome::from_predicate(port, |p| *p >= 1024, "privileged port".to_string());
//! assert!(checked.is_success());
//! ```
pub mod core;
pub mod factory;
mod iter;

pub use self::core::*;
pub use self::factory::*;
