//! Supporting value types shared by both container families.
//!
//! - [`Fault`] is what a caught panic turns into when a combinator callback fails.
//! - [`InvalidUnwrap`] describes misuse of a terminal extraction operation.
//!
//! # Examples
//!
//! ```
//! use logerr::types::Fault;
//!
//! let fault = Fault::capture(|| -> i32 { panic!("disk on fire") }).unwrap_err();
//! assert_eq!(fault.message(), "disk on fire");
//! assert_eq!(fault.to_string(), "panic: disk on fire");
//! ```
pub mod fault;
pub mod unwrap_error;

pub use fault::*;
pub use unwrap_error::*;
