//! Extension traits that lift std containers into reported ones.
//!
//! - [`OptionExt`]: `Option<T>` to [`OptionalValue<T>`](crate::optional::OptionalValue)
//! - [`ResultExt`]: `Result<T, E>` to [`Outcome<T, E>`](crate::outcome::Outcome)
//!
//! Unlike the `From` impls in [`crate::convert`], these report a `None` or
//! `Err` through the hook at the caller's location.
//!
//! # Examples
//!
//! ```
//! use logerr::traits::{OptionExt, ResultExt};
//!
//! let port = std::env::var("LOGERR_DOC_PORT").ok()
//!     .into_optional("LOGERR_DOC_PORT is not set")
//!     .unwrap_or_else(|| "8080".to_string());
//! assert_eq!(port, "8080");
//!
//! let parsed = "12".parse::<u8>().into_outcome();
//! assert!(parsed.is_success());
//! ```

pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
