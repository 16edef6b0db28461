//! Optional values and outcomes that log their own absences and failures.
//!
//! [`OptionalValue<T>`](optional::OptionalValue) is `Present(T)` or
//! `Absent(reason)`; [`Outcome<T, E>`](outcome::Outcome) is `Success(T)` or
//! `Failure(E)`. Creating an absence or failure through a named constructor,
//! a factory or one of the [`absent!`]/[`failure!`] macros reports it once,
//! with the caller's location, through a pluggable [`LogSink`](hook::LogSink)
//! (by default, [`tracing`]). Values that merely propagate through combinators
//! are not reported again, and panics inside combinator callbacks become
//! absences or failures instead of unwinding further.
//!
//! What gets logged, and how, is governed by a process-wide
//! [`LoggingConfig`](config::LoggingConfig) updated with [`config::configure`].
//!
//! # Examples
//!
//! ## Transforming optional values
//!
//! ```
//! use logerr::optional::OptionalValue;
//!
//! let doubled = OptionalValue::present(5)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 5)
//!     .unwrap_or(0);
//! assert_eq!(doubled, 10);
//!
//! let missing = logerr::optional::from_nullable(None::<&str>).unwrap_or("default");
//! assert_eq!(missing, "default");
//! ```
//!
//! ## Chaining outcomes
//!
//! ```
//! use logerr::outcome::Outcome;
//!
//! let result = Outcome::<i32, String>::success(5)
//!     .chain(|x| if x > 0 { Outcome::failure("boom".to_string()) } else { Outcome::success(x) })
//!     .unwrap_or(-1);
//! assert_eq!(result, -1);
//! ```
//!
//! ## Configuring the hook
//!
//! ```
//! use logerr::config::{self, ConfigOverrides, LibraryOverrides};
//!
//! let rejected = config::configure(ConfigOverrides::new().level("INVALID"));
//! assert!(rejected.error().is_some_and(|e| e.to_string().contains("INVALID")));
//!
//! let quiet_db = ConfigOverrides::new()
//!     .level("WARNING")
//!     .library("app::db", LibraryOverrides::new().enabled(false));
//! assert!(config::configure(quiet_db).is_success());
//! # config::reset_config();
//! ```

/// Process-wide logging configuration
pub mod config;
/// Silent conversions between the containers and std types
pub mod convert;
/// The logging hook, call-site context and sinks
pub mod hook;
/// Call-site capturing constructors
pub mod macros;
/// `OptionalValue` and its factories
pub mod optional;
/// `Outcome` and its factories
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits on `Option` and `Result`
pub mod traits;
/// Supporting error and fault types
pub mod types;
/// Fallback chains and manual log events
pub mod utils;

pub use config::{configure, get_config, reset_config, ConfigOverrides, Level, LoggingConfig};
pub use optional::OptionalValue;
pub use outcome::Outcome;
pub use traits::{OptionExt, ResultExt};
pub use types::{Fault, InvalidUnwrap};
