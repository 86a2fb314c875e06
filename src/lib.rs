//! # Might
//!
//! A small algebra for results that *might* be errors.
//!
//! ## Overview
//!
//! - [`Might<V, E>`] is the synchronous outcome: `Might::Ok(value)` or
//!   `Might::Err(error)`, with the combinators `match_with`, `with_value`,
//!   `with_error`, `recover`, `pipe` and `peek`.
//! - [`MightAsync<V, E>`] is a pending computation of a `Might`. It offers the
//!   same combinators and can be awaited directly. Its failure is normalized
//!   lazily, only when a consumer looks at it.
//! - [`mightify`] and friends lift ordinary fallible (or panicking, or async)
//!   functions into the algebra through one caller-supplied normalization
//!   function.
//!
//! Failures are values: the combinators never catch panics from their
//! callbacks. Only the adapters convert raised failures into `Err`.
//!
//! ## Quick Example
//!
//! ```rust
//! use might::{mightify, ok, Might};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     NotANumber(String),
//!     OutOfRange(u32),
//! }
//!
//! let parse = mightify(|s: &str| s.trim().parse::<u32>(), |e| {
//!     ConfigError::NotANumber(e.to_string())
//! });
//!
//! let workers = parse(" 8 ")
//!     .pipe(|n| if n <= 64 { ok(n) } else { Might::Err(ConfigError::OutOfRange(n)) })
//!     .with_value(|n| n.max(1));
//!
//! assert_eq!(workers, Might::Ok(8));
//! assert_eq!(parse("x").peek_or(1), 1);
//! ```
//!
//! ## Async
//!
//! ```rust
//! use might::{mightify_async, Might};
//!
//! async fn load(key: &'static str) -> Result<u32, std::io::Error> {
//!     match key {
//!         "retries" => Ok(3),
//!         _ => Err(std::io::Error::other(format!("no key {key}"))),
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let get = mightify_async(load, |e: std::io::Error| e.to_string());
//!
//! let doubled = get("retries").with_value(|n| n * 2).await;
//! assert_eq!(doubled, Might::Ok(6));
//!
//! let missing = get("timeout").match_with(|n| n.to_string(), |e| e).await;
//! assert_eq!(missing, "no key timeout");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod adapters;
pub mod might;
pub mod might_async;
pub mod panic;
pub mod testing;

// Re-exports
pub use adapters::{mightify, mightify_async, mightify_async_unwind, mightify_unwind};
pub use might::{err, ok, Might};
pub use might_async::{IntoMightAsync, MightAsync};
pub use panic::Panic;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::{mightify, mightify_async, mightify_async_unwind, mightify_unwind};
    pub use crate::might::{err, ok, Might};
    pub use crate::might_async::{IntoMightAsync, MightAsync};
    pub use crate::panic::Panic;
}
