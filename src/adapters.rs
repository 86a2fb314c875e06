//! Lifting ordinary fallible functions into the algebra.
//!
//! These adapters are the only place where a raised failure is caught and
//! turned into a domain failure. Each one takes the caller's normalization
//! function and returns a new function that produces a [`Might`] or a
//! [`MightAsync`].
//!
//! Rust functions raise in two ways, and each has an adapter:
//!
//! | Function shape                              | Adapter                   |
//! |---------------------------------------------|---------------------------|
//! | `Fn(A) -> Result<T, X>`                     | [`mightify`]              |
//! | `Fn(A) -> T` that may panic                 | [`mightify_unwind`]       |
//! | `Fn(A) -> impl Future<Output = Result<T, X>>` | [`mightify_async`]      |
//! | `Fn(A) -> impl Future<Output = T>` that may panic | [`mightify_async_unwind`] |
//!
//! Functions of several arguments take them as one tuple.
//!
//! # Example
//!
//! ```rust
//! use might::{mightify, Might};
//!
//! let parse = mightify(|s: &str| s.parse::<i32>(), |e| e.to_string());
//!
//! assert_eq!(parse("42"), Might::Ok(42));
//! assert!(parse("forty-two").is_error());
//! ```

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::future::{self, Either, FutureExt};

use crate::might::Might;
use crate::might_async::MightAsync;
use crate::panic::Panic;

/// Lift a `Result`-returning function into one returning [`Might`].
///
/// An `Err(raw)` from `func` becomes `Might::Err(transform_error(raw))`;
/// `transform_error` runs exactly once per failed call.
///
/// ```rust
/// use might::{mightify, Might};
///
/// fn divide((a, b): (i32, i32)) -> Result<i32, &'static str> {
///     if b == 0 { Err("division by zero") } else { Ok(a / b) }
/// }
///
/// let safe_divide = mightify(divide, |e| e.to_uppercase());
/// assert_eq!(safe_divide((10, 2)), Might::Ok(5));
/// assert_eq!(safe_divide((1, 0)), Might::Err("DIVISION BY ZERO".to_string()));
/// ```
pub fn mightify<A, T, X, E, F, N>(func: F, transform_error: N) -> impl Fn(A) -> Might<T, E>
where
    F: Fn(A) -> Result<T, X>,
    N: Fn(X) -> E,
{
    move |args| match func(args) {
        Ok(value) => Might::Ok(value),
        Err(raw) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "might::mightify",
                "converted a returned error into a domain failure"
            );
            Might::Err(transform_error(raw))
        }
    }
}

/// Lift a function that may panic into one returning [`Might`].
///
/// The call runs under `std::panic::catch_unwind`; a panic becomes
/// `Might::Err(transform_error(panic))`. The panic hook still runs as usual.
///
/// ```rust
/// use might::{mightify_unwind, Might, Panic};
///
/// let checked = mightify_unwind(
///     |n: u32| {
///         if n > 10 {
///             panic!("bad");
///         }
///         n
///     },
///     |p: Panic| p.message().unwrap_or_default().to_string(),
/// );
///
/// assert_eq!(checked(3), Might::Ok(3));
/// assert_eq!(checked(11), Might::Err("bad".to_string()));
/// ```
pub fn mightify_unwind<A, T, E, F, N>(func: F, transform_error: N) -> impl Fn(A) -> Might<T, E>
where
    F: Fn(A) -> T,
    N: Fn(Panic) -> E,
{
    move |args| match panic::catch_unwind(AssertUnwindSafe(|| func(args))) {
        Ok(value) => Might::Ok(value),
        Err(payload) => {
            let caught = Panic::new(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "might::mightify",
                panic = %caught,
                "converted a panic into a domain failure"
            );
            Might::Err(transform_error(caught))
        }
    }
}

/// Lift an async function into one returning [`MightAsync`].
///
/// Each call wraps the returned future with `transform_error` as its
/// normalization function. Normalization is deferred until the failure is
/// observed.
///
/// ```rust
/// use might::{mightify_async, Might};
///
/// async fn lookup(id: u32) -> Result<String, u32> {
///     if id == 1 { Ok("root".to_string()) } else { Err(id) }
/// }
///
/// # tokio_test::block_on(async {
/// let find = mightify_async(lookup, |id: u32| format!("no user {id}"));
///
/// assert_eq!(find(1).await, Might::Ok("root".to_string()));
/// assert_eq!(find(7).await, Might::Err("no user 7".to_string()));
/// # });
/// ```
pub fn mightify_async<A, T, X, E, F, Fut, N>(
    func: F,
    transform_error: N,
) -> impl Fn(A) -> MightAsync<T, E>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, X>> + Send + 'static,
    T: Send + 'static,
    X: Send + 'static,
    E: Send + 'static,
    N: Fn(X) -> E + Send + Sync + 'static,
{
    let transform_error = Arc::new(transform_error);
    move |args| {
        let transform_error = Arc::clone(&transform_error);
        MightAsync::new(func(args), move |raw: X| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "might::mightify",
                "normalizing a failure from an async call"
            );
            (*transform_error)(raw)
        })
    }
}

/// Lift an async function that may panic into one returning [`MightAsync`].
///
/// Panics raised while creating the future, or while it is polled, become
/// failures normalized through `transform_error` when observed.
///
/// ```rust
/// use might::{mightify_async_unwind, Might, Panic};
///
/// # tokio_test::block_on(async {
/// let halve = mightify_async_unwind(
///     |n: u32| async move {
///         assert!(n % 2 == 0, "odd input");
///         n / 2
///     },
///     |p: Panic| p.to_string(),
/// );
///
/// assert_eq!(halve(8).await, Might::Ok(4));
/// assert_eq!(halve(3).await, Might::Err("panicked: odd input".to_string()));
/// # });
/// ```
pub fn mightify_async_unwind<A, T, E, F, Fut, N>(
    func: F,
    transform_error: N,
) -> impl Fn(A) -> MightAsync<T, E>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    N: Fn(Panic) -> E + Send + Sync + 'static,
{
    let transform_error = Arc::new(transform_error);
    move |args| {
        let pending = match panic::catch_unwind(AssertUnwindSafe(|| func(args))) {
            Ok(fut) => Either::Left(
                AssertUnwindSafe(fut)
                    .catch_unwind()
                    .map(|settled| settled.map_err(Panic::new)),
            ),
            Err(payload) => Either::Right(future::ready(Err(Panic::new(payload)))),
        };

        let transform_error = Arc::clone(&transform_error);
        MightAsync::new(pending, move |caught: Panic| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "might::mightify",
                panic = %caught,
                "converted a panic into a domain failure"
            );
            (*transform_error)(caught)
        })
    }
}
