//! The asynchronous result algebra.
//!
//! [`MightAsync<V, E>`] wraps one pending computation that will settle with a
//! value or a raw failure. It exposes the same combinators as [`Might`], and it
//! is itself a `Future` resolving to a [`Might<V, E>`], so it can be awaited
//! directly or chained without waiting.
//!
//! # Deferred normalization
//!
//! The raw failure of the wrapped computation can be any type `X`. It is paired
//! with a normalization function `X -> E` and stays un-normalized until a
//! consumer actually asks for the error (by awaiting, `match_with`,
//! `match_then`, `catch`, ...). Combinators that do not look at the error, such
//! as `with_value`, `pipe` on a failure, or `peek`, never run it. When it runs,
//! it runs exactly once.
//!
//! ```rust
//! use might::{ok, Might, MightAsync};
//!
//! # tokio_test::block_on(async {
//! let fetched = MightAsync::new(async { Err::<u32, i32>(42) }, |e: i32| format!("err:{e}"));
//! let seen = fetched.match_with(|v| v.to_string(), |e| e).await;
//! assert_eq!(seen, "err:42");
//!
//! let total = MightAsync::new(async { Ok::<u32, ()>(20) }, |_| "unreachable")
//!     .with_value(|x| x + 1)
//!     .pipe(|x| ok::<_, &str>(x * 2))
//!     .await;
//! assert_eq!(total, Might::Ok(42));
//! # });
//! ```

mod settled;
#[cfg(feature = "tracing")]
mod instrument;


use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};

use crate::might::Might;
use settled::{Deferred, Settled};

/// A pending computation of a [`Might<V, E>`].
///
/// Every combinator consumes the wrapper and returns a new one around a newly
/// derived pending computation. Nothing is driven until the result is awaited;
/// `MightAsync` schedules no work of its own.
///
/// Awaiting yields `Might::Ok(v)` when the computation succeeds, and
/// `Might::Err(normalize(raw))` when it fails.
#[must_use = "a `MightAsync` does nothing unless awaited or consumed"]
pub struct MightAsync<V, E> {
    pending: BoxFuture<'static, Settled<V, E>>,
}

impl<V, E> std::fmt::Debug for MightAsync<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MightAsync")
            .field("pending", &"<future>")
            .finish()
    }
}

impl<V, E> MightAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    // ========== Constructors ==========

    /// Wrap a pending computation whose failure has an arbitrary raw type.
    ///
    /// `normalize` is stored, not called. It runs once, the first time the
    /// failure is surfaced.
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use might::{Might, MightAsync};
    ///
    /// # tokio_test::block_on(async {
    /// let m = MightAsync::new(async { "x".parse::<i32>() }, |e: ParseIntError| e.to_string());
    /// assert!(matches!(m.await, Might::Err(msg) if msg.contains("invalid digit")));
    /// # });
    /// ```
    pub fn new<Fut, X, N>(pending: Fut, normalize: N) -> Self
    where
        Fut: Future<Output = Result<V, X>> + Send + 'static,
        X: Send + 'static,
        N: FnOnce(X) -> E + Send + 'static,
    {
        Self::from_settlement(pending.map(move |result| match result {
            Ok(v) => Settled::Value(v),
            Err(raw) => Settled::Failure(Deferred::new(raw, normalize)),
        }))
    }

    /// Wrap a pending computation whose error is already of type `E`.
    pub fn from_result<Fut>(pending: Fut) -> Self
    where
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        Self::new(pending, std::convert::identity)
    }

    /// An already-settled success.
    pub fn ok(value: V) -> Self {
        Self::from(Might::Ok(value))
    }

    /// An already-settled failure.
    pub fn err(error: E) -> Self {
        Self::from(Might::Err(error))
    }

    pub(crate) fn from_settlement<Fut>(pending: Fut) -> Self
    where
        Fut: Future<Output = Settled<V, E>> + Send + 'static,
    {
        MightAsync {
            pending: pending.boxed(),
        }
    }

    // ========== Terminal operations ==========

    /// Wait for the outcome and fold it with synchronous branches.
    pub async fn match_with<R, F, G>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        match self.pending.await {
            Settled::Value(v) => on_value(v),
            Settled::Failure(deferred) => on_error(deferred.force()),
        }
    }

    /// Wait for the outcome and fold it with asynchronous branches.
    ///
    /// The returned future waits for whichever branch runs.
    ///
    /// ```rust
    /// use might::MightAsync;
    ///
    /// # tokio_test::block_on(async {
    /// let m = MightAsync::<i32, String>::ok(2);
    /// let out = m
    ///     .match_then(|v| async move { v * 10 }, |_| async { -1 })
    ///     .await;
    /// assert_eq!(out, 20);
    /// # });
    /// ```
    pub async fn match_then<R, F, G, FV, FE>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(V) -> FV,
        FV: IntoFuture<Output = R>,
        G: FnOnce(E) -> FE,
        FE: IntoFuture<Output = R>,
    {
        match self.pending.await {
            Settled::Value(v) => on_value(v).await,
            Settled::Failure(deferred) => on_error(deferred.force()).await,
        }
    }

    /// Resolve to the value, or `None` on failure.
    ///
    /// Never surfaces the error, so the normalization function is not run.
    pub async fn peek(self) -> Option<V> {
        match self.pending.await {
            Settled::Value(v) => Some(v),
            Settled::Failure(_) => None,
        }
    }

    /// Resolve to the value, or `default` on failure.
    pub async fn peek_or(self, default: V) -> V {
        self.peek().await.unwrap_or(default)
    }

    /// Failure continuation: resolve to the value, or to whatever `on_error`
    /// produces from the normalized error.
    ///
    /// ```rust
    /// use might::MightAsync;
    ///
    /// # tokio_test::block_on(async {
    /// let m = MightAsync::new(async { Err::<usize, _>("gone") }, |e: &str| e.len());
    /// assert_eq!(m.catch(|len| async move { len * 100 }).await, 400);
    /// # });
    /// ```
    pub async fn catch<F, Fut>(self, on_error: F) -> V
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = V>,
    {
        match self.pending.await {
            Settled::Value(v) => v,
            Settled::Failure(deferred) => on_error(deferred.force()).await,
        }
    }

    // ========== Combinators ==========

    /// Transform the success value once the computation settles.
    ///
    /// A failure passes through still un-normalized.
    pub fn with_value<R, F>(self, f: F) -> MightAsync<R, E>
    where
        R: Send + 'static,
        F: FnOnce(V) -> R + Send + 'static,
    {
        MightAsync::from_settlement(self.pending.map(move |settled| match settled {
            Settled::Value(v) => Settled::Value(f(v)),
            Settled::Failure(deferred) => Settled::Failure(deferred),
        }))
    }

    /// Transform the error, composed after the stored normalization.
    ///
    /// Neither runs until the error is surfaced.
    pub fn with_error<R, F>(self, f: F) -> MightAsync<V, R>
    where
        R: Send + 'static,
        F: FnOnce(E) -> R + Send + 'static,
    {
        MightAsync::from_settlement(self.pending.map(move |settled| match settled {
            Settled::Value(v) => Settled::Value(v),
            Settled::Failure(deferred) => Settled::Failure(deferred.map(f)),
        }))
    }

    /// Turn a failure into a success computed from the normalized error.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> V + Send + 'static,
    {
        MightAsync::from_settlement(self.pending.map(move |settled| match settled {
            Settled::Value(v) => Settled::Value(v),
            Settled::Failure(deferred) => Settled::Value(f(deferred.force())),
        }))
    }

    /// Chain a fallible step that may be synchronous ([`Might`]) or
    /// asynchronous (`MightAsync`).
    ///
    /// The step runs only after this computation has succeeded. A synchronous
    /// step settles in the same poll. A failed synchronous step contributes its
    /// error as-is: it is already an `IE` and skips this wrapper's
    /// normalization. An original failure is normalized, then converted with
    /// [`Into`].
    ///
    /// ```rust
    /// use might::{err, ok, Might, MightAsync};
    ///
    /// # tokio_test::block_on(async {
    /// let checked = MightAsync::<i32, String>::ok(7)
    ///     .pipe(|x| if x > 5 { err("too big".to_string()) } else { ok(x) })
    ///     .await;
    /// assert_eq!(checked, Might::Err("too big".to_string()));
    ///
    /// let chained = MightAsync::<i32, String>::ok(1)
    ///     .pipe(|x| MightAsync::<i32, String>::ok(x + 1))
    ///     .await;
    /// assert_eq!(chained, Might::Ok(2));
    /// # });
    /// ```
    pub fn pipe<IV, IE, P, F>(self, f: F) -> MightAsync<IV, IE>
    where
        IV: Send + 'static,
        IE: Send + 'static,
        E: Into<IE>,
        P: IntoMightAsync<IV, IE>,
        F: FnOnce(V) -> P + Send + 'static,
    {
        let pending = self.pending;
        MightAsync::from_settlement(async move {
            match pending.await {
                Settled::Value(v) => {
                    let next = f(v).into_might_async();
                    next.pending.await
                }
                Settled::Failure(deferred) => Settled::Failure(deferred.map(Into::into)),
            }
        })
    }

    /// Cleanup continuation: run `f` after the computation settles, on either
    /// path, and keep the outcome.
    pub fn finally<F>(self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        MightAsync::from_settlement(self.pending.map(move |settled| {
            f();
            settled
        }))
    }
}

impl<V, E> Future for MightAsync<V, E>
where
    E: 'static,
{
    type Output = Might<V, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.pending.poll_unpin(cx).map(Settled::into_might)
    }
}

impl<V, E> From<Might<V, E>> for MightAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    fn from(might: Might<V, E>) -> Self {
        MightAsync::from_settlement(future::ready(Settled::from(might)))
    }
}

/// Anything a [`MightAsync::pipe`] step may return.
///
/// Implemented for the synchronous [`Might`] and for `MightAsync` itself.
pub trait IntoMightAsync<V, E> {
    /// Convert into a pending result.
    fn into_might_async(self) -> MightAsync<V, E>;
}

impl<V, E> IntoMightAsync<V, E> for Might<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    fn into_might_async(self) -> MightAsync<V, E> {
        MightAsync::from(self)
    }
}

impl<V, E> IntoMightAsync<V, E> for MightAsync<V, E> {
    fn into_might_async(self) -> MightAsync<V, E> {
        self
    }
}
