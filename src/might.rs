//! The synchronous result algebra.
//!
//! A [`Might<V, E>`] is the reified outcome of a fallible operation: either a
//! success payload (`Might::Ok`) or a domain failure (`Might::Err`). Failures
//! are ordinary values here. They are propagated by explicit short-circuiting
//! in the combinators, never by panicking.
//!
//! # Combinators
//!
//! | Operation      | On `Ok(v)`           | On `Err(e)`          |
//! |----------------|----------------------|----------------------|
//! | `match_with`   | `on_value(v)`        | `on_error(e)`        |
//! | `with_value`   | `Ok(f(v))`           | `Err(e)`             |
//! | `with_error`   | `Ok(v)`              | `Err(f(e))`          |
//! | `recover`      | `Ok(v)`              | `Ok(f(e))`           |
//! | `pipe`         | `f(v)`               | `Err(e)`             |
//! | `peek`         | `Some(v)`            | `None`               |
//!
//! Panics raised inside a callback are not caught; only the adapters in
//! [`crate::adapters`] turn raised failures into domain failures.
//!
//! # Examples
//!
//! ```rust
//! use might::{err, ok, Might};
//!
//! let doubled = ok::<_, String>(5).with_value(|x| x * 2);
//! assert_eq!(doubled.match_with(|v| v, |_| -1), 10);
//!
//! let failed: Might<i32, &str> = err("boom");
//! let piped = failed.pipe(|x| ok::<_, &str>(x + 1));
//! assert_eq!(piped, err("boom"));
//! ```

/// The outcome of a fallible operation: a value or an error, never both.
///
/// `Might` is a closed two-variant sum. Every combinator consumes `self` and
/// builds a new `Might`, so a constructed value is never mutated.
///
/// # Example
///
/// ```rust
/// use might::{err, ok, Might};
///
/// fn parse_port(s: &str) -> Might<u16, String> {
///     match s.parse::<u16>() {
///         Ok(port) => ok(port),
///         Err(e) => err(format!("invalid port {s:?}: {e}")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").peek(), Some(8080));
/// assert!(parse_port("http").is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Might` may be an `Err` variant, which should be handled"]
pub enum Might<V, E> {
    /// A success payload.
    Ok(V),
    /// A domain failure payload.
    Err(E),
}

/// Create a successful [`Might`].
///
/// ```rust
/// use might::ok;
///
/// let m = ok::<_, String>(42);
/// assert!(m.is_ok());
/// assert_eq!(m.value(), Some(&42));
/// ```
#[inline]
pub fn ok<V, E>(value: V) -> Might<V, E> {
    Might::Ok(value)
}

/// Create a failed [`Might`].
///
/// ```rust
/// use might::err;
///
/// let m = err::<i32, _>("boom");
/// assert!(m.is_error());
/// assert_eq!(m.error(), Some(&"boom"));
/// ```
#[inline]
pub fn err<V, E>(error: E) -> Might<V, E> {
    Might::Err(error)
}

impl<V, E> Might<V, E> {
    // ========== Constructors ==========

    /// Create a successful result. Same as [`ok`].
    #[inline]
    pub fn ok(value: V) -> Self {
        Might::Ok(value)
    }

    /// Create a failed result. Same as [`err`].
    #[inline]
    pub fn err(error: E) -> Self {
        Might::Err(error)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok`.
    ///
    /// Always the complement of [`Might::is_error`].
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Might::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Might::Err(_))
    }

    // ========== Payload access ==========

    /// Borrow the success payload, if any.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).value(), Some(&1));
    /// assert_eq!(err::<i32, _>("e").value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Might::Ok(v) => Some(v),
            Might::Err(_) => None,
        }
    }

    /// Borrow the failure payload, if any.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(err::<i32, _>("e").error(), Some(&"e"));
    /// assert_eq!(ok::<_, &str>(1).error(), None);
    /// ```
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Might::Ok(_) => None,
            Might::Err(e) => Some(e),
        }
    }

    /// Take the success payload, discarding any failure.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Might::Ok(v) => Some(v),
            Might::Err(_) => None,
        }
    }

    /// Take the failure payload, discarding any success.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Might::Ok(_) => None,
            Might::Err(e) => Some(e),
        }
    }

    /// Convert to `Might<&V, &E>`.
    ///
    /// ```rust
    /// use might::{ok, Might};
    ///
    /// let m: Might<String, String> = ok("hello".to_string());
    /// let len = m.as_ref().with_value(|s| s.len());
    /// assert_eq!(len, ok(5));
    /// assert!(m.is_ok());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Might<&V, &E> {
        match self {
            Might::Ok(v) => Might::Ok(v),
            Might::Err(e) => Might::Err(e),
        }
    }

    // ========== Combinators ==========

    /// Fold both variants into a single value.
    ///
    /// Calls `on_value` for an `Ok` and `on_error` for an `Err`, returning
    /// whichever branch ran.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// let describe = |n: i32| n.to_string();
    /// assert_eq!(ok::<_, &str>(7).match_with(describe, |e| e.to_string()), "7");
    /// assert_eq!(err::<i32, _>("nope").match_with(describe, |e| e.to_string()), "nope");
    /// ```
    #[inline]
    pub fn match_with<R, F, G>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Might::Ok(v) => on_value(v),
            Might::Err(e) => on_error(e),
        }
    }

    /// Transform the success payload. An `Err` passes through untouched and
    /// `f` is not called.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(21).with_value(|x| x * 2), ok(42));
    /// assert_eq!(err::<i32, _>("e").with_value(|x| x * 2), err("e"));
    /// ```
    #[inline]
    pub fn with_value<R, F>(self, f: F) -> Might<R, E>
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Might::Ok(v) => Might::Ok(f(v)),
            Might::Err(e) => Might::Err(e),
        }
    }

    /// Transform the failure payload. An `Ok` passes through untouched and
    /// `f` is not called.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(err::<i32, _>("e").with_error(str::len), err(1));
    /// assert_eq!(ok::<_, &str>(3).with_error(str::len), ok(3));
    /// ```
    #[inline]
    pub fn with_error<R, F>(self, f: F) -> Might<V, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Might::Ok(v) => Might::Ok(v),
            Might::Err(e) => Might::Err(f(e)),
        }
    }

    /// Turn a failure into a success by computing a value from the error.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(err::<usize, _>("oops").recover(str::len), ok(4));
    /// assert_eq!(ok::<_, &str>(1).recover(str::len), ok(1));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Might<V, E>
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Might::Ok(v) => Might::Ok(v),
            Might::Err(e) => Might::Ok(f(e)),
        }
    }

    /// Chain a fallible step on the success payload (monadic bind).
    ///
    /// On `Ok(v)` the result is `f(v)`. On `Err(e)` the step is skipped and the
    /// error is converted into the step's error type with [`Into`]. This lets a
    /// chain of heterogeneous steps accumulate a closed set of failures in one
    /// enum.
    ///
    /// The step's error type is not inferred from `self`, so a step built from
    /// bare `ok(..)` needs it annotated, as in `ok::<_, E>(x + 1)` or through
    /// the step's return type.
    ///
    /// ```rust
    /// use might::{err, ok, Might};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Parse(String),
    ///     Range(i64),
    /// }
    ///
    /// impl From<String> for AppError {
    ///     fn from(e: String) -> Self {
    ///         AppError::Parse(e)
    ///     }
    /// }
    ///
    /// fn parse(s: &str) -> Might<i64, String> {
    ///     s.parse::<i64>().map_err(|e| e.to_string()).into()
    /// }
    ///
    /// fn in_range(n: i64) -> Might<i64, AppError> {
    ///     if (0..100).contains(&n) { ok(n) } else { err(AppError::Range(n)) }
    /// }
    ///
    /// assert_eq!(parse("42").pipe(in_range), ok(42));
    /// assert_eq!(parse("420").pipe(in_range), err(AppError::Range(420)));
    /// assert!(matches!(parse("x").pipe(in_range), Might::Err(AppError::Parse(_))));
    ///
    /// let next = ok::<i32, String>(1).pipe(|x| ok::<_, String>(x + 1));
    /// assert_eq!(next, ok(2));
    /// ```
    #[inline]
    pub fn pipe<IV, IE, F>(self, f: F) -> Might<IV, IE>
    where
        F: FnOnce(V) -> Might<IV, IE>,
        E: Into<IE>,
    {
        match self {
            Might::Ok(v) => f(v),
            Might::Err(e) => Might::Err(e.into()),
        }
    }

    // ========== Escape hatches ==========

    /// Leave the algebra: the success payload, or `None` for a failure.
    ///
    /// Never panics. `None` is the absent-value sentinel: an `Err` never
    /// fabricates a value.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(5).peek(), Some(5));
    /// assert_eq!(err::<i32, _>("e").peek(), None);
    /// ```
    #[inline]
    pub fn peek(self) -> Option<V> {
        self.into_value()
    }

    /// Leave the algebra with a fallback for the failure case.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(5).peek_or(0), 5);
    /// assert_eq!(err::<i32, _>("e").peek_or(0), 0);
    /// ```
    #[inline]
    pub fn peek_or(self, default: V) -> V {
        match self {
            Might::Ok(v) => v,
            Might::Err(_) => default,
        }
    }

    /// Like [`Might::peek_or`], but the fallback is computed lazily.
    #[inline]
    pub fn peek_or_else<F>(self, default: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Might::Ok(v) => v,
            Might::Err(_) => default(),
        }
    }

    // ========== Conversions ==========

    /// Convert into a standard `Result`.
    ///
    /// ```rust
    /// use might::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).into_result(), Ok(1));
    /// assert_eq!(err::<i32, _>("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Might::Ok(v) => Ok(v),
            Might::Err(e) => Err(e),
        }
    }
}

impl<V, E> From<Result<V, E>> for Might<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(v) => Might::Ok(v),
            Err(e) => Might::Err(e),
        }
    }
}

impl<V, E> From<Might<V, E>> for Result<V, E> {
    fn from(might: Might<V, E>) -> Self {
        might.into_result()
    }
}

// ========== Try trait (nightly) ==========

#[cfg(feature = "try_trait")]
use std::convert::Infallible;
#[cfg(feature = "try_trait")]
use std::ops::{ControlFlow, FromResidual, Try};

#[cfg(feature = "try_trait")]
impl<V, E> Try for Might<V, E> {
    type Output = V;
    type Residual = Might<Infallible, E>;

    #[inline]
    fn from_output(output: V) -> Self {
        Might::Ok(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, V> {
        match self {
            Might::Ok(v) => ControlFlow::Continue(v),
            Might::Err(e) => ControlFlow::Break(Might::Err(e)),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<V, E, F: From<E>> FromResidual<Might<Infallible, E>> for Might<V, F> {
    #[inline]
    fn from_residual(residual: Might<Infallible, E>) -> Self {
        match residual {
            Might::Ok(never) => match never {},
            Might::Err(e) => Might::Err(From::from(e)),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<V, E, F: From<E>> FromResidual<Result<Infallible, E>> for Might<V, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(e) => Might::Err(From::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors_are_exclusive() {
        let good: Might<i32, &str> = ok(1);
        let bad: Might<i32, &str> = err("e");

        assert!(good.is_ok() && !good.is_error());
        assert!(bad.is_error() && !bad.is_ok());
        assert_eq!((good.value(), good.error()), (Some(&1), None));
        assert_eq!((bad.value(), bad.error()), (None, Some(&"e")));
    }

    #[test]
    fn test_associated_constructors_match_free_functions() {
        assert_eq!(Might::<i32, &str>::ok(1), ok(1));
        assert_eq!(Might::<i32, &str>::err("e"), err("e"));
    }

    #[test]
    fn test_match_with_dispatches_by_variant() {
        assert_eq!(ok::<_, i32>(5).match_with(|v| v + 1, |e| e - 1), 6);
        assert_eq!(err::<i32, _>(5).match_with(|v| v + 1, |e| e - 1), 4);
    }

    #[test]
    fn test_with_value_short_circuits_on_err() {
        let calls = Cell::new(0);
        let result = err::<i32, &str>("e").with_value(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(result, err("e"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_with_value_changes_value_type() {
        let result = ok::<_, ()>(3).with_value(|x| "x".repeat(x));
        assert_eq!(result, ok("xxx".to_string()));
    }

    #[test]
    fn test_with_error_short_circuits_on_ok() {
        let calls = Cell::new(0);
        let result = ok::<i32, &str>(1).with_error(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });
        assert_eq!(result, ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_with_error_maps_error() {
        assert_eq!(err::<i32, _>("boom").with_error(str::len), err(4));
    }

    #[test]
    fn test_recover_converts_failure() {
        assert_eq!(err::<i32, i32>(3).recover(|e| e * 10), ok(30));
    }

    #[test]
    fn test_recover_skips_success() {
        let calls = Cell::new(0);
        let result = ok::<i32, i32>(1).recover(|e| {
            calls.set(calls.get() + 1);
            e
        });
        assert_eq!(result, ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_pipe_binds_on_ok() {
        let result = ok::<i32, &str>(1).pipe(|x| ok::<_, &str>(x + 1));
        assert_eq!(result, ok(2));

        let result = ok::<i32, &str>(1).pipe(|_| err::<i32, &str>("inner"));
        assert_eq!(result, err("inner"));
    }

    #[test]
    fn test_pipe_never_runs_on_err() {
        let calls = Cell::new(0);
        let result = err::<i32, &str>("boom").pipe(|x| {
            calls.set(calls.get() + 1);
            ok::<_, &str>(x + 1)
        });
        assert_eq!(result.match_with(|v| v.to_string(), |e| e.to_string()), "boom");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_pipe_widens_error_with_into() {
        #[derive(Debug, PartialEq)]
        enum Wide {
            Narrow(u8),
            Other,
        }

        impl From<u8> for Wide {
            fn from(e: u8) -> Self {
                Wide::Narrow(e)
            }
        }

        let outer = err::<i32, u8>(7).pipe(|_| err::<i32, Wide>(Wide::Other));
        assert_eq!(outer, err(Wide::Narrow(7)));

        let inner = ok::<i32, u8>(1).pipe(|_| err::<i32, Wide>(Wide::Other));
        assert_eq!(inner, err(Wide::Other));
    }

    #[test]
    fn test_peek_variants() {
        assert_eq!(ok::<_, &str>(5).peek(), Some(5));
        assert_eq!(err::<i32, _>("e").peek(), None);
        assert_eq!(ok::<_, &str>(5).peek_or(0), 5);
        assert_eq!(err::<i32, _>("e").peek_or(0), 0);
        assert_eq!(err::<i32, _>("e").peek_or_else(|| 9), 9);
    }

    #[test]
    fn test_result_round_trip() {
        let m: Might<i32, String> = Ok(1).into();
        assert_eq!(m, ok(1));

        let r: Result<i32, String> = err::<i32, _>("e".to_string()).into();
        assert_eq!(r, Err("e".to_string()));
    }

    #[test]
    #[should_panic(expected = "callback defect")]
    fn test_callback_panics_propagate() {
        let _ = ok::<i32, ()>(1).with_value(|_| -> i32 { panic!("callback defect") });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_externally_tagged() {
        let json = serde_json::to_string(&ok::<i32, String>(1)).unwrap();
        assert_eq!(json, r#"{"Ok":1}"#);

        let back: Might<i32, String> = serde_json::from_str(r#"{"Err":"bad"}"#).unwrap();
        assert_eq!(back, err("bad".to_string()));
    }
}
