//! Testing utilities for code that returns `Might` values
//!
//! Assertion macros for the two variants, and (behind the `proptest` feature)
//! an `Arbitrary` implementation so property tests can draw `Might` values
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use might::{assert_err, assert_err_eq, assert_ok, err, ok, Might};
//!
//! let good: Might<i32, String> = ok(42);
//! assert_ok!(good);
//!
//! let bad: Might<i32, &str> = err("boom");
//! assert_err!(bad);
//! assert_err_eq!(err::<i32, _>("boom"), "boom");
//! ```

/// Assert that a `Might` is `Ok`, evaluating to the value.
///
/// Panics with the error if it is an `Err`.
///
/// # Example
///
/// ```rust
/// use might::{assert_ok, ok, Might};
///
/// let m: Might<_, String> = ok(42);
/// let value = assert_ok!(m);
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($might:expr) => {
        match $might {
            $crate::Might::Ok(value) => value,
            $crate::Might::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that a `Might` is `Err`, evaluating to the error.
///
/// Panics with the value if it is an `Ok`.
#[macro_export]
macro_rules! assert_err {
    ($might:expr) => {
        match $might {
            $crate::Might::Err(e) => e,
            $crate::Might::Ok(value) => {
                panic!("Expected Err, got Ok: {:?}", value);
            }
        }
    };
}

/// Assert that a `Might` is `Err` with a specific error.
///
/// # Example
///
/// ```rust
/// use might::{assert_err_eq, err};
///
/// assert_err_eq!(err::<i32, _>("bad input"), "bad input");
/// ```
#[macro_export]
macro_rules! assert_err_eq {
    ($might:expr, $expected:expr) => {
        match $might {
            $crate::Might::Err(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Might::Ok(value) => {
                panic!(
                    "Expected Err({:?}), got Ok: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::Might;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<V, E> Arbitrary for Might<V, E>
where
    V: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (V::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (v_params, e_params) = args;
        prop_oneof![
            any_with::<V>(v_params).prop_map(Might::Ok),
            any_with::<E>(e_params).prop_map(Might::Err),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{err, ok, Might};

    #[test]
    fn assert_ok_macro_yields_value() {
        let value = assert_ok!(ok::<_, String>(42));
        assert_eq!(value, 42);
    }

    #[test]
    fn assert_err_macro_yields_error() {
        let error = assert_err!(err::<i32, _>("boom"));
        assert_eq!(error, "boom");
    }

    #[test]
    fn assert_err_eq_macro() {
        assert_err_eq!(err::<i32, _>(vec!["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn assert_ok_panics_on_err() {
        let m: Might<i32, &str> = err("boom");
        assert_ok!(m);
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn assert_err_panics_on_ok() {
        let m: Might<i32, &str> = ok(1);
        assert_err!(m);
    }

    #[test]
    #[should_panic(expected = "Expected Err(\"boom\"), got Ok")]
    fn assert_err_eq_panics_on_ok() {
        assert_err_eq!(ok::<i32, &str>(1), "boom");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Might;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn might_arbitrary_generates_exclusive_instances(
                m in any::<Might<i32, String>>()
            ) {
                prop_assert_ne!(m.is_ok(), m.is_error());
                prop_assert_eq!(m.value().is_some(), m.is_ok());
                prop_assert_eq!(m.error().is_some(), m.is_error());
            }
        }
    }
}
