#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use might::{err, ok, Might};

#[test]
fn test_might_question_mark() {
    fn half(n: i32) -> Might<i32, String> {
        if n % 2 == 0 {
            ok(n / 2)
        } else {
            err(format!("{n} is odd"))
        }
    }

    fn quarter(n: i32) -> Might<i32, String> {
        let h = half(n)?;
        half(h)
    }

    assert_eq!(quarter(8), ok(2));
    assert_eq!(quarter(6), err("3 is odd".to_string()));
}

#[test]
fn test_mixing_result_and_might() {
    fn parse_positive(s: &str) -> Might<u32, String> {
        let n: i64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
        if n > 0 {
            ok(n as u32)
        } else {
            err("must be positive".to_string())
        }
    }

    assert_eq!(parse_positive("12"), ok(12));
    assert_eq!(parse_positive("-1"), err("must be positive".to_string()));
    assert_eq!(parse_positive("x"), err("not a number: x".to_string()));
}

#[test]
fn test_question_mark_widens_error_with_from() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Input(String),
    }

    impl From<String> for AppError {
        fn from(e: String) -> Self {
            AppError::Input(e)
        }
    }

    fn step() -> Might<i32, String> {
        err("empty".to_string())
    }

    fn run() -> Might<i32, AppError> {
        let v = step()?;
        ok(v + 1)
    }

    assert_eq!(run(), err(AppError::Input("empty".to_string())));
}
