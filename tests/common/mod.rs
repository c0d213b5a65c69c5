#![allow(dead_code)]

use calculator::{CalcError, ErrorKind};

/// Returns true when `actual` is within `rel` relative tolerance of `expected`.
/// Values below 1.0 in magnitude are compared with `rel` as an absolute bound.
pub fn approx_eq(actual: f64, expected: f64, rel: f64) -> bool {
    if actual == expected {
        return true;
    }
    let diff = (actual - expected).abs();
    let scale = actual.abs().max(expected.abs());
    diff <= rel * scale.max(1.0)
}

/// Asserts that two floats agree to within 1e-9 relative tolerance
pub fn assert_approx_eq(actual: f64, expected: f64) {
    assert_approx_eq_rel(actual, expected, 1e-9);
}

pub fn assert_approx_eq_rel(actual: f64, expected: f64, rel: f64) {
    assert!(
        approx_eq(actual, expected, rel),
        "Expected {actual} to be approximately {expected} (rel={rel})"
    );
}

/// Asserts that a Result is Ok and returns the value
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok result, but got Err: {e:?}"),
    }
}

/// Asserts that a calculation failed with the given kind and message
pub fn assert_calc_error<T: std::fmt::Debug>(
    result: Result<T, CalcError>,
    kind: ErrorKind,
    message: &str,
) {
    match result {
        Ok(value) => panic!("Expected {kind:?} error, but got Ok: {value:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected error kind for: {e}");
            assert_eq!(e.to_string(), message);
        }
    }
}
