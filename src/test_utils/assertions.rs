//! Custom assertion helpers for arithmetic results
//!
//! Floating-point results are compared with a tolerance instead of exact
//! equality so that rounding in irrational or repeating results does not
//! produce spurious failures.

use crate::error::{CalcError, ErrorKind};

/// Default relative tolerance for [`assert_approx_eq`].
pub const DEFAULT_REL_TOLERANCE: f64 = 1e-9;

/// Returns true when `actual` is within `rel` relative tolerance of `expected`.
///
/// Values near zero fall back to an absolute tolerance of `rel`.
pub fn approx_eq(actual: f64, expected: f64, rel: f64) -> bool {
    if actual == expected {
        return true;
    }
    let diff = (actual - expected).abs();
    let scale = actual.abs().max(expected.abs());
    if scale < 1.0 {
        diff <= rel
    } else {
        diff <= rel * scale
    }
}

/// Asserts that two floats are equal within [`DEFAULT_REL_TOLERANCE`]
pub fn assert_approx_eq(actual: f64, expected: f64) {
    assert_approx_eq_rel(actual, expected, DEFAULT_REL_TOLERANCE);
}

/// Asserts that two floats are equal within the given relative tolerance
pub fn assert_approx_eq_rel(actual: f64, expected: f64, rel: f64) {
    assert!(
        approx_eq(actual, expected, rel),
        "Expected {actual} to be approximately {expected} (rel={rel})"
    );
}

/// Asserts that a Result is Ok and returns the value
pub fn assert_ok<T, E>(result: Result<T, E>) -> T
where
    E: std::fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok result, but got Err: {e:?}"),
    }
}

/// Asserts that a calculation failed with the given kind and message
pub fn assert_calc_error<T>(result: Result<T, CalcError>, kind: ErrorKind, message: &str)
where
    T: std::fmt::Debug,
{
    match result {
        Ok(value) => panic!("Expected {kind:?} error, but got Ok: {value:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected error kind for: {e}");
            assert_eq!(e.to_string(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3, 1e-9));
        assert!(approx_eq(1e10 + 1.0, 1e10, 1e-9));
        assert!(!approx_eq(1.0, 1.1, 1e-9));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, 1e-9));
        assert!(!approx_eq(f64::NAN, f64::NAN, 1e-9));
    }

    #[test]
    fn test_assert_approx_eq_rel() {
        assert_approx_eq_rel(1.41421, 1.4142, 1e-3);
    }

    #[test]
    #[should_panic(expected = "approximately")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 2.0);
    }

    #[test]
    fn test_assert_calc_error() {
        assert_calc_error(
            Err::<f64, _>(CalcError::DivideByZero),
            ErrorKind::DivideByZero,
            "Cannot divide by zero",
        );
    }

    #[test]
    fn test_assert_ok() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(assert_ok(result), 42);
    }
}
