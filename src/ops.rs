//! Arithmetic operations
//!
//! Stateless functions over `f64` scalars and slices. Inputs outside an
//! operation's domain are rejected with a [`CalcError`]; everything else
//! follows IEEE 754 semantics, including NaN and infinity propagation.

use tracing::debug;

use crate::error::{CalcError, Result};

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    debug!(a, b, "performing addition");
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    debug!(a, b, "performing subtraction");
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    debug!(a, b, "performing multiplication");
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivideByZero`] when `b` is zero of either sign.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    debug!(a, b, "performing division");
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// Raise `base` to `exponent`. Fractional and negative exponents are allowed.
pub fn power(base: f64, exponent: f64) -> f64 {
    debug!(base, exponent, "performing exponentiation");
    base.powf(exponent)
}

/// Square root of `n`.
///
/// Fails with a domain error when `n` is negative. NaN is passed through.
pub fn square_root(n: f64) -> Result<f64> {
    debug!(n, "performing square root");
    if n < 0.0 {
        return Err(CalcError::negative_square_root(n));
    }
    Ok(n.sqrt())
}

/// `percent` percent of `value`.
pub fn percentage(value: f64, percent: f64) -> f64 {
    debug!(value, percent, "performing percentage");
    (value * percent) / 100.0
}

/// Arithmetic mean of `numbers`.
///
/// Fails with a domain error when `numbers` is empty.
pub fn average(numbers: &[f64]) -> Result<f64> {
    debug!(count = numbers.len(), "performing average");
    if numbers.is_empty() {
        return Err(CalcError::EmptyAverage);
    }
    let sum: f64 = numbers.iter().sum();
    Ok(sum / numbers.len() as f64)
}
