//! Arithmetic operations with explicit validation of undefined inputs.
//!
//! ```
//! use calculator::{divide, ErrorKind};
//!
//! assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
//! assert_eq!(divide(1.0, 0.0).unwrap_err().kind(), ErrorKind::DivideByZero);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ops;
pub mod output;

#[cfg(test)]
mod test_utils;

pub use crate::core::operation::{Arity, Evaluation, Operation};
pub use error::{CalcError, ErrorKind, Result};
pub use ops::{add, average, divide, multiply, percentage, power, square_root, subtract};
