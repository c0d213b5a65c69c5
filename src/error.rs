use std::fmt;

use crate::core::operation::Operation;

#[derive(Debug)]
pub enum CalcError {
    DivideByZero,
    NegativeSquareRoot {
        value: f64,
    },
    EmptyAverage,
    Arity {
        operation: Operation,
        expected: usize,
        found: usize,
    },
    Other(anyhow::Error),
}

/// Coarse classification of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DivideByZero,
    /// The input lies outside the mathematically valid domain of the operation.
    Domain,
    Usage,
    Other,
}

impl CalcError {
    pub fn negative_square_root(value: f64) -> Self {
        Self::NegativeSquareRoot { value }
    }

    pub fn arity(operation: Operation, expected: usize, found: usize) -> Self {
        Self::Arity {
            operation,
            expected,
            found,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivideByZero => ErrorKind::DivideByZero,
            Self::NegativeSquareRoot { .. } | Self::EmptyAverage => ErrorKind::Domain,
            Self::Arity { .. } => ErrorKind::Usage,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "Cannot divide by zero"),
            Self::NegativeSquareRoot { .. } => {
                write!(f, "Cannot calculate square root of negative number")
            }
            Self::EmptyAverage => write!(f, "Cannot calculate average of empty list"),
            Self::Arity {
                operation,
                expected,
                found,
            } => {
                let noun = if *expected == 1 { "operand" } else { "operands" };
                write!(f, "{operation} expects {expected} {noun}, got {found}")
            }
            Self::Other(err) => write!(f, "{err:#}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for CalcError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(err).context("I/O error"))
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::Error::new(err).context("Invalid JSON"))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
