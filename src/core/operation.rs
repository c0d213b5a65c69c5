use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, Result};
use crate::ops;

/// One of the arithmetic operations exposed by [`crate::ops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Percentage,
    Average,
}

/// Number of operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// A list of operands. Its length is not checked here, but `average`
    /// rejects an empty list, so at least one operand is needed to succeed.
    Variadic,
}

impl Arity {
    /// Human-readable operand requirement, as shown by `calc list`.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Unary => "1 operand",
            Self::Binary => "2 operands",
            Self::Variadic => "1 or more operands",
        }
    }

    /// Fixed operand count, or `None` for variadic operations.
    pub fn count(self) -> Option<usize> {
        match self {
            Self::Unary => Some(1),
            Self::Binary => Some(2),
            Self::Variadic => None,
        }
    }
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Percentage,
        Operation::Average,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::SquareRoot => "square_root",
            Self::Percentage => "percentage",
            Self::Average => "average",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Self::SquareRoot => Arity::Unary,
            Self::Average => Arity::Variadic,
            _ => Arity::Binary,
        }
    }

    /// Apply the operation to `operands` after checking the operand count.
    pub fn apply(self, operands: &[f64]) -> Result<f64> {
        if let Some(expected) = self.arity().count() {
            if operands.len() != expected {
                return Err(CalcError::arity(self, expected, operands.len()));
            }
        }

        match (self, operands) {
            (Self::Add, &[a, b]) => Ok(ops::add(a, b)),
            (Self::Subtract, &[a, b]) => Ok(ops::subtract(a, b)),
            (Self::Multiply, &[a, b]) => Ok(ops::multiply(a, b)),
            (Self::Divide, &[a, b]) => ops::divide(a, b),
            (Self::Power, &[base, exponent]) => Ok(ops::power(base, exponent)),
            (Self::SquareRoot, &[n]) => ops::square_root(n),
            (Self::Percentage, &[value, percent]) => Ok(ops::percentage(value, percent)),
            (Self::Average, numbers) => ops::average(numbers),
            // Unreachable after the arity check above.
            (op, operands) => Err(CalcError::arity(
                op,
                op.arity().count().unwrap_or_default(),
                operands.len(),
            )),
        }
    }

    pub fn evaluate(self, operands: Vec<f64>) -> Result<Evaluation> {
        let result = self.apply(&operands)?;
        Ok(Evaluation {
            operation: self,
            operands,
            result,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" => Self::Add,
            "subtract" | "sub" => Self::Subtract,
            "multiply" | "mul" => Self::Multiply,
            "divide" | "div" => Self::Divide,
            "power" | "pow" => Self::Power,
            "square_root" | "sqrt" => Self::SquareRoot,
            "percentage" | "percent" => Self::Percentage,
            "average" | "avg" | "mean" => Self::Average,
            other => {
                return Err(CalcError::Other(anyhow::anyhow!(
                    "Unknown operation: {other}"
                )))
            }
        };
        Ok(op)
    }
}

/// Record of one successful operation call.
///
/// Non-finite values serialize as the strings `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    #[serde(with = "float_repr::seq")]
    pub operands: Vec<f64>,
    #[serde(with = "float_repr")]
    pub result: f64,
}

/// JSON numbers cannot hold infinities or NaN, so those are written as strings.
mod float_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    impl Repr {
        fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
            match self {
                Repr::Number(value) => Ok(value),
                Repr::Text(text) => text
                    .parse()
                    .map_err(|_| E::custom(format!("invalid number: {text}"))),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Repr::deserialize(deserializer)?.into_f64()
    }

    pub mod seq {
        use super::Repr;
        use serde::ser::SerializeSeq;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(values.len()))?;
            for value in values {
                if value.is_finite() {
                    seq.serialize_element(value)?;
                } else {
                    seq.serialize_element(&value.to_string())?;
                }
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
            Vec::<Repr>::deserialize(deserializer)?
                .into_iter()
                .map(Repr::into_f64)
                .collect()
        }
    }
}
