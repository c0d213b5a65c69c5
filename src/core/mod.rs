//! Operation dispatch
//!
//! Names every arithmetic operation so callers such as the CLI can select one
//! at runtime, check operand counts and record what was computed.

pub mod operation;
