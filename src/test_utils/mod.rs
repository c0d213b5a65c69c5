//! Shared test utilities
//!
//! Assertions for floating-point results and error kinds, used by the
//! in-crate unit tests. Integration tests carry their own in `tests/common`.

pub mod assertions;
