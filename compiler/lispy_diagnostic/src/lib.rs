//! Diagnostic system for reporting syntax errors.
//!
//! A diagnostic has:
//! - An error code for searchability (`lispy explain E1001`)
//! - A message saying what went wrong
//! - Labelled spans saying where
//! - Notes and suggestions saying why and how to fix it
//!
//! Semantic errors (division by zero and friends) are ordinary values in the
//! evaluator. They share the `E6xxx` code range so `explain` covers them too.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
