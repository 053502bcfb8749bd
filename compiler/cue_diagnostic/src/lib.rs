//! Diagnostics for the CUE syntax analyzer.
//!
//! Every lexer and parser error is converted into a [`Diagnostic`]:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary label saying where
//! - notes and suggestions for context
//!
//! Emitters in [`emitter`] render diagnostics for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use error_code::ErrorCode;
