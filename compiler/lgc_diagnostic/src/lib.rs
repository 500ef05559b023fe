//! Diagnostic system for predicate consistency reports.
//!
//! Every finding carries:
//! - An error code for searchability (`lgc explain E1004`)
//! - A clear message (what went wrong)
//! - A primary label quoting the offending rule (where it went wrong)
//! - A secondary label quoting the reference rule (what it was compared to)
//! - Notes and suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
