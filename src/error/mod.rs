//! Diagnostic types describing why validation failed.

mod diagnostic;

pub use diagnostic::{Diagnostic, Expectation, Received};
