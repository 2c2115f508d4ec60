//! # Scrutiny
//!
//! A validation library that narrows untyped JSON to typed values and,
//! when the data does not match, pinpoints exactly where and why.
//!
//! ## Overview
//!
//! Code at an external boundary (a decoded wire message, a parsed config
//! file) receives data whose structure the compiler cannot see. Scrutiny
//! composes small, pure validators into a description of the expected
//! shape; running one either narrows the data to typed Rust values or
//! produces a single [`Diagnostic`] locating the mismatch by path and
//! explaining every layer of "why". When several alternatives fail at once
//! (a union), the branch failures are merged deterministically so the
//! deepest, most specific explanation is the one reported.
//!
//! ## Core Types
//!
//! - [`Validator`]: a pure, shareable check narrowing one input shape
//! - [`ValidationResult`]: success with the narrowed value, or failure
//!   with one [`Diagnostic`]
//! - [`Diagnostic`]: immutable, path-located failure explanation
//! - [`Path`]: where in the nested input a failure occurred
//!
//! ## Example
//!
//! ```rust
//! use scrutiny::{number, object, string, validate};
//! use serde_json::json;
//!
//! let user = object()
//!     .field("name", string())
//!     .field("age", number())
//!     .finish();
//!
//! let narrowed = validate(&json!({"name": "Ada", "age": 36}), &user).unwrap();
//! assert_eq!(narrowed["name"], json!("Ada"));
//!
//! let diagnostic = validate(&json!({"name": "Ada", "age": "36"}), &user).unwrap_err();
//! assert_eq!(
//!     diagnostic.to_string(),
//!     "data.age is invalid. We expected a number but found \"36\" instead."
//! );
//! ```

pub mod combinator;
pub mod error;
pub mod json;
pub mod object;
pub mod path;
pub mod primitive;
pub mod recursive;
pub mod transform;
pub mod validation;
pub mod validator;

pub use combinator::{array, intersection, label, nullable, optional, pure, union, with_default};
pub use error::{Diagnostic, Expectation, Received};
pub use json::json_text;
pub use object::{object, record, ObjectValidator};
pub use path::{Path, PathSegment};
pub use primitive::{
    any, bool_literal, boolean, missing, null, num_literal, number, str_literal, string,
};
pub use recursive::{lazy, DefineError, Placeholder};
pub use transform::{snake_object, SnakeObjectValidator};
pub use validation::validate;
pub use validator::{Input, Validator};

/// Type alias for validation outcomes carrying a single [`Diagnostic`].
pub type ValidationResult<T> = stillwater::Validation<T, Diagnostic>;
