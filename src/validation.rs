//! The exception-style entry point.

use serde_json::Value;

use crate::error::Diagnostic;
use crate::validator::{Input, Validator};
use stillwater::Validation;

/// Runs a validator over a value, unwrapping the outcome into a `Result`.
///
/// On success the narrowed value is returned directly. On failure the
/// [`Diagnostic`] is returned as the error; its `Display` output is the
/// fully rendered explanation, so `?` and `unwrap` style call sites see a
/// message like `data is invalid. We expected a string but found 3
/// instead.`
///
/// # Errors
///
/// Returns the failure diagnostic when the value does not match.
///
/// # Example
///
/// ```rust
/// use scrutiny::{string, validate};
/// use serde_json::json;
///
/// let greeting = validate(&json!("hello"), &string()).unwrap();
/// assert_eq!(greeting, "hello");
///
/// let diagnostic = validate(&json!(3), &string()).unwrap_err();
/// assert_eq!(
///     diagnostic.to_string(),
///     "data is invalid. We expected a string but found 3 instead."
/// );
/// ```
pub fn validate<T: 'static>(value: &Value, validator: &Validator<T>) -> Result<T, Diagnostic> {
    match validator.validate(Input::Value(value)) {
        Validation::Success(narrowed) => Ok(narrowed),
        Validation::Failure(diagnostic) => Err(diagnostic),
    }
}
