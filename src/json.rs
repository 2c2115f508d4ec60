//! The JSON-text boundary.
//!
//! External data often arrives as a string of JSON text embedded in an
//! already-decoded structure. [`json_text`] validates that the input is a
//! string and parses it, handing the decoded value onward for further
//! validation by whatever the caller chains after it.

use serde_json::Value;
use stillwater::Validation;

use crate::combinator::label;
use crate::primitive::string;
use crate::validator::Validator;

/// Requires a string of well-formed JSON text and narrows to its parsed value.
///
/// Non-string input fails under the label `JSON string`; a string that does
/// not parse fails with expectation `valid JSON`. The parsed value flows
/// onward *unvalidated*; chain a further validator over the result to
/// check its shape.
///
/// # Example
///
/// ```rust
/// use scrutiny::{json_text, validate};
/// use serde_json::json;
///
/// let parsed = validate(&json!("{\"a\": 1}"), &json_text()).unwrap();
/// assert_eq!(parsed, json!({"a": 1}));
///
/// assert!(validate(&json!("{not json"), &json_text()).is_err());
/// assert!(validate(&json!(42), &json_text()).is_err());
/// ```
pub fn json_text() -> Validator<Value> {
    let text = label("JSON string", string());
    Validator::new(move |input| match text.validate(input) {
        Validation::Failure(diagnostic) => Validation::Failure(diagnostic),
        Validation::Success(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => Validation::Success(parsed),
            Err(_) => Validator::mismatch(input, "valid JSON"),
        },
    })
}
