//! Case-mapping object validation at the wire boundary.
//!
//! Wire formats frequently carry `snake_case` keys while the consuming code
//! declares `camelCase` field names. [`snake_object`] bridges the two: each
//! declared field is read from the input under its snake_case spelling, and
//! the narrowed output is keyed by the original declared names.
//!
//! Unlike [`object`](crate::object::object), this combinator does not stop
//! at the first bad field: every declared field is checked and all failures
//! are merged into a single diagnostic, one labeled expectation per field.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::Diagnostic;
use crate::path::PathSegment;
use crate::validator::{Input, Validator};

/// Builder for a snake_case-reading object validator.
///
/// # Example
///
/// ```rust
/// use scrutiny::{number, snake_object, string};
/// use serde_json::json;
///
/// let account = snake_object()
///     .field("userName", string())
///     .field("maxRetries", number())
///     .finish();
///
/// // Input keys are snake_case; output keys are the declared camelCase.
/// let result = account.validate_value(&json!({
///     "user_name": "ada",
///     "max_retries": 3
/// }));
/// assert!(result.is_success());
/// ```
pub struct SnakeObjectValidator {
    fields: IndexMap<String, Validator<Value>>,
}

/// Starts building a snake_case-reading object validator.
pub fn snake_object() -> SnakeObjectValidator {
    SnakeObjectValidator::new()
}

impl SnakeObjectValidator {
    /// Creates a validator with no declared fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a camelCase field, read from the input under its snake_case
    /// spelling. A missing key is passed to the validator as
    /// [`Input::Absent`].
    pub fn field<T>(mut self, name: impl Into<String>, validator: Validator<T>) -> Self
    where
        T: Into<Value> + 'static,
    {
        self.fields.insert(name.into(), validator.map(Into::into));
        self
    }

    /// Seals the declared shape into a validator.
    ///
    /// Non-object input is validated as if it were an empty object, so a
    /// shape whose every field tolerates absence still succeeds; if any
    /// field then fails, the reported expectation is `an object` at the
    /// outer location.
    pub fn finish(self) -> Validator<Map<String, Value>> {
        let fields = self.fields;
        Validator::new(move |input| {
            let incoming = input.value().and_then(Value::as_object);

            let mut narrowed = Map::new();
            let mut failure: Option<Diagnostic> = None;

            for (name, validator) in &fields {
                let snake_key = snake_case(name);
                let field_input = match incoming.and_then(|map| map.get(&snake_key)) {
                    Some(value) => Input::Value(value),
                    None => Input::Absent,
                };

                match validator.validate(field_input) {
                    Validation::Success(value) => {
                        narrowed.insert(name.clone(), value);
                    }
                    Validation::Failure(diagnostic) => {
                        let wrapped = Diagnostic::label(
                            format!("a valid '{}' field", snake_key),
                            diagnostic.prefix(PathSegment::field(snake_key.clone())),
                        );
                        failure = Some(match failure.take() {
                            Some(merged) => merged.combine(wrapped),
                            None => Diagnostic::empty(input).combine(wrapped),
                        });
                    }
                }
            }

            match failure {
                None => Validation::Success(narrowed),
                Some(_) if incoming.is_none() => Validator::mismatch(input, "an object"),
                Some(diagnostic) => Validation::Failure(diagnostic),
            }
        })
    }
}

impl Default for SnakeObjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a camelCase name to snake_case.
///
/// Non-leading uppercase letters are lowered behind an underscore; the
/// leading character is kept as written.
fn snake_case(name: &str) -> String {
    let mut converted = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            converted.push('_');
            converted.push(ch.to_ascii_lowercase());
        } else {
            converted.push(ch);
        }
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::snake_case;

    #[test]
    fn test_snake_case_conversion() {
        assert_eq!(snake_case("userName"), "user_name");
        assert_eq!(snake_case("maxRetryCount"), "max_retry_count");
        assert_eq!(snake_case("plain"), "plain");
        assert_eq!(snake_case(""), "");
    }
}
