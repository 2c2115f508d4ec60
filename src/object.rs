//! Fixed-shape object and open record validation.
//!
//! [`object`] validates a declared set of fields against per-field
//! validators; [`record`] validates every key the *input* happens to carry
//! against one shared value validator.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::path::PathSegment;
use crate::validator::{Input, Validator};

/// Definition of a declared field within an object validator.
struct FieldDef {
    validator: Validator<Value>,
    required: bool,
}

/// Builder for a fixed-shape object validator.
///
/// Fields are validated in declaration order. Each declared field's
/// validator receives the input value under that name, or
/// [`Input::Absent`] if the key is missing, which is distinct from `null`.
/// A field validator that accepts absence (e.g. via
/// [`optional`](crate::combinator::optional) or
/// [`with_default`](crate::combinator::with_default)) makes the field
/// effectively optional without weakening its runtime check.
///
/// The first failing field stops validation and its diagnostic is returned,
/// prefixed with the field name. On success the output contains exactly the
/// declared fields with narrowed values; undeclared input keys are dropped.
///
/// # Example
///
/// ```rust
/// use scrutiny::{number, object, optional, string};
/// use serde_json::json;
///
/// let user = object()
///     .field("name", string())
///     .field("age", number())
///     .field("email", optional(string()))
///     .finish();
///
/// let result = user.validate_value(&json!({
///     "name": "Ada",
///     "age": 36,
///     "unrelated": true
/// }));
/// assert!(result.is_success());
/// ```
pub struct ObjectValidator {
    fields: IndexMap<String, FieldDef>,
}

/// Starts building a fixed-shape object validator.
pub fn object() -> ObjectValidator {
    ObjectValidator::new()
}

impl ObjectValidator {
    /// Creates an object validator with no declared fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field validated by `validator`.
    ///
    /// A missing key is passed to the validator as [`Input::Absent`]; it is
    /// up to the validator whether absence is acceptable.
    pub fn field<T>(mut self, name: impl Into<String>, validator: Validator<T>) -> Self
    where
        T: Into<Value> + 'static,
    {
        self.fields.insert(
            name.into(),
            FieldDef {
                validator: validator.map(Into::into),
                required: true,
            },
        );
        self
    }

    /// Declares a field that is skipped entirely when absent.
    ///
    /// Unlike wrapping the validator in
    /// [`optional`](crate::combinator::optional), a field declared this way
    /// is omitted from the output map when the key is missing, rather than
    /// appearing with a `null` value.
    pub fn optional<T>(mut self, name: impl Into<String>, validator: Validator<T>) -> Self
    where
        T: Into<Value> + 'static,
    {
        self.fields.insert(
            name.into(),
            FieldDef {
                validator: validator.map(Into::into),
                required: false,
            },
        );
        self
    }

    /// Seals the declared shape into a validator.
    ///
    /// The field mapping is fixed here and never mutated afterward.
    pub fn finish(self) -> Validator<Map<String, Value>> {
        let fields = self.fields;
        Validator::new(move |input| {
            let incoming = match input.value() {
                Some(Value::Object(map)) => map,
                _ => return Validator::mismatch(input, "an object"),
            };

            let mut narrowed = Map::new();
            for (name, def) in &fields {
                let field_input = match incoming.get(name) {
                    Some(value) => Input::Value(value),
                    None => Input::Absent,
                };

                if field_input.is_absent() && !def.required {
                    continue;
                }

                match def.validator.validate(field_input) {
                    Validation::Success(value) => {
                        narrowed.insert(name.clone(), value);
                    }
                    Validation::Failure(diagnostic) => {
                        return Validation::Failure(
                            diagnostic.prefix(PathSegment::field(name.clone())),
                        );
                    }
                }
            }

            Validation::Success(narrowed)
        })
    }
}

impl Default for ObjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates every key present in the input against one value validator.
///
/// Non-object input fails with expectation `an object`. Keys are checked in
/// input order; the first failing key stops validation, its diagnostic
/// prefixed with the key. On success the output carries the same keys with
/// each value narrowed.
///
/// ```rust
/// use scrutiny::{boolean, record};
/// use serde_json::json;
///
/// let flags = record(boolean());
///
/// assert!(flags.validate_value(&json!({"a": true, "b": false})).is_success());
/// assert!(flags.validate_value(&json!({"a": true, "b": "x"})).is_failure());
/// ```
pub fn record<T: 'static>(value: Validator<T>) -> Validator<IndexMap<String, T>> {
    Validator::new(move |input| {
        let incoming = match input.value() {
            Some(Value::Object(map)) => map,
            _ => return Validator::mismatch(input, "an object"),
        };

        let mut narrowed = IndexMap::with_capacity(incoming.len());
        for (key, item) in incoming {
            match value.validate(Input::Value(item)) {
                Validation::Success(checked) => {
                    narrowed.insert(key.clone(), checked);
                }
                Validation::Failure(diagnostic) => {
                    return Validation::Failure(diagnostic.prefix(PathSegment::field(key.clone())));
                }
            }
        }

        Validation::Success(narrowed)
    })
}
