//! Atomic validators for single JSON values.
//!
//! Each primitive checks one narrow runtime predicate and narrows the value
//! to the matching Rust type, or fails with a one-line diagnostic at the
//! current location.

use serde_json::Value;
use stillwater::Validation;

use crate::validator::Validator;

/// Accepts exactly booleans, narrowing to `bool`.
pub fn boolean() -> Validator<bool> {
    Validator::new(|input| match input.value() {
        Some(Value::Bool(flag)) => Validation::Success(*flag),
        _ => Validator::mismatch(input, "a boolean"),
    })
}

/// Accepts exactly numbers, narrowing to `f64`.
pub fn number() -> Validator<f64> {
    Validator::new(|input| match input.value() {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(number) => Validation::Success(number),
            None => Validator::mismatch(input, "a number"),
        },
        _ => Validator::mismatch(input, "a number"),
    })
}

/// Accepts exactly strings, narrowing to an owned `String`.
pub fn string() -> Validator<String> {
    Validator::new(|input| match input.value() {
        Some(Value::String(text)) => Validation::Success(text.clone()),
        _ => Validator::mismatch(input, "a string"),
    })
}

/// Accepts exactly `null`.
pub fn null() -> Validator<()> {
    Validator::new(|input| match input.value() {
        Some(Value::Null) => Validation::Success(()),
        _ => Validator::mismatch(input, "null"),
    })
}

/// Accepts only the absence of a value, e.g. a missing object field.
///
/// This is what makes an object field optional without weakening its check:
/// `missing().or(...)` via [`optional`](crate::combinator::optional).
pub fn missing() -> Validator<()> {
    Validator::new(|input| {
        if input.is_absent() {
            Validation::Success(())
        } else {
            Validator::mismatch(input, "nothing")
        }
    })
}

/// Accepts any input and returns it unchanged, type-erased.
///
/// An absent input narrows to `Value::Null`.
pub fn any() -> Validator<Value> {
    Validator::new(|input| {
        Validation::Success(match input.value() {
            Some(value) => value.clone(),
            None => Value::Null,
        })
    })
}

/// Accepts exactly the given string, both in kind and in value.
///
/// ```rust
/// use scrutiny::str_literal;
/// use serde_json::json;
///
/// let validator = str_literal("circle");
/// assert!(validator.validate_value(&json!("circle")).is_success());
/// assert!(validator.validate_value(&json!("square")).is_failure());
/// ```
pub fn str_literal(literal: impl Into<String>) -> Validator<String> {
    let literal = literal.into();
    let label = format!("\"{}\"", literal);
    Validator::new(move |input| match input.value() {
        Some(Value::String(text)) if *text == literal => Validation::Success(text.clone()),
        _ => Validator::mismatch(input, &label),
    })
}

/// Accepts exactly the given number, both in kind and in value.
pub fn num_literal(literal: f64) -> Validator<f64> {
    let label = format!("{}", literal);
    Validator::new(move |input| match input.value() {
        Some(Value::Number(number)) if number.as_f64() == Some(literal) => {
            Validation::Success(literal)
        }
        _ => Validator::mismatch(input, &label),
    })
}

/// Accepts exactly the given boolean.
pub fn bool_literal(literal: bool) -> Validator<bool> {
    let label = if literal { "true" } else { "false" };
    Validator::new(move |input| match input.value() {
        Some(Value::Bool(flag)) if *flag == literal => Validation::Success(literal),
        _ => Validator::mismatch(input, label),
    })
}
