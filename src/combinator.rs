//! Structural combinators for composing validators.
//!
//! This module provides the higher-order pieces that build new validators
//! out of existing ones:
//! - [`array`]: sequence-preserving element validation
//! - [`union`]: alternatives, merged into one representative diagnostic
//! - [`intersection`]: conjunction over the same input
//! - [`label`], [`optional`], [`nullable`], [`with_default`], [`pure`]:
//!   wrappers that adjust acceptance or presentation
//!
//! # Example
//!
//! ```rust
//! use scrutiny::{array, label, number, object, str_literal, union};
//! use serde_json::json;
//!
//! let shape = union(vec![
//!     label(
//!         "a circle",
//!         object()
//!             .field("kind", str_literal("circle"))
//!             .field("radius", number())
//!             .finish(),
//!     ),
//!     label(
//!         "a rectangle",
//!         object()
//!             .field("kind", str_literal("rectangle"))
//!             .field("width", number())
//!             .field("height", number())
//!             .finish(),
//!     ),
//! ]);
//!
//! let shapes = array(shape);
//! let result = shapes.validate_value(&json!([
//!     {"kind": "circle", "radius": 2.5},
//!     {"kind": "rectangle", "width": 3.0, "height": 4.0},
//! ]));
//! assert!(result.is_success());
//! ```

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::Diagnostic;
use crate::path::PathSegment;
use crate::primitive::{missing, null};
use crate::validator::{Input, Validator};

/// Validates every element of an array against one element validator.
///
/// Non-array input fails with expectation `an array`. Elements are checked
/// in ascending index order and the first failure is returned immediately,
/// its diagnostic prefixed with the element's index. On success the output
/// is a `Vec` of the narrowed elements, order and length preserved.
pub fn array<T: 'static>(element: Validator<T>) -> Validator<Vec<T>> {
    Validator::new(move |input| {
        let items = match input.value() {
            Some(Value::Array(items)) => items,
            _ => return Validator::mismatch(input, "an array"),
        };

        let mut narrowed = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match element.validate(Input::Value(item)) {
                Validation::Success(value) => narrowed.push(value),
                Validation::Failure(diagnostic) => {
                    return Validation::Failure(diagnostic.prefix(PathSegment::index(index)))
                }
            }
        }

        Validation::Success(narrowed)
    })
}

/// Accepts whatever any branch accepts, trying branches in declaration order.
///
/// The first succeeding branch wins and its output is returned unchanged.
/// When every branch fails, the branch diagnostics are folded left to right
/// with the diagnostic merge rule, so the single reported failure is the
/// most specific one, chosen deterministically rather than by which branch
/// happened to fail first or last. N branches behave identically to nested
/// binary [`Validator::or`] applications.
///
/// ```rust
/// use scrutiny::{str_literal, union};
/// use serde_json::json;
///
/// let direction = union(vec![
///     str_literal("north"),
///     str_literal("south"),
///     str_literal("east"),
///     str_literal("west"),
/// ]);
///
/// assert!(direction.validate_value(&json!("south")).is_success());
/// assert!(direction.validate_value(&json!("up")).is_failure());
/// ```
pub fn union<T: 'static>(branches: Vec<Validator<T>>) -> Validator<T> {
    Validator::new(move |input| {
        let mut failure = Diagnostic::empty(input);
        for branch in &branches {
            match branch.validate(input) {
                Validation::Success(value) => return Validation::Success(value),
                Validation::Failure(diagnostic) => failure = failure.combine(diagnostic),
            }
        }

        Validation::Failure(failure)
    })
}

/// Requires the same input to satisfy every branch.
///
/// Branches run in declaration order against the unmodified input; the
/// first failing branch's diagnostic is returned immediately, unmerged.
/// When all branches succeed the output is the original input value.
pub fn intersection(branches: Vec<Validator<Value>>) -> Validator<Value> {
    Validator::new(move |input| {
        for branch in &branches {
            if let Validation::Failure(diagnostic) = branch.validate(input) {
                return Validation::Failure(diagnostic);
            }
        }

        Validation::Success(match input.value() {
            Some(value) => value.clone(),
            None => Value::Null,
        })
    })
}

/// Names a validator for its diagnostics.
///
/// On failure the wrapped validator's diagnostic becomes the nested cause
/// of a single expectation labeled `text`, at the same location. Useful for
/// giving union branches readable names independent of their structure.
///
/// ```rust
/// use scrutiny::{label, num_literal, validate};
/// use serde_json::json;
///
/// let validator = label("Abraham Lincoln's birthday", num_literal(1809.0));
/// let diagnostic = validate(&json!(2022), &validator).unwrap_err();
/// assert!(diagnostic
///     .to_string()
///     .contains("We expected Abraham Lincoln's birthday but found 2022 instead."));
/// ```
pub fn label<T: 'static>(text: impl Into<String>, validator: Validator<T>) -> Validator<T> {
    let text = text.into();
    Validator::new(move |input| match validator.validate(input) {
        Validation::Success(value) => Validation::Success(value),
        Validation::Failure(diagnostic) => {
            Validation::Failure(Diagnostic::label(text.clone(), diagnostic))
        }
    })
}

/// Accepts the absence of a value as `None`, otherwise defers to `validator`.
///
/// Defined as the union of [`missing`] and `validator`, in that order, so
/// its diagnostics merge exactly like any other union's.
pub fn optional<T: 'static>(validator: Validator<T>) -> Validator<Option<T>> {
    union(vec![missing().map(|_| None), validator.map(Some)])
}

/// Accepts `null` as `None`, otherwise defers to `validator`.
///
/// Defined as the union of `validator` and [`null`], in that order.
pub fn nullable<T: 'static>(validator: Validator<T>) -> Validator<Option<T>> {
    union(vec![validator.map(Some), null().map(|_| None)])
}

/// Substitutes `default` when the input is genuinely absent.
///
/// Defined as the union of `validator` and an absent-only default producer,
/// in that order. A present-but-invalid value therefore still fails loudly
/// (with `nothing` listed among the merged expectations) instead of being
/// silently replaced. For a fallback that swallows invalid input, compose
/// `validator.or(pure(default))` explicitly.
///
/// ```rust
/// use scrutiny::{number, with_default, Input};
/// use serde_json::json;
///
/// let port = with_default(8080.0, number());
///
/// assert!(port.validate(Input::Absent).is_success());
/// assert!(port.validate_value(&json!(9000)).is_success());
/// assert!(port.validate_value(&json!("9000")).is_failure());
/// ```
pub fn with_default<T>(default: T, validator: Validator<T>) -> Validator<T>
where
    T: Clone + Send + Sync + 'static,
{
    union(vec![validator, missing().map(move |_| default.clone())])
}

/// Always succeeds with the given value, ignoring the input entirely.
pub fn pure<T>(value: T) -> Validator<T>
where
    T: Clone + Send + Sync + 'static,
{
    Validator::new(move |_| Validation::Success(value.clone()))
}
