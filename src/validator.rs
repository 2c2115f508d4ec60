//! The validator contract: a pure mapping from untyped input to a result.
//!
//! This module provides [`Input`], the untyped value domain, and
//! [`Validator`], the atomic unit everything else composes. A validator is
//! a shareable pure function: calling it twice with the same input always
//! yields an equivalent result, and it holds no mutable state, so composed
//! validators can be invoked concurrently from independent call sites.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::error::{Diagnostic, Received};
use crate::ValidationResult;

/// An untyped input under validation.
///
/// The source data model distinguishes a present value (possibly `null`)
/// from an absent one, such as a missing object field. Structural
/// combinators pass [`Input::Absent`] for fields that do not exist in the
/// input, which lets a field's own validator decide whether absence is
/// acceptable.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// A value present in the input document.
    Value(&'a Value),
    /// No value at all, e.g. a missing object field.
    Absent,
}

impl<'a> Input<'a> {
    /// The underlying value, or `None` when absent.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Input::Value(value) => Some(value),
            Input::Absent => None,
        }
    }

    /// Returns true when no value is present.
    pub fn is_absent(self) -> bool {
        matches!(self, Input::Absent)
    }

    /// Captures an owned snapshot of this input for a diagnostic.
    pub fn snapshot(self) -> Received {
        match self {
            Input::Value(value) => Received::Value(value.clone()),
            Input::Absent => Received::Absent,
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Value(value)
    }
}

/// A composable check that narrows untyped input to a typed value.
///
/// `Validator<T>` wraps a pure function from [`Input`] to
/// [`ValidationResult<T>`](crate::ValidationResult). Validators are built
/// once, at composition time, from the primitives in
/// [`primitive`](crate::primitive) and the combinators in
/// [`combinator`](crate::combinator), then invoked arbitrarily many times.
/// Cloning is cheap (a reference-count bump), and a clone shares the same
/// underlying function, so validators can be referenced from several
/// combinators at once, including cyclically through the lazy indirection
/// in [`recursive`](crate::recursive).
///
/// # Example
///
/// ```rust
/// use scrutiny::{number, Input};
/// use serde_json::json;
///
/// let validator = number();
/// let value = json!(42);
///
/// let result = validator.validate(Input::Value(&value));
/// assert!(result.is_success());
/// ```
pub struct Validator<T> {
    run: Arc<dyn Fn(Input<'_>) -> ValidationResult<T> + Send + Sync>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Validator<T> {
    /// Creates a validator from a pure checking function.
    ///
    /// The function must be deterministic and free of side effects; the
    /// engine assumes a validator can be re-run and shared freely.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Input<'_>) -> ValidationResult<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Runs this validator against an input.
    pub fn validate(&self, input: Input<'_>) -> ValidationResult<T> {
        (self.run)(input)
    }

    /// Runs this validator against a present value.
    pub fn validate_value(&self, value: &Value) -> ValidationResult<T> {
        self.validate(Input::Value(value))
    }

    /// Transforms the narrowed output of this validator.
    ///
    /// Failures pass through untouched. This is how branches with different
    /// narrowed types are brought to a common type before a union:
    ///
    /// ```rust
    /// use scrutiny::{number, string, Validator};
    /// use serde_json::json;
    ///
    /// enum Id {
    ///     Name(String),
    ///     Number(f64),
    /// }
    ///
    /// let id: Validator<Id> = string().map(Id::Name).or(number().map(Id::Number));
    /// assert!(id.validate_value(&json!("alice")).is_success());
    /// assert!(id.validate_value(&json!(7)).is_success());
    /// assert!(id.validate_value(&json!(true)).is_failure());
    /// ```
    pub fn map<U: 'static>(
        self,
        transform: impl Fn(T) -> U + Send + Sync + 'static,
    ) -> Validator<U> {
        Validator::new(move |input| match self.validate(input) {
            Validation::Success(value) => Validation::Success(transform(value)),
            Validation::Failure(diagnostic) => Validation::Failure(diagnostic),
        })
    }

    /// Binary union: accepts what either validator accepts.
    ///
    /// Equivalent to [`union`](crate::combinator::union) of the two
    /// branches, with identical diagnostics.
    pub fn or(self, other: Validator<T>) -> Validator<T> {
        crate::combinator::union(vec![self, other])
    }

    /// Conjunction: both validators must accept the same input.
    ///
    /// Runs `self` first, then `other`, failing fast with the first
    /// diagnostic. On success the narrowed output is `self`'s.
    pub fn and<U: 'static>(self, other: Validator<U>) -> Validator<T> {
        Validator::new(move |input| match self.validate(input) {
            Validation::Failure(diagnostic) => Validation::Failure(diagnostic),
            Validation::Success(value) => match other.validate(input) {
                Validation::Failure(diagnostic) => Validation::Failure(diagnostic),
                Validation::Success(_) => Validation::Success(value),
            },
        })
    }

    /// Shorthand for a leaf failure against this input.
    pub(crate) fn mismatch(input: Input<'_>, label: &str) -> ValidationResult<T> {
        Validation::Failure(Diagnostic::expected(input, label))
    }
}

// Validators are shareable across threads: the wrapped function is
// Send + Sync and holds no interior mutability.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator<String>>();
    assert_sync::<Validator<String>>();
};
