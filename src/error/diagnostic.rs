//! The diagnostic model: path-located failure explanations and their merge rule.
//!
//! This module provides [`Diagnostic`], an immutable description of a
//! validation failure, together with the deterministic rule for choosing the
//! most informative diagnostic when several alternatives failed at the same
//! location.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::path::{Path, PathSegment};
use crate::validator::Input;

/// Maximum length of a serialized received value before it is elided.
const MAX_RECEIVED_LENGTH: usize = 50;

/// A snapshot of the input that failed to validate, retained for display.
///
/// The source data model distinguishes a value that is present (possibly
/// `null`) from one that is absent altogether, e.g. a missing object field.
#[derive(Debug, Clone, PartialEq)]
pub enum Received {
    /// A value that was present in the input.
    Value(Value),
    /// No value at all, e.g. a missing object field.
    Absent,
}

impl Received {
    /// Formats the snapshot compactly for inclusion in a rendered message.
    ///
    /// Values serialize as compact JSON, elided with a trailing `...` beyond
    /// 50 characters. If serialization fails the value's runtime kind name
    /// is used instead. An absent value renders as `nothing`.
    fn pretty(&self) -> String {
        let value = match self {
            Received::Absent => return "nothing".to_string(),
            Received::Value(value) => value,
        };

        let serialized = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(_) => kind_name(value).to_string(),
        };

        if serialized.chars().count() > MAX_RECEIVED_LENGTH {
            let truncated: String = serialized.chars().take(MAX_RECEIVED_LENGTH).collect();
            return format!("{}...", truncated);
        }

        serialized
    }
}

impl Display for Received {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// The runtime kind of a JSON value, used as a serialization fallback.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single expectation within a diagnostic: what was wanted, and optionally
/// why a labeled sub-check failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Expectation {
    label: String,
    cause: Option<Diagnostic>,
}

impl Expectation {
    /// Human-readable description of what was expected.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The nested diagnostic explaining why this expectation failed, if the
    /// expectation came from a labeled sub-check rather than a leaf mismatch.
    pub fn cause(&self) -> Option<&Diagnostic> {
        self.cause.as_ref()
    }
}

/// An immutable, path-located explanation of a validation failure.
///
/// A `Diagnostic` records *where* in the input a mismatch occurred
/// ([`path`](Diagnostic::path)), the offending value
/// ([`received`](Diagnostic::received)), and an ordered list of
/// [`Expectation`]s describing what would have been accepted there. Each
/// expectation may carry a nested cause, so a diagnostic is a tree that
/// explains every layer of "why", not just the outermost mismatch.
///
/// Its `Display` implementation renders the full human-readable explanation,
/// so a `Diagnostic` can be returned straight through `?` as an error.
///
/// # Example
///
/// ```rust
/// use scrutiny::{string, validate};
/// use serde_json::json;
///
/// let diagnostic = validate(&json!(3), &string()).unwrap_err();
/// assert_eq!(
///     diagnostic.to_string(),
///     "data is invalid. We expected a string but found 3 instead."
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    path: Path,
    received: Received,
    expectations: Vec<Expectation>,
}

impl Diagnostic {
    /// Creates an unconstrained failure context with no expectations.
    ///
    /// Used as the identity when folding alternative-branch failures
    /// together; it never survives a merge against a real diagnostic.
    pub fn empty(input: Input<'_>) -> Self {
        Self {
            path: Path::root(),
            received: input.snapshot(),
            expectations: Vec::new(),
        }
    }

    /// Creates a leaf diagnostic: the input did not satisfy `label`.
    pub fn expected(input: Input<'_>, label: impl Into<String>) -> Self {
        Self {
            path: Path::root(),
            received: input.snapshot(),
            expectations: vec![Expectation {
                label: label.into(),
                cause: None,
            }],
        }
    }

    /// Wraps `cause` under a human-readable label at the same location.
    ///
    /// The resulting diagnostic has a single expectation `(label, cause)`
    /// and keeps the cause's received value, so union branches can carry
    /// names like `"a number type"` independent of their internal structure.
    pub fn label(label: impl Into<String>, cause: Diagnostic) -> Self {
        Self {
            path: Path::root(),
            received: cause.received.clone(),
            expectations: vec![Expectation {
                label: label.into(),
                cause: Some(cause),
            }],
        }
    }

    /// Returns a new diagnostic with `segment` prepended to its path and,
    /// recursively, to the path of every nested cause.
    ///
    /// Structural combinators call this as a failure unwinds outward, so a
    /// diagnostic's path and all of its causes' paths stay consistent.
    pub fn prefix(self, segment: PathSegment) -> Self {
        let expectations = self
            .expectations
            .into_iter()
            .map(|expectation| Expectation {
                label: expectation.label,
                cause: expectation.cause.map(|cause| cause.prefix(segment.clone())),
            })
            .collect();

        Self {
            path: self.path.prepend(segment),
            received: self.received,
            expectations,
        }
    }

    /// The path from the validation root to the failure site.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value that failed to validate at this location.
    pub fn received(&self) -> &Received {
        &self.received
    }

    /// The ordered expectations that the value did not satisfy.
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// The one-sentence expectation clause of the rendered message.
    fn clause(&self) -> String {
        match self.expectations.as_slice() {
            [] => format!("We found {}.", self.received),
            [only] => format!(
                "We expected {} but found {} instead.",
                only.label, self.received
            ),
            [init @ .., last] => {
                let labels: Vec<&str> = init.iter().map(|e| e.label.as_str()).collect();
                format!(
                    "We expected {} or {} but found {} instead.",
                    labels.join(", "),
                    last.label,
                    self.received
                )
            }
        }
    }

    /// Renders this diagnostic and its causes at the given indentation depth.
    fn render(&self, f: &mut fmt::Formatter<'_>, indentation: usize) -> fmt::Result {
        let indent = "  ".repeat(indentation);
        if self.path.is_root() {
            write!(f, "{}data is invalid. {}", indent, self.clause())?;
        } else {
            write!(f, "{}data.{} is invalid. {}", indent, self.path, self.clause())?;
        }

        for expectation in &self.expectations {
            if let Some(cause) = &expectation.cause {
                write!(f, "\n{}it is not {} because:\n", indent, expectation.label)?;
                cause.render(f, indentation + 1)?;
            }
        }

        Ok(())
    }
}

/// The merge rule for diagnostics that arose from alternative attempts at
/// the same location: the more specific failure path wins (see
/// [`Path::specificity`]); at equal paths the expectations are concatenated
/// in encounter order. Associative, with [`Diagnostic::empty`] as identity.
impl Semigroup for Diagnostic {
    fn combine(self, other: Self) -> Self {
        match self.path.specificity(&other.path) {
            Ordering::Less => self,
            Ordering::Greater => other,
            Ordering::Equal => {
                let mut expectations = self.expectations;
                expectations.extend(other.expectations);
                Self {
                    path: self.path,
                    received: self.received,
                    expectations,
                }
            }
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl std::error::Error for Diagnostic {}

// Diagnostic is Send + Sync since all fields are owned types. Asserted here
// so it stays true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Diagnostic>();
    assert_sync::<Diagnostic>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(diagnostic: Diagnostic, segments: &[&str]) -> Diagnostic {
        segments
            .iter()
            .rev()
            .fold(diagnostic, |d, s| d.prefix(PathSegment::field(*s)))
    }

    #[test]
    fn test_expected_is_a_leaf_at_the_root() {
        let value = json!(5);
        let diagnostic = Diagnostic::expected(Input::Value(&value), "a string");

        assert!(diagnostic.path().is_root());
        assert_eq!(diagnostic.received(), &Received::Value(json!(5)));
        assert_eq!(diagnostic.expectations().len(), 1);
        assert_eq!(diagnostic.expectations()[0].label(), "a string");
        assert!(diagnostic.expectations()[0].cause().is_none());
    }

    #[test]
    fn test_prefix_threads_through_causes() {
        let value = json!("goodbye");
        let inner = Diagnostic::expected(Input::Value(&value), "\"hello\"");
        let labeled = Diagnostic::label("a greeting", inner);

        let prefixed = labeled.prefix(PathSegment::field("d"));

        assert_eq!(prefixed.path().to_string(), "d");
        let cause = prefixed.expectations()[0].cause().unwrap();
        assert_eq!(cause.path().to_string(), "d");
    }

    #[test]
    fn test_combine_keeps_the_deeper_failure() {
        let value = json!(1);
        let shallow = Diagnostic::expected(Input::Value(&value), "a string");
        let deep = at(
            Diagnostic::expected(Input::Value(&value), "a number"),
            &["inner"],
        );

        let merged = shallow.clone().combine(deep.clone());
        assert_eq!(merged, deep);

        let merged = deep.clone().combine(shallow);
        assert_eq!(merged, deep);
    }

    #[test]
    fn test_combine_at_equal_paths_concatenates() {
        let value = json!(1);
        let left = Diagnostic::expected(Input::Value(&value), "a string");
        let right = Diagnostic::expected(Input::Value(&value), "a boolean");

        let merged = left.combine(right);
        let labels: Vec<&str> = merged.expectations().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["a string", "a boolean"]);
    }

    #[test]
    fn test_combine_ties_break_lexicographically() {
        let value = json!(1);
        let alpha = at(Diagnostic::expected(Input::Value(&value), "a string"), &["alpha"]);
        let beta = at(Diagnostic::expected(Input::Value(&value), "a number"), &["beta"]);

        assert_eq!(alpha.clone().combine(beta.clone()), alpha);
        assert_eq!(beta.combine(alpha.clone()), alpha);
    }

    #[test]
    fn test_empty_is_a_merge_identity() {
        let value = json!("x");
        let real = at(Diagnostic::expected(Input::Value(&value), "a number"), &["n"]);

        let merged = Diagnostic::empty(Input::Value(&value)).combine(real.clone());
        assert_eq!(merged, real);
    }

    #[test]
    fn test_combine_is_associative() {
        let value = json!(0);
        let a = Diagnostic::expected(Input::Value(&value), "one");
        let b = Diagnostic::expected(Input::Value(&value), "two");
        let c = at(Diagnostic::expected(Input::Value(&value), "three"), &["k"]);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_display_zero_expectations() {
        let value = json!([1, 2]);
        let diagnostic = Diagnostic::empty(Input::Value(&value));
        assert_eq!(diagnostic.to_string(), "data is invalid. We found [1,2].");
    }

    #[test]
    fn test_display_single_expectation() {
        let value = json!(3);
        let diagnostic = Diagnostic::expected(Input::Value(&value), "a string");
        assert_eq!(
            diagnostic.to_string(),
            "data is invalid. We expected a string but found 3 instead."
        );
    }

    #[test]
    fn test_display_multiple_expectations() {
        let value = json!("four");
        let diagnostic = Diagnostic::expected(Input::Value(&value), "\"one\"")
            .combine(Diagnostic::expected(Input::Value(&value), "\"two\""))
            .combine(Diagnostic::expected(Input::Value(&value), "\"three\""));

        assert_eq!(
            diagnostic.to_string(),
            "data is invalid. We expected \"one\", \"two\" or \"three\" but found \"four\" instead."
        );
    }

    #[test]
    fn test_display_nested_cause_indents() {
        let value = json!(2022);
        let inner = Diagnostic::expected(Input::Value(&value), "1809");
        let labeled = Diagnostic::label("a famous birthday", inner);

        assert_eq!(
            labeled.to_string(),
            "data is invalid. We expected a famous birthday but found 2022 instead.\n\
             it is not a famous birthday because:\n\
             \x20\x20data is invalid. We expected 1809 but found 2022 instead."
        );
    }

    #[test]
    fn test_display_absent_input() {
        let diagnostic = Diagnostic::expected(Input::Absent, "a string");
        assert_eq!(
            diagnostic.to_string(),
            "data is invalid. We expected a string but found nothing instead."
        );
    }

    #[test]
    fn test_received_truncates_long_values() {
        let value = json!("a".repeat(80));
        let diagnostic = Diagnostic::expected(Input::Value(&value), "a number");

        let rendered = diagnostic.to_string();
        assert!(rendered.contains("..."));
        // 50 characters of payload plus the ellipsis
        let received = diagnostic.received().to_string();
        assert_eq!(received.chars().count(), MAX_RECEIVED_LENGTH + 3);
    }
}
