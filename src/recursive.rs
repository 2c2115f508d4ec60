//! Support for self-referential shapes.
//!
//! A validator for a linked or tree-shaped structure has to refer to itself
//! before its own construction completes. Both mechanisms here defer that
//! resolution to invocation time, so composition never recurses; only
//! validation does, bounded by the nesting depth of the actual input.
//! Pathologically deep input can still exhaust the call stack; that is an
//! accepted, documented limit.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::validator::{Validator, Input};

/// Defers building a validator until it is invoked.
///
/// The factory runs once per validation call, which lets a function refer
/// to itself:
///
/// ```rust
/// use scrutiny::{lazy, nullable, number, object, Validator};
/// use serde_json::{json, Map, Value};
///
/// fn node() -> Validator<Map<String, Value>> {
///     object()
///         .field("value", number())
///         .field("next", nullable(lazy(node)))
///         .finish()
/// }
///
/// let list = json!({"value": 1, "next": {"value": 2, "next": null}});
/// assert!(node().validate_value(&list).is_success());
/// ```
pub fn lazy<T, F>(build: F) -> Validator<T>
where
    T: 'static,
    F: Fn() -> Validator<T> + Send + Sync + 'static,
{
    Validator::new(move |input| build().validate(input))
}

/// A declare-then-define slot for recursive shapes.
///
/// [`Placeholder::validator`] can be referenced inside a composition
/// immediately; [`Placeholder::define`] supplies the real validator
/// afterward, closing the cycle. The slot is written once (redefinition
/// is an error) and only read-locked during validation, so defined
/// placeholders validate concurrently without contention.
///
/// # Example
///
/// ```rust
/// use scrutiny::{nullable, number, object, Placeholder};
/// use serde_json::json;
///
/// let node = Placeholder::new();
/// node.define(
///     object()
///         .field("value", number())
///         .field("next", nullable(node.validator()))
///         .finish(),
/// )
/// .unwrap();
///
/// let list = json!({"value": 1, "next": {"value": 2, "next": null}});
/// assert!(node.validator().validate_value(&list).is_success());
/// ```
pub struct Placeholder<T> {
    slot: Arc<RwLock<Option<Validator<T>>>>,
}

impl<T> Clone for Placeholder<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: 'static> Placeholder<T> {
    /// Creates an undefined placeholder.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns a validator that forwards to the defined one.
    ///
    /// Invoking it before [`define`](Placeholder::define) has run does not
    /// panic; it fails with a diagnostic expecting `a defined validator`.
    pub fn validator(&self) -> Validator<T> {
        let slot = Arc::clone(&self.slot);
        Validator::new(move |input: Input<'_>| {
            let guard = slot.read();
            match guard.as_ref() {
                Some(validator) => validator.validate(input),
                None => Validator::mismatch(input, "a defined validator"),
            }
        })
    }

    /// Supplies the real validator, closing the recursive cycle.
    ///
    /// # Errors
    ///
    /// Returns [`DefineError::AlreadyDefined`] if the placeholder was
    /// already defined.
    pub fn define(&self, validator: Validator<T>) -> Result<(), DefineError> {
        let mut slot = self.slot.write();
        if slot.is_some() {
            return Err(DefineError::AlreadyDefined);
        }
        *slot = Some(validator);
        Ok(())
    }
}

impl<T: 'static> Default for Placeholder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from placeholder definition.
#[derive(Debug, thiserror::Error)]
pub enum DefineError {
    /// The placeholder already holds a validator.
    #[error("placeholder validator already defined")]
    AlreadyDefined,
}
