//! Core validation traits.
//!
//! [`Validate`] is the single contract every leaf and combinator implements:
//! take a dynamic value, return either its canonical form or the full set of
//! issues found. Blanket implementations for `Box`, `Arc`, and references let
//! schema graphs mix concrete nodes with boxed trait objects freely.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{IntersectionValidator, UnionValidator, intersection, union};
use crate::foundation::error::Issues;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of validating one value: the canonical value on success, at least
/// one issue on failure.
pub type Outcome = Result<Value, Issues>;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// The core validation trait.
///
/// Validation is pure and synchronous; nodes are immutable once built, so a
/// schema graph can be shared across threads and validated concurrently.
///
/// # Examples
///
/// ```rust,ignore
/// use veld::prelude::*;
///
/// let schema = object().field("name", string().min(1));
/// assert!(schema.validate(&json!({"name": "Ada"})).is_ok());
/// ```
pub trait Validate: Send + Sync {
    /// Validates a value, producing its canonical form or the issues found.
    fn validate(&self, value: &Value) -> Outcome;

    /// Name used in diagnostics. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A boxed validator, the unit of composition inside combinators.
pub type BoxValidator = Box<dyn Validate>;

impl std::fmt::Debug for dyn Validate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(self.name()).finish_non_exhaustive()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent composition helpers, implemented for every sized validator.
///
/// # Examples
///
/// ```rust,ignore
/// // Accept either a string or a number
/// let flexible = string().or(number());
///
/// // Trim, then require at least 3 characters of what remains
/// let trimmed = string().trim().and(string().min(3));
/// ```
pub trait ValidateExt: Validate + Sized + 'static {
    /// Boxes this validator for storage inside a combinator.
    fn boxed(self) -> BoxValidator {
        Box::new(self)
    }

    /// Intersects this validator with another: both must pass, and the
    /// second sees the first's output.
    fn and<V: Validate + 'static>(self, other: V) -> IntersectionValidator {
        intersection().member(self).member(other)
    }

    /// Unions this validator with another: the first to pass wins.
    fn or<V: Validate + 'static>(self, other: V) -> UnionValidator {
        union().member(self).member(other)
    }
}

impl<V: Validate + Sized + 'static> ValidateExt for V {}
