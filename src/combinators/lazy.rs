//! Lazy combinator: defer validator construction for recursive schemas.
//!
//! The factory runs on every validate call. There is no memoization: the
//! node stays free of interior mutability, and a recursive schema only
//! constructs as many levels as the input actually has. Null inputs handled
//! by the presence policy never invoke the factory at all.

use std::fmt;

use serde_json::Value;

use crate::foundation::{
    BoxValidator, Issue, Outcome, Presence, Validate, impl_presence_builders,
};

/// Wraps a validator factory, building the inner validator on demand.
///
/// # Examples
///
/// ```rust,ignore
/// // A tree node whose children are trees again
/// fn tree() -> ObjectValidator {
///     object()
///         .field("value", number())
///         .field("children", array(lazy(|| tree().boxed())).optional())
/// }
/// ```
pub struct LazyValidator {
    factory: Box<dyn Fn() -> BoxValidator + Send + Sync>,
    presence: Presence,
}

impl LazyValidator {
    /// Creates a lazy validator from a factory closure.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> BoxValidator + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            presence: Presence::new(),
        }
    }
}

impl fmt::Debug for LazyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyValidator").finish_non_exhaustive()
    }
}

impl_presence_builders!(LazyValidator);

impl Validate for LazyValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            if let Some(resolved) = self.presence.resolve_null() {
                return Ok(resolved);
            }
            if self.presence.is_required() {
                return Err(Issue::type_mismatch("value", value).into());
            }
            // fall through: the built validator decides
        }
        (self.factory)().validate(value)
    }
}

/// Creates a [`LazyValidator`] from a factory closure.
#[must_use]
pub fn lazy<F>(factory: F) -> LazyValidator
where
    F: Fn() -> BoxValidator + Send + Sync + 'static,
{
    LazyValidator::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{ObjectValidator, array, object};
    use crate::foundation::ValidateExt;
    use crate::validators::{number, string};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tree() -> ObjectValidator {
        object()
            .field("value", number())
            .field("children", array(lazy(|| tree().boxed())).optional())
    }

    #[test]
    fn test_recursive_schema_validates() {
        let input = json!({
            "value": 1,
            "children": [
                {"value": 2},
                {"value": 3, "children": [{"value": 4}]},
            ],
        });
        assert!(tree().validate(&input).is_ok());
    }

    #[test]
    fn test_deep_failure_has_full_path() {
        let input = json!({
            "value": 1,
            "children": [{"value": 2, "children": [{"value": "oops"}]}],
        });
        let err = tree().validate(&input).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.first().unwrap().path,
            "children[0].children[0].value"
        );
    }

    #[test]
    fn test_factory_runs_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let schema = lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            string().boxed()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        for _ in 0..3 {
            let _ = schema.validate(&json!("x"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_resolved_null_skips_factory() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let schema = lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            string().boxed()
        })
        .optional();

        assert_eq!(schema.validate(&Value::Null), Ok(Value::Null));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_required_rejects_null_before_factory() {
        let schema = lazy(|| string().nullable().boxed()).required();
        let err = schema.validate(&Value::Null).unwrap_err();
        assert_eq!(err.first().unwrap().message, "Expected value, received null");
    }

    #[test]
    fn test_null_falls_through_to_built_validator() {
        let schema = lazy(|| string().nullable().boxed());
        assert_eq!(schema.validate(&Value::Null), Ok(Value::Null));
    }
}
