//! Accept-all validators.
//!
//! [`AnyValidator`] and [`UnknownValidator`] both pass every value through
//! unchanged. They differ only in intent: `any()` marks a field whose shape
//! is deliberately unconstrained, `unknown()` marks one whose shape is not
//! yet known. Null is rejected only when `required` was set explicitly.

use serde_json::Value;

use crate::foundation::{Issue, Outcome, Presence, Validate, impl_presence_builders};

fn accept(presence: &Presence, value: &Value) -> Outcome {
    if value.is_null() {
        if let Some(resolved) = presence.resolve_null() {
            return Ok(resolved);
        }
        if presence.is_required() {
            return Err(Issue::type_mismatch("value", value).into());
        }
    }
    Ok(value.clone())
}

/// Accepts any value unchanged.
#[derive(Debug, Default)]
pub struct AnyValidator {
    presence: Presence,
}

impl AnyValidator {
    /// Creates an accept-all validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_presence_builders!(AnyValidator);

impl Validate for AnyValidator {
    fn validate(&self, value: &Value) -> Outcome {
        accept(&self.presence, value)
    }
}

/// Accepts any value unchanged; names a deliberately unspecified shape.
#[derive(Debug, Default)]
pub struct UnknownValidator {
    presence: Presence,
}

impl UnknownValidator {
    /// Creates an accept-all validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_presence_builders!(UnknownValidator);

impl Validate for UnknownValidator {
    fn validate(&self, value: &Value) -> Outcome {
        accept(&self.presence, value)
    }
}

/// Creates an [`AnyValidator`].
#[must_use]
pub fn any() -> AnyValidator {
    AnyValidator::new()
}

/// Creates an [`UnknownValidator`].
#[must_use]
pub fn unknown() -> UnknownValidator {
    UnknownValidator::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_everything() {
        for value in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert_eq!(any().validate(&value), Ok(value.clone()));
            assert_eq!(unknown().validate(&value), Ok(value));
        }
    }

    #[test]
    fn test_required_rejects_null() {
        let err = any().required().validate(&Value::Null).unwrap_err();
        assert_eq!(err.first().unwrap().message, "Expected value, received null");
        assert!(unknown().required().validate(&Value::Null).is_err());
    }

    #[test]
    fn test_default_applies() {
        assert_eq!(any().default_value(5).validate(&Value::Null), Ok(json!(5)));
    }
}
