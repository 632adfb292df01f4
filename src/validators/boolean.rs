//! Boolean validator.

use serde_json::Value;

use crate::foundation::{Issue, Outcome, Presence, Validate, impl_presence_builders};

/// Validates a boolean value.
#[derive(Debug, Default)]
pub struct BooleanValidator {
    presence: Presence,
}

impl BooleanValidator {
    /// Creates a boolean validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_presence_builders!(BooleanValidator);

impl Validate for BooleanValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("boolean", value).into()),
            };
        }
        match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(Issue::type_mismatch("boolean", other).into()),
        }
    }
}

/// Creates a [`BooleanValidator`].
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}
