//! Enum validator: membership in a fixed set of allowed values.
//!
//! Membership uses numeric-aware deep equality, matching the literal
//! validator.

use serde_json::Value;

use crate::foundation::{
    Issue, Outcome, Presence, Validate, impl_presence_builders, loose_eq,
};

/// Validates that a value is one of a fixed set.
#[derive(Debug)]
pub struct EnumValidator {
    allowed: Vec<Value>,
    presence: Presence,
}

impl EnumValidator {
    /// Creates an enum validator over the allowed values.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            presence: Presence::new(),
        }
    }
}

impl_presence_builders!(EnumValidator);

impl Validate for EnumValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() && !self.allowed.iter().any(Value::is_null) {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("value", value).into()),
            };
        }
        match self.allowed.iter().find(|candidate| loose_eq(value, candidate)) {
            Some(matched) => Ok(matched.clone()),
            None => {
                let rendered: Vec<String> =
                    self.allowed.iter().map(ToString::to_string).collect();
                Err(Issue::new(
                    "invalid_enum",
                    format!("Expected one of: {}", rendered.join(", ")),
                )
                .with_received(value.clone())
                .into())
            }
        }
    }
}

/// Creates an [`EnumValidator`] over the allowed values.
#[must_use]
pub fn one_of(allowed: impl IntoIterator<Item = impl Into<Value>>) -> EnumValidator {
    EnumValidator::new(allowed)
}
