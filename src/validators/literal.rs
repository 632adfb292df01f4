//! Literal validator: exact match against one expected value.
//!
//! Comparison is numeric-aware deep equality, so `literal(json!(1))` accepts
//! `1.0` and the other way around.

use serde_json::Value;

use crate::foundation::{
    Issue, Outcome, Presence, Validate, impl_presence_builders, loose_eq,
};

/// Validates that a value equals one expected literal.
#[derive(Debug)]
pub struct LiteralValidator {
    expected: Value,
    presence: Presence,
}

impl LiteralValidator {
    /// Creates a literal validator for the expected value.
    #[must_use]
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            presence: Presence::new(),
        }
    }
}

impl_presence_builders!(LiteralValidator);

impl Validate for LiteralValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() && !self.expected.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("value", value).into()),
            };
        }
        if loose_eq(value, &self.expected) {
            Ok(self.expected.clone())
        } else {
            Err(Issue::new(
                "invalid_literal",
                format!("Expected literal value {}", self.expected),
            )
            .with_received(value.clone())
            .into())
        }
    }
}

/// Creates a [`LiteralValidator`] for the expected value.
#[must_use]
pub fn literal(expected: impl Into<Value>) -> LiteralValidator {
    LiteralValidator::new(expected)
}
