//! Union combinator: first member to accept wins.
//!
//! Members are tried in declaration order and the first success ends the
//! attempt, returning that member's output (including any transformation it
//! applied). When every member fails, the union reports one synthesized
//! issue summarizing each member's failure by position. A union with no
//! members always fails.

use serde_json::Value;

use crate::foundation::{
    BoxValidator, Issue, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

/// Accepts a value matching any one of its members.
///
/// Null handling differs from the typed combinators: unless `required` was
/// set explicitly, null is offered to the members, so an optional or
/// nullable member can accept it.
///
/// # Examples
///
/// ```rust,ignore
/// let id = union().member(string().uuid()).member(number().int());
/// ```
#[derive(Debug)]
pub struct UnionValidator {
    members: Vec<BoxValidator>,
    presence: Presence,
}

impl UnionValidator {
    /// Creates a union with no members. At least one member must be added
    /// before validation can succeed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            presence: Presence::new(),
        }
    }

    /// Appends a member. Order matters: earlier members win ties.
    #[must_use]
    pub fn member(mut self, validator: impl Validate + 'static) -> Self {
        self.members.push(validator.boxed());
        self
    }
}

impl Default for UnionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl_presence_builders!(UnionValidator);

impl Validate for UnionValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            if let Some(resolved) = self.presence.resolve_null() {
                return Ok(resolved);
            }
            if self.presence.is_required() {
                return Err(Issue::type_mismatch("value", value).into());
            }
            // fall through: a member may accept null itself
        }

        let mut summaries = Vec::with_capacity(self.members.len());
        for (ordinal, member) in self.members.iter().enumerate() {
            match member.validate(value) {
                Ok(validated) => return Ok(validated),
                Err(member_issues) => {
                    let messages: Vec<String> = member_issues
                        .iter()
                        .map(|issue| issue.message.to_string())
                        .collect();
                    summaries.push(format!("Option {}: {}", ordinal + 1, messages.join(", ")));
                }
            }
        }

        let detail = if summaries.is_empty() {
            "Value did not match any union type. Errors: no union members defined".to_string()
        } else {
            format!(
                "Value did not match any union type. Errors: {}",
                summaries.join("; ")
            )
        };
        Err(Issue::new("union_exhausted", detail)
            .with_received(value.clone())
            .into())
    }
}

/// Creates an empty [`UnionValidator`].
#[must_use]
pub fn union() -> UnionValidator {
    UnionValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
