//! Intersection combinator: every member must accept, outputs thread through.
//!
//! Members run in order. Each success replaces the working value, so later
//! members see earlier members' transformations. A failure records the
//! member's issues tagged with its ordinal and validation continues with the
//! last accepted value, so every member gets a chance to report. The
//! intersection succeeds only when no member failed.

use serde_json::Value;

use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

/// Accepts a value only when all members accept, threading each member's
/// output into the next.
///
/// An intersection with no members accepts everything unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// // Trim first, then check the trimmed length
/// let name = intersection()
///     .member(string().trim())
///     .member(string().min(3));
/// ```
#[derive(Debug)]
pub struct IntersectionValidator {
    members: Vec<BoxValidator>,
    presence: Presence,
}

impl IntersectionValidator {
    /// Creates an intersection with no members.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            presence: Presence::new(),
        }
    }

    /// Appends a member. Order matters: each member sees the previous
    /// member's output.
    #[must_use]
    pub fn member(mut self, validator: impl Validate + 'static) -> Self {
        self.members.push(validator.boxed());
        self
    }
}

impl Default for IntersectionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl_presence_builders!(IntersectionValidator);

impl Validate for IntersectionValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            if let Some(resolved) = self.presence.resolve_null() {
                return Ok(resolved);
            }
            if self.presence.is_required() {
                return Err(Issue::type_mismatch("value", value).into());
            }
            // fall through: members decide what to do with null
        }

        let mut issues = Issues::new();
        let mut current = value.clone();

        for (ordinal, member) in self.members.iter().enumerate() {
            match member.validate(&current) {
                Ok(validated) => current = validated,
                Err(member_issues) => {
                    for issue in member_issues {
                        let message =
                            format!("Intersection validator {}: {}", ordinal + 1, issue.message);
                        issues.push(Issue {
                            message: message.into(),
                            ..issue
                        });
                    }
                }
            }
        }

        issues.into_outcome(current)
    }
}

/// Creates an empty [`IntersectionValidator`].
#[must_use]
pub fn intersection() -> IntersectionValidator {
    IntersectionValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
