//! Tuple combinator: positional validators with an optional rest validator.
//!
//! Without a rest validator the input length must match the positional count
//! exactly; a mismatch is one whole-tuple issue and no element is validated.
//! With a rest validator, surplus elements beyond the positional slots are
//! validated against it, keeping their absolute indices in issue paths.

use serde_json::Value;

use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

/// Validates a fixed-position tuple, optionally with variadic tail elements.
///
/// # Examples
///
/// ```rust,ignore
/// // [name, age, ...scores]
/// let row = tuple()
///     .item(string())
///     .item(number().int())
///     .rest(number());
/// ```
#[derive(Debug)]
pub struct TupleValidator {
    items: Vec<BoxValidator>,
    rest: Option<BoxValidator>,
    presence: Presence,
}

impl TupleValidator {
    /// Creates a tuple validator with no positions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            rest: None,
            presence: Presence::new(),
        }
    }

    /// Appends a positional validator.
    #[must_use]
    pub fn item(mut self, validator: impl Validate + 'static) -> Self {
        self.items.push(validator.boxed());
        self
    }

    /// Sets the validator for elements beyond the declared positions.
    #[must_use]
    pub fn rest(mut self, validator: impl Validate + 'static) -> Self {
        self.rest = Some(validator.boxed());
        self
    }

    fn check_length(&self, len: usize) -> Option<Issue> {
        let expected = self.items.len();
        if self.rest.is_some() {
            (len < expected).then(|| {
                Issue::new(
                    "tuple_length",
                    format!(
                        "Expected tuple of at least length {expected}, received length {len}"
                    ),
                )
            })
        } else {
            (len != expected).then(|| {
                Issue::new(
                    "tuple_length",
                    format!("Expected tuple of length {expected}, received length {len}"),
                )
            })
        }
    }
}

impl Default for TupleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl_presence_builders!(TupleValidator);

impl Validate for TupleValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("tuple", value).into()),
            };
        }
        let Value::Array(input) = value else {
            return Err(Issue::type_mismatch("tuple", value).into());
        };

        if let Some(issue) = self.check_length(input.len()) {
            return Err(issue.with_received(value.clone()).into());
        }

        let mut issues = Issues::new();
        let mut output = Vec::with_capacity(input.len());

        for (index, (element, validator)) in input.iter().zip(&self.items).enumerate() {
            match validator.validate(element) {
                Ok(validated) => output.push(validated),
                Err(element_issues) => issues.extend(element_issues.under_index(index)),
            }
        }

        if let Some(rest) = &self.rest {
            for (index, element) in input.iter().enumerate().skip(self.items.len()) {
                match rest.validate(element) {
                    Ok(validated) => output.push(validated),
                    Err(element_issues) => issues.extend(element_issues.under_index(index)),
                }
            }
        }

        issues.into_outcome(Value::Array(output))
    }
}

/// Creates an empty [`TupleValidator`].
#[must_use]
pub fn tuple() -> TupleValidator {
    TupleValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{boolean, number, string};
    use serde_json::json;

    #[test]
    fn test_valid_tuple() {
        let schema = tuple().item(string()).item(number()).item(boolean());
        assert_eq!(
            schema.validate(&json!(["x", 1, true])),
            Ok(json!(["x", 1.0, true]))
        );
    }

    #[test]
    fn test_length_mismatch_is_single_issue() {
        let schema = tuple().item(string()).item(number());
        let err = schema.validate(&json!(["x"])).unwrap_err();
        assert_eq!(err.len(), 1);
        let issue = err.first().unwrap();
        assert_eq!(issue.code, "tuple_length");
        assert_eq!(
            issue.message,
            "Expected tuple of length 2, received length 1"
        );
    }

    #[test]
    fn test_positions_collect_all() {
        let schema = tuple().item(string()).item(number());
        let err = schema.validate(&json!([1, "x"])).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.at_path("[0]").count(), 1);
        assert_eq!(err.at_path("[1]").count(), 1);
    }

    #[test]
    fn test_rest_accepts_surplus() {
        let schema = tuple().item(string()).rest(number());
        assert_eq!(
            schema.validate(&json!(["x", 1, 2, 3])),
            Ok(json!(["x", 1.0, 2.0, 3.0]))
        );
    }

    #[test]
    fn test_rest_issues_use_absolute_index() {
        let schema = tuple().item(string()).rest(number());
        let err = schema.validate(&json!(["x", 1, "oops"])).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.first().unwrap().path, "[2]");
    }

    #[test]
    fn test_rest_still_requires_positional_minimum() {
        let schema = tuple().item(string()).item(string()).rest(number());
        let err = schema.validate(&json!(["only"])).unwrap_err();
        assert_eq!(
            err.first().unwrap().message,
            "Expected tuple of at least length 2, received length 1"
        );
    }

    #[test]
    fn test_null_and_type_mismatch() {
        let schema = tuple().item(string());
        assert_eq!(
            schema.validate(&Value::Null).unwrap_err().first().unwrap().message,
            "Expected tuple, received null"
        );
        assert!(schema.validate(&json!({})).is_err());
    }

    #[test]
    fn test_nullable_null() {
        let schema = tuple().item(string()).nullable();
        assert_eq!(schema.validate(&Value::Null), Ok(Value::Null));
    }
}
