//! Array combinator: a homogeneous element validator plus size constraints.
//!
//! Size constraints are whole-array properties: a violated constraint yields
//! a single issue with no index and skips per-element validation entirely.
//! Otherwise every element is validated and all failures are collected, each
//! prefixed with its `[i]` position.

use serde_json::Value;

use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

/// Validates an array of homogeneous elements.
///
/// # Examples
///
/// ```rust,ignore
/// let tags = array(string().min(1)).non_empty().max(10);
/// ```
#[derive(Debug)]
pub struct ArrayValidator {
    element: BoxValidator,
    min: Option<usize>,
    max: Option<usize>,
    non_empty: bool,
    presence: Presence,
}

impl ArrayValidator {
    /// Creates an array validator over the given element validator.
    #[must_use]
    pub fn new(element: impl Validate + 'static) -> Self {
        Self {
            element: element.boxed(),
            min: None,
            max: None,
            non_empty: false,
            presence: Presence::new(),
        }
    }

    /// Requires at least `min` elements.
    #[must_use]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Allows at most `max` elements.
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Requires exactly `len` elements.
    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.min(len).max(len)
    }

    /// Requires at least one element.
    #[must_use]
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    fn check_size(&self, len: usize) -> Option<Issue> {
        if self.non_empty && len == 0 {
            return Some(Issue::new("non_empty", "Array must not be empty"));
        }
        if let Some(min) = self.min {
            if len < min {
                return Some(Issue::new(
                    "min_size",
                    format!("Array must contain at least {min} element(s)"),
                ));
            }
        }
        if let Some(max) = self.max {
            if len > max {
                return Some(Issue::new(
                    "max_size",
                    format!("Array must contain at most {max} element(s)"),
                ));
            }
        }
        None
    }
}

impl_presence_builders!(ArrayValidator);

impl Validate for ArrayValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("array", value).into()),
            };
        }
        let Value::Array(input) = value else {
            return Err(Issue::type_mismatch("array", value).into());
        };

        if let Some(issue) = self.check_size(input.len()) {
            return Err(issue.with_received(value.clone()).into());
        }

        let mut issues = Issues::new();
        let mut output = Vec::with_capacity(input.len());

        for (index, element) in input.iter().enumerate() {
            match self.element.validate(element) {
                Ok(validated) => output.push(validated),
                Err(element_issues) => issues.extend(element_issues.under_index(index)),
            }
        }

        issues.into_outcome(Value::Array(output))
    }
}

/// Creates an [`ArrayValidator`] over the given element validator.
#[must_use]
pub fn array(element: impl Validate + 'static) -> ArrayValidator {
    ArrayValidator::new(element)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{number, string};
    use serde_json::json;

    #[test]
    fn test_valid_array() {
        let schema = array(string().min(1));
        assert_eq!(
            schema.validate(&json!(["a", "b"])),
            Ok(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_element_issues_are_indexed() {
        let schema = array(number().min(0.0));
        let err = schema.validate(&json!([1, -2, 3, -4])).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.at_path("[1]").count(), 1);
        assert_eq!(err.at_path("[3]").count(), 1);
    }

    #[test]
    fn test_size_violation_short_circuits_elements() {
        // Elements would also fail, but the size issue stands alone.
        let schema = array(number().min(0.0)).min(5);
        let err = schema.validate(&json!([-1, -2])).unwrap_err();
        assert_eq!(err.len(), 1);
        let issue = err.first().unwrap();
        assert_eq!(issue.code, "min_size");
        assert_eq!(issue.path, "");
        assert_eq!(issue.message, "Array must contain at least 5 element(s)");
    }

    #[test]
    fn test_non_empty() {
        let schema = array(string()).non_empty();
        let err = schema.validate(&json!([])).unwrap_err();
        assert_eq!(err.first().unwrap().message, "Array must not be empty");
    }

    #[test]
    fn test_max() {
        let schema = array(string()).max(1);
        let err = schema.validate(&json!(["a", "b"])).unwrap_err();
        assert_eq!(err.first().unwrap().code, "max_size");
    }

    #[test]
    fn test_length() {
        let schema = array(string()).length(2);
        assert!(schema.validate(&json!(["a", "b"])).is_ok());
        assert!(schema.validate(&json!(["a"])).is_err());
        assert!(schema.validate(&json!(["a", "b", "c"])).is_err());
    }

    #[test]
    fn test_null_and_type_mismatch() {
        let schema = array(string());
        assert_eq!(
            schema.validate(&Value::Null).unwrap_err().first().unwrap().message,
            "Expected array, received null"
        );
        assert_eq!(
            schema.validate(&json!("x")).unwrap_err().first().unwrap().message,
            "Expected array, received string"
        );
    }

    #[test]
    fn test_optional_null() {
        let schema = array(string()).optional();
        assert_eq!(schema.validate(&Value::Null), Ok(Value::Null));
    }

    #[test]
    fn test_output_preserves_order_and_transforms() {
        let schema = array(string().trim());
        assert_eq!(
            schema.validate(&json!([" a ", " b "])),
            Ok(json!(["a", "b"]))
        );
    }
}
