//! Number validator over the canonical f64 view.
//!
//! Every JSON number (integer or float) is checked through one f64
//! conversion, so `1` and `1.0` behave identically. Checks run in a fixed
//! order (finiteness and integrality before range and sign) and the first
//! failure is reported. The canonical output is the f64 rendering.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{
    Issue, Outcome, Presence, Validate, as_number, impl_presence_builders,
};

/// Largest integer exactly representable as an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Tolerance for the multiple-of check, absorbing float representation noise.
const MULTIPLE_OF_EPSILON: f64 = 1e-10;

struct Refinement {
    predicate: Box<dyn Fn(f64) -> bool + Send + Sync>,
    message: Cow<'static, str>,
}

/// Validates and canonicalizes a numeric value.
///
/// # Examples
///
/// ```rust,ignore
/// let age = number().int().min(0.0).max(130.0);
/// let price = number().positive().multiple_of(0.01);
/// ```
pub struct NumberValidator {
    min: Option<f64>,
    max: Option<f64>,
    int: bool,
    positive: bool,
    negative: bool,
    non_negative: bool,
    non_positive: bool,
    finite: bool,
    safe: bool,
    multiple_of: Option<f64>,
    refinements: Vec<Refinement>,
    presence: Presence,
}

impl NumberValidator {
    /// Creates a number validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            int: false,
            positive: false,
            negative: false,
            non_negative: false,
            non_positive: false,
            finite: false,
            safe: false,
            multiple_of: None,
            refinements: Vec::new(),
            presence: Presence::new(),
        }
    }

    /// Requires the number to be at least `min`.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Requires the number to be at most `max`.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Requires a whole number.
    #[must_use]
    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }

    /// Requires a number strictly greater than zero.
    #[must_use]
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Requires a number strictly less than zero.
    #[must_use]
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Requires a number greater than or equal to zero.
    #[must_use]
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Requires a number less than or equal to zero.
    #[must_use]
    pub fn non_positive(mut self) -> Self {
        self.non_positive = true;
        self
    }

    /// Rejects infinities and NaN.
    #[must_use]
    pub fn finite(mut self) -> Self {
        self.finite = true;
        self
    }

    /// Requires the number to be within the exactly-representable integer
    /// range (|n| <= 2^53 - 1).
    #[must_use]
    pub fn safe(mut self) -> Self {
        self.safe = true;
        self
    }

    /// Requires the number to be a multiple of `step`, within a small
    /// epsilon.
    #[must_use]
    pub fn multiple_of(mut self, step: f64) -> Self {
        self.multiple_of = Some(step);
        self
    }

    /// Adds a custom predicate with its failure message.
    #[must_use]
    pub fn refine<F>(mut self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        self
    }

    fn first_failure(&self, n: f64) -> Option<Issue> {
        if self.finite && !n.is_finite() {
            return Some(Issue::new("finite", "Number must be finite"));
        }
        if self.int && n.fract() != 0.0 {
            return Some(Issue::new("integer", "Number must be an integer"));
        }
        if self.safe && n.abs() > MAX_SAFE_INTEGER {
            return Some(Issue::new(
                "safe_integer",
                "Number must be a safe integer",
            ));
        }
        if let Some(min) = self.min {
            if n < min {
                return Some(Issue::new(
                    "min",
                    format!("Number must be at least {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if n > max {
                return Some(Issue::new("max", format!("Number must be at most {max}")));
            }
        }
        if self.positive && n <= 0.0 {
            return Some(Issue::new("positive", "Number must be positive"));
        }
        if self.negative && n >= 0.0 {
            return Some(Issue::new("negative", "Number must be negative"));
        }
        if self.non_negative && n < 0.0 {
            return Some(Issue::new("non_negative", "Number must be non-negative"));
        }
        if self.non_positive && n > 0.0 {
            return Some(Issue::new("non_positive", "Number must be non-positive"));
        }
        if let Some(step) = self.multiple_of {
            let remainder = (n % step).abs();
            if remainder > MULTIPLE_OF_EPSILON && (step.abs() - remainder) > MULTIPLE_OF_EPSILON
            {
                return Some(Issue::new(
                    "multiple_of",
                    format!("Number must be a multiple of {step}"),
                ));
            }
        }
        for refinement in &self.refinements {
            if !(refinement.predicate)(n) {
                return Some(Issue::new("refinement", refinement.message.clone()));
            }
        }
        None
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidator")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("int", &self.int)
            .field("refinements", &self.refinements.len())
            .finish_non_exhaustive()
    }
}

impl_presence_builders!(NumberValidator);

impl Validate for NumberValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("number", value).into()),
            };
        }
        let Some(n) = as_number(value) else {
            return Err(Issue::type_mismatch("number", value).into());
        };

        match self.first_failure(n) {
            Some(issue) => Err(issue.with_received(value.clone()).into()),
            None => Ok(Value::from(n)),
        }
    }
}

/// Creates a [`NumberValidator`] with no constraints.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_and_floats_coerce_alike() {
        assert_eq!(number().validate(&json!(1)), Ok(json!(1.0)));
        assert_eq!(number().validate(&json!(1.0)), Ok(json!(1.0)));
    }

    #[test]
    fn test_type_mismatch() {
        let err = number().validate(&json!("5")).unwrap_err();
        assert_eq!(
            err.first().unwrap().message,
            "Expected number, received string"
        );
    }

    #[test]
    fn test_min_max() {
        let schema = number().min(0.0).max(10.0);
        assert!(schema.validate(&json!(0)).is_ok());
        assert!(schema.validate(&json!(10)).is_ok());
        assert_eq!(
            schema.validate(&json!(-1)).unwrap_err().first().unwrap().message,
            "Number must be at least 0"
        );
        assert_eq!(
            schema.validate(&json!(11)).unwrap_err().first().unwrap().code,
            "max"
        );
    }

    #[test]
    fn test_int() {
        assert!(number().int().validate(&json!(3)).is_ok());
        assert!(number().int().validate(&json!(3.0)).is_ok());
        assert_eq!(
            number().int().validate(&json!(3.5)).unwrap_err().first().unwrap().message,
            "Number must be an integer"
        );
    }

    #[test]
    fn test_signs() {
        assert!(number().positive().validate(&json!(0)).is_err());
        assert!(number().positive().validate(&json!(1)).is_ok());
        assert!(number().negative().validate(&json!(0)).is_err());
        assert!(number().negative().validate(&json!(-1)).is_ok());
        assert!(number().non_negative().validate(&json!(0)).is_ok());
        assert!(number().non_positive().validate(&json!(0)).is_ok());
        assert!(number().non_positive().validate(&json!(0.1)).is_err());
    }

    #[test]
    fn test_safe_integer() {
        assert!(number().safe().validate(&json!(9_007_199_254_740_991_i64)).is_ok());
        assert!(number().safe().validate(&json!(9_007_199_254_740_993_i64)).is_err());
    }

    #[test]
    fn test_multiple_of() {
        assert!(number().multiple_of(0.1).validate(&json!(0.3)).is_ok());
        assert!(number().multiple_of(5.0).validate(&json!(15)).is_ok());
        assert!(number().multiple_of(5.0).validate(&json!(7)).is_err());
    }

    #[test]
    fn test_check_order_int_before_min() {
        let err = number().min(10.0).int().validate(&json!(3.5)).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.first().unwrap().code, "integer");
    }

    #[test]
    fn test_refine() {
        let even = number().refine(|n| n % 2.0 == 0.0, "Number must be even");
        assert!(even.validate(&json!(4)).is_ok());
        assert_eq!(
            even.validate(&json!(3)).unwrap_err().first().unwrap().message,
            "Number must be even"
        );
    }

    #[test]
    fn test_presence() {
        assert!(number().validate(&Value::Null).is_err());
        assert_eq!(number().nullable().validate(&Value::Null), Ok(Value::Null));
        assert_eq!(number().default_value(7).validate(&Value::Null), Ok(json!(7)));
    }
}
