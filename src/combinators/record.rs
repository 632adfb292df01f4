//! Record combinator: uniform key and value validators over a map.
//!
//! Keys are validated first, as string values. A failing key records its
//! issues at `key(<original>)` and the entry's value is skipped. A key
//! validator may transform the key; if its output is no longer a string the
//! entry is rejected rather than coerced. Value issues are tagged with the
//! validated key, and entries land in the output under the validated key.

use serde_json::{Map, Value};

use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

/// Validates every key and value of a string-keyed map.
///
/// # Examples
///
/// ```rust,ignore
/// // Scores keyed by non-empty names
/// let scores = record(string().min(1), number().min(0.0));
/// ```
#[derive(Debug)]
pub struct RecordValidator {
    key: BoxValidator,
    value: BoxValidator,
    presence: Presence,
}

impl RecordValidator {
    /// Creates a record validator from a key validator and a value validator.
    #[must_use]
    pub fn new(key: impl Validate + 'static, value: impl Validate + 'static) -> Self {
        Self {
            key: key.boxed(),
            value: value.boxed(),
            presence: Presence::new(),
        }
    }
}

impl_presence_builders!(RecordValidator);

impl Validate for RecordValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("record", value).into()),
            };
        }
        let Value::Object(input) = value else {
            return Err(Issue::type_mismatch("record", value).into());
        };

        let mut issues = Issues::new();
        let mut output = Map::new();

        for (key, entry) in input {
            let key_segment = format!("key({key})");
            let validated_key = match self.key.validate(&Value::String(key.clone())) {
                Ok(Value::String(validated)) => validated,
                Ok(_) => {
                    issues.push(
                        Issue::new("record_key", "Record key must be a string")
                            .with_received(Value::String(key.clone()))
                            .under(&key_segment),
                    );
                    continue;
                }
                Err(key_issues) => {
                    issues.extend(key_issues.under(&key_segment));
                    continue;
                }
            };

            match self.value.validate(entry) {
                Ok(validated) => {
                    output.insert(validated_key, validated);
                }
                Err(value_issues) => issues.extend(value_issues.under(&validated_key)),
            }
        }

        issues.into_outcome(Value::Object(output))
    }
}

/// Creates a [`RecordValidator`] from a key validator and a value validator.
#[must_use]
pub fn record(
    key: impl Validate + 'static,
    value: impl Validate + 'static,
) -> RecordValidator {
    RecordValidator::new(key, value)
}

// ============================================================================
// TESTS
// ============================================================================
