//! Object combinator: a fixed schema of named fields.
//!
//! Each schema field is validated against the matching input entry (absent
//! entries are treated as null, so field presence is governed by the field
//! validator's own presence modifiers). All field failures are collected and
//! prefixed with the field name. Input keys that no schema field claims are
//! handled per the [`UnknownFields`] policy.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt, impl_presence_builders,
};

// ============================================================================
// UNKNOWN FIELD POLICY
// ============================================================================

/// What to do with input keys the schema does not mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Reject the object with an `unknown_field` issue per extra key.
    Strict,
    /// Copy extra keys into the output unvalidated.
    Passthrough,
    /// Drop extra keys from the output.
    #[default]
    Strip,
}

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// Validates an object against a fixed set of named field validators.
///
/// Field order in the schema is irrelevant; fields are stored in a sorted map
/// so validation order is deterministic.
///
/// # Examples
///
/// ```rust,ignore
/// let user = object()
///     .field("name", string().min(1))
///     .field("age", number().min(0.0).optional())
///     .strict();
/// ```
#[derive(Debug)]
pub struct ObjectValidator {
    schema: BTreeMap<String, BoxValidator>,
    unknown_fields: UnknownFields,
    presence: Presence,
}

impl ObjectValidator {
    /// Creates an object validator with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: BTreeMap::new(),
            unknown_fields: UnknownFields::default(),
            presence: Presence::new(),
        }
    }

    /// Adds a named field. A later field with the same name replaces the
    /// earlier one.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.schema.insert(name.into(), validator.boxed());
        self
    }

    /// Rejects input keys the schema does not mention.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.unknown_fields = UnknownFields::Strict;
        self
    }

    /// Copies unmentioned input keys into the output unvalidated.
    #[must_use]
    pub fn passthrough(mut self) -> Self {
        self.unknown_fields = UnknownFields::Passthrough;
        self
    }

    /// Drops unmentioned input keys from the output (the default).
    #[must_use]
    pub fn strip(mut self) -> Self {
        self.unknown_fields = UnknownFields::Strip;
        self
    }
}

impl Default for ObjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl_presence_builders!(ObjectValidator);

impl Validate for ObjectValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("object", value).into()),
            };
        }
        let Value::Object(input) = value else {
            return Err(Issue::type_mismatch("object", value).into());
        };

        let mut issues = Issues::new();
        let mut output = Map::new();

        for (name, validator) in &self.schema {
            let field_value = input.get(name).unwrap_or(&Value::Null);
            match validator.validate(field_value) {
                Ok(validated) => {
                    // A field that resolves to null (optional/nullable) is
                    // omitted from the output rather than stored as null.
                    if !validated.is_null() {
                        output.insert(name.clone(), validated);
                    }
                }
                Err(field_issues) => issues.extend(field_issues.under(name)),
            }
        }

        for (key, raw) in input {
            if self.schema.contains_key(key) {
                continue;
            }
            match self.unknown_fields {
                UnknownFields::Strict => {
                    issues.push(
                        Issue::new("unknown_field", "Unknown field")
                            .with_received(raw.clone())
                            .under(key),
                    );
                }
                UnknownFields::Passthrough => {
                    output.insert(key.clone(), raw.clone());
                }
                UnknownFields::Strip => {}
            }
        }

        issues.into_outcome(Value::Object(output))
    }
}

/// Creates an empty [`ObjectValidator`].
#[must_use]
pub fn object() -> ObjectValidator {
    ObjectValidator::new()
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
    fn test_valid_object() {
        let schema = object()
            .field("name", string().min(1))
            .field("age", number().min(0.0));
        let result = schema.validate(&json!({"name": "Ada", "age": 36}));
        assert_eq!(result, Ok(json!({"name": "Ada", "age": 36.0})));
    }

    #[test]
    fn test_collects_all_field_issues() {
        let schema = object()
            .field("name", string().min(1))
            .field("age", number().min(0.0));
        let err = schema
            .validate(&json!({"name": "", "age": -1}))
            .unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.at_path("name").count(), 1);
        assert_eq!(err.at_path("age").count(), 1);
    }

    #[test]
    fn test_missing_field_is_null() {
        let schema = object().field("name", string());
        let err = schema.validate(&json!({})).unwrap_err();
        assert_eq!(err.first().unwrap().path, "name");
        assert_eq!(err.first().unwrap().code, "type_mismatch");
    }

    #[test]
    fn test_optional_field_omitted_from_output() {
        let schema = object()
            .field("name", string())
            .field("nickname", string().optional());
        let result = schema.validate(&json!({"name": "Ada"})).unwrap();
        assert_eq!(result, json!({"name": "Ada"}));
    }

    #[test]
    fn test_strict_rejects_unknown_keys() {
        let schema = object().field("name", string()).strict();
        let err = schema
            .validate(&json!({"name": "Ada", "extra": 1}))
            .unwrap_err();
        assert_eq!(err.len(), 1);
        let issue = err.first().unwrap();
        assert_eq!(issue.code, "unknown_field");
        assert_eq!(issue.path, "extra");
    }

    #[test]
    fn test_passthrough_keeps_unknown_keys() {
        let schema = object().field("name", string()).passthrough();
        let result = schema
            .validate(&json!({"name": "Ada", "extra": 1}))
            .unwrap();
        assert_eq!(result, json!({"name": "Ada", "extra": 1}));
    }

    #[test]
    fn test_strip_drops_unknown_keys() {
        let schema = object().field("name", string());
        let result = schema
            .validate(&json!({"name": "Ada", "extra": 1}))
            .unwrap();
        assert_eq!(result, json!({"name": "Ada"}));
    }

    #[test]
    fn test_null_rejected_by_default() {
        let err = object().validate(&Value::Null).unwrap_err();
        assert_eq!(
            err.first().unwrap().message,
            "Expected object, received null"
        );
    }

    #[test]
    fn test_null_with_default() {
        let schema = object().default_value(json!({"kind": "empty"}));
        assert_eq!(schema.validate(&Value::Null), Ok(json!({"kind": "empty"})));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = object().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err.first().unwrap().message,
            "Expected object, received array"
        );
    }

    #[test]
    fn test_nested_paths() {
        let schema = object().field("user", object().field("email", string().email()));
        let err = schema
            .validate(&json!({"user": {"email": "nope"}}))
            .unwrap_err();
        assert_eq!(err.first().unwrap().path, "user.email");
    }
}
