//! Helpers over the dynamic value model.
//!
//! Validators operate on [`serde_json::Value`]. The helpers here centralize
//! the naming of value kinds, the canonical numeric view, and the loose
//! equality used by literal and enum validators.

use serde_json::Value;

/// Human-readable name of a value's kind, used in type-mismatch messages.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Canonical numeric view: any JSON number as an `f64`.
///
/// Every numeric check in the crate goes through this single conversion, so
/// integers and floats compare consistently (`1` and `1.0` are the same
/// number). Integers above 2^53 lose precision here; the number validator's
/// `safe()` check guards that range explicitly.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Deep equality that treats numbers by numeric value rather than
/// representation, recursing through arrays and objects.
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(_), Value::Number(_)) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| loose_eq(x, y)))
        }
        _ => a == b,
    }
}
