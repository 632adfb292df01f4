//! Shared presence policy: required, optional, nullable, and defaults.
//!
//! Every validator node embeds a [`Presence`] and consults it on `null`
//! input before doing any structural work. Resolution precedence is fixed:
//! a configured default wins, then optional, then nullable; otherwise the
//! null is the node's to reject.

use serde_json::Value;

/// Presence modifiers carried by every validator node.
///
/// `required` and `optional` are mutually exclusive; setting one clears the
/// other. `nullable` combines freely with either.
#[derive(Debug, Clone, Default)]
pub struct Presence {
    required: bool,
    optional: bool,
    nullable: bool,
    default: Option<Value>,
}

impl Presence {
    /// Creates the default presence: not required, not optional, not
    /// nullable, no default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the node required, clearing optional.
    pub fn set_required(&mut self) {
        self.required = true;
        self.optional = false;
    }

    /// Marks the node optional, clearing required.
    pub fn set_optional(&mut self) {
        self.optional = true;
        self.required = false;
    }

    /// Marks the node nullable.
    pub fn set_nullable(&mut self) {
        self.nullable = true;
    }

    /// Sets the fallback value used when the input is null.
    pub fn set_default(&mut self, value: Value) {
        self.default = Some(value);
    }

    /// Whether `required` was explicitly set.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Resolves a null input, if this presence accepts one.
    ///
    /// Returns `Some(default)` when a default is configured (the default is
    /// emitted verbatim, never re-validated), `Some(Null)` when the node is
    /// optional or nullable, and `None` when the null must be rejected by
    /// the caller.
    #[must_use]
    pub fn resolve_null(&self) -> Option<Value> {
        if let Some(default) = &self.default {
            Some(default.clone())
        } else if self.optional || self.nullable {
            Some(Value::Null)
        } else {
            None
        }
    }
}

/// Generates the fluent presence builders every validator node exposes.
macro_rules! impl_presence_builders {
    ($ty:ty) => {
        impl $ty {
            /// Rejects null input even where this node would otherwise
            /// tolerate it.
            #[must_use]
            pub fn required(mut self) -> Self {
                self.presence.set_required();
                self
            }

            /// Accepts null input, yielding null.
            #[must_use]
            pub fn optional(mut self) -> Self {
                self.presence.set_optional();
                self
            }

            /// Accepts null input, yielding null.
            #[must_use]
            pub fn nullable(mut self) -> Self {
                self.presence.set_nullable();
                self
            }

            /// Substitutes a fallback value for null input. The fallback is
            /// emitted as-is, without re-validation.
            #[must_use]
            pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
                self.presence.set_default(value.into());
                self
            }
        }
    };
}

pub(crate) use impl_presence_builders;
