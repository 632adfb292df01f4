//! Validation issues and issue collections.
//!
//! An [`Issue`] pinpoints a single violation: where it happened ([`Issue::path`]),
//! a stable machine-readable [`Issue::code`], a human-readable message, and the
//! offending value. [`Issues`] is the ordered, non-empty-on-failure collection
//! carried by the `Err` arm of an [`Outcome`](crate::foundation::Outcome).
//!
//! Paths compose outside-in: a validator reports locations relative to the
//! value it was handed, and each enclosing combinator prefixes its own segment
//! on the way out. Index segments attach without a dot, so a nested failure
//! reads `user.tags[2]` rather than `user.tags.[2]`.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};
use smallvec::SmallVec;

use crate::foundation::value::type_name;

// ============================================================================
// PATH COMPOSITION
// ============================================================================

/// Joins a parent segment onto a child-relative path.
///
/// An empty child path means the child itself failed, so the segment stands
/// alone. A child path that starts with `[` is an index and attaches without
/// a separating dot.
#[must_use]
pub fn join_path(segment: &str, child: &str) -> String {
    if child.is_empty() {
        segment.to_string()
    } else if child.starts_with('[') {
        format!("{segment}{child}")
    } else {
        format!("{segment}.{child}")
    }
}

// ============================================================================
// ISSUE
// ============================================================================

/// A single validation failure.
///
/// Uses `Cow<'static, str>` for the code and message so that the common case
/// (static string literals) does not allocate.
///
/// # Examples
///
/// ```rust,ignore
/// let issue = Issue::new("min_length", "String must be at least 3 characters")
///     .with_received(json!("hi"));
/// assert_eq!(issue.code, "min_length");
/// assert!(issue.path.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{}", display_path(.path, .message))]
pub struct Issue {
    /// Location of the failure relative to the validated root. Empty when the
    /// root value itself failed.
    pub path: String,
    /// Stable snake_case code for programmatic handling.
    pub code: Cow<'static, str>,
    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,
    /// The offending value, or `Null` when not meaningful.
    pub received: Value,
}

impl Issue {
    /// Creates an issue at the root path.
    #[must_use]
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: String::new(),
            code: code.into(),
            message: message.into(),
            received: Value::Null,
        }
    }

    /// Creates a `type_mismatch` issue naming the expected category and the
    /// received value's actual type.
    #[must_use]
    pub fn type_mismatch(expected: &str, received: &Value) -> Self {
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, received {}", type_name(received)),
        )
        .with_received(received.clone())
    }

    /// Attaches the offending value.
    #[must_use]
    pub fn with_received(mut self, received: Value) -> Self {
        self.received = received;
        self
    }

    /// Prefixes a named segment onto the path.
    #[must_use]
    pub fn under(mut self, segment: &str) -> Self {
        self.path = join_path(segment, &self.path);
        self
    }

    /// Prefixes an index segment (`[i]`) onto the path.
    #[must_use]
    pub fn under_index(mut self, index: usize) -> Self {
        self.path = join_path(&format!("[{index}]"), &self.path);
        self
    }

    /// Structured JSON rendering of this issue.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "path": self.path,
            "code": self.code,
            "message": self.message,
            "received": self.received,
        })
    }

}

fn display_path(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

// ============================================================================
// ISSUES
// ============================================================================

/// An ordered collection of validation issues.
///
/// The `Err` arm of an [`Outcome`](crate::foundation::Outcome) always carries
/// at least one issue; [`Issues::into_outcome`] enforces this. Storage is
/// inline for the single-issue case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Issues {
    issues: SmallVec<[Issue; 1]>,
}

impl Issues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an issue, preserving order.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Appends every issue from another collection.
    pub fn extend(&mut self, other: Issues) {
        self.issues.extend(other.issues);
    }

    /// Number of issues collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when no issues were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The first issue in declaration order, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Iterates over the issues in order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// All issues at exactly the given path.
    pub fn at_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Issue> {
        self.issues.iter().filter(move |issue| issue.path == path)
    }

    /// Prefixes a named segment onto every issue path.
    #[must_use]
    pub fn under(self, segment: &str) -> Self {
        Self {
            issues: self
                .issues
                .into_iter()
                .map(|issue| issue.under(segment))
                .collect(),
        }
    }

    /// Prefixes an index segment onto every issue path.
    #[must_use]
    pub fn under_index(self, index: usize) -> Self {
        Self {
            issues: self
                .issues
                .into_iter()
                .map(|issue| issue.under_index(index))
                .collect(),
        }
    }

    /// Converts to an outcome: `Ok(value)` when empty, `Err(self)` otherwise.
    pub fn into_outcome(self, value: Value) -> Result<Value, Issues> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Structured JSON rendering: an array of issue records.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        Value::Array(self.issues.iter().map(Issue::to_json_value).collect())
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        let mut issues = Issues::new();
        issues.push(issue);
        issues
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = smallvec::IntoIter<[Issue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
