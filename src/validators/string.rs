//! String validator: transforms, length checks, and format checks.
//!
//! Transforms (trim, case folding) apply in the order they were chained,
//! before any check runs, and the transformed string is the validator's
//! output. Checks also run in chain order and report the first failure.
//! Length is measured in Unicode scalar values, not bytes.

use std::borrow::Cow;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use regex::Regex;
use serde_json::Value;

use crate::foundation::{Issue, Outcome, Presence, Validate, impl_presence_builders};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern compiles")
});

// ============================================================================
// TRANSFORMS AND CHECKS
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Transform {
    Trim,
    Lowercase,
    Uppercase,
}

impl Transform {
    fn apply(self, input: &str) -> String {
        match self {
            Transform::Trim => input.trim().to_string(),
            Transform::Lowercase => input.to_lowercase(),
            Transform::Uppercase => input.to_uppercase(),
        }
    }
}

#[derive(Debug)]
enum Check {
    Min(usize),
    Max(usize),
    Length(usize),
    NonEmpty,
    Email,
    Url,
    Uuid,
    Ip,
    Ipv4,
    Ipv6,
    Base64,
    Hex,
    Cuid,
    Cuid2,
    Ulid,
    Nanoid,
    Pattern(Regex),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
}

impl Check {
    fn run(&self, input: &str) -> Option<Issue> {
        match self {
            Check::Min(min) => (input.chars().count() < *min).then(|| {
                Issue::new(
                    "min_length",
                    format!("String must be at least {min} character(s)"),
                )
            }),
            Check::Max(max) => (input.chars().count() > *max).then(|| {
                Issue::new(
                    "max_length",
                    format!("String must be at most {max} character(s)"),
                )
            }),
            Check::Length(len) => (input.chars().count() != *len).then(|| {
                Issue::new(
                    "exact_length",
                    format!("String must be exactly {len} character(s)"),
                )
            }),
            Check::NonEmpty => input
                .is_empty()
                .then(|| Issue::new("non_empty", "String must not be empty")),
            Check::Email => (!EMAIL_RE.is_match(input))
                .then(|| Issue::new("invalid_email", "Invalid email format")),
            Check::Url => (!is_http_url(input))
                .then(|| Issue::new("invalid_url", "Invalid URL format")),
            Check::Uuid => (!is_uuid_v4(input))
                .then(|| Issue::new("invalid_uuid", "Invalid UUID format")),
            Check::Ip => (input.parse::<Ipv4Addr>().is_err()
                && input.parse::<Ipv6Addr>().is_err())
            .then(|| Issue::new("invalid_ip", "Invalid IP address")),
            Check::Ipv4 => (input.parse::<Ipv4Addr>().is_err())
                .then(|| Issue::new("invalid_ip", "Invalid IPv4 address")),
            Check::Ipv6 => (input.parse::<Ipv6Addr>().is_err())
                .then(|| Issue::new("invalid_ip", "Invalid IPv6 address")),
            Check::Base64 => (!is_base64(input))
                .then(|| Issue::new("invalid_base64", "Invalid base64 format")),
            Check::Hex => (!is_hex(input))
                .then(|| Issue::new("invalid_hex", "Invalid hex format")),
            Check::Cuid => (!is_cuid(input))
                .then(|| Issue::new("invalid_cuid", "Invalid CUID format")),
            Check::Cuid2 => (!is_cuid2(input))
                .then(|| Issue::new("invalid_cuid", "Invalid CUID2 format")),
            Check::Ulid => (!is_ulid(input))
                .then(|| Issue::new("invalid_ulid", "Invalid ULID format")),
            Check::Nanoid => (!is_nanoid(input))
                .then(|| Issue::new("invalid_nanoid", "Invalid Nanoid format")),
            Check::Pattern(re) => (!re.is_match(input))
                .then(|| Issue::new("pattern_mismatch", "String does not match pattern")),
            Check::StartsWith(prefix) => (!input.starts_with(prefix.as_str())).then(|| {
                Issue::new(
                    "starts_with",
                    format!("String must start with \"{prefix}\""),
                )
            }),
            Check::EndsWith(suffix) => (!input.ends_with(suffix.as_str())).then(|| {
                Issue::new("ends_with", format!("String must end with \"{suffix}\""))
            }),
            Check::Contains(needle) => (!input.contains(needle.as_str())).then(|| {
                Issue::new("contains", format!("String must include \"{needle}\""))
            }),
        }
    }
}

fn is_http_url(input: &str) -> bool {
    url::Url::parse(input)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn is_uuid_v4(input: &str) -> bool {
    uuid::Uuid::parse_str(input)
        .map(|parsed| parsed.get_version_num() == 4)
        .unwrap_or(false)
}

fn is_base64(input: &str) -> bool {
    !input.is_empty()
        && input.len() % 4 == 0
        && BASE64_STANDARD.decode(input).is_ok()
}

fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_cuid(input: &str) -> bool {
    let mut chars = input.chars();
    chars.next() == Some('c')
        && input.len() >= 8
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn is_cuid2(input: &str) -> bool {
    let mut chars = input.chars();
    (2..=32).contains(&input.len())
        && chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

fn is_ulid(input: &str) -> bool {
    // Crockford base32, excluding I, L, O, U
    input.len() == 26
        && input
            .chars()
            .all(|c| c.is_ascii_digit() || "ABCDEFGHJKMNPQRSTVWXYZ".contains(c.to_ascii_uppercase()))
}

fn is_nanoid(input: &str) -> bool {
    input.len() == 21
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

struct Refinement {
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
    message: Cow<'static, str>,
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates and canonicalizes a string value.
///
/// # Examples
///
/// ```rust,ignore
/// let username = string().trim().lowercase().min(3).max(20);
/// let contact = string().email();
/// ```
pub struct StringValidator {
    transforms: Vec<Transform>,
    checks: Vec<Check>,
    refinements: Vec<Refinement>,
    presence: Presence,
}

impl StringValidator {
    /// Creates a string validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
            checks: Vec::new(),
            refinements: Vec::new(),
            presence: Presence::new(),
        }
    }

    fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min(self, min: usize) -> Self {
        self.check(Check::Min(min))
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max(self, max: usize) -> Self {
        self.check(Check::Max(max))
    }

    /// Requires exactly `len` characters.
    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.check(Check::Length(len))
    }

    /// Requires a non-empty string.
    #[must_use]
    pub fn non_empty(self) -> Self {
        self.check(Check::NonEmpty)
    }

    /// Requires a plausible email address.
    #[must_use]
    pub fn email(self) -> Self {
        self.check(Check::Email)
    }

    /// Requires an absolute http(s) URL.
    #[must_use]
    pub fn url(self) -> Self {
        self.check(Check::Url)
    }

    /// Requires a version-4 UUID.
    #[must_use]
    pub fn uuid(self) -> Self {
        self.check(Check::Uuid)
    }

    /// Requires an IPv4 or IPv6 address.
    #[must_use]
    pub fn ip(self) -> Self {
        self.check(Check::Ip)
    }

    /// Requires an IPv4 address.
    #[must_use]
    pub fn ipv4(self) -> Self {
        self.check(Check::Ipv4)
    }

    /// Requires an IPv6 address.
    #[must_use]
    pub fn ipv6(self) -> Self {
        self.check(Check::Ipv6)
    }

    /// Requires standard base64 with padding.
    #[must_use]
    pub fn base64(self) -> Self {
        self.check(Check::Base64)
    }

    /// Requires hexadecimal digits only.
    #[must_use]
    pub fn hex(self) -> Self {
        self.check(Check::Hex)
    }

    /// Requires a CUID.
    #[must_use]
    pub fn cuid(self) -> Self {
        self.check(Check::Cuid)
    }

    /// Requires a CUID2.
    #[must_use]
    pub fn cuid2(self) -> Self {
        self.check(Check::Cuid2)
    }

    /// Requires a ULID.
    #[must_use]
    pub fn ulid(self) -> Self {
        self.check(Check::Ulid)
    }

    /// Requires a 21-character Nanoid.
    #[must_use]
    pub fn nanoid(self) -> Self {
        self.check(Check::Nanoid)
    }

    /// Requires a match against a pre-compiled pattern.
    #[must_use]
    pub fn pattern(self, pattern: Regex) -> Self {
        self.check(Check::Pattern(pattern))
    }

    /// Requires the given prefix.
    #[must_use]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.check(Check::StartsWith(prefix.into()))
    }

    /// Requires the given suffix.
    #[must_use]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.check(Check::EndsWith(suffix.into()))
    }

    /// Requires the given substring.
    #[must_use]
    pub fn contains(self, needle: impl Into<String>) -> Self {
        self.check(Check::Contains(needle.into()))
    }

    /// Strips leading and trailing whitespace before checks run.
    #[must_use]
    pub fn trim(mut self) -> Self {
        self.transforms.push(Transform::Trim);
        self
    }

    /// Lowercases the string before checks run.
    #[must_use]
    pub fn lowercase(mut self) -> Self {
        self.transforms.push(Transform::Lowercase);
        self
    }

    /// Uppercases the string before checks run.
    #[must_use]
    pub fn uppercase(mut self) -> Self {
        self.transforms.push(Transform::Uppercase);
        self
    }

    /// Adds a custom predicate with its failure message.
    #[must_use]
    pub fn refine<F>(mut self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        self
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator")
            .field("transforms", &self.transforms)
            .field("checks", &self.checks)
            .field("refinements", &self.refinements.len())
            .finish()
    }
}

impl_presence_builders!(StringValidator);

impl Validate for StringValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("string", value).into()),
            };
        }
        let Value::String(raw) = value else {
            return Err(Issue::type_mismatch("string", value).into());
        };

        let mut current = raw.clone();
        for transform in &self.transforms {
            current = transform.apply(&current);
        }

        for check in &self.checks {
            if let Some(issue) = check.run(&current) {
                return Err(issue.with_received(Value::String(current)).into());
            }
        }

        for refinement in &self.refinements {
            if !(refinement.predicate)(&current) {
                return Err(Issue::new("refinement", refinement.message.clone())
                    .with_received(Value::String(current))
                    .into());
            }
        }

        Ok(Value::String(current))
    }
}

/// Creates a [`StringValidator`] with no constraints.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
