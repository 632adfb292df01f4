//! Date validator (feature `temporal`).
//!
//! Accepts a string in any of several common formats, canonicalizes it to
//! RFC 3339, and checks bounds against it. Formats without a timezone are
//! interpreted as UTC; date-only formats start at midnight.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::foundation::{Issue, Outcome, Presence, Validate, impl_presence_builders};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Parses a date string in any supported format, normalized to UTC.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

struct Refinement {
    predicate: Box<dyn Fn(&DateTime<Utc>) -> bool + Send + Sync>,
    message: Cow<'static, str>,
}

/// Validates a date string, emitting its RFC 3339 canonical form.
///
/// # Examples
///
/// ```rust,ignore
/// let birthday = date().past();
/// let deadline = date().min(Utc::now());
/// ```
pub struct DateValidator {
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    future: bool,
    past: bool,
    refinements: Vec<Refinement>,
    presence: Presence,
}

impl DateValidator {
    /// Creates a date validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            future: false,
            past: false,
            refinements: Vec::new(),
            presence: Presence::new(),
        }
    }

    /// Requires the date to be at or after `min`.
    #[must_use]
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Requires the date to be at or before `max`.
    #[must_use]
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    /// Requires a date strictly after the moment of validation.
    #[must_use]
    pub fn future(mut self) -> Self {
        self.future = true;
        self
    }

    /// Requires a date strictly before the moment of validation.
    #[must_use]
    pub fn past(mut self) -> Self {
        self.past = true;
        self
    }

    /// Adds a custom predicate with its failure message.
    #[must_use]
    pub fn refine<F>(mut self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&DateTime<Utc>) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        self
    }

    fn first_failure(&self, parsed: &DateTime<Utc>) -> Option<Issue> {
        if let Some(min) = self.min {
            if *parsed < min {
                return Some(Issue::new(
                    "date_min",
                    format!("Date must be on or after {}", min.to_rfc3339()),
                ));
            }
        }
        if let Some(max) = self.max {
            if *parsed > max {
                return Some(Issue::new(
                    "date_max",
                    format!("Date must be on or before {}", max.to_rfc3339()),
                ));
            }
        }
        let now = Utc::now();
        if self.future && *parsed <= now {
            return Some(Issue::new("date_future", "Date must be in the future"));
        }
        if self.past && *parsed >= now {
            return Some(Issue::new("date_past", "Date must be in the past"));
        }
        for refinement in &self.refinements {
            if !(refinement.predicate)(parsed) {
                return Some(Issue::new("refinement", refinement.message.clone()));
            }
        }
        None
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DateValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateValidator")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("future", &self.future)
            .field("past", &self.past)
            .field("refinements", &self.refinements.len())
            .finish_non_exhaustive()
    }
}

impl_presence_builders!(DateValidator);

impl Validate for DateValidator {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_null() {
            return match self.presence.resolve_null() {
                Some(resolved) => Ok(resolved),
                None => Err(Issue::type_mismatch("date", value).into()),
            };
        }
        let Value::String(raw) = value else {
            return Err(Issue::type_mismatch("date", value).into());
        };
        let Some(parsed) = parse_date(raw) else {
            return Err(Issue::new("invalid_date", "Invalid date format")
                .with_received(value.clone())
                .into());
        };

        match self.first_failure(&parsed) {
            Some(issue) => Err(issue.with_received(value.clone()).into()),
            None => Ok(Value::String(parsed.to_rfc3339())),
        }
    }
}

/// Creates a [`DateValidator`] with no constraints.
#[must_use]
pub fn date() -> DateValidator {
    DateValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
