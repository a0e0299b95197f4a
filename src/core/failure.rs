//! The single error kind of the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Fixed text every diagnostic starts with.
pub const ASSERTION_FAILED: &str = "Assertion failed";

/// Source position of the failing call site.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Location of whoever called the `#[track_caller]` chain leading here.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A condition that had to hold did not.
///
/// Built only on the failure path. Its `Display` output is the exact
/// diagnostic line written before the process exits:
///
/// ```text
/// Assertion failed[: <detail>][: `<expression>`][ at <file>:<line>:<column>]
/// ```
///
/// # Example
///
/// ```rust
/// use failstop::core::{AssertionFailure, SourceLocation};
///
/// let failure = AssertionFailure::new()
///     .with_expression("a == b")
///     .at(SourceLocation { file: "src/main.rs".into(), line: 7, column: 5 });
///
/// assert_eq!(
///     failure.to_string(),
///     "Assertion failed: `a == b` at src/main.rs:7:5"
/// );
/// ```
#[derive(Clone, Debug, Error, Serialize, Deserialize)]
#[error("{}{}", ASSERTION_FAILED, render_suffix(.detail, .expression, .location))]
pub struct AssertionFailure {
    pub detail: Option<String>,
    pub expression: Option<String>,
    pub location: Option<SourceLocation>,
    pub occurred_at: DateTime<Utc>,
}

impl AssertionFailure {
    /// Bare failure carrying only the fixed message.
    pub fn new() -> Self {
        Self {
            detail: None,
            expression: None,
            location: None,
            occurred_at: Utc::now(),
        }
    }

    /// Failure located at the caller of the `#[track_caller]` chain.
    #[track_caller]
    pub fn here() -> Self {
        Self::new().at(SourceLocation::caller())
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl Default for AssertionFailure {
    fn default() -> Self {
        Self::new()
    }
}

fn render_suffix(
    detail: &Option<String>,
    expression: &Option<String>,
    location: &Option<SourceLocation>,
) -> String {
    let mut suffix = String::new();
    if let Some(detail) = detail.as_deref().filter(|d| !d.is_empty()) {
        suffix.push_str(": ");
        suffix.push_str(detail);
    }
    if let Some(expression) = expression {
        suffix.push_str(": `");
        suffix.push_str(expression);
        suffix.push('`');
    }
    if let Some(location) = location {
        suffix.push_str(" at ");
        suffix.push_str(&location.to_string());
    }
    suffix
}
