//! Error types for validation failures
//!
//! A [`ValidationError`] is data, never control flow: every failed check
//! produces one and the accumulator files it under the field it belongs to.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Placeholder replaced with the field's human label when an error is recorded.
pub const LABEL_PLACEHOLDER: &str = "{label}";

// ============================================================================
// SEVERITY AND KIND
// ============================================================================

/// Severity level of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Error that must be fixed before submission (default).
    #[default]
    Error,
    /// Soft feedback that should prompt confirmation but not block.
    Warning,
}

/// Which class of constraint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Value fails a pattern or type check.
    Format,
    /// Required value missing, or a value present where it must be absent.
    Presence,
    /// Numeric or length value outside a bound.
    Range,
    /// Two or more fields violate an ordering or temporal constraint.
    Relational,
    /// Content matches a discouraged pattern.
    Quality,
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("min_length", "{label} must be at least 2 characters")
///     .with_kind(ErrorKind::Range)
///     .with_param("min", "2")
///     .recorded_for("name", "Supply name");
///
/// assert_eq!(error.message, "Supply name must be at least 2 characters");
/// assert_eq!(error.field.as_deref(), Some("name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `required`, `invalid_date`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English. Never contains markup.
    pub message: Cow<'static, str>,

    /// Field the error was recorded for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Constraint class.
    pub kind: ErrorKind,

    /// Whether the error blocks submission.
    pub severity: ErrorSeverity,
}

impl ValidationError {
    /// Creates a new format-class error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            kind: ErrorKind::Format,
            severity: ErrorSeverity::Error,
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the constraint class.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the severity level.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Files the error under `field`, substituting `{label}` in the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn recorded_for(mut self, field: &str, label: &str) -> Self {
        if self.message.contains(LABEL_PLACEHOLDER) {
            self.message = Cow::Owned(self.message.replace(LABEL_PLACEHOLDER, label));
        }
        self.field = Some(Cow::Owned(field.to_owned()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true for warning-severity errors.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == ErrorSeverity::Warning
    }

    /// Returns true when the value could not be read as a number or date.
    ///
    /// These describe the input rather than the check that hit them.
    #[must_use]
    pub fn is_coercion(&self) -> bool {
        matches!(self.code.as_ref(), "not_a_number" | "invalid_date")
    }

    /// Two errors report the same failure reason.
    #[must_use]
    pub fn same_reason(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "{label} is required").with_kind(ErrorKind::Presence)
    }

    /// Creates a "must_be_empty" error.
    pub fn must_be_empty() -> Self {
        Self::new("must_be_empty", "{label} must be empty").with_kind(ErrorKind::Presence)
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("{{label}} must be at least {min} characters"))
            .with_kind(ErrorKind::Range)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("{{label}} must not exceed {max} characters"))
            .with_kind(ErrorKind::Range)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(
        expected: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", message).with_param("expected", expected)
    }

    /// Creates a "not_a_number" error.
    pub fn not_a_number() -> Self {
        Self::new("not_a_number", "{label} must be a valid number")
    }

    /// Creates an "invalid_date" error.
    pub fn invalid_date() -> Self {
        Self::new("invalid_date", "{label} is not a valid date")
    }

    /// Creates a relational "out_of_order" error.
    pub fn out_of_order(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("out_of_order", message).with_kind(ErrorKind::Relational)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
