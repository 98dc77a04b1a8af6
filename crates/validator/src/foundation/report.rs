//! Aggregated validation output: [`ErrorMap`] and [`ValidationResult`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::error::{ErrorSeverity, ValidationError};

// ============================================================================
// ERROR MAP
// ============================================================================

/// Field name to the ordered errors recorded for it.
///
/// A key is present iff at least one error was recorded for the field.
/// Within a field, errors keep check-execution order; a second error with
/// the same code and message as an earlier one on that field is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    fields: BTreeMap<String, Vec<ValidationError>>,
}

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, preserving order and suppressing duplicates.
    ///
    /// Returns false when the error was a duplicate.
    pub fn push(&mut self, field: &str, error: ValidationError) -> bool {
        let entries = self.fields.entry(field.to_owned()).or_default();
        if entries.iter().any(|existing| existing.same_reason(&error)) {
            return false;
        }
        entries.push(error);
        true
    }

    /// Appends every error of `other`, field by field.
    pub fn merge(&mut self, other: ErrorMap) {
        for (field, errors) in other.fields {
            for error in errors {
                self.push(&field, error);
            }
        }
    }

    /// Errors recorded for `field` (empty when none).
    #[must_use]
    pub fn field(&self, field: &str) -> &[ValidationError] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// The first error for `field`, for "first error wins" display.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&ValidationError> {
        self.field(field).first()
    }

    /// Messages recorded for `field`, in order.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.field(field).iter().map(|e| e.message.as_ref()).collect()
    }

    /// Returns true if `field` has at least one error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns true when no field has errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Total number of recorded errors across all fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Names of fields with errors, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(field, errors)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Keeps only errors of the given severity, dropping emptied fields.
    #[must_use]
    pub fn filter_severity(&self, severity: ErrorSeverity) -> ErrorMap {
        let fields = self
            .fields
            .iter()
            .filter_map(|(field, errors)| {
                let kept: Vec<_> = errors
                    .iter()
                    .filter(|e| e.severity == severity)
                    .cloned()
                    .collect();
                (!kept.is_empty()).then(|| (field.clone(), kept))
            })
            .collect();
        ErrorMap { fields }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.error_count())?;
        for (field, errors) in &self.fields {
            for error in errors {
                writeln!(f, "  {field}: {}", error.message)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The engine's only externally observable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Every failure, keyed by field.
    pub errors: ErrorMap,
}

impl ValidationResult {
    /// Wraps an error map, deriving `is_valid`.
    #[must_use]
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true if at least one error-severity entry exists.
    ///
    /// A result can be invalid yet non-blocking when only warnings remain;
    /// the caller should then ask for confirmation instead of refusing.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.errors
            .iter()
            .flat_map(|(_, errors)| errors)
            .any(|e| e.severity == ErrorSeverity::Error)
    }

    /// Only the blocking errors.
    #[must_use]
    pub fn errors_only(&self) -> ErrorMap {
        self.errors.filter_severity(ErrorSeverity::Error)
    }

    /// Only the warnings.
    #[must_use]
    pub fn warnings(&self) -> ErrorMap {
        self.errors.filter_severity(ErrorSeverity::Warning)
    }
}

impl From<ErrorMap> for ValidationResult {
    fn from(errors: ErrorMap) -> Self {
        Self::from_errors(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_push_keeps_order() {
        let mut map = ErrorMap::new();
        map.push("name", ValidationError::required());
        map.push("name", ValidationError::min_length(2, 0));
        let codes: Vec<_> = map.field("name").iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["required", "min_length"]);
    }

    #[test]
    fn test_duplicate_reason_is_dropped() {
        let mut map = ErrorMap::new();
        assert!(map.push("quantity", ValidationError::not_a_number()));
        assert!(!map.push("quantity", ValidationError::not_a_number()));
        assert_eq!(map.error_count(), 1);
        // Same reason on another field is not a duplicate.
        assert!(map.push("price", ValidationError::not_a_number()));
    }

    #[test]
    fn test_key_exists_iff_errors() {
        let map = ErrorMap::new();
        assert!(!map.contains("x"));
        assert!(map.field("x").is_empty());
        assert!(map.first("x").is_none());
    }

    #[test]
    fn test_result_validity() {
        assert!(ValidationResult::from_errors(ErrorMap::new()).is_valid);

        let mut map = ErrorMap::new();
        map.push("a", ValidationError::required());
        let result = ValidationResult::from(map);
        assert!(!result.is_valid);
        assert!(result.is_blocking());
    }

    #[test]
    fn test_warning_only_result_is_invalid_but_not_blocking() {
        let mut map = ErrorMap::new();
        map.push(
            "price",
            ValidationError::new("unusual_total", "Total looks high")
                .with_kind(ErrorKind::Quality)
                .with_severity(ErrorSeverity::Warning),
        );
        let result = ValidationResult::from(map);
        assert!(!result.is_valid);
        assert!(!result.is_blocking());
        assert!(result.errors_only().is_empty());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let result = ValidationResult::from(ErrorMap::new());
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"isValid":true,"errors":{}}"#
        );
    }
}
