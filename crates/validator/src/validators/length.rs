//! String length validators
//!
//! Length is measured in Unicode scalar values (chars) over the trimmed
//! text form of the value, the same form normalization stores. Blank
//! values pass.

use crate::foundation::{Validate, ValidationError, Value};

/// Char count of the trimmed text form, or `None` for blank input.
#[inline]
fn measure(input: &Value) -> Option<usize> {
    if input.is_blank() {
        return None;
    }
    input.as_text().map(|text| text.chars().count())
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for Value;
    rule(self, input) { measure(input).is_none_or(|len| len >= self.min) }
    error(self, input) { ValidationError::min_length(self.min, measure(input).unwrap_or(0)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for Value;
    rule(self, input) { measure(input).is_none_or(|len| len <= self.max) }
    error(self, input) { ValidationError::max_length(self.max, measure(input).unwrap_or(0)) }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a length is within an inclusive range.
///
/// Reports the bound that was crossed, so the message matches what a
/// separate `min_length` / `max_length` pair would say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Creates a new length range validator. Bounds are swapped if reversed.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }
}

impl Validate for LengthRange {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match measure(input) {
            Some(len) if len < self.min => Err(ValidationError::min_length(self.min, len)),
            Some(len) if len > self.max => Err(ValidationError::max_length(self.max, len)),
            _ => Ok(()),
        }
    }
}

/// Creates a length range validator.
#[must_use]
pub fn length_range(min: usize, max: usize) -> LengthRange {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_min_length_counts_trimmed_chars() {
        let v = min_length(2);
        assert!(v.validate(&Value::from("ab")).is_ok());
        assert!(v.validate(&Value::from("é!")).is_ok());
        let err = v.validate(&Value::from("  a  ")).unwrap_err();
        assert_eq!(err.param("actual"), Some("1"));
        assert_eq!(err.kind, ErrorKind::Range);
    }

    #[test]
    fn test_blank_passes() {
        assert!(min_length(5).validate(&Value::Null).is_ok());
        assert!(min_length(5).validate(&Value::from("   ")).is_ok());
    }

    #[test]
    fn test_max_length() {
        let v = max_length(3);
        assert!(v.validate(&Value::from("abc")).is_ok());
        let err = v.validate(&Value::from("abcd")).unwrap_err();
        assert_eq!(err.message, "{label} must not exceed 3 characters");
    }

    #[test]
    fn test_numbers_measure_their_text_form() {
        assert!(max_length(3).validate(&Value::from(1234)).is_err());
    }

    #[test]
    fn test_length_range() {
        let v = length_range(3, 20);
        assert!(v.validate(&Value::from("farmer_01")).is_ok());
        assert_eq!(v.validate(&Value::from("ab")).unwrap_err().code, "min_length");
        assert_eq!(
            v.validate(&Value::from("a".repeat(21))).unwrap_err().code,
            "max_length"
        );
        assert_eq!(length_range(9, 2), LengthRange { min: 2, max: 9 });
    }
}
