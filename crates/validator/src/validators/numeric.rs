//! Numeric validators
//!
//! All of these coerce through [`Value::as_number`]. A value that cannot be
//! read as a number reports `not_a_number` from whichever check sees it
//! first; the accumulator drops the repeats. Blank values pass.

use crate::foundation::{Coercion, ErrorKind, Validate, ValidationError, Value};

/// Reads a number for a range check. `Ok(None)` means blank.
pub(crate) fn read_number(input: &Value) -> Result<Option<f64>, ValidationError> {
    match input.as_number() {
        Ok(n) => Ok(Some(n)),
        Err(Coercion::Blank) => Ok(None),
        Err(Coercion::Invalid) => Err(ValidationError::not_a_number()),
    }
}

// ============================================================================
// NUMERIC / INTEGER
// ============================================================================

/// Validates that a value can be read as a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Numeric;

impl Validate for Numeric {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        read_number(input).map(|_| ())
    }
}

/// Creates a [`Numeric`] validator.
#[must_use]
pub const fn numeric() -> Numeric {
    Numeric
}

/// Validates that a value is a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integer;

impl Validate for Integer {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match read_number(input)? {
            Some(n) if n.fract() != 0.0 => Err(ValidationError::new(
                "not_whole",
                "{label} must be a whole number",
            )),
            _ => Ok(()),
        }
    }
}

/// Creates an [`Integer`] validator.
#[must_use]
pub const fn integer() -> Integer {
    Integer
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Validates that a number is at least `min` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Min {
    /// Lower bound.
    pub min: f64,
}

impl Validate for Min {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match read_number(input)? {
            Some(n) if n < self.min => Err(ValidationError::new(
                "min",
                format!("{{label}} must be at least {}", self.min),
            )
            .with_kind(ErrorKind::Range)
            .with_param("min", self.min.to_string())
            .with_param("actual", n.to_string())),
            _ => Ok(()),
        }
    }
}

/// Creates a [`Min`] validator.
#[must_use]
pub const fn min(min: f64) -> Min {
    Min { min }
}

/// Validates that a number does not exceed `max` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Max {
    /// Upper bound.
    pub max: f64,
}

impl Validate for Max {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match read_number(input)? {
            Some(n) if n > self.max => Err(ValidationError::new(
                "max",
                format!("{{label}} must not exceed {}", self.max),
            )
            .with_kind(ErrorKind::Range)
            .with_param("max", self.max.to_string())
            .with_param("actual", n.to_string())),
            _ => Ok(()),
        }
    }
}

/// Creates a [`Max`] validator.
#[must_use]
pub const fn max(max: f64) -> Max {
    Max { max }
}

/// Validates that a number lies in `[min, max]`.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Validate, Value};
/// use agriform_validator::validators::in_range;
///
/// let age = in_range(18.0, 100.0);
/// assert!(age.validate(&Value::from(42)).is_ok());
/// assert!(age.validate(&Value::from("17")).is_err());
/// assert_eq!(age.validate(&Value::from("old")).unwrap_err().code, "not_a_number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Validate for InRange {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match read_number(input)? {
            Some(n) if n < self.min || n > self.max => Err(ValidationError::new(
                "out_of_range",
                format!("{{label}} must be between {} and {}", self.min, self.max),
            )
            .with_kind(ErrorKind::Range)
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", n.to_string())),
            _ => Ok(()),
        }
    }
}

/// Creates an [`InRange`] validator. Bounds are swapped if reversed.
#[must_use]
pub fn in_range(min: f64, max: f64) -> InRange {
    InRange {
        min: min.min(max),
        max: min.max(max),
    }
}

/// Validates that a number is strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Positive;

impl Validate for Positive {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match read_number(input)? {
            Some(n) if n <= 0.0 => Err(ValidationError::new(
                "positive",
                "{label} must be greater than 0",
            )
            .with_kind(ErrorKind::Range)),
            _ => Ok(()),
        }
    }
}

/// Creates a [`Positive`] validator.
#[must_use]
pub const fn positive() -> Positive {
    Positive
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        assert!(numeric().validate(&Value::from("12.5")).is_ok());
        assert!(numeric().validate(&Value::from(7)).is_ok());
        assert!(numeric().validate(&Value::Null).is_ok());
        let err = numeric().validate(&Value::from("abc")).unwrap_err();
        assert_eq!(err.code, "not_a_number");
        assert_eq!(err.kind, ErrorKind::Format);
    }

    #[test]
    fn test_integer() {
        assert!(integer().validate(&Value::from("12")).is_ok());
        assert!(integer().validate(&Value::from(12.0)).is_ok());
        assert_eq!(
            integer().validate(&Value::from("12.5")).unwrap_err().code,
            "not_whole"
        );
        assert_eq!(
            integer().validate(&Value::from("x")).unwrap_err().code,
            "not_a_number"
        );
    }

    #[test]
    fn test_min_is_inclusive() {
        assert!(min(0.0).validate(&Value::from(0)).is_ok());
        let err = min(0.0).validate(&Value::from(-1)).unwrap_err();
        assert_eq!(err.message, "{label} must be at least 0");
        assert_eq!(err.param("actual"), Some("-1"));
    }

    #[test]
    fn test_max_is_inclusive() {
        assert!(max(100.0).validate(&Value::from("100")).is_ok());
        assert_eq!(
            max(100.0).validate(&Value::from("100.5")).unwrap_err().code,
            "max"
        );
    }

    #[test]
    fn test_range_reports_not_a_number_instead_of_failing_loudly() {
        let err = in_range(18.0, 100.0)
            .validate(&Value::from("eighteen"))
            .unwrap_err();
        assert!(err.same_reason(&ValidationError::not_a_number()));
    }

    #[test]
    fn test_in_range() {
        let v = in_range(100.0, 18.0);
        assert_eq!((v.min, v.max), (18.0, 100.0));
        assert!(v.validate(&Value::from(18)).is_ok());
        assert!(v.validate(&Value::from(100)).is_ok());
        let err = v.validate(&Value::from(101)).unwrap_err();
        assert_eq!(err.message, "{label} must be between 18 and 100");
    }

    #[test]
    fn test_positive() {
        assert!(positive().validate(&Value::from(0.01)).is_ok());
        assert!(positive().validate(&Value::from(0)).is_err());
        assert!(positive().validate(&Value::from("-2")).is_err());
        assert!(positive().validate(&Value::from("")).is_ok());
    }
}
