//! Date validators
//!
//! Only parseability lives here. Comparisons against today or a sibling
//! date need the evaluation context and are cross-field rules.

use crate::foundation::{Coercion, Validate, ValidationError, Value};

/// Validates that a value parses as a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Blank values pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidDate;

impl Validate for ValidDate {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_date() {
            Ok(_) | Err(Coercion::Blank) => Ok(()),
            Err(Coercion::Invalid) => Err(ValidationError::invalid_date()),
        }
    }
}

/// Creates a [`ValidDate`] validator.
#[must_use]
pub const fn date() -> ValidDate {
    ValidDate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        assert!(date().validate(&Value::from("2024-02-29")).is_ok());
        assert!(date().validate(&Value::from("2024-01-10T00:00:00+05:30")).is_ok());
        assert!(date().validate(&Value::Null).is_ok());
        assert_eq!(
            date().validate(&Value::from("2023-02-29")).unwrap_err().code,
            "invalid_date"
        );
        assert!(date().validate(&Value::from("10/01/2024")).is_err());
    }
}
