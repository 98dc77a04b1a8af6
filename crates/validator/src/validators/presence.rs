//! Presence validators
//!
//! These are the only checks that look at blank values. Every other
//! validator passes on a blank input so that a missing value is reported
//! once, as a presence failure, and not again as a format failure.

use crate::foundation::{ValidationError, Value};

crate::validator! {
    /// Fails when the value is absent, null, or whitespace-only text.
    ///
    /// `0` and `false` are present values.
    pub Required for Value;
    rule(input) { !input.is_blank() }
    error(input) { ValidationError::required() }
    fn required();
}

crate::validator! {
    /// Fails when a value is present. Used where a field is meaningless
    /// for the current category and must be left empty.
    pub MustBeEmpty for Value;
    rule(input) { input.is_blank() }
    error(input) { ValidationError::must_be_empty() }
    fn must_be_empty();
}

crate::validator! {
    /// Fails unless the value is boolean `true` (or the text `"true"`).
    ///
    /// Blank input passes; pair with [`required`] for mandatory checkboxes.
    pub IsTrue for Value;
    rule(input) { input.is_blank() || input.as_bool() == Some(true) }
    error(input) {
        ValidationError::new("must_be_true", "{label} must be confirmed")
            .with_kind(crate::foundation::ErrorKind::Presence)
    }
    fn is_true();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Validate};

    #[test]
    fn test_required() {
        let v = required();
        assert!(v.validate(&Value::from("x")).is_ok());
        assert!(v.validate(&Value::from(0)).is_ok());
        assert!(v.validate(&Value::from(false)).is_ok());

        let err = v.validate(&Value::Null).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.kind, ErrorKind::Presence);
        assert!(v.validate(&Value::from("  \t")).is_err());
    }

    #[test]
    fn test_must_be_empty() {
        let v = must_be_empty();
        assert!(v.validate(&Value::Null).is_ok());
        assert!(v.validate(&Value::from("")).is_ok());
        assert_eq!(
            v.validate(&Value::from("2025-01-01")).unwrap_err().code,
            "must_be_empty"
        );
    }

    #[test]
    fn test_is_true() {
        let v = is_true();
        assert!(v.validate(&Value::from(true)).is_ok());
        assert!(v.validate(&Value::from("true")).is_ok());
        assert!(v.validate(&Value::Null).is_ok());
        assert!(v.validate(&Value::from(false)).is_err());
    }
}
