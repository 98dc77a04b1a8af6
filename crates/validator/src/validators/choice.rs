//! Closed-vocabulary validators

use crate::foundation::{Validate, ValidationError, Value};

/// Validates that a value is one of a fixed set of spellings.
///
/// Comparison is exact on the trimmed text. Blank values pass.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Validate, Value};
/// use agriform_validator::validators::one_of;
///
/// let unit = one_of(&["kg", "g", "l"]);
/// assert!(unit.validate(&Value::from("kg")).is_ok());
/// assert!(unit.validate(&Value::from("lbs")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneOf {
    allowed: &'static [&'static str],
}

impl OneOf {
    /// Creates a validator accepting exactly `allowed`.
    #[must_use]
    pub const fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed }
    }

    /// The accepted spellings.
    #[must_use]
    pub const fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }
}

impl Validate for OneOf {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(text) = input.as_text().filter(|t| !t.is_empty()) else {
            return Ok(());
        };
        if self.allowed.contains(&text.as_ref()) {
            Ok(())
        } else {
            Err(ValidationError::new("one_of", "Please select a valid {label}")
                .with_param("allowed", self.allowed.join(", ")))
        }
    }
}

/// Creates a [`OneOf`] validator.
#[must_use]
pub const fn one_of(allowed: &'static [&'static str]) -> OneOf {
    OneOf::new(allowed)
}
