//! Digit-sequence validators
//!
//! Checks over the digits of an identifier-like value, where format alone is
//! not enough. Spaces and dashes between digit groups are ignored.

use crate::foundation::{Validate, ValidationError, Value};

/// Returns the digits of `text` with group separators removed, or `None`
/// if anything else is present.
fn digits(text: &str) -> Option<Vec<u32>> {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10))
        .collect()
}

/// Standard mod-10 double-and-sum checksum over a digit sequence.
#[must_use]
pub fn luhn_checksum_valid(digits: &[u32]) -> bool {
    if digits.is_empty() {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

// ============================================================================
// LUHN
// ============================================================================

/// Validates a card-like number with the Luhn checksum.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Validate, Value};
/// use agriform_validator::validators::luhn;
///
/// assert!(luhn().validate(&Value::from("4111 1111 1111 1111")).is_ok());
/// assert!(luhn().validate(&Value::from("4111 1111 1111 1112")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Luhn;

impl Validate for Luhn {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_blank() {
            return Ok(());
        }
        let valid = input
            .as_text()
            .and_then(|text| digits(&text))
            .is_some_and(|d| luhn_checksum_valid(&d));
        if valid {
            Ok(())
        } else {
            Err(ValidationError::new("luhn", "Please enter a valid card number"))
        }
    }
}

/// Creates a [`Luhn`] validator.
#[must_use]
pub const fn luhn() -> Luhn {
    Luhn
}

// ============================================================================
// REPEATED DIGITS
// ============================================================================

crate::validator! {
    /// Fails when the last `run` digits are all the same digit, e.g. the
    /// subscriber part of `+94771111111`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotRepeatedDigits { run: usize } for Value;
    rule(self, input) {
        let tail: Vec<char> = input
            .as_text()
            .map(|text| text.chars().filter(char::is_ascii_digit).collect())
            .unwrap_or_default();
        self.run < 2
            || tail.len() < self.run
            || tail[tail.len() - self.run..].windows(2).any(|w| w[0] != w[1])
    }
    error(self, input) {
        ValidationError::new("repeated_digits", "{label} cannot be a sequence of repeated digits")
            .with_param("run", self.run.to_string())
    }
    fn not_repeated_digits(run: usize);
}
