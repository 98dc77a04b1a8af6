//! Password strength rule

use std::borrow::Cow;

use crate::foundation::{ValidationError, Value};
use crate::rules::{Failures, Rule, RuleInput};

/// Characters accepted as the "special" class.
pub const SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn is_special(c: &char) -> bool {
    SPECIAL_CHARS.contains(*c)
}

const CLASSES: [(fn(&char) -> bool, &str, &str); 4] = [
    (
        char::is_ascii_lowercase,
        "lowercase",
        "Password must contain at least one lowercase letter",
    ),
    (
        char::is_ascii_uppercase,
        "uppercase",
        "Password must contain at least one uppercase letter",
    ),
    (
        char::is_ascii_digit,
        "digit",
        "Password must contain at least one number",
    ),
    (
        is_special,
        "special",
        "Password must contain at least one special character (@$!%*?&)",
    ),
];

/// Password strength.
///
/// Every unmet requirement is its own `weak_password` error, in a fixed
/// order: length, lowercase, uppercase, digit, special character. The
/// `missing` param names the requirement. Blank input passes; otherwise the
/// raw value is checked, so surrounding spaces count toward the length.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Context, ValueMap};
/// use agriform_validator::rules::{Rule, RuleInput};
/// use agriform_validator::validators::strong_password;
///
/// let values = ValueMap::new().with("password", "abc");
/// let context = Context::default();
/// let input = RuleInput::new("password", "Password", &values, &context);
/// let missing: Vec<_> = strong_password()
///     .evaluate(&input)
///     .iter()
///     .filter_map(|e| e.param("missing").map(str::to_owned))
///     .collect();
/// assert_eq!(missing, ["length", "uppercase", "digit", "special"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrongPassword;

impl StrongPassword {
    /// Unmet requirements of `password` as `(requirement, message)` pairs.
    #[must_use]
    pub fn unmet(password: &str) -> Vec<(&'static str, &'static str)> {
        let short = (password.chars().count() < MIN_PASSWORD_LENGTH)
            .then_some(("length", "Password must be at least 8 characters"));
        short
            .into_iter()
            .chain(
                CLASSES
                    .iter()
                    .filter(|(has, _, _)| !password.chars().any(|c| has(&c)))
                    .map(|&(_, missing, message)| (missing, message)),
            )
            .collect()
    }
}

impl Rule for StrongPassword {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        if input.value.is_blank() {
            return Failures::new();
        }
        let password = match input.value {
            Value::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        };
        Self::unmet(&password)
            .into_iter()
            .map(|(missing, message)| {
                ValidationError::new("weak_password", message).with_param("missing", missing)
            })
            .collect()
    }
}

/// Creates a [`StrongPassword`] rule.
#[must_use]
pub const fn strong_password() -> StrongPassword {
    StrongPassword
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, ValueMap};

    fn missing(password: impl Into<Value>) -> Vec<String> {
        let values = ValueMap::new().with("password", password);
        let context = Context::default();
        strong_password()
            .evaluate(&RuleInput::new("password", "Password", &values, &context))
            .iter()
            .filter_map(|e| e.param("missing").map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_every_missing_requirement_is_reported() {
        assert_eq!(missing("abc"), ["length", "uppercase", "digit", "special"]);
        assert_eq!(missing("ABCDEFG1!"), ["lowercase"]);
        assert_eq!(missing("abcdefgh"), ["uppercase", "digit", "special"]);
        assert_eq!(missing(12_345_678), ["lowercase", "uppercase", "special"]);
        assert!(missing("Abcdefg1!").is_empty());
    }

    #[test]
    fn test_messages_follow_requirement_order() {
        let messages: Vec<&str> = StrongPassword::unmet("Ab1")
            .into_iter()
            .map(|(_, message)| message)
            .collect();
        assert_eq!(
            messages,
            [
                "Password must be at least 8 characters",
                "Password must contain at least one special character (@$!%*?&)",
            ]
        );
    }

    #[test]
    fn test_blank_passes() {
        assert!(missing("").is_empty());
        assert!(missing("   ").is_empty());
        assert!(missing(Value::Null).is_empty());
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        assert!(missing(" Abc1!  ").is_empty());
    }
}
