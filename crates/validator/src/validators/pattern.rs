//! Named pattern validators
//!
//! A closed set of formats that forms in this system reuse, plus an escape
//! hatch for a caller-owned static regex. Patterns test the trimmed text
//! form of the value; blank values pass.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError, Value};

// ============================================================================
// REGEX PATTERNS
// ============================================================================

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\d{0,15}$").unwrap());

static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s-]{3,10}$").unwrap());

static CVV_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").unwrap());

static CARD_EXPIRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap());

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

static PERSON_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s]*$").unwrap());

// ============================================================================
// PATTERN
// ============================================================================

/// A named text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `local@domain.tld`, no whitespace.
    Email,
    /// `http(s)://` URL with a dotted host.
    Url,
    /// Non-negative digits with at most two decimals, e.g. a price.
    Decimal,
    /// Exactly `n` digits; spaces and dashes between groups are ignored.
    Digits(usize),
    /// International number: up to 16 digits, not starting with 0.
    /// Every non-digit (`+`, spaces, dashes, parentheses) is ignored.
    Phone,
    /// 3 to 10 letters, digits, spaces or dashes.
    PostalCode,
    /// Card verification value, 3 or 4 digits.
    Cvv,
    /// Card expiry in `MM/YY` form.
    CardExpiry,
    /// Letters, digits and underscore.
    Username,
    /// Letters and spaces.
    PersonName,
}

impl Pattern {
    /// Stable identifier, recorded as the `expected` error param.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Decimal => "decimal",
            Self::Digits(_) => "digits",
            Self::Phone => "phone",
            Self::PostalCode => "postal_code",
            Self::Cvv => "cvv",
            Self::CardExpiry => "card_expiry",
            Self::Username => "username",
            Self::PersonName => "person_name",
        }
    }

    /// Returns true if `text` has this format.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Email => EMAIL_REGEX.is_match(text),
            Self::Url => URL_REGEX.is_match(text),
            Self::Decimal => DECIMAL_REGEX.is_match(text),
            Self::Digits(n) => {
                let mut count = 0;
                for c in text.chars().filter(|c| !matches!(c, ' ' | '-')) {
                    if !c.is_ascii_digit() {
                        return false;
                    }
                    count += 1;
                }
                count == n
            }
            Self::Phone => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                PHONE_REGEX.is_match(&digits)
            }
            Self::PostalCode => POSTAL_CODE_REGEX.is_match(text),
            Self::Cvv => CVV_REGEX.is_match(text),
            Self::CardExpiry => CARD_EXPIRY_REGEX.is_match(text),
            Self::Username => USERNAME_REGEX.is_match(text),
            Self::PersonName => PERSON_NAME_REGEX.is_match(text),
        }
    }

    /// Failure message for this format.
    #[must_use]
    pub fn message(self) -> Cow<'static, str> {
        match self {
            Self::Email => "Please enter a valid email address".into(),
            Self::Url => "Please enter a valid URL".into(),
            Self::Decimal => "{label} must be a number with up to two decimal places".into(),
            Self::Digits(n) => format!("{{label}} must be {n} digits").into(),
            Self::Phone => "Please enter a valid phone number".into(),
            Self::PostalCode => "Please enter a valid postal code".into(),
            Self::Cvv => "Please enter a valid CVV".into(),
            Self::CardExpiry => "Please enter a valid expiry date (MM/YY)".into(),
            Self::Username => "{label} can only contain letters, numbers, and underscores".into(),
            Self::PersonName => "{label} can only contain letters and spaces".into(),
        }
    }
}

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a value matches a named [`Pattern`].
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MatchesPattern { pattern: Pattern } for Value;
    rule(self, input) {
        input.is_blank() || input.as_text().is_some_and(|text| self.pattern.matches(&text))
    }
    error(self, input) {
        let error = ValidationError::invalid_format(self.pattern.name(), self.pattern.message());
        match self.pattern {
            Pattern::Digits(n) => error.with_param("length", n.to_string()),
            _ => error,
        }
    }
    fn pattern(pattern: Pattern);
}

/// Shorthand for `pattern(Pattern::Email)`.
#[must_use]
pub fn email() -> MatchesPattern {
    pattern(Pattern::Email)
}

/// Shorthand for `pattern(Pattern::Url)`.
#[must_use]
pub fn url() -> MatchesPattern {
    pattern(Pattern::Url)
}

// ============================================================================
// CUSTOM REGEX
// ============================================================================

/// Validates against a caller-owned static regex.
///
/// For formats that belong to one form only (a national phone prefix, an
/// internal code), keeping the regex next to the form that uses it.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
/// use regex::Regex;
/// use agriform_validator::foundation::{Validate, Value};
/// use agriform_validator::validators::matches_regex;
///
/// static SKU: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap());
///
/// let sku = matches_regex(&SKU, "sku", "{label} must look like ABC-1234");
/// assert!(sku.validate(&Value::from("SED-0042")).is_ok());
/// assert!(sku.validate(&Value::from("sed-42")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    regex: &'static Regex,
    expected: &'static str,
    message: Cow<'static, str>,
}

impl MatchesRegex {
    /// Creates a regex validator reporting `message` on mismatch.
    pub fn new(
        regex: &'static Regex,
        expected: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            regex,
            expected,
            message: message.into(),
        }
    }
}

impl Validate for MatchesRegex {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_blank() {
            return Ok(());
        }
        match input.as_text() {
            Some(text) if self.regex.is_match(&text) => Ok(()),
            _ => Err(ValidationError::invalid_format(
                self.expected,
                self.message.clone(),
            )),
        }
    }
}

/// Creates a [`MatchesRegex`] validator.
pub fn matches_regex(
    regex: &'static LazyLock<Regex>,
    expected: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> MatchesRegex {
    MatchesRegex::new(regex, expected, message)
}

// ============================================================================
// CASE
// ============================================================================

crate::validator! {
    /// Validates that a value has no uppercase letters.
    pub Lowercase for Value;
    rule(input) {
        input
            .as_text()
            .is_none_or(|text| text.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()))
    }
    error(input) { ValidationError::new("lowercase", "{label} must be in lowercase") }
    fn lowercase();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check(p: Pattern, text: &str) -> bool {
        pattern(p).validate(&Value::from(text)).is_ok()
    }

    #[test]
    fn test_email() {
        assert!(check(Pattern::Email, "farmer@example.lk"));
        assert!(check(Pattern::Email, "  farmer@example.lk  "));
        assert!(!check(Pattern::Email, "not-an-email"));
        assert!(!check(Pattern::Email, "a b@c.d"));

        let err = email().validate(&Value::from("x@y")).unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("email"));
    }

    #[test]
    fn test_url() {
        assert!(check(Pattern::Url, "https://www.example.com/guide.pdf"));
        assert!(check(Pattern::Url, "http://cdn.example.org/v/1"));
        assert!(!check(Pattern::Url, "ftp://example.com"));
        assert!(!check(Pattern::Url, "example.com"));
    }

    #[test]
    fn test_decimal() {
        assert!(check(Pattern::Decimal, "12"));
        assert!(check(Pattern::Decimal, "12.5"));
        assert!(check(Pattern::Decimal, "12.50"));
        assert!(!check(Pattern::Decimal, "12.505"));
        assert!(!check(Pattern::Decimal, "-3"));
        assert!(pattern(Pattern::Decimal).validate(&Value::from(19.99)).is_ok());
    }

    #[test]
    fn test_digits_ignores_group_separators() {
        assert!(check(Pattern::Digits(16), "4111 1111 1111 1111"));
        assert!(check(Pattern::Digits(16), "4111-1111-1111-1111"));
        assert!(!check(Pattern::Digits(16), "4111"));
        assert!(!check(Pattern::Digits(4), "41a1"));

        let err = pattern(Pattern::Digits(16))
            .validate(&Value::from("4111"))
            .unwrap_err();
        assert_eq!(err.param("length"), Some("16"));
    }

    #[test]
    fn test_phone() {
        assert!(check(Pattern::Phone, "+94 77 123 4567"));
        assert!(check(Pattern::Phone, "(555) 010-2000"));
        assert!(!check(Pattern::Phone, "0771234567"));
        assert!(!check(Pattern::Phone, "12345678901234567"));
    }

    #[test]
    fn test_card_fields() {
        assert!(check(Pattern::Cvv, "123"));
        assert!(check(Pattern::Cvv, "1234"));
        assert!(!check(Pattern::Cvv, "12"));
        assert!(check(Pattern::CardExpiry, "09/27"));
        assert!(!check(Pattern::CardExpiry, "13/27"));
        assert!(!check(Pattern::CardExpiry, "9/27"));
    }

    #[test]
    fn test_names() {
        assert!(check(Pattern::Username, "farmer_01"));
        assert!(!check(Pattern::Username, "farmer-01"));
        assert!(check(Pattern::PersonName, "Nimal Perera"));
        assert!(!check(Pattern::PersonName, "R2D2"));
        assert!(check(Pattern::PostalCode, "10115"));
        assert!(!check(Pattern::PostalCode, "1"));
    }

    #[test]
    fn test_blank_passes_every_pattern() {
        for p in [Pattern::Email, Pattern::Url, Pattern::Digits(4), Pattern::Phone] {
            assert!(pattern(p).validate(&Value::Null).is_ok());
            assert!(pattern(p).validate(&Value::from(" ")).is_ok());
        }
    }

    #[test]
    fn test_label_placeholder_in_message() {
        let err = pattern(Pattern::Username)
            .validate(&Value::from("a b"))
            .unwrap_err()
            .recorded_for("username", "Username");
        assert_eq!(
            err.message,
            "Username can only contain letters, numbers, and underscores"
        );
    }

    static SKU: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap());

    #[test]
    fn test_matches_regex() {
        let v = matches_regex(&SKU, "sku", "bad sku");
        assert!(v.validate(&Value::from("ABC-0001")).is_ok());
        assert!(v.validate(&Value::Null).is_ok());
        let err = v.validate(&Value::from("abc")).unwrap_err();
        assert_eq!(err.message, "bad sku");
        assert_eq!(err.param("expected"), Some("sku"));
    }

    #[test]
    fn test_lowercase() {
        assert!(lowercase().validate(&Value::from("farmer@example.lk")).is_ok());
        assert!(lowercase().validate(&Value::from("Farmer@example.lk")).is_err());
        assert!(lowercase().validate(&Value::Null).is_ok());
    }
}
