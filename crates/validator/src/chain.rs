//! Fluent rule chain
//!
//! [`Chain`] is a scoped mutable accumulator: each check runs immediately,
//! records its failure under the current field and hands the cursor back,
//! so several checks over several fields compose in one expression.
//! Nothing short-circuits; every failing check is recorded once.
//!
//! The chain itself is meant to live inside one function. What leaves that
//! scope is the frozen [`ErrorMap`] from [`Chain::finish`] or
//! [`Chain::snapshot`].
//!
//! # Examples
//!
//! ```
//! use agriform_validator::chain::Chain;
//! use agriform_validator::foundation::Value;
//!
//! let email = Value::from("not-an-email");
//! let password = Value::Null;
//!
//! let mut chain = Chain::new();
//! chain
//!     .field("email", "Email", &email)
//!     .required()
//!     .email()
//!     .field("password", "Password", &password)
//!     .required()
//!     .min_length(6);
//!
//! let errors = chain.finish();
//! assert_eq!(errors.messages("email"), ["Please enter a valid email address"]);
//! assert_eq!(errors.messages("password"), ["Password is required"]);
//! ```

use std::borrow::Cow;

use crate::foundation::{ErrorMap, Validate, ValidationError, ValidationResult, Value};
use crate::validators::{self, Pattern};

// ============================================================================
// CHAIN
// ============================================================================

/// Mutable error accumulator for imperative, one-off validation.
///
/// For forms declared once and validated many times, prefer a
/// [`FormSchema`](crate::schema::FormSchema).
#[derive(Debug, Clone, Default)]
pub struct Chain {
    errors: ErrorMap,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts checking `value` as field `name`, shown to users as `label`.
    pub fn field<'c, 'v>(
        &'c mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        value: &'v Value,
    ) -> FieldCursor<'c, 'v> {
        FieldCursor {
            chain: self,
            name: name.into(),
            label: label.into(),
            value,
        }
    }

    /// Records an arbitrary error for `field`.
    ///
    /// A `{label}` placeholder in the message is replaced by `field`.
    pub fn add_error(&mut self, field: &str, error: ValidationError) -> &mut Self {
        self.errors.push(field, error.recorded_for(field, field));
        self
    }

    /// All errors recorded so far.
    #[must_use]
    pub fn all_errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Errors recorded for `field`.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[ValidationError] {
        self.errors.field(field)
    }

    /// First error recorded for `field`.
    #[must_use]
    pub fn first_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.first(field)
    }

    /// Returns true if any check failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// A frozen copy of the current errors; the chain stays usable.
    #[must_use]
    pub fn snapshot(&self) -> ErrorMap {
        self.errors.clone()
    }

    /// Freezes the chain into its error map.
    #[must_use]
    pub fn finish(self) -> ErrorMap {
        self.errors
    }

    /// Alias for [`finish`](Self::finish).
    #[must_use]
    pub fn build(self) -> ErrorMap {
        self.finish()
    }

    /// Freezes the chain into a [`ValidationResult`].
    #[must_use]
    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }
}

// ============================================================================
// FIELD CURSOR
// ============================================================================

/// A chain positioned on one field.
///
/// Every check method consumes the cursor and returns it, so checks read
/// left to right in the order they run. Dropping the cursor ends the
/// statement; the recorded errors stay in the chain.
#[derive(Debug)]
pub struct FieldCursor<'c, 'v> {
    chain: &'c mut Chain,
    name: String,
    label: String,
    value: &'v Value,
}

impl<'c> FieldCursor<'c, '_> {
    /// Moves the cursor to another field.
    pub fn field<'w>(
        self,
        name: impl Into<String>,
        label: impl Into<String>,
        value: &'w Value,
    ) -> FieldCursor<'c, 'w> {
        let FieldCursor { chain, .. } = self;
        chain.field(name, label, value)
    }

    /// Runs any atomic check against the current field.
    pub fn check<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = Value>,
    {
        if let Err(error) = validator.validate(self.value) {
            self.record(error);
        }
        self
    }

    /// Records `message` when `condition` is false.
    pub fn custom(mut self, condition: bool, message: impl Into<Cow<'static, str>>) -> Self {
        if !condition {
            self.record(ValidationError::custom(message));
        }
        self
    }

    /// Records an error for the current field unconditionally.
    pub fn add_error(mut self, error: ValidationError) -> Self {
        self.record(error);
        self
    }

    /// The name of the current field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Errors recorded for the current field so far.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        self.chain.field_errors(&self.name)
    }

    fn record(&mut self, error: ValidationError) {
        let error = error.recorded_for(&self.name, &self.label);
        self.chain.errors.push(&self.name, error);
    }
}

// ============================================================================
// NAMED CHECKS
// ============================================================================

macro_rules! cursor_checks {
    ($( $(#[$meta:meta])* $method:ident($($arg:ident: $ty:ty),*) => $make:expr; )+) => {
        impl FieldCursor<'_, '_> {
            $(
                $(#[$meta])*
                pub fn $method(self, $($arg: $ty),*) -> Self {
                    self.check($make)
                }
            )+
        }
    };
}

cursor_checks! {
    /// Value must be present.
    required() => validators::required();
    /// Value must match a named pattern.
    pattern(pattern: Pattern) => validators::pattern(pattern);
    /// Value must be an email address.
    email() => validators::email();
    /// Value must be an http(s) URL.
    url() => validators::url();
    /// Trimmed text must have at least `min` characters.
    min_length(min: usize) => validators::min_length(min);
    /// Trimmed text must have at most `max` characters.
    max_length(max: usize) => validators::max_length(max);
    /// Value must read as a number.
    numeric() => validators::numeric();
    /// Value must be a whole number.
    integer() => validators::integer();
    /// Number must be at least `min`.
    min(min: f64) => validators::min(min);
    /// Number must not exceed `max`.
    max(max: f64) => validators::max(max);
    /// Number must be in `[min, max]`.
    in_range(min: f64, max: f64) => validators::in_range(min, max);
    /// Number must be greater than zero.
    positive() => validators::positive();
    /// Digits must pass the Luhn checksum.
    luhn() => validators::luhn();
    /// Value must be a calendar date.
    date() => validators::date();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn present_but_malformed_reports_format_only() {
        let email = Value::from("not-an-email");
        let mut chain = Chain::new();
        chain.field("email", "Email", &email).required().email();

        let errors = chain.finish();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.field("email").len(), 1);
        assert_eq!(errors.field("email")[0].code, "invalid_format");
    }

    #[test]
    fn every_failure_is_recorded_in_check_order() {
        let age = Value::from("12.5");
        let mut chain = Chain::new();
        chain
            .field("age", "Age", &age)
            .integer()
            .in_range(18.0, 100.0);

        let codes: Vec<_> = chain
            .field_errors("age")
            .iter()
            .map(|e| e.code.as_ref())
            .collect();
        assert_eq!(codes, ["not_whole", "out_of_range"]);
    }

    #[test]
    fn not_a_number_is_reported_once() {
        let quantity = Value::from("abc");
        let mut chain = Chain::new();
        chain
            .field("quantity", "Quantity", &quantity)
            .numeric()
            .min(0.0)
            .max(10.0);

        assert_eq!(chain.all_errors().messages("quantity"), ["Quantity must be a valid number"]);
    }

    #[test]
    fn missing_optional_value_passes_format_checks() {
        let notes = Value::Null;
        let mut chain = Chain::new();
        chain.field("notes", "Notes", &notes).max_length(500).url();
        assert!(!chain.has_errors());
    }

    #[test]
    fn custom_condition_and_retargeting() {
        let password = Value::from("Secret1!");
        let confirm = Value::from("Secret2!");
        let mut chain = Chain::new();
        chain
            .field("password", "Password", &password)
            .required()
            .field("confirmPassword", "Confirm Password", &confirm)
            .required()
            .custom(password == confirm, "Passwords do not match");

        assert!(chain.field_errors("password").is_empty());
        assert_eq!(
            chain.first_error("confirmPassword").map(|e| e.message.as_ref()),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn snapshot_is_frozen() {
        let name = Value::Null;
        let unit = Value::Null;
        let mut chain = Chain::new();
        chain.field("name", "Name", &name).required();
        let snapshot = chain.snapshot();

        chain.field("unit", "Unit", &unit).required();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(chain.all_errors().len(), 2);
    }

    #[test]
    fn add_error_substitutes_field_name() {
        let mut chain = Chain::new();
        chain.add_error("form", ValidationError::required());
        assert_eq!(chain.build().messages("form"), ["form is required"]);
    }

    #[test]
    fn into_result_reports_validity() {
        let hoe = Value::from("Hoe");
        let mut chain = Chain::new();
        chain.field("name", "Name", &hoe).required().min_length(2);
        let result = chain.into_result();
        assert!(result.is_valid);
    }
}
