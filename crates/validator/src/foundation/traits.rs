//! Core traits for the validation system
//!
//! [`Validate`] is the contract of an atomic check: a pure predicate over one
//! input that reports zero or one failure. Checks never consult sibling
//! fields; anything that needs the rest of the form is a
//! [`Rule`](crate::rules::Rule).

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all atomic checks implement.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Validate, ValidationError, Value};
///
/// struct Lowercase;
///
/// impl Validate for Lowercase {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_text() {
///             Some(text) if text.chars().any(char::is_uppercase) => {
///                 Err(ValidationError::new("lowercase", "{label} must be in lowercase"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(Lowercase.validate(&Value::from("farmer@example.com")).is_ok());
/// assert!(Lowercase.validate(&Value::from("Farmer@example.com")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait for overriding a validator's message.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the failure message, keeping code, kind and params.
    ///
    /// The message may use the `{label}` placeholder.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;

// ============================================================================
// TESTS
// ============================================================================
