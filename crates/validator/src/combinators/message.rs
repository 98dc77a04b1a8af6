//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Code, kind, severity and params of the original error are kept, so a renamed
/// failure still lands in the same taxonomy bucket. Coercion failures
/// (`not_a_number`, `invalid_date`) pass through untouched, so a numeric
/// field reports "must be a valid number" once however many of its checks
/// carry custom messages.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Validate, ValidateExt, Value};
/// use agriform_validator::validators::in_range;
///
/// let age = in_range(18.0, 100.0).with_message("You must be at least 18 years old");
/// let error = age.validate(&Value::from(16)).unwrap_err();
/// assert_eq!(error.message, "You must be at least 18 years old");
/// assert_eq!(error.code, "out_of_range");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut error| {
            if error.is_coercion() {
                return error;
            }
            error.message = self.message.clone();
            error
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
