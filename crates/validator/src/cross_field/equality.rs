//! Equality between sibling fields

use std::borrow::Cow;

use smallvec::smallvec;

use crate::foundation::{ErrorKind, ValidationError};
use crate::rules::{Failures, Rule, RuleInput};

/// The field must hold exactly the sibling's raw value, e.g. a password
/// confirmation. No trimming: whitespace is significant here.
///
/// A blank own value passes; pair with `required`.
#[derive(Debug, Clone)]
pub struct EqualsField {
    other: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl EqualsField {
    /// Creates the rule against sibling `other`.
    pub fn new(other: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            other: other.into(),
            message: message.into(),
        }
    }
}

impl Rule for EqualsField {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        if input.value.is_blank() || input.value == input.sibling(&self.other) {
            return Failures::new();
        }
        smallvec![
            ValidationError::new("mismatch", self.message.clone())
                .with_kind(ErrorKind::Relational)
                .with_param("other", self.other.clone())
        ]
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.other.as_ref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, ValueMap};

    fn eval(values: &ValueMap) -> Failures {
        let context = Context::default();
        EqualsField::new("password", "Passwords do not match").evaluate(&RuleInput::new(
            "confirmPassword",
            "Confirm password",
            values,
            &context,
        ))
    }

    #[test]
    fn matching_values_pass() {
        let values = ValueMap::new()
            .with("password", "Secret1!")
            .with("confirmPassword", "Secret1!");
        assert!(eval(&values).is_empty());
    }

    #[test]
    fn whitespace_is_significant() {
        let values = ValueMap::new()
            .with("password", "Secret1!")
            .with("confirmPassword", "Secret1! ");
        assert_eq!(eval(&values)[0].message, "Passwords do not match");
    }

    #[test]
    fn blank_confirmation_is_left_to_required() {
        assert!(eval(&ValueMap::new().with("password", "x")).is_empty());
    }
}
