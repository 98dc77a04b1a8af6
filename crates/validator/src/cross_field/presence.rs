//! Discriminant-aware presence rules
//!
//! These do not decide *whether* they apply; that is the binding's
//! [`Gate`](crate::discriminant::Gate). They only name the current
//! discriminant value in their message, so a user sees why a field is
//! suddenly mandatory (or forbidden).

use std::borrow::Cow;
use std::marker::PhantomData;

use smallvec::smallvec;

use crate::discriminant::Discriminant;
use crate::foundation::{ErrorKind, ValidationError};
use crate::rules::{Failures, Rule, RuleInput};

fn discriminant_of<D: Discriminant>(input: &RuleInput<'_>, field: &str) -> Option<D> {
    D::from_value(input.sibling(field))
}

// ============================================================================
// REQUIRED FOR
// ============================================================================

/// The field is required for the current discriminant value.
///
/// Message: `Expiry date is required for seeds`.
#[derive(Debug, Clone)]
pub struct RequiredFor<D> {
    discriminant: Cow<'static, str>,
    _marker: PhantomData<fn() -> D>,
}

impl<D: Discriminant> RequiredFor<D> {
    /// Creates the rule; `discriminant` is the selector field name.
    pub fn new(discriminant: impl Into<Cow<'static, str>>) -> Self {
        Self {
            discriminant: discriminant.into(),
            _marker: PhantomData,
        }
    }
}

impl<D: Discriminant> Rule for RequiredFor<D> {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        if !input.value.is_blank() {
            return Failures::new();
        }
        let error = match discriminant_of::<D>(input, &self.discriminant) {
            Some(d) => ValidationError::new(
                "required",
                format!("{{label}} is required for {}", d.display_name()),
            )
            .with_param(self.discriminant.clone(), d.as_str()),
            None => ValidationError::new("required", "{label} is required"),
        };
        smallvec![error.with_kind(ErrorKind::Presence)]
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.discriminant.as_ref()]
    }
}

// ============================================================================
// ABSENT FOR
// ============================================================================

/// The field must be empty for the current discriminant value.
///
/// Message: `Expiry date must be empty for tools`.
#[derive(Debug, Clone)]
pub struct AbsentFor<D> {
    discriminant: Cow<'static, str>,
    _marker: PhantomData<fn() -> D>,
}

impl<D: Discriminant> AbsentFor<D> {
    /// Creates the rule; `discriminant` is the selector field name.
    pub fn new(discriminant: impl Into<Cow<'static, str>>) -> Self {
        Self {
            discriminant: discriminant.into(),
            _marker: PhantomData,
        }
    }
}

impl<D: Discriminant> Rule for AbsentFor<D> {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        if input.value.is_blank() {
            return Failures::new();
        }
        let error = match discriminant_of::<D>(input, &self.discriminant) {
            Some(d) => ValidationError::new(
                "must_be_empty",
                format!("{{label}} must be empty for {}", d.display_name()),
            )
            .with_param(self.discriminant.clone(), d.as_str()),
            None => ValidationError::new("must_be_empty", "{label} must be empty"),
        };
        smallvec![error.with_kind(ErrorKind::Presence)]
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.discriminant.as_ref()]
    }
}
