//! Magnitude sanity checks

use std::borrow::Cow;

use smallvec::smallvec;

use crate::foundation::{ErrorKind, ErrorSeverity, ValidationError};
use crate::rules::{Failures, Rule, RuleInput};

/// Warns when the field's number times a sibling's exceeds a threshold.
///
/// This is soft feedback: the error carries
/// [`ErrorSeverity::Warning`], so the result is invalid but not blocking.
/// `{total}` and `{threshold}` in the message are filled in.
///
/// # Examples
///
/// ```
/// use agriform_validator::cross_field::ProductAbove;
/// use agriform_validator::foundation::{Context, ValueMap};
/// use agriform_validator::rules::{Rule, RuleInput};
///
/// let rule = ProductAbove::new("quantity", 100_000.0);
/// let values = ValueMap::new().with("price", 2500).with("quantity", 50);
/// let context = Context::default();
/// let errors = rule.evaluate(&RuleInput::new("price", "Unit price", &values, &context));
/// assert!(errors[0].is_warning());
/// assert_eq!(errors[0].code, "unusual_total");
/// ```
#[derive(Debug, Clone)]
pub struct ProductAbove {
    other: Cow<'static, str>,
    threshold: f64,
    message: Cow<'static, str>,
}

impl ProductAbove {
    /// Creates the check against sibling `other`.
    pub fn new(other: impl Into<Cow<'static, str>>, threshold: f64) -> Self {
        Self {
            other: other.into(),
            threshold,
            message: Cow::Borrowed(
                "Total value ({total}) exceeds {threshold}. Please confirm {label} and quantity",
            ),
        }
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// The warning threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Rule for ProductAbove {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        let (Ok(own), Ok(other)) = (
            input.value.as_number(),
            input.sibling(&self.other).as_number(),
        ) else {
            return Failures::new();
        };
        let total = own * other;
        if total <= self.threshold {
            return Failures::new();
        }
        let message = self
            .message
            .replace("{total}", &total.to_string())
            .replace("{threshold}", &self.threshold.to_string());
        smallvec![
            ValidationError::new("unusual_total", message)
                .with_kind(ErrorKind::Quality)
                .with_severity(ErrorSeverity::Warning)
                .with_param("total", total.to_string())
        ]
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.other.as_ref()]
    }
}
