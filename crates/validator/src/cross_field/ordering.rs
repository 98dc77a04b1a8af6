//! Numeric ordering between sibling fields

use std::borrow::Cow;

use smallvec::smallvec;

use crate::foundation::ValidationError;
use crate::rules::{Failures, Rule, RuleInput};

/// Relation the own value must have to the sibling value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// own < other
    Less,
    /// own <= other
    LessOrEqual,
    /// own > other
    Greater,
    /// own >= other
    GreaterOrEqual,
}

impl Relation {
    /// Returns true if `own relation other` holds.
    #[must_use]
    pub fn holds(self, own: f64, other: f64) -> bool {
        match self {
            Self::Less => own < other,
            Self::LessOrEqual => own <= other,
            Self::Greater => own > other,
            Self::GreaterOrEqual => own >= other,
        }
    }

    /// Operator spelling, recorded as the `relation` param.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }
}

/// Compares the field's number against a sibling's.
///
/// Skips when either side is blank or not a number: the field's own numeric
/// check owns that failure. `{other}` in the message is replaced by the
/// sibling's value.
///
/// # Examples
///
/// ```
/// use agriform_validator::cross_field::{CompareField, Relation};
/// use agriform_validator::foundation::{Context, ValueMap};
/// use agriform_validator::rules::{Rule, RuleInput};
///
/// let rule = CompareField::new(
///     "maxQuantity",
///     Relation::LessOrEqual,
///     "{label} should not exceed maximum quantity ({other})",
/// );
/// let values = ValueMap::new().with("quantity", 25).with("maxQuantity", 20);
/// let context = Context::default();
/// let input = RuleInput::new("quantity", "Quantity", &values, &context);
/// let errors = rule.evaluate(&input);
/// assert_eq!(errors[0].message, "{label} should not exceed maximum quantity (20)");
/// ```
#[derive(Debug, Clone)]
pub struct CompareField {
    other: Cow<'static, str>,
    relation: Relation,
    message: Cow<'static, str>,
}

impl CompareField {
    /// Creates a comparison against sibling `other`.
    pub fn new(
        other: impl Into<Cow<'static, str>>,
        relation: Relation,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            other: other.into(),
            relation,
            message: message.into(),
        }
    }

    /// The sibling field.
    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }

    /// The required relation.
    #[must_use]
    pub fn relation(&self) -> Relation {
        self.relation
    }
}

impl Rule for CompareField {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        let (Ok(own), Ok(other)) = (
            input.value.as_number(),
            input.sibling(&self.other).as_number(),
        ) else {
            return Failures::new();
        };
        if self.relation.holds(own, other) {
            return Failures::new();
        }
        let message = self.message.replace("{other}", &other.to_string());
        smallvec![
            ValidationError::out_of_order(message)
                .with_param("other", self.other.clone())
                .with_param("relation", self.relation.symbol())
        ]
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.other.as_ref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, ErrorKind, ValueMap};

    fn eval(rule: &CompareField, values: &ValueMap) -> Failures {
        let context = Context::default();
        rule.evaluate(&RuleInput::new("minQuantity", "Minimum quantity", values, &context))
    }

    fn min_below_max() -> CompareField {
        CompareField::new(
            "maxQuantity",
            Relation::Less,
            "Minimum quantity must be less than maximum quantity",
        )
    }

    #[test]
    fn strict_relation_rejects_equality() {
        let values = ValueMap::new().with("minQuantity", 10).with("maxQuantity", 10);
        let errors = eval(&min_below_max(), &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Relational);
        assert_eq!(errors[0].param("relation"), Some("<"));
    }

    #[test]
    fn passes_when_relation_holds() {
        let values = ValueMap::new().with("minQuantity", "5").with("maxQuantity", "20");
        assert!(eval(&min_below_max(), &values).is_empty());
    }

    #[test]
    fn skips_blank_or_non_numeric_sides() {
        let rule = min_below_max();
        assert!(eval(&rule, &ValueMap::new().with("minQuantity", 10)).is_empty());
        let values = ValueMap::new().with("minQuantity", "ten").with("maxQuantity", 5);
        assert!(eval(&rule, &values).is_empty());
    }

    #[test]
    fn relations() {
        assert!(Relation::GreaterOrEqual.holds(5.0, 5.0));
        assert!(!Relation::Greater.holds(5.0, 5.0));
        assert!(Relation::LessOrEqual.holds(4.0, 5.0));
        assert_eq!(Relation::Greater.symbol(), ">");
    }
}
