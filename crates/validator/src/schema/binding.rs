//! Rule bindings: one field, its ordered rules, an optional gate

use std::borrow::Cow;
use std::fmt;

use crate::discriminant::Gate;
use crate::foundation::{Validate, ValidationError, Value, ValueMap};
use crate::rules::{Atomic, Rule, RuleInput};

/// The rules that apply to one field, optionally gated by a discriminant.
///
/// Rules run in declaration order and every failure is kept. A closed gate
/// means the binding contributes nothing: none of its rules run.
///
/// # Examples
///
/// ```
/// use agriform_validator::schema::Binding;
/// use agriform_validator::validators::{max_length, min_length, required};
///
/// let name = Binding::new("name")
///     .check(required())
///     .check(min_length(2))
///     .check(max_length(100));
/// assert_eq!(name.len(), 3);
/// ```
#[must_use = "builder methods must be chained or built"]
pub struct Binding {
    field: Cow<'static, str>,
    rules: Vec<Box<dyn Rule>>,
    gate: Option<Gate>,
}

impl Binding {
    /// Starts a binding for `field`.
    pub fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
            gate: None,
        }
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends an atomic check.
    pub fn check<V>(self, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.rule(Atomic(validator))
    }

    /// Applies the binding only when `gate` is open.
    pub fn when(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// The bound field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The gate, if any.
    #[must_use]
    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the binding holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sibling fields read by the rules (not the gate), deduplicated.
    #[must_use]
    pub fn reads(&self) -> Vec<&str> {
        let mut reads: Vec<&str> = self.rules.iter().flat_map(|r| r.reads()).collect();
        reads.sort_unstable();
        reads.dedup();
        reads
    }

    /// Returns true if the binding applies to `values`.
    #[must_use]
    pub fn applies(&self, values: &ValueMap) -> bool {
        self.gate.as_ref().is_none_or(|gate| gate.is_open(values))
    }

    /// Runs every rule in order. Does not consult the gate.
    #[must_use]
    pub fn evaluate(&self, input: &RuleInput<'_>) -> Vec<ValidationError> {
        self.rules.iter().flat_map(|rule| rule.evaluate(input)).collect()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("rules", &self.rules.len())
            .field("gate", &self.gate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_field::{CompareField, Relation};
    use crate::discriminant::Discriminant;
    use crate::foundation::Context;
    use crate::validators::{numeric, required};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Article,
        Video,
    }

    impl Discriminant for Kind {
        const ALL: &'static [Self] = &[Self::Article, Self::Video];

        fn as_str(self) -> &'static str {
            match self {
                Self::Article => "article",
                Self::Video => "video",
            }
        }
    }

    #[test]
    fn rules_run_in_order_and_all_failures_are_kept() {
        let binding = Binding::new("quantity")
            .check(required())
            .check(numeric())
            .rule(CompareField::new("maxQuantity", Relation::LessOrEqual, "too many"));

        let values = ValueMap::new().with("quantity", 30).with("maxQuantity", 20);
        let context = Context::default();
        let input = RuleInput::new("quantity", "Quantity", &values, &context);
        let errors = binding.evaluate(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "too many");
        assert_eq!(binding.reads(), ["maxQuantity"]);
    }

    #[test]
    fn gate_controls_applicability() {
        let binding = Binding::new("content")
            .check(required())
            .when(Gate::on::<Kind>("type", |k| matches!(k, Kind::Article)));

        assert!(binding.applies(&ValueMap::new().with("type", "article")));
        assert!(!binding.applies(&ValueMap::new().with("type", "video")));
        assert!(Binding::new("x").applies(&ValueMap::new()));
    }
}
