//! Form orchestrator: runs every binding and merges the results
//!
//! Evaluation is split in two steps so that order independence is a
//! property of the code and not an accident of iteration order:
//!
//! 1. [`FormSchema::evaluate`] runs each applicable binding on its own and
//!    returns one [`BindingOutcome`] per binding, tagged with its index.
//! 2. [`merge`] sorts the outcomes by binding index and files them into an
//!    [`ErrorMap`]. Any permutation of the outcomes merges to the same map.

use tracing::{debug, debug_span, trace};

use super::error::SchemaError;
use super::form::FormSchema;
use crate::foundation::{Context, ErrorMap, ValidationError, ValidationResult, ValueMap};
use crate::rules::RuleInput;

// ============================================================================
// BINDING OUTCOME
// ============================================================================

/// Errors produced by one binding, already labelled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingOutcome {
    /// Position of the binding in the schema.
    pub index: usize,
    /// The bound field.
    pub field: String,
    /// Errors in rule order, with `{label}` substituted.
    pub errors: Vec<ValidationError>,
}

/// Merges outcomes into an error map, independent of their order.
#[must_use]
pub fn merge(outcomes: impl IntoIterator<Item = BindingOutcome>) -> ErrorMap {
    let mut outcomes: Vec<BindingOutcome> = outcomes.into_iter().collect();
    outcomes.sort_by_key(|outcome| outcome.index);

    let mut errors = ErrorMap::new();
    for outcome in outcomes {
        for error in outcome.errors {
            errors.push(&outcome.field, error);
        }
    }
    errors
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

impl FormSchema {
    /// Validates `values` as of today's UTC date.
    #[must_use]
    pub fn validate(&self, values: &ValueMap) -> ValidationResult {
        self.validate_at(values, &Context::now())
    }

    /// Validates `values` against an explicit context.
    ///
    /// Pure: the same map and context always give the same result.
    #[must_use]
    pub fn validate_at(&self, values: &ValueMap, context: &Context) -> ValidationResult {
        let span = debug_span!("validate_form", form = %self.name);
        let _guard = span.enter();

        let errors = merge(self.evaluate(values, context));
        let warnings = errors
            .iter()
            .flat_map(|(_, errors)| errors)
            .filter(|e| e.is_warning())
            .count();
        debug!(
            errors = errors.error_count() - warnings,
            warnings,
            fields = errors.len(),
            "form validated"
        );
        ValidationResult::from_errors(errors)
    }

    /// Runs every applicable binding and returns the unmerged outcomes.
    ///
    /// Bindings whose gate is closed are skipped entirely and produce no
    /// outcome. Bindings that pass produce an outcome with no errors.
    #[must_use]
    pub fn evaluate(&self, values: &ValueMap, context: &Context) -> Vec<BindingOutcome> {
        self.bindings
            .iter()
            .enumerate()
            .filter(|(_, binding)| {
                let applies = binding.applies(values);
                if !applies {
                    trace!(
                        field = binding.field(),
                        gate = binding.gate().map(|g| g.description()),
                        "binding skipped"
                    );
                }
                applies
            })
            .map(|(index, binding)| self.run(index, binding.field(), values, context))
            .collect()
    }

    /// Re-validates one field against the full current value map.
    ///
    /// Runs every binding of `field`, so cross-field rules see the current
    /// state of their siblings. The result holds only `field`'s errors.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownField`] if `field` is not declared.
    pub fn validate_field(
        &self,
        field: &str,
        values: &ValueMap,
    ) -> Result<ValidationResult, SchemaError> {
        self.validate_field_at(field, values, &Context::now())
    }

    /// [`validate_field`](Self::validate_field) against an explicit context.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownField`] if `field` is not declared.
    pub fn validate_field_at(
        &self,
        field: &str,
        values: &ValueMap,
        context: &Context,
    ) -> Result<ValidationResult, SchemaError> {
        if !self.declares(field) {
            return Err(self.unknown_field(field));
        }
        let outcomes = self
            .evaluate(values, context)
            .into_iter()
            .filter(|outcome| outcome.field == field);
        Ok(ValidationResult::from_errors(merge(outcomes)))
    }

    /// Fields whose bindings read `field` through a rule or a gate.
    ///
    /// When `field` changes, these are the fields to re-validate. The list
    /// is in declaration order and excludes `field` itself.
    #[must_use]
    pub fn dependents_of(&self, field: &str) -> Vec<&str> {
        self.fields()
            .filter(|candidate| *candidate != field)
            .filter(|candidate| {
                self.bindings
                    .iter()
                    .filter(|b| b.field() == *candidate)
                    .any(|b| b.reads().contains(&field) || b.gate().is_some_and(|g| g.field() == field))
            })
            .collect()
    }

    fn run(&self, index: usize, field: &str, values: &ValueMap, context: &Context) -> BindingOutcome {
        let label = self.label(field).unwrap_or(field);
        let input = RuleInput::new(field, label, values, context);
        let errors = self.bindings[index]
            .evaluate(&input)
            .into_iter()
            .map(|error| error.recorded_for(field, label))
            .collect();
        BindingOutcome {
            index,
            field: field.to_owned(),
            errors,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cross_field::{CompareField, Relation};
    use crate::schema::Binding;
    use crate::validators::{numeric, required};

    fn schema() -> FormSchema {
        FormSchema::builder("stock")
            .field("quantity", "Quantity")
            .field("minQuantity", "Minimum quantity")
            .field("maxQuantity", "Maximum quantity")
            .bind(Binding::new("quantity").check(required()).check(numeric()))
            .bind(Binding::new("quantity").rule(CompareField::new(
                "minQuantity",
                Relation::GreaterOrEqual,
                "{label} is below the minimum quantity ({other})",
            )))
            .bind(Binding::new("minQuantity").check(numeric()).rule(CompareField::new(
                "maxQuantity",
                Relation::Less,
                "Minimum quantity must be less than maximum quantity",
            )))
            .bind(Binding::new("maxQuantity").check(numeric()))
            .build()
            .unwrap()
    }

    fn context() -> Context {
        Context::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn empty_map_reports_each_required_field_once() {
        let result = schema().validate_at(&ValueMap::new(), &context());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors.messages("quantity"), ["Quantity is required"]);
    }

    #[test]
    fn minimum_above_current_is_reported_on_quantity() {
        let values = ValueMap::new()
            .with("quantity", 5)
            .with("minQuantity", 10)
            .with("maxQuantity", 20);
        let result = schema().validate_at(&values, &context());
        assert_eq!(
            result.errors.messages("quantity"),
            ["Quantity is below the minimum quantity (10)"]
        );
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn merge_ignores_outcome_order() {
        let schema = schema();
        let values = ValueMap::new()
            .with("quantity", "x")
            .with("minQuantity", 30)
            .with("maxQuantity", 20);
        let outcomes = schema.evaluate(&values, &context());
        let forward = merge(outcomes.clone());
        let backward = merge(outcomes.into_iter().rev());
        assert_eq!(forward, backward);
        assert_eq!(forward.messages("quantity"), ["Quantity must be a valid number"]);
    }

    #[test]
    fn validate_field_sees_siblings() {
        let schema = schema();
        let values = ValueMap::new().with("minQuantity", 30).with("maxQuantity", 20);
        let result = schema.validate_field_at("minQuantity", &values, &context()).unwrap();
        assert_eq!(result.errors.fields().collect::<Vec<_>>(), ["minQuantity"]);

        let err = schema.validate_field_at("colour", &values, &context()).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { .. }));
    }

    #[test]
    fn dependents_follow_rule_reads() {
        let schema = schema();
        assert_eq!(schema.dependents_of("minQuantity"), ["quantity"]);
        assert_eq!(schema.dependents_of("maxQuantity"), ["minQuantity"]);
        assert!(schema.dependents_of("quantity").is_empty());
    }

    #[test]
    fn validation_is_pure() {
        let schema = schema();
        let values = ValueMap::new().with("quantity", "-").with("minQuantity", "a");
        let first = serde_json::to_string(&schema.validate_at(&values, &context())).unwrap();
        let second = serde_json::to_string(&schema.validate_at(&values, &context())).unwrap();
        assert_eq!(first, second);
    }
}
