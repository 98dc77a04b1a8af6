//! Rules: checks that may read the whole value map
//!
//! A [`Rule`] is the unit a [`Binding`](crate::schema::Binding) holds. It
//! sees its own field's value, every sibling value and the evaluation
//! [`Context`], and returns zero or more errors. Rules are stateless: the
//! same [`RuleInput`] always yields the same output.
//!
//! Atomic checks become rules through [`Atomic`]; one-off closures through
//! [`rule_fn`].

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::foundation::{Context, Validate, ValidationError, Value, ValueMap};

/// Errors produced by one rule evaluation. Almost always zero or one.
pub type Failures = SmallVec<[ValidationError; 1]>;

// ============================================================================
// RULE INPUT
// ============================================================================

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// Field the rule is bound to.
    pub field: &'a str,
    /// Human label of that field.
    pub label: &'a str,
    /// The field's own raw value.
    pub value: &'a Value,
    /// The full value map, for sibling reads.
    pub values: &'a ValueMap,
    /// Evaluation context (today's date).
    pub context: &'a Context,
}

impl<'a> RuleInput<'a> {
    /// Builds the input for `field` out of a value map.
    #[must_use]
    pub fn new(field: &'a str, label: &'a str, values: &'a ValueMap, context: &'a Context) -> Self {
        Self {
            field,
            label,
            value: values.get(field),
            values,
            context,
        }
    }

    /// Reads a sibling value (`Null` when absent).
    #[must_use]
    pub fn sibling(&self, field: &str) -> &'a Value {
        self.values.get(field)
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A pure constraint over one field and, optionally, its siblings.
pub trait Rule: Send + Sync {
    /// Evaluates the rule. An empty result means the rule passed.
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures;

    /// Sibling fields this rule reads, besides its own.
    ///
    /// Used to check a schema against its declared fields and to find
    /// which fields must be re-validated when one changes.
    fn reads(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        (**self).evaluate(input)
    }

    fn reads(&self) -> Vec<&str> {
        (**self).reads()
    }
}

// ============================================================================
// ATOMIC ADAPTER
// ============================================================================

/// Lifts an atomic check into a rule over the field's own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atomic<V>(pub V);

impl<V> Rule for Atomic<V>
where
    V: Validate<Input = Value> + Send + Sync,
{
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        match self.0.validate(input.value) {
            Ok(()) => Failures::new(),
            Err(error) => smallvec![error],
        }
    }
}

/// Wraps an atomic check as a rule.
pub fn atomic<V>(validator: V) -> Atomic<V>
where
    V: Validate<Input = Value> + Send + Sync,
{
    Atomic(validator)
}

// ============================================================================
// CLOSURE RULES
// ============================================================================

/// A rule backed by a closure.
pub struct FnRule<F> {
    reads: Vec<&'static str>,
    check: F,
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("reads", &self.reads).finish_non_exhaustive()
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&RuleInput<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        match (self.check)(input) {
            Ok(()) => Failures::new(),
            Err(error) => smallvec![error],
        }
    }

    fn reads(&self) -> Vec<&str> {
        self.reads.clone()
    }
}

/// Creates a rule from a closure that reads the fields named in `reads`.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::{Context, ValidationError, ValueMap};
/// use agriform_validator::rules::{Rule, RuleInput, rule_fn};
///
/// let matches = rule_fn(&["password"], |input| {
///     if input.value == input.sibling("password") {
///         Ok(())
///     } else {
///         Err(ValidationError::custom("Passwords do not match"))
///     }
/// });
///
/// let values = ValueMap::new().with("password", "a").with("confirm", "b");
/// let context = Context::default();
/// let input = RuleInput::new("confirm", "Confirm", &values, &context);
/// assert_eq!(matches.evaluate(&input).len(), 1);
/// assert_eq!(matches.reads(), ["password"]);
/// ```
pub fn rule_fn<F>(reads: &[&'static str], check: F) -> FnRule<F>
where
    F: Fn(&RuleInput<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    FnRule {
        reads: reads.to_vec(),
        check,
    }
}

// ============================================================================
// TESTS
// ============================================================================
