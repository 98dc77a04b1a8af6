//! Property-based tests for agriform-validator.

use agriform_validator::prelude::*;
use agriform_validator::schema::{BindingOutcome, merge};
use chrono::NaiveDate;
use proptest::prelude::*;

fn schema() -> FormSchema {
    FormSchema::builder("stock")
        .field("name", "Name")
        .field("quantity", "Quantity")
        .field("maxQuantity", "Maximum quantity")
        .bind(Binding::new("name").check(required()).check(min_length(2)).check(max_length(8)))
        .bind(Binding::new("quantity").check(required()).check(numeric()).check(min(0.0)))
        .bind(Binding::new("quantity").rule(CompareField::new(
            "maxQuantity",
            Relation::LessOrEqual,
            "Quantity should not exceed maximum quantity ({other})",
        )))
        .bind(Binding::new("maxQuantity").check(numeric()).check(positive()))
        .build()
        .unwrap()
}

fn raw() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-50i32..50).prop_map(Value::from),
        "[ a-z0-9.-]{0,12}".prop_map(Value::from),
    ]
}

fn values() -> impl Strategy<Value = ValueMap> {
    (raw(), raw(), raw()).prop_map(|(name, quantity, max)| {
        ValueMap::new()
            .with("name", name)
            .with("quantity", quantity)
            .with("maxQuantity", max)
    })
}

fn context() -> Context {
    Context::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

// ============================================================================
// PURITY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_deterministic(values in values()) {
        let schema = schema();
        let first = schema.validate_at(&values, &context());
        let second = schema.validate_at(&values, &context());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn is_valid_iff_no_errors(values in values()) {
        let result = schema().validate_at(&values, &context());
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }
}

// ============================================================================
// ORDER INDEPENDENCE
// ============================================================================

proptest! {
    #[test]
    fn merge_ignores_outcome_order(
        (values, order) in values().prop_flat_map(|values| {
            let n = schema().bindings().len();
            (Just(values), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let outcomes: Vec<BindingOutcome> = schema().evaluate(&values, &context());
        let shuffled: Vec<BindingOutcome> = order
            .iter()
            .filter_map(|i| outcomes.get(*i).cloned())
            .collect();
        prop_assert_eq!(merge(outcomes), merge(shuffled));
    }
}

// ============================================================================
// BLANK TOLERANCE
// ============================================================================

proptest! {
    #[test]
    fn non_presence_checks_accept_blank(blank in "[ \t]{0,4}") {
        let value = Value::from(blank.as_str());
        prop_assert!(min_length(3).validate(&value).is_ok());
        prop_assert!(email().validate(&value).is_ok());
        prop_assert!(numeric().validate(&value).is_ok());
        prop_assert!(positive().validate(&value).is_ok());
        prop_assert!(luhn().validate(&value).is_ok());
        prop_assert!(date().validate(&value).is_ok());
        prop_assert!(required().validate(&value).is_err());
    }

    #[test]
    fn length_checks_ignore_surrounding_space(word in "[a-z]{1,10}", pad in " {0,3}") {
        let padded = Value::from(format!("{pad}{word}{pad}"));
        let plain = Value::from(word.as_str());
        prop_assert_eq!(
            min_length(5).validate(&padded).is_ok(),
            min_length(5).validate(&plain).is_ok()
        );
        prop_assert_eq!(
            max_length(5).validate(&padded).is_ok(),
            max_length(5).validate(&plain).is_ok()
        );
    }

    #[test]
    fn password_reports_each_missing_class(s in "[a-zA-Z0-9@!#]{1,12}") {
        let values = ValueMap::new().with("password", s.as_str());
        let context = Context::default();
        let input = RuleInput::new("password", "Password", &values, &context);
        let missing: Vec<String> = strong_password()
            .evaluate(&input)
            .iter()
            .filter_map(|e| e.param("missing").map(str::to_owned))
            .collect();
        let expected: Vec<&str> = [
            ("length", s.chars().count() < 8),
            ("lowercase", !s.chars().any(|c| c.is_ascii_lowercase())),
            ("uppercase", !s.chars().any(|c| c.is_ascii_uppercase())),
            ("digit", !s.chars().any(|c| c.is_ascii_digit())),
            ("special", !s.chars().any(|c| "@$!%*?&".contains(c))),
        ]
        .into_iter()
        .filter_map(|(name, unmet)| unmet.then_some(name))
        .collect();
        prop_assert_eq!(missing, expected);
    }
}
