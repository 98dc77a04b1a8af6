//! Property tests over the built-in forms.

use agriform_schemas::prelude::*;
use agriform_validator::discriminant::Discriminant;
use agriform_validator::foundation::{Context, ValueMap};
use agriform_validator::schema::merge;
use chrono::NaiveDate;
use proptest::prelude::*;

fn context() -> Context {
    Context::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn category() -> impl Strategy<Value = SupplyCategory> {
    proptest::sample::select(SupplyCategory::ALL)
}

/// Supply maps that pass validation for every category.
fn valid_supply() -> impl Strategy<Value = ValueMap> {
    (
        category(),
        "[A-Z][a-z]{2,10}( [a-z]{3,8})?",
        5i64..40,
        0i64..5,
        50i64..100,
        1u32..200,
        prop_oneof![Just(None), (0u64..30).prop_map(Some)],
        prop::bool::ANY,
    )
        .prop_map(
            |(category, name, quantity, min, max, cents, purchase_back, padded)| {
                let today = context().today();
                let expiry = (today + chrono::Days::new(400)).to_string();
                let name = if padded { format!("  {name} ") } else { name };
                let mut values = ValueMap::new()
                    .with("name", name)
                    .with("category", category.as_str())
                    .with("quantity", quantity)
                    .with("unit", "kg")
                    .with("price", format!("{}.{:02}", cents / 100 + 1, cents % 100))
                    .with("minQuantity", min)
                    .with("maxQuantity", max);
                if let Some(back) = purchase_back {
                    values.insert("purchaseDate", (today - chrono::Days::new(back)).to_string());
                }
                if !category.forbids_expiry() {
                    values.insert("expiryDate", expiry);
                }
                values
            },
        )
        .prop_filter("name must not be filler", |values| {
            let policy = SupplyPolicy::default();
            let name = values.get("name").as_text().unwrap_or_default().to_lowercase();
            !name.split_whitespace().all(|w| policy.placeholders.iter().any(|p| p == w))
        })
}

/// Arbitrary supply maps, including nonsense.
fn any_supply() -> impl Strategy<Value = ValueMap> {
    let raw = || {
        prop_oneof![
            Just(String::new()),
            "[a-z ]{0,8}",
            "-?[0-9]{1,4}(\\.[0-9]{1,3})?",
            "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9])",
        ]
    };
    (category(), raw(), raw(), raw(), raw(), raw(), raw()).prop_map(
        |(category, quantity, min, max, price, purchase, expiry)| {
            ValueMap::new()
                .with("category", category.as_str())
                .with("quantity", quantity)
                .with("minQuantity", min)
                .with("maxQuantity", max)
                .with("price", price)
                .with("purchaseDate", purchase)
                .with("expiryDate", expiry)
        },
    )
}

proptest! {
    #[test]
    fn supply_validation_is_pure(values in any_supply()) {
        let first = serde_json::to_vec(&supply_item().validate_at(&values, &context())).unwrap();
        let second = serde_json::to_vec(&supply_item().validate_at(&values, &context())).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn binding_order_does_not_matter(values in any_supply(), seed in any::<u64>()) {
        let mut outcomes = supply_item().evaluate(&values, &context());
        let expected = merge(outcomes.clone());
        let len = outcomes.len();
        outcomes.rotate_left((seed as usize) % len.max(1));
        outcomes.reverse();
        prop_assert_eq!(merge(outcomes), expected);
    }

    #[test]
    fn never_required_and_forbidden_together(category in category(), expiry in "(2030-01-01)?") {
        let values = ValueMap::new()
            .with("category", category.as_str())
            .with("expiryDate", expiry);
        let result = supply_item().validate_at(&values, &context());
        let codes: Vec<&str> = result
            .errors
            .field("expiryDate")
            .iter()
            .map(|e| e.code.as_ref())
            .collect();
        prop_assert!(!(codes.contains(&"required") && codes.contains(&"must_be_empty")));
    }

    #[test]
    fn valid_supply_stays_valid_after_normalization(values in valid_supply()) {
        let context = context();
        let before = supply_item().validate_at(&values, &context);
        prop_assert!(before.is_valid, "{}", before.errors);

        let record = normalize_supply(&values, &context);
        let after = supply_item().validate_at(&record.to_values(), &context);
        prop_assert!(after.is_valid, "{}", after.errors);

        // Normalizing twice changes nothing.
        prop_assert_eq!(normalize_supply(&record.to_values(), &context), record);
    }

    #[test]
    fn valid_training_stays_valid_after_normalization(
        kind in proptest::sample::select(TrainingType::ALL),
        padded in prop::bool::ANY,
    ) {
        let pad = |s: &str| if padded { format!(" {s}  ") } else { s.to_owned() };
        let values = ValueMap::new()
            .with("type", kind.as_str())
            .with("title", pad("Mulching for moisture"))
            .with("description", pad("Keeping soil cool through the dry season"))
            .with("category", "soil")
            .with("content", "Spread straw around the base.")
            .with("fileUrl", "https://example.org/mulch");
        let before = training_material().validate_at(&values, &context());
        prop_assert!(before.is_valid, "{}", before.errors);

        let record = normalize_training(&values);
        let after = training_material().validate_at(&record.to_values(), &context());
        prop_assert!(after.is_valid, "{}", after.errors);
    }
}

#[test]
fn exclusivity_holds_over_the_whole_domain() {
    for category in SupplyCategory::ALL {
        assert!(
            !(category.requires_expiry() && category.forbids_expiry()),
            "{category:?} both requires and forbids an expiry date"
        );
    }
}
