//! Supply item form

use std::sync::LazyLock;

use agriform_validator::cross_field::{
    AbsentFor, AfterField, CompareField, NotAfterToday, NotBeforeToday, NotPlaceholder,
    ProductAbove, Relation, RequiredFor,
};
use agriform_validator::discriminant::{Discriminant, Gate};
use agriform_validator::schema::{Binding, FormSchema};
use agriform_validator::validators::{
    Pattern, date, integer, length_range, max_length, min, numeric, one_of, pattern, positive,
    required,
};
use tracing::debug;

use crate::categories::SupplyCategory;
use crate::policy::{PolicyError, SupplyPolicy};

static CATEGORY_SPELLINGS: LazyLock<Vec<&'static str>> = LazyLock::new(SupplyCategory::spellings);

static DEFAULT_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    supply_item_schema(&SupplyPolicy::default()).expect("default supply policy is valid")
});

/// The supply item schema built from [`SupplyPolicy::default`].
pub fn supply_item() -> &'static FormSchema {
    &DEFAULT_SCHEMA
}

/// Builds the supply item schema for `policy`.
///
/// # Errors
///
/// Returns [`PolicyError`] if the policy fails [`SupplyPolicy::validate`].
///
/// # Examples
///
/// ```
/// use agriform_schemas::supply::supply_item;
/// use agriform_validator::foundation::ValueMap;
///
/// let values = ValueMap::new()
///     .with("name", "Tomato seeds")
///     .with("category", "seeds")
///     .with("quantity", 5)
///     .with("unit", "packets")
///     .with("price", "2.50")
///     .with("minQuantity", 10)
///     .with("maxQuantity", 20);
/// let result = supply_item().validate(&values);
/// assert_eq!(
///     result.errors.messages("quantity"),
///     ["Quantity is below the minimum quantity (10)"]
/// );
/// assert_eq!(
///     result.errors.messages("expiryDate"),
///     ["Expiry date is required for seeds"]
/// );
/// ```
pub fn supply_item_schema(policy: &SupplyPolicy) -> Result<FormSchema, PolicyError> {
    policy.validate()?;
    debug!(
        threshold = policy.total_value_threshold,
        placeholders = policy.placeholders.len(),
        "building supply item schema"
    );
    let placeholder = NotPlaceholder::new(&policy.placeholders);

    let schema = FormSchema::builder("supply_item")
        .field("name", "Supply name")
        .field("category", "Category")
        .field("quantity", "Quantity")
        .field("unit", "Unit")
        .field("price", "Unit price")
        .field("minQuantity", "Minimum quantity")
        .field("maxQuantity", "Maximum quantity")
        .field("supplier", "Supplier name")
        .field("location", "Storage location")
        .field("purchaseDate", "Purchase date")
        .field("expiryDate", "Expiry date")
        .field("notes", "Notes")
        .bind(
            Binding::new("name")
                .check(required())
                .check(length_range(2, 100))
                .rule(placeholder.clone()),
        )
        .bind(
            Binding::new("category")
                .check(required())
                .check(one_of(CATEGORY_SPELLINGS.as_slice())),
        )
        // Stock levels
        .bind(
            Binding::new("quantity")
                .check(required())
                .check(numeric())
                .check(integer())
                .check(min(0.0))
                .rule(CompareField::new(
                    "minQuantity",
                    Relation::GreaterOrEqual,
                    "Quantity is below the minimum quantity ({other})",
                ))
                .rule(CompareField::new(
                    "maxQuantity",
                    Relation::LessOrEqual,
                    "Quantity should not exceed maximum quantity ({other})",
                )),
        )
        .bind(Binding::new("unit").check(required()).check(max_length(20)))
        .bind(
            Binding::new("price")
                .check(required())
                .check(numeric())
                .check(positive())
                .check(pattern(Pattern::Decimal))
                .rule(ProductAbove::new("quantity", policy.total_value_threshold)),
        )
        .bind(
            Binding::new("minQuantity")
                .check(numeric())
                .check(integer())
                .check(min(0.0))
                .rule(CompareField::new(
                    "maxQuantity",
                    Relation::Less,
                    "Minimum quantity must be less than maximum quantity",
                )),
        )
        .bind(
            Binding::new("maxQuantity")
                .check(numeric())
                .check(integer())
                .check(min(1.0))
                .rule(CompareField::new(
                    "minQuantity",
                    Relation::Greater,
                    "Maximum quantity must be greater than minimum quantity",
                )),
        )
        .bind(Binding::new("supplier").check(max_length(100)).rule(placeholder.clone()))
        .bind(Binding::new("location").check(max_length(100)).rule(placeholder))
        // Dates
        .bind(
            Binding::new("purchaseDate")
                .check(date())
                .rule(NotAfterToday::new().with_message("Purchase date cannot be in the future")),
        )
        .bind(
            Binding::new("expiryDate")
                .check(date())
                .rule(NotBeforeToday::new().with_message("Item is already expired"))
                .rule(
                    AfterField::new(
                        "purchaseDate",
                        "Purchase date",
                        "category",
                        SupplyCategory::min_shelf_life_days,
                    )
                    .blank_other_is_today(),
                ),
        )
        .bind(
            Binding::new("expiryDate")
                .rule(RequiredFor::<SupplyCategory>::new("category"))
                .when(Gate::on("category", SupplyCategory::requires_expiry)),
        )
        .bind(
            Binding::new("expiryDate")
                .rule(AbsentFor::<SupplyCategory>::new("category"))
                .when(Gate::on("category", SupplyCategory::forbids_expiry)),
        )
        .bind(Binding::new("notes").check(max_length(500)))
        .build()
        .expect("supply item schema declares every field it binds");
    Ok(schema)
}
