//! Normalization: raw form values into the shape persistence expects
//!
//! Run only after validation succeeds. Every function here is total (bad
//! input falls back to a default instead of failing) and never mutates the
//! caller's map. Records convert back into a [`ValueMap`] so a normalized
//! record can be validated again.

use agriform_validator::foundation::{Context, Value, ValueMap};
use chrono::NaiveDate;
use serde::Serialize;

/// Low-stock threshold used when a record has no minimum quantity.
pub const DEFAULT_LOW_STOCK: i64 = 5;

fn text(values: &ValueMap, field: &str) -> String {
    values.get(field).as_text().map(|t| t.into_owned()).unwrap_or_default()
}

fn optional_text(values: &ValueMap, field: &str) -> Option<String> {
    Some(text(values, field)).filter(|t| !t.is_empty())
}

fn whole(values: &ValueMap, field: &str) -> Option<i64> {
    values.get(field).as_number().ok().map(|n| n.trunc() as i64)
}

fn date(values: &ValueMap, field: &str) -> Option<NaiveDate> {
    values.get(field).as_date().ok()
}

// ============================================================================
// SUPPLY
// ============================================================================

/// Stock status derived from quantity and expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyStatus {
    Expired,
    OutOfStock,
    LowStock,
    InStock,
}

/// Derives the status: expired first, then out of stock, then low stock.
///
/// An item expires the day after its expiry date.
#[must_use]
pub fn supply_status(
    quantity: i64,
    min_quantity: Option<i64>,
    expiry_date: Option<NaiveDate>,
    today: NaiveDate,
) -> SupplyStatus {
    if expiry_date.is_some_and(|expiry| expiry < today) {
        SupplyStatus::Expired
    } else if quantity == 0 {
        SupplyStatus::OutOfStock
    } else if quantity <= min_quantity.filter(|m| *m > 0).unwrap_or(DEFAULT_LOW_STOCK) {
        SupplyStatus::LowStock
    } else {
        SupplyStatus::InStock
    }
}

/// A normalized supply item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRecord {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub price: f64,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
    pub supplier: String,
    pub location: String,
    pub purchase_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub notes: String,
    pub status: SupplyStatus,
}

impl SupplyRecord {
    /// The record as form values, without the derived `status`.
    #[must_use]
    pub fn to_values(&self) -> ValueMap {
        ValueMap::new()
            .with("name", self.name.as_str())
            .with("category", self.category.as_str())
            .with("quantity", self.quantity)
            .with("unit", self.unit.as_str())
            .with("price", self.price)
            .with("minQuantity", self.min_quantity)
            .with("maxQuantity", self.max_quantity)
            .with("supplier", self.supplier.as_str())
            .with("location", self.location.as_str())
            .with("purchaseDate", self.purchase_date.to_string())
            .with("expiryDate", self.expiry_date.map(|d| d.to_string()))
            .with("notes", self.notes.as_str())
    }
}

/// Normalizes a validated supply item.
///
/// Strings are trimmed, quantities truncated to whole numbers, a missing
/// purchase date becomes `context.today()`.
///
/// # Examples
///
/// ```
/// use agriform_schemas::normalize::{SupplyStatus, normalize_supply};
/// use agriform_validator::foundation::{Context, ValueMap};
/// use chrono::NaiveDate;
///
/// let context = Context::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// let values = ValueMap::new()
///     .with("name", "  Garden hoe ")
///     .with("category", "tools")
///     .with("quantity", "3")
///     .with("price", "1250.00");
/// let record = normalize_supply(&values, &context);
/// assert_eq!(record.name, "Garden hoe");
/// assert_eq!(record.purchase_date, context.today());
/// assert_eq!(record.status, SupplyStatus::LowStock);
/// ```
#[must_use]
pub fn normalize_supply(values: &ValueMap, context: &Context) -> SupplyRecord {
    let quantity = whole(values, "quantity").unwrap_or(0);
    let min_quantity = whole(values, "minQuantity");
    let expiry_date = date(values, "expiryDate");
    SupplyRecord {
        name: text(values, "name"),
        category: text(values, "category"),
        quantity,
        unit: text(values, "unit"),
        price: values.get("price").as_number().unwrap_or(0.0),
        min_quantity,
        max_quantity: whole(values, "maxQuantity"),
        supplier: text(values, "supplier"),
        location: text(values, "location"),
        purchase_date: date(values, "purchaseDate").unwrap_or_else(|| context.today()),
        expiry_date,
        notes: text(values, "notes"),
        status: supply_status(quantity, min_quantity, expiry_date, context.today()),
    }
}

// ============================================================================
// TRAINING MATERIAL
// ============================================================================

/// A normalized training material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub existing_file: bool,
}

impl TrainingRecord {
    /// The record as form values.
    #[must_use]
    pub fn to_values(&self) -> ValueMap {
        ValueMap::new()
            .with("type", self.kind.as_str())
            .with("title", self.title.as_str())
            .with("description", self.description.as_str())
            .with("category", self.category.as_str())
            .with("content", self.content.clone())
            .with("fileUrl", self.file_url.clone())
            .with("existingFile", self.existing_file)
    }
}

/// Normalizes a validated training material: trims text, lower-cases the
/// type and category.
#[must_use]
pub fn normalize_training(values: &ValueMap) -> TrainingRecord {
    TrainingRecord {
        kind: text(values, "type").to_lowercase(),
        title: text(values, "title"),
        description: text(values, "description"),
        category: text(values, "category").to_lowercase(),
        content: optional_text(values, "content"),
        file_url: optional_text(values, "fileUrl"),
        existing_file: values.get("existingFile").as_bool().unwrap_or(false),
    }
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// A normalized user registration, ready to submit.
///
/// The password is kept exactly as typed; the confirmation is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Normalizes a validated registration.
#[must_use]
pub fn normalize_registration(values: &ValueMap) -> RegistrationRecord {
    let password = match values.get("password") {
        Value::Text(raw) => raw.clone(),
        other => other.as_text().map(|t| t.into_owned()).unwrap_or_default(),
    };
    RegistrationRecord {
        full_name: text(values, "fullName")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
        email: text(values, "email").to_lowercase(),
        phone: text(values, "phone"),
        age: whole(values, "age").and_then(|a| u32::try_from(a).ok()).unwrap_or(0),
        username: text(values, "username"),
        password,
    }
}
