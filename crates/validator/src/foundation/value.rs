//! Raw field values and the value map a form is validated against.
//!
//! A [`ValueMap`] is the typed stand-in for whatever a UI collected: a flat
//! map of field name to a scalar [`Value`]. The engine only ever reads it.
//! Coercions (`as_number`, `as_date`, ...) borrow the value and never
//! write back, so the caller's map is exactly what the persistence layer
//! receives once validation succeeds.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE
// ============================================================================

/// A raw scalar field value.
///
/// An absent key reads as [`Value::Null`] through [`ValueMap::get`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value (`null`, or the key is absent).
    #[default]
    Null,
    /// A boolean, e.g. a checkbox.
    Bool(bool),
    /// A number that was already numeric when collected.
    Number(f64),
    /// Free text as typed by the user.
    Text(String),
}

/// Failure to coerce a value for a numeric or date check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// The value is blank; presence checks own this case.
    Blank,
    /// The value is present but cannot be read as the requested type.
    Invalid,
}

impl Value {
    /// Returns true for `Null` and for text that is empty after trimming.
    ///
    /// `false` and `0` are present values.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Returns the trimmed text form used by string checks.
    ///
    /// Numbers render with the shortest round-trip formatting, booleans as
    /// `true` / `false`. Returns `None` for `Null`.
    #[must_use]
    pub fn as_text(&self) -> Option<std::borrow::Cow<'_, str>> {
        use std::borrow::Cow;
        match self {
            Value::Null => None,
            Value::Text(s) => Some(Cow::Borrowed(s.trim())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        }
    }

    /// Reads the value as a finite number.
    pub fn as_number(&self) -> Result<f64, Coercion> {
        if self.is_blank() {
            return Err(Coercion::Blank);
        }
        match self {
            Value::Number(n) if n.is_finite() => Ok(*n),
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or(Coercion::Invalid),
            _ => Err(Coercion::Invalid),
        }
    }

    /// Reads the value as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (the date part is used).
    pub fn as_date(&self) -> Result<NaiveDate, Coercion> {
        if self.is_blank() {
            return Err(Coercion::Blank);
        }
        let Value::Text(s) = self else {
            return Err(Coercion::Invalid);
        };
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
            .map_err(|_| Coercion::Invalid)
    }

    /// Returns the boolean if this is `Bool`, or text spelling `true`/`false`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Short type name for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

macro_rules! value_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// VALUE MAP
// ============================================================================

/// Error raised when building a [`ValueMap`] from an unsupported shape.
///
/// This is a programmer error in the calling code, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The JSON document is not an object.
    #[error("value map must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    /// A field holds an array or object.
    #[error("field `{field}` holds a nested {kind}; only scalars are supported")]
    Nested {
        /// Offending field name.
        field: String,
        /// `array` or `object`.
        kind: &'static str,
    },
}

/// A flat, read-only map of field name to raw [`Value`].
///
/// Keys are kept sorted so iteration and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    fields: BTreeMap<String, Value>,
}

static NULL: Value = Value::Null;

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts or replaces a field value, returning the previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Returns the value for `field`, or `Null` when absent.
    #[must_use]
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns true if `field` is present (even if `Null`).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of present keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a map from a JSON object of scalars.
    pub fn from_json(json: serde_json::Value) -> Result<Self, ValueError> {
        let serde_json::Value::Object(object) = json else {
            return Err(ValueError::NotAnObject(json_kind(&json)));
        };

        let mut map = Self::new();
        for (field, raw) in object {
            let value = match raw {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
                serde_json::Value::String(s) => Value::Text(s),
                other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                    return Err(ValueError::Nested {
                        field,
                        kind: json_kind(&other),
                    });
                }
            };
            map.fields.insert(field, value);
        }
        Ok(map)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
