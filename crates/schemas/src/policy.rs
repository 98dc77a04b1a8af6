//! Tunable knobs for the supply schema

use serde::{Deserialize, Serialize};

/// Default total-value warning threshold (unit price × quantity).
pub const DEFAULT_TOTAL_VALUE_THRESHOLD: f64 = 100_000.0;

/// Default placeholder tokens rejected in free-text supply fields.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &[
    "test",
    "testing",
    "dummy",
    "placeholder",
    "sample",
    "asdf",
    "qwerty",
    "lorem",
    "ipsum",
    "foo",
    "bar",
    "xxx",
    "tbd",
    "n/a",
    "na",
];

/// Error raised by an unusable [`SupplyPolicy`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// The threshold is negative, NaN or infinite.
    #[error("total value threshold must be a finite, non-negative number, got {0}")]
    InvalidThreshold(f64),
    /// The policy document is not valid JSON for this shape.
    #[error("invalid supply policy: {0}")]
    Parse(String),
}

/// Policy the supply schema is built from.
///
/// Every field has a default, so `{}` is a complete policy.
///
/// # Examples
///
/// ```
/// use agriform_schemas::policy::SupplyPolicy;
///
/// let policy = SupplyPolicy::from_json_str(r#"{ "totalValueThreshold": 5000 }"#).unwrap();
/// assert_eq!(policy.total_value_threshold, 5000.0);
/// assert!(policy.placeholders.iter().any(|t| t == "dummy"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplyPolicy {
    /// Unit price × quantity above this raises a warning.
    pub total_value_threshold: f64,
    /// Tokens that mark a name, supplier or location as filler.
    pub placeholders: Vec<String>,
}

impl Default for SupplyPolicy {
    fn default() -> Self {
        Self {
            total_value_threshold: DEFAULT_TOTAL_VALUE_THRESHOLD,
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

impl SupplyPolicy {
    /// Parses and checks a JSON policy document.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_json::from_str(json).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the policy can build a schema.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let threshold = self.total_value_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(PolicyError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}
