//! Discriminant fields and binding gates
//!
//! A discriminant is a selector field (category, type, payment method)
//! whose value decides which rules apply. Its values form a closed enum so
//! that every category-dependent decision is an exhaustive `match`: adding
//! a variant fails to compile until each decision covers it.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Value, ValueMap};

// ============================================================================
// DISCRIMINANT
// ============================================================================

/// A closed set of selector values.
///
/// # Examples
///
/// ```
/// use agriform_validator::discriminant::Discriminant;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Material { Article, Video }
///
/// impl Discriminant for Material {
///     const ALL: &'static [Self] = &[Self::Article, Self::Video];
///
///     fn as_str(self) -> &'static str {
///         match self {
///             Self::Article => "article",
///             Self::Video => "video",
///         }
///     }
/// }
///
/// assert_eq!(Material::parse("video"), Some(Material::Video));
/// assert_eq!(Material::parse("podcast"), None);
/// ```
pub trait Discriminant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// Wire spelling of the value.
    fn as_str(self) -> &'static str;

    /// Name used inside messages. Defaults to the wire spelling.
    fn display_name(self) -> &'static str {
        self.as_str()
    }

    /// Parses the wire spelling (exact match on trimmed text).
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|d| d.as_str() == raw)
    }

    /// Reads the discriminant out of a raw value.
    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().and_then(|text| Self::parse(&text))
    }

    /// Every wire spelling, in declaration order.
    fn spellings() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.as_str()).collect()
    }
}

// ============================================================================
// GATE
// ============================================================================

/// Decides whether a binding applies to a value map.
///
/// A gate reads one discriminant field. A missing or unrecognized
/// discriminant closes the gate: the field's "which category" check
/// reports that, and no category-specific rule runs on a guess.
#[derive(Clone)]
pub struct Gate {
    field: Cow<'static, str>,
    description: Cow<'static, str>,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Gate {
    /// Opens when `field` parses as `D` and `applies` holds for it.
    ///
    /// `applies` is a plain function so that the decision is written as an
    /// exhaustive `match` over `D`.
    pub fn on<D: Discriminant>(field: impl Into<Cow<'static, str>>, applies: fn(D) -> bool) -> Self {
        let field = field.into();
        let open: Vec<&'static str> = D::ALL
            .iter()
            .copied()
            .filter(|d| applies(*d))
            .map(D::as_str)
            .collect();
        Self {
            description: Cow::Owned(format!("{field} in [{}]", open.join(", "))),
            field,
            test: Arc::new(move |value: &Value| D::from_value(value).is_some_and(applies)),
        }
    }

    /// Opens when `field` parses as any of `values`.
    pub fn any_of<D: Discriminant>(field: impl Into<Cow<'static, str>>, values: &'static [D]) -> Self {
        let field = field.into();
        let spellings: Vec<&str> = values.iter().map(|d| d.as_str()).collect();
        Self {
            description: Cow::Owned(format!("{field} in [{}]", spellings.join(", "))),
            field,
            test: Arc::new(move |value: &Value| {
                D::from_value(value).is_some_and(|d| values.contains(&d))
            }),
        }
    }

    /// The discriminant field this gate reads.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable form, e.g. `category in [seeds, fertilizers]`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the gated binding applies to `values`.
    #[must_use]
    pub fn is_open(&self, values: &ValueMap) -> bool {
        (self.test)(values.get(&self.field))
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("field", &self.field)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Method {
        Card,
        Cash,
    }

    impl Discriminant for Method {
        const ALL: &'static [Self] = &[Self::Card, Self::Cash];

        fn as_str(self) -> &'static str {
            match self {
                Self::Card => "credit_card",
                Self::Cash => "cash_on_delivery",
            }
        }
    }

    fn needs_card(method: Method) -> bool {
        match method {
            Method::Card => true,
            Method::Cash => false,
        }
    }

    #[test]
    fn parse_trims_and_is_exact() {
        assert_eq!(Method::parse(" credit_card "), Some(Method::Card));
        assert_eq!(Method::parse("Credit_Card"), None);
        assert_eq!(Method::spellings(), ["credit_card", "cash_on_delivery"]);
    }

    #[test]
    fn gate_opens_only_for_matching_discriminant() {
        let gate = Gate::on::<Method>("paymentMethod", needs_card);
        assert!(gate.is_open(&ValueMap::new().with("paymentMethod", "credit_card")));
        assert!(!gate.is_open(&ValueMap::new().with("paymentMethod", "cash_on_delivery")));
        assert_eq!(gate.description(), "paymentMethod in [credit_card]");
    }

    #[test]
    fn unknown_or_missing_discriminant_closes_gate() {
        let gate = Gate::on::<Method>("paymentMethod", needs_card);
        assert!(!gate.is_open(&ValueMap::new()));
        assert!(!gate.is_open(&ValueMap::new().with("paymentMethod", "barter")));
    }

    #[test]
    fn any_of_gate() {
        let gate = Gate::any_of("paymentMethod", &[Method::Cash]);
        assert!(gate.is_open(&ValueMap::new().with("paymentMethod", "cash_on_delivery")));
        assert!(!gate.is_open(&ValueMap::new().with("paymentMethod", "credit_card")));
        assert_eq!(gate.field(), "paymentMethod");
    }
}
