//! Date relationship rules
//!
//! Every rule here reads "today" from the injected
//! [`Context`](crate::foundation::Context), never the clock. An own value
//! that is present but unparseable reports `invalid_date`; an unparseable
//! sibling is left to the sibling's own checks.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use smallvec::smallvec;

use crate::discriminant::Discriminant;
use crate::foundation::{Coercion, ErrorKind, ValidationError, Value};
use crate::rules::{Failures, Rule, RuleInput};

/// Reads the own date: `Ok(None)` for blank, `Err` for unparseable.
fn own_date(value: &Value) -> Result<Option<NaiveDate>, ValidationError> {
    match value.as_date() {
        Ok(date) => Ok(Some(date)),
        Err(Coercion::Blank) => Ok(None),
        Err(Coercion::Invalid) => Err(ValidationError::invalid_date()),
    }
}

fn temporal(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    ValidationError::new(code, message).with_kind(ErrorKind::Relational)
}

// ============================================================================
// TODAY
// ============================================================================

/// The date must not be later than today.
#[derive(Debug, Clone)]
pub struct NotAfterToday {
    message: Cow<'static, str>,
}

impl NotAfterToday {
    /// Creates the rule with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{label} cannot be in the future"),
        }
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for NotAfterToday {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NotAfterToday {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        match own_date(input.value) {
            Err(error) => smallvec![error],
            Ok(Some(date)) if date > input.context.today() => {
                smallvec![temporal("future_date", self.message.clone())]
            }
            Ok(_) => Failures::new(),
        }
    }
}

/// The date must not be earlier than today.
#[derive(Debug, Clone)]
pub struct NotBeforeToday {
    message: Cow<'static, str>,
}

impl NotBeforeToday {
    /// Creates the rule with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{label} cannot be in the past"),
        }
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for NotBeforeToday {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NotBeforeToday {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        match own_date(input.value) {
            Err(error) => smallvec![error],
            Ok(Some(date)) if date < input.context.today() => {
                smallvec![temporal("past_date", self.message.clone())]
            }
            Ok(_) => Failures::new(),
        }
    }
}

// ============================================================================
// AFTER SIBLING
// ============================================================================

/// The date must be strictly after a sibling date, and at least a
/// discriminant-dependent number of days after it.
///
/// `span` is a plain function over `D` so every discriminant value states
/// its span in one exhaustive `match`. A span of 0 or 1 only requires
/// "strictly after". Without a recognizable discriminant, only "strictly
/// after" is checked.
#[derive(Debug, Clone)]
pub struct AfterField<D> {
    other: Cow<'static, str>,
    other_label: Cow<'static, str>,
    discriminant: Cow<'static, str>,
    span: fn(D) -> u32,
    blank_other_is_today: bool,
}

impl<D: Discriminant> AfterField<D> {
    /// Creates the rule against sibling `other` (shown as `other_label`),
    /// with the minimum span read from `discriminant`.
    pub fn new(
        other: impl Into<Cow<'static, str>>,
        other_label: impl Into<Cow<'static, str>>,
        discriminant: impl Into<Cow<'static, str>>,
        span: fn(D) -> u32,
    ) -> Self {
        Self {
            other: other.into(),
            other_label: other_label.into(),
            discriminant: discriminant.into(),
            span,
            blank_other_is_today: false,
        }
    }

    /// Treats a blank sibling as today.
    ///
    /// Matches a normalizer that fills the sibling with today's date, so a
    /// map that passes before normalization still passes after it.
    #[must_use = "builder methods must be chained or built"]
    pub fn blank_other_is_today(mut self) -> Self {
        self.blank_other_is_today = true;
        self
    }

    fn other_date(&self, input: &RuleInput<'_>) -> Option<NaiveDate> {
        match input.sibling(&self.other).as_date() {
            Ok(date) => Some(date),
            Err(Coercion::Blank) if self.blank_other_is_today => Some(input.context.today()),
            Err(_) => None,
        }
    }
}

impl<D: Discriminant> Rule for AfterField<D> {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        let own = match own_date(input.value) {
            Err(error) => return smallvec![error],
            Ok(None) => return Failures::new(),
            Ok(Some(date)) => date,
        };
        let Some(other) = self.other_date(input) else {
            return Failures::new();
        };
        let other_label = self.other_label.to_lowercase();

        if own <= other {
            return smallvec![
                ValidationError::out_of_order(format!("{{label}} must be after {other_label}"))
                    .with_param("other", self.other.clone())
            ];
        }

        let Some(d) = D::from_value(input.sibling(&self.discriminant)) else {
            return Failures::new();
        };
        let span = (self.span)(d);
        let days = (own - other).num_days();
        if days < i64::from(span) {
            return smallvec![
                temporal(
                    "min_span",
                    format!(
                        "{{label}} must be at least {span} days after {other_label} for {}",
                        d.display_name()
                    )
                    .into(),
                )
                .with_param("other", self.other.clone())
                .with_param("days", span.to_string())
            ];
        }
        Failures::new()
    }

    fn reads(&self) -> Vec<&str> {
        vec![self.other.as_ref(), self.discriminant.as_ref()]
    }
}

// ============================================================================
// CARD EXPIRY
// ============================================================================

/// A `MM/YY` card expiry must not be before the current month.
///
/// Values not in `MM/YY` form are skipped; the
/// [`CardExpiry`](crate::validators::Pattern::CardExpiry) pattern reports those.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardNotExpired;

impl CardNotExpired {
    fn parse(text: &str) -> Option<(u32, u32)> {
        let (month, year) = text.split_once('/')?;
        if month.len() != 2 || year.len() != 2 {
            return None;
        }
        let month: u32 = month.parse().ok()?;
        let year: u32 = year.parse().ok()?;
        (1..=12).contains(&month).then_some((month, year))
    }
}

impl Rule for CardNotExpired {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        let Some((month, year)) = input.value.as_text().and_then(|t| Self::parse(&t)) else {
            return Failures::new();
        };
        let today = input.context.today();
        let current_year = today.year().rem_euclid(100).unsigned_abs();
        let current_month = today.month();
        if year < current_year || (year == current_year && month < current_month) {
            smallvec![temporal("card_expired", "Card has expired".into())]
        } else {
            Failures::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
