//! Evaluation context shared by every rule in one validation run.

use chrono::{NaiveDate, Utc};

/// Inputs a rule may need beyond the value map.
///
/// Rules never read the clock; "now" arrives here so that the same value
/// map and context always produce the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    today: NaiveDate,
}

impl Context {
    /// Creates a context pinned to `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Creates a context for the current UTC date.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// The date treated as "today" by temporal rules.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::now()
    }
}
