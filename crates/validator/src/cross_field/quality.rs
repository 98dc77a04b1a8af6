//! Content-quality heuristics
//!
//! Deliberately loose: this asks for a real value when the input is
//! obviously filler. It is not a security control.

use std::sync::Arc;

use smallvec::smallvec;

use crate::foundation::{ErrorKind, ValidationError};
use crate::rules::{Failures, Rule, RuleInput};

/// Fails when every word of the text is a placeholder token or a number,
/// and at least one word is a token. `Test 123` fails; `Test seeds` passes.
///
/// Matching is case-insensitive on trimmed words; surrounding punctuation
/// other than `/` is ignored so `n/a` and `"TBD."` both match.
#[derive(Debug, Clone)]
pub struct NotPlaceholder {
    blocklist: Arc<[String]>,
}

impl NotPlaceholder {
    /// Creates the rule from a token list.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            blocklist: tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Returns true if `text` reads as filler.
    #[must_use]
    pub fn is_placeholder(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        let mut saw_token = false;
        for word in lowered.split_whitespace() {
            let word = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '/');
            if word.is_empty() {
                continue;
            }
            if self.blocklist.iter().any(|token| token == word) {
                saw_token = true;
            } else if !word.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
        }
        saw_token
    }
}

impl Rule for NotPlaceholder {
    fn evaluate(&self, input: &RuleInput<'_>) -> Failures {
        match input.value.as_text() {
            Some(text) if self.is_placeholder(&text) => smallvec![
                ValidationError::new("placeholder", "Please enter a real value for {label}")
                    .with_kind(ErrorKind::Quality)
            ],
            _ => Failures::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> NotPlaceholder {
        NotPlaceholder::new(["test", "dummy", "n/a", "TBD"])
    }

    #[test]
    fn detects_filler() {
        let rule = rule();
        assert!(rule.is_placeholder("test"));
        assert!(rule.is_placeholder("  TEST  "));
        assert!(rule.is_placeholder("Test 123"));
        assert!(rule.is_placeholder("dummy test"));
        assert!(rule.is_placeholder("N/A"));
        assert!(rule.is_placeholder("\"tbd.\""));
    }

    #[test]
    fn real_values_pass() {
        let rule = rule();
        assert!(!rule.is_placeholder("Test seeds"));
        assert!(!rule.is_placeholder("Testing ground"));
        assert!(!rule.is_placeholder("123"));
        assert!(!rule.is_placeholder(""));
        assert!(!rule.is_placeholder("contest"));
    }
}
