//! Built-in atomic checks
//!
//! Every validator here takes a single [`Value`](crate::foundation::Value),
//! never consults sibling fields, and reports at most one error. The one
//! exception is [`StrongPassword`], a [`Rule`](crate::rules::Rule) that
//! reports each unmet requirement. All of them except the presence checks
//! pass on blank input.
//!
//! # Categories
//!
//! - **Presence**: required, must be empty, must be true
//! - **Text**: length bounds, named patterns, custom regex, lowercase
//! - **Numeric**: number, whole number, bounds, positive
//! - **Identifiers**: Luhn checksum, repeated-digit sequences
//! - **Other**: closed vocabularies, password strength, dates
//!
//! # Examples
//!
//! ```
//! use agriform_validator::foundation::{Validate, Value};
//! use agriform_validator::validators::{Pattern, luhn, min_length, pattern};
//!
//! let number = Value::from("4111 1111 1111 1111");
//! assert!(pattern(Pattern::Digits(16)).validate(&number).is_ok());
//! assert!(luhn().validate(&number).is_ok());
//! assert!(min_length(2).validate(&Value::from("x")).is_err());
//! ```

pub mod checksum;
pub mod choice;
pub mod date;
pub mod length;
pub mod numeric;
pub mod password;
pub mod pattern;
pub mod presence;

pub use checksum::{Luhn, NotRepeatedDigits, luhn, luhn_checksum_valid, not_repeated_digits};
pub use choice::{OneOf, one_of};
pub use date::{ValidDate, date};
pub use length::{LengthRange, MaxLength, MinLength, length_range, max_length, min_length};
pub use numeric::{
    InRange, Integer, Max, Min, Numeric, Positive, in_range, integer, max, min, numeric, positive,
};
pub use password::{StrongPassword, strong_password};
pub use pattern::{
    MatchesPattern, MatchesRegex, Lowercase, Pattern, email, lowercase, matches_regex, pattern, url,
};
pub use presence::{IsTrue, MustBeEmpty, Required, is_true, must_be_empty, required};
