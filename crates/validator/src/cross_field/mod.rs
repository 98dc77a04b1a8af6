//! Cross-field rules
//!
//! Rules that read more than their own field: discriminant-aware presence,
//! numeric ordering, date relationships, magnitude warnings, placeholder
//! detection and equality. Each reports the siblings it reads through
//! [`Rule::reads`](crate::rules::Rule::reads), so a schema can verify them
//! against its declared fields.

pub mod dates;
pub mod equality;
pub mod magnitude;
pub mod ordering;
pub mod presence;
pub mod quality;

pub use dates::{AfterField, CardNotExpired, NotAfterToday, NotBeforeToday};
pub use equality::EqualsField;
pub use magnitude::ProductAbove;
pub use ordering::{CompareField, Relation};
pub use presence::{AbsentFor, RequiredFor};
pub use quality::NotPlaceholder;
