//! Prelude module for convenient imports.
//!
//! `use agriform_validator::prelude::*;` brings in the traits, value types,
//! atomic checks, rules and schema types that form declarations need.
//!
//! # Examples
//!
//! ```
//! use agriform_validator::prelude::*;
//!
//! let schema = FormSchema::builder("training")
//!     .field("title", "Title")
//!     .bind(Binding::new("title").check(required()).check(min_length(3)))
//!     .build()
//!     .unwrap();
//! assert!(schema.validate(&ValueMap::new().with("title", "Soil basics")).is_valid);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    Context, ErrorKind, ErrorMap, ErrorSeverity, Validate, ValidateExt, ValidationError,
    ValidationResult, Value, ValueMap,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{WithMessage, with_message};

// ============================================================================
// RULES, GATES, SCHEMAS
// ============================================================================

pub use crate::chain::{Chain, FieldCursor};
pub use crate::cross_field::{
    AbsentFor, AfterField, CardNotExpired, CompareField, EqualsField, NotAfterToday,
    NotBeforeToday, NotPlaceholder, ProductAbove, Relation, RequiredFor,
};
pub use crate::discriminant::{Discriminant, Gate};
pub use crate::rules::{Atomic, Failures, Rule, RuleInput, atomic, rule_fn};
pub use crate::schema::{Binding, FormSchema, FormSchemaBuilder, SchemaError};
