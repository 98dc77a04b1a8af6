//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: `Value`, `ValueMap`, the read-only input of every check
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ErrorKind`, `ErrorSeverity`
//! - **Output**: `ErrorMap`, `ValidationResult`
//! - **Context**: `Context`, the injected notion of "today"
//!
//! # Examples
//!
//! ```
//! use agriform_validator::foundation::{ErrorMap, Validate, Value};
//! use agriform_validator::validators::{email, required};
//!
//! let value = Value::from("not-an-email");
//! let mut errors = ErrorMap::new();
//! for check in [required().validate(&value), email().validate(&value)] {
//!     if let Err(error) = check {
//!         errors.push("email", error.recorded_for("email", "Email"));
//!     }
//! }
//! assert_eq!(errors.messages("email"), ["Please enter a valid email address"]);
//! ```

pub mod context;
pub mod error;
pub mod report;
pub mod traits;
pub mod value;

pub use context::Context;
pub use error::{ErrorKind, ErrorSeverity, LABEL_PLACEHOLDER, ValidationError};
pub use report::{ErrorMap, ValidationResult};
pub use traits::{Validate, ValidateExt};
pub use value::{Coercion, Value, ValueError, ValueMap};
