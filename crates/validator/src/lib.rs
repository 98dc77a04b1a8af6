//! # agriform-validator
//!
//! A declarative validation engine for form-shaped records.
//!
//! ## Quick Start
//!
//! ```
//! use agriform_validator::prelude::*;
//!
//! let card = Value::from("4111 1111 1111 1112");
//! let mut chain = Chain::new();
//! chain
//!     .field("cardNumber", "Card number", &card)
//!     .required()
//!     .pattern(Pattern::Digits(16))
//!     .luhn();
//! let errors = chain.finish();
//! assert_eq!(errors.messages("cardNumber"), ["Please enter a valid card number"]);
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: atomic checks over one [`Value`](foundation::Value).
//!   Non-presence checks treat a blank value as valid.
//! - [`chain`]: the fluent accumulator, for ad hoc imperative validation.
//! - [`rules`] and [`cross_field`]: rules that read sibling fields and the
//!   injected [`Context`](foundation::Context).
//! - [`discriminant`]: selector enums and the [`Gate`](discriminant::Gate)s
//!   that switch bindings on and off.
//! - [`schema`]: declared forms and the orchestrator that evaluates them.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the error type of every check; boxing it would add an
// allocation to every failing call.
#![allow(clippy::result_large_err)]
#![warn(missing_docs)]

mod macros;

pub mod chain;
pub mod combinators;
pub mod cross_field;
pub mod discriminant;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod validators;
