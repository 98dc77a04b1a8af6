//! Form schemas: declared fields, gated bindings and the orchestrator.
//!
//! A [`FormSchema`] is built once, checked against its own declaration,
//! and then evaluated any number of times against a
//! [`ValueMap`](crate::foundation::ValueMap).

mod binding;
mod error;
mod form;
mod orchestrator;

pub use binding::Binding;
pub use error::SchemaError;
pub use form::{FormSchema, FormSchemaBuilder};
pub use orchestrator::{BindingOutcome, merge};
