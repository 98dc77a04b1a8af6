//! Combinators that wrap atomic checks.
//!
//! Sequencing several checks on one field does not need a combinator: the
//! [`Chain`](crate::chain::Chain) and [`Binding`](crate::schema::Binding)
//! run every check and keep every failure.

pub mod message;

pub use message::{WithMessage, with_message};
