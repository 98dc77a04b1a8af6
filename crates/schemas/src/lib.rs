//! # agriform-schemas
//!
//! The forms of the farm management system, declared once each on top of
//! `agriform-validator`, plus the normalizers that turn a validated form
//! into a persistence-ready record.
//!
//! | form | schema |
//! |---|---|
//! | login | [`account::login`] |
//! | user registration | [`account::registration`] |
//! | supply item | [`supply::supply_item`], [`supply::supply_item_schema`] |
//! | training material | [`training::training_material`] |
//! | payment | [`payment::payment`] |
//!
//! ```
//! use agriform_schemas::prelude::*;
//! use agriform_validator::foundation::ValueMap;
//!
//! let values = ValueMap::new().with("category", "tools").with("expiryDate", "2030-01-01");
//! let result = supply_item().validate(&values);
//! assert_eq!(
//!     result.errors.messages("expiryDate"),
//!     ["Expiry date must be empty for tools"]
//! );
//! ```

#![allow(clippy::result_large_err)]

pub mod account;
pub mod categories;
pub mod normalize;
pub mod payment;
pub mod policy;
pub mod supply;
pub mod training;

/// Everything needed to validate and normalize the built-in forms.
pub mod prelude {
    pub use crate::account::{login, registration};
    pub use crate::categories::{ExpiryTracking, PaymentMethod, SupplyCategory, TrainingType};
    pub use crate::normalize::{
        RegistrationRecord, SupplyRecord, SupplyStatus, TrainingRecord, normalize_registration,
        normalize_supply, normalize_training, supply_status,
    };
    pub use crate::payment::payment;
    pub use crate::policy::{PolicyError, SupplyPolicy};
    pub use crate::supply::{supply_item, supply_item_schema};
    pub use crate::training::training_material;
}
