//! Discriminant enums for the entity schemas
//!
//! Every category-dependent decision is a `match` on one of these enums, so
//! adding a variant does not compile until each decision covers it.

use agriform_validator::discriminant::Discriminant;
use serde::{Deserialize, Serialize};

// ============================================================================
// SUPPLY CATEGORY
// ============================================================================

/// Category of a farm supply item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyCategory {
    Seeds,
    Fertilizers,
    Pesticides,
    Tools,
    Irrigation,
    AnimalFeed,
    Machinery,
    Equipment,
    SoilAmendments,
    GreenhouseSupplies,
}

/// Whether a category tracks an expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryTracking {
    /// Perishable: expiry date is mandatory.
    Required,
    /// Durable: an expiry date is a data-entry mistake.
    Forbidden,
    /// Either way.
    Optional,
}

impl SupplyCategory {
    /// How this category treats the expiry date.
    #[must_use]
    pub const fn expiry_tracking(self) -> ExpiryTracking {
        match self {
            Self::Seeds | Self::Fertilizers | Self::Pesticides | Self::AnimalFeed => {
                ExpiryTracking::Required
            }
            Self::SoilAmendments | Self::GreenhouseSupplies | Self::Irrigation => {
                ExpiryTracking::Optional
            }
            Self::Tools | Self::Machinery | Self::Equipment => ExpiryTracking::Forbidden,
        }
    }

    /// Minimum days between purchase and expiry.
    #[must_use]
    pub const fn min_shelf_life_days(self) -> u32 {
        match self {
            Self::Seeds => 30,
            Self::Fertilizers | Self::Pesticides => 90,
            Self::AnimalFeed => 14,
            Self::SoilAmendments
            | Self::GreenhouseSupplies
            | Self::Irrigation
            | Self::Tools
            | Self::Machinery
            | Self::Equipment => 1,
        }
    }

    /// True when an expiry date is mandatory.
    #[must_use]
    pub fn requires_expiry(self) -> bool {
        self.expiry_tracking() == ExpiryTracking::Required
    }

    /// True when an expiry date must be left empty.
    #[must_use]
    pub fn forbids_expiry(self) -> bool {
        self.expiry_tracking() == ExpiryTracking::Forbidden
    }
}

impl Discriminant for SupplyCategory {
    const ALL: &'static [Self] = &[
        Self::Seeds,
        Self::Fertilizers,
        Self::Pesticides,
        Self::Tools,
        Self::Irrigation,
        Self::AnimalFeed,
        Self::Machinery,
        Self::Equipment,
        Self::SoilAmendments,
        Self::GreenhouseSupplies,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Seeds => "seeds",
            Self::Fertilizers => "fertilizers",
            Self::Pesticides => "pesticides",
            Self::Tools => "tools",
            Self::Irrigation => "irrigation",
            Self::AnimalFeed => "animal-feed",
            Self::Machinery => "machinery",
            Self::Equipment => "equipment",
            Self::SoilAmendments => "soil-amendments",
            Self::GreenhouseSupplies => "greenhouse-supplies",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::AnimalFeed => "animal feed",
            Self::SoilAmendments => "soil amendments",
            Self::GreenhouseSupplies => "greenhouse supplies",
            other => other.as_str(),
        }
    }
}

// ============================================================================
// TRAINING TYPE
// ============================================================================

/// Kind of training material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingType {
    Article,
    Video,
    Pdf,
    Image,
}

impl TrainingType {
    /// True for materials delivered as an uploaded or linked file.
    #[must_use]
    pub const fn is_file_based(self) -> bool {
        match self {
            Self::Article => false,
            Self::Video | Self::Pdf | Self::Image => true,
        }
    }
}

impl Discriminant for TrainingType {
    const ALL: &'static [Self] = &[Self::Article, Self::Video, Self::Pdf, Self::Image];

    fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::Video => "videos",
            Self::Pdf => "PDFs",
            Self::Image => "images",
        }
    }
}

// ============================================================================
// PAYMENT METHOD
// ============================================================================

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Paypal,
    CashOnDelivery,
}

impl Discriminant for PaymentMethod {
    const ALL: &'static [Self] = &[
        Self::CreditCard,
        Self::BankTransfer,
        Self::Paypal,
        Self::CashOnDelivery,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
            Self::Paypal => "paypal",
            Self::CashOnDelivery => "cash_on_delivery",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::CreditCard => "card payments",
            Self::BankTransfer => "bank transfers",
            Self::Paypal => "PayPal",
            Self::CashOnDelivery => "cash on delivery",
        }
    }
}
