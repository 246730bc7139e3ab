//! Donation domain enums
//!
//! The kind of items being donated, how they reach the collection network,
//! and the shipping box sizes offered for pickups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// What the donor is giving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    /// Used clothes (the only type currently accepted for intake)
    Clothes,
    /// Footwear
    Shoes,
    /// Blankets and bedding
    Blankets,
}

impl DonationType {
    /// All types, in the order they are offered to the donor
    pub const ALL: [DonationType; 3] = [Self::Clothes, Self::Shoes, Self::Blankets];

    /// Whether this type can currently be selected for intake
    ///
    /// Shoes and blankets are advertised but not yet collected.
    pub fn is_available(self) -> bool {
        matches!(self, Self::Clothes)
    }

    /// Donor-facing label
    pub fn label(self) -> &'static str {
        match self {
            Self::Clothes => "Used Clothes",
            Self::Shoes => "Shoes",
            Self::Blankets => "Blankets & Bedding",
        }
    }

    /// Donor-facing description
    pub fn description(self) -> &'static str {
        match self {
            Self::Clothes => "Shirts, pants, dresses, jackets, and other clothing items",
            Self::Shoes => "All types of footwear",
            Self::Blankets => "Blankets, sheets, and bedding items",
        }
    }

    /// Parse from user text
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clothes" | "clothing" => Some(Self::Clothes),
            "shoes" => Some(Self::Shoes),
            "blankets" | "bedding" => Some(Self::Blankets),
            _ => None,
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the donation reaches the collection network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationMethod {
    /// Donor brings items to a collection center (free)
    Dropoff,
    /// Carrier pickup from the donor's address (shipping contribution applies)
    Pickup,
}

impl DonationMethod {
    /// All methods, in the order they are offered to the donor
    pub const ALL: [DonationMethod; 2] = [Self::Dropoff, Self::Pickup];

    /// Donor-facing label
    pub fn label(self) -> &'static str {
        match self {
            Self::Dropoff => "Drop-off at Collection Center",
            Self::Pickup => "UPS Pickup Service",
        }
    }

    /// Parse from user text
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dropoff" | "drop-off" => Some(Self::Dropoff),
            "pickup" => Some(Self::Pickup),
            _ => None,
        }
    }
}

impl fmt::Display for DonationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dropoff => write!(f, "Drop-off"),
            Self::Pickup => write!(f, "Pickup"),
        }
    }
}

/// Shipping box size for pickup donations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxSize {
    /// 18" x 18" x 24", $20 shipping contribution
    Standard,
    /// 18" x 24" x 36", $30 shipping contribution
    Large,
}

impl BoxSize {
    /// All sizes, smallest first
    pub const ALL: [BoxSize; 2] = [Self::Standard, Self::Large];

    /// Shipping contribution per box of this size
    pub const fn price(self) -> Money {
        match self {
            Self::Standard => Money::from_dollars(20),
            Self::Large => Money::from_dollars(30),
        }
    }

    /// Donor-facing label
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Box",
            Self::Large => "Large Box",
        }
    }

    /// Outer dimensions, donor-facing
    pub fn dimensions(self) -> &'static str {
        match self {
            Self::Standard => "18\" x 18\" x 24\"",
            Self::Large => "18\" x 24\" x 36\"",
        }
    }
}

impl fmt::Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
