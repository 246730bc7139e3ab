//! The donation session record
//!
//! A single mutable record tracking one donor's in-progress donation. The
//! wizard owns exactly one of these for the lifetime of a flow; every field
//! mutation goes through [`SessionUpdate`] as a partial merge, and monetary
//! totals are derived on every read rather than stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::{ContactInfo, ContactUpdate};
use super::donation::{BoxSize, DonationMethod, DonationType};
use super::ids::DonationId;
use super::money::Money;

/// Minimum number of pickup boxes
pub const MIN_BOXES: u32 = 1;
/// Maximum number of pickup boxes per session
pub const MAX_BOXES: u32 = 10;
/// ZIP codes are capped at this many characters on entry
pub const ZIP_LEN: usize = 5;

/// One donor's in-progress donation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationSession {
    /// Unique session identifier
    pub id: DonationId,

    /// What is being donated; unset until the donor picks
    pub donation_type: Option<DonationType>,

    /// ZIP code, required to find nearby options
    pub zip_code: String,

    /// Full street address (optional free text)
    #[serde(default)]
    pub address: String,

    /// Drop-off or pickup; unset until the donor picks
    pub donation_method: Option<DonationMethod>,

    /// Shipping box size; meaningful only for pickups
    pub box_size: Option<BoxSize>,

    /// Number of boxes, clamped to 1..=10; meaningful only for pickups
    pub num_boxes: u32,

    /// Fair market value of the donated items (for the tax receipt)
    pub estimated_value: Money,

    /// Whether the donor opted into an operational contribution
    pub wants_to_contribute: bool,

    /// Contribution amount; counted only while `wants_to_contribute` is set
    pub contribution_amount: Money,

    /// Donor contact details
    pub contact: ContactInfo,

    /// When the session started
    pub created_at: DateTime<Utc>,
}

impl DonationSession {
    /// Create a fresh session with all-default fields
    pub fn new() -> Self {
        Self {
            id: DonationId::new(),
            donation_type: None,
            zip_code: String::new(),
            address: String::new(),
            donation_method: None,
            box_size: None,
            num_boxes: MIN_BOXES,
            estimated_value: Money::zero(),
            wants_to_contribute: false,
            contribution_amount: Money::zero(),
            contact: ContactInfo::default(),
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update into the session
    ///
    /// `None` fields are untouched; contact updates merge into the nested
    /// record without disturbing its siblings. The box count is clamped to
    /// the valid range on the way in.
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(donation_type) = update.donation_type {
            self.donation_type = Some(donation_type);
        }
        if let Some(zip_code) = update.zip_code {
            self.zip_code = zip_code;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(method) = update.donation_method {
            self.donation_method = Some(method);
        }
        if let Some(box_size) = update.box_size {
            self.box_size = Some(box_size);
        }
        if let Some(num_boxes) = update.num_boxes {
            self.num_boxes = num_boxes.clamp(MIN_BOXES, MAX_BOXES);
        }
        if let Some(value) = update.estimated_value {
            self.estimated_value = value;
        }
        if let Some(wants) = update.wants_to_contribute {
            self.wants_to_contribute = wants;
        }
        if let Some(amount) = update.contribution_amount {
            self.contribution_amount = amount;
        }
        self.contact.apply(update.contact);
    }

    /// Price of the selected box size, defaulting to the standard box
    pub fn unit_box_price(&self) -> Money {
        self.box_size.unwrap_or(BoxSize::Standard).price()
    }

    /// Total shipping cost; zero unless the donor chose pickup
    pub fn total_box_cost(&self) -> Money {
        match self.donation_method {
            Some(DonationMethod::Pickup) => self.unit_box_price() * self.num_boxes,
            _ => Money::zero(),
        }
    }

    /// Shipping cost plus the contribution, if the donor opted in
    pub fn total_amount(&self) -> Money {
        let contribution = if self.wants_to_contribute {
            self.contribution_amount
        } else {
            Money::zero()
        };
        self.total_box_cost() + contribution
    }

    /// Whether the pickup-only fields matter for this session
    pub fn is_pickup(&self) -> bool {
        self.donation_method == Some(DonationMethod::Pickup)
    }
}

impl Default for DonationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`DonationSession`]; built up in the same style as a
/// query filter, then applied as one atomic merge
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub donation_type: Option<DonationType>,
    pub zip_code: Option<String>,
    pub address: Option<String>,
    pub donation_method: Option<DonationMethod>,
    pub box_size: Option<BoxSize>,
    pub num_boxes: Option<u32>,
    pub estimated_value: Option<Money>,
    pub wants_to_contribute: Option<bool>,
    pub contribution_amount: Option<Money>,
    pub contact: ContactUpdate,
}

impl SessionUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the donation type
    pub fn donation_type(mut self, donation_type: DonationType) -> Self {
        self.donation_type = Some(donation_type);
        self
    }

    /// Set the ZIP code
    pub fn zip_code(mut self, zip: impl Into<String>) -> Self {
        self.zip_code = Some(zip.into());
        self
    }

    /// Set the street address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the donation method
    pub fn donation_method(mut self, method: DonationMethod) -> Self {
        self.donation_method = Some(method);
        self
    }

    /// Set the box size
    pub fn box_size(mut self, size: BoxSize) -> Self {
        self.box_size = Some(size);
        self
    }

    /// Set the box count (clamped to 1..=10 when applied)
    pub fn num_boxes(mut self, count: u32) -> Self {
        self.num_boxes = Some(count);
        self
    }

    /// Set the estimated value
    pub fn estimated_value(mut self, value: Money) -> Self {
        self.estimated_value = Some(value);
        self
    }

    /// Set the contribution opt-in
    pub fn wants_to_contribute(mut self, wants: bool) -> Self {
        self.wants_to_contribute = Some(wants);
        self
    }

    /// Set the contribution amount
    pub fn contribution_amount(mut self, amount: Money) -> Self {
        self.contribution_amount = Some(amount);
        self
    }

    /// Merge contact fields
    pub fn contact(mut self, contact: ContactUpdate) -> Self {
        self.contact = contact;
        self
    }
}

/// Coerce free-text box count input to a valid count
///
/// Unparseable input becomes 1; out-of-range counts clamp to 1..=10.
pub fn coerce_box_count(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .unwrap_or(MIN_BOXES)
        .clamp(MIN_BOXES, MAX_BOXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let session = DonationSession::new();
        assert!(session.donation_type.is_none());
        assert!(session.zip_code.is_empty());
        assert!(session.donation_method.is_none());
        assert_eq!(session.num_boxes, 1);
        assert_eq!(session.estimated_value, Money::zero());
        assert!(!session.wants_to_contribute);
    }

    #[test]
    fn test_partial_merge_leaves_other_fields() {
        let mut session = DonationSession::new();
        session.apply(
            SessionUpdate::new()
                .donation_type(DonationType::Clothes)
                .zip_code("12345"),
        );
        session.apply(SessionUpdate::new().address("123 Main Street"));

        assert_eq!(session.donation_type, Some(DonationType::Clothes));
        assert_eq!(session.zip_code, "12345");
        assert_eq!(session.address, "123 Main Street");
    }

    #[test]
    fn test_contact_merge_is_nested() {
        let mut session = DonationSession::new();
        session.apply(SessionUpdate::new().contact(ContactUpdate::new().name("Jane Doe")));
        session.apply(
            SessionUpdate::new().contact(ContactUpdate::new().email("jane@example.com")),
        );

        assert_eq!(session.contact.name, "Jane Doe");
        assert_eq!(session.contact.email, "jane@example.com");
    }

    #[test]
    fn test_box_count_clamped() {
        let mut session = DonationSession::new();
        session.apply(SessionUpdate::new().num_boxes(25));
        assert_eq!(session.num_boxes, MAX_BOXES);

        session.apply(SessionUpdate::new().num_boxes(0));
        assert_eq!(session.num_boxes, MIN_BOXES);
    }

    #[test]
    fn test_box_cost_zero_without_pickup() {
        let mut session = DonationSession::new();
        session.apply(
            SessionUpdate::new()
                .box_size(BoxSize::Large)
                .num_boxes(5),
        );
        // No method picked yet
        assert_eq!(session.total_box_cost(), Money::zero());

        session.apply(SessionUpdate::new().donation_method(DonationMethod::Dropoff));
        assert_eq!(session.total_box_cost(), Money::zero());
    }

    #[test]
    fn test_pickup_box_cost() {
        let mut session = DonationSession::new();
        session.apply(
            SessionUpdate::new()
                .donation_method(DonationMethod::Pickup)
                .box_size(BoxSize::Large)
                .num_boxes(3),
        );
        assert_eq!(session.total_box_cost(), Money::from_dollars(90));
    }

    #[test]
    fn test_unit_price_defaults_to_standard() {
        let mut session = DonationSession::new();
        session.apply(SessionUpdate::new().donation_method(DonationMethod::Pickup));
        // Box size never chosen
        assert_eq!(session.unit_box_price(), Money::from_dollars(20));
        assert_eq!(session.total_box_cost(), Money::from_dollars(20));
    }

    #[test]
    fn test_total_amount_composition() {
        let mut session = DonationSession::new();
        session.apply(
            SessionUpdate::new()
                .donation_method(DonationMethod::Pickup)
                .box_size(BoxSize::Standard)
                .num_boxes(1)
                .contribution_amount(Money::from_dollars(20)),
        );

        // Opt-out: contribution ignored
        assert_eq!(session.total_amount(), Money::from_dollars(20));

        session.apply(SessionUpdate::new().wants_to_contribute(true));
        assert_eq!(session.total_amount(), Money::from_dollars(40));
    }

    #[test]
    fn test_coerce_box_count() {
        assert_eq!(coerce_box_count("3"), 3);
        assert_eq!(coerce_box_count(" 7 "), 7);
        assert_eq!(coerce_box_count("banana"), 1);
        assert_eq!(coerce_box_count(""), 1);
        assert_eq!(coerce_box_count("0"), 1);
        assert_eq!(coerce_box_count("99"), 10);
    }
}
