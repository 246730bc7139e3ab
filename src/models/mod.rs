//! Core data models for donate-cli
//!
//! The donation domain: money, session records, donor contact details,
//! and the static reference catalog.

pub mod catalog;
pub mod contact;
pub mod donation;
pub mod ids;
pub mod money;
pub mod session;

pub use contact::{ContactInfo, ContactUpdate};
pub use donation::{BoxSize, DonationMethod, DonationType};
pub use ids::DonationId;
pub use money::Money;
pub use session::{DonationSession, SessionUpdate, MAX_BOXES, MIN_BOXES, ZIP_LEN};
