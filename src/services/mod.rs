//! Service boundaries
//!
//! External collaborators the wizard calls but does not implement.

pub mod submit;

pub use submit::{DonationReceipt, InMemorySubmitService, SubmitDonation, SubmitError};
