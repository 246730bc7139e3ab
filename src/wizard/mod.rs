//! Donation wizard state machine
//!
//! The ordered step enumeration and the engine that owns the session record,
//! gates forward progress, and drives submission.

pub mod engine;
pub mod step;

pub use engine::{DonationWizard, SubmissionState};
pub use step::WizardStep;
