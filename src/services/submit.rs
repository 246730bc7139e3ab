//! Donation submission port
//!
//! The wizard hands a finished session to an external collaborator through
//! this boundary. The trait is async and fallible; the only implementation
//! in this repository is an in-memory mock that accepts instantly, standing
//! in for the real donations API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

use crate::models::{DonationId, DonationSession, Money};

/// Confirmation returned by the collaborator for an accepted donation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationReceipt {
    /// Session the receipt belongs to
    pub session_id: DonationId,
    /// Donor-facing confirmation code
    pub confirmation_code: String,
    /// Shipping plus contribution, as charged
    pub total_charged: Money,
    /// When the collaborator accepted the donation
    pub submitted_at: DateTime<Utc>,
}

impl DonationReceipt {
    /// Donor-facing thank-you line for notifications
    pub fn thank_you_line(&self) -> String {
        format!(
            "Thank you for your generous donation! Confirmation {} — you will receive a confirmation email shortly.",
            self.confirmation_code
        )
    }
}

/// Errors the submission collaborator can report
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The service could not be reached
    #[error("donation service unavailable: {0}")]
    Unavailable(String),
    /// The service refused the donation
    #[error("donation rejected: {0}")]
    Rejected(String),
}

/// Port to the external donation-submission service
#[async_trait]
pub trait SubmitDonation: Send + Sync {
    /// Submit a finished session; returns a receipt on acceptance
    async fn submit(&self, session: &DonationSession) -> Result<DonationReceipt, SubmitError>;
}

/// In-memory stand-in for the donations API
///
/// Accepts every donation instantly and records the accepted sessions so the
/// at-most-once property is observable. Production would replace this with
/// an HTTP client behind the same trait.
#[derive(Debug, Default)]
pub struct InMemorySubmitService {
    accepted: Mutex<Vec<DonationSession>>,
}

impl InMemorySubmitService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of donations accepted so far
    pub fn accepted_count(&self) -> usize {
        self.accepted.lock().map(|a| a.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SubmitDonation for InMemorySubmitService {
    async fn submit(&self, session: &DonationSession) -> Result<DonationReceipt, SubmitError> {
        let receipt = DonationReceipt {
            session_id: session.id,
            confirmation_code: confirmation_code(session.id),
            total_charged: session.total_amount(),
            submitted_at: Utc::now(),
        };

        self.accepted
            .lock()
            .map_err(|_| SubmitError::Unavailable("submission store poisoned".into()))?
            .push(session.clone());

        Ok(receipt)
    }
}

/// Derive a donor-facing confirmation code from the session id
fn confirmation_code(id: DonationId) -> String {
    format!("AK-{}", id.short().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoxSize, DonationMethod, SessionUpdate};

    #[tokio::test]
    async fn test_in_memory_service_accepts_and_records() {
        let service = InMemorySubmitService::new();
        let mut session = DonationSession::new();
        session.apply(
            SessionUpdate::new()
                .donation_method(DonationMethod::Pickup)
                .box_size(BoxSize::Large)
                .num_boxes(2),
        );

        let receipt = service.submit(&session).await.unwrap();
        assert_eq!(receipt.session_id, session.id);
        assert_eq!(receipt.total_charged, Money::from_dollars(60));
        assert!(receipt.confirmation_code.starts_with("AK-"));
        assert_eq!(service.accepted_count(), 1);
    }

    #[test]
    fn test_thank_you_line_carries_code() {
        let receipt = DonationReceipt {
            session_id: DonationId::new(),
            confirmation_code: "AK-DEADBEEF".into(),
            total_charged: Money::zero(),
            submitted_at: Utc::now(),
        };
        assert!(receipt.thank_you_line().contains("AK-DEADBEEF"));
    }
}
