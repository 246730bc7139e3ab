//! The donation wizard state machine
//!
//! Owns one [`DonationSession`] and the current [`WizardStep`], enforces the
//! per-step gating policy, and drives the at-most-once submission lifecycle
//! against the async collaborator port.

use crate::error::{DonateError, DonateResult};
use crate::models::session::ZIP_LEN;
use crate::models::{DonationSession, SessionUpdate};
use crate::services::submit::{DonationReceipt, SubmitDonation};

use super::step::WizardStep;

/// Where the session stands with the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Not yet attempted
    #[default]
    Idle,
    /// A submission is in flight; no second attempt may start
    InFlight,
    /// The last attempt failed; submit is re-enabled for retry
    Failed(String),
    /// The collaborator accepted the donation; the session is frozen
    Accepted(DonationReceipt),
}

impl SubmissionState {
    /// Whether a new submission attempt may start
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Whether the donation has been accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Whether an attempt is currently in flight
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// The multi-step donation wizard
#[derive(Debug, Default)]
pub struct DonationWizard {
    step: WizardStep,
    session: DonationSession,
    submission: SubmissionState,
}

impl DonationWizard {
    /// Start a fresh donor flow on the welcome step
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            session: DonationSession::new(),
            submission: SubmissionState::Idle,
        }
    }

    /// The current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The session record
    pub fn session(&self) -> &DonationSession {
        &self.session
    }

    /// Submission status
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Whether the current step's gate allows moving forward
    ///
    /// A pure function of the current state; callers re-check it after every
    /// field mutation since a later edit can invalidate an earlier pass.
    pub fn can_advance(&self) -> bool {
        let session = &self.session;
        match self.step {
            WizardStep::Welcome => true,
            WizardStep::TypeSelection => session.donation_type.is_some(),
            WizardStep::AddressInput => session.zip_code.chars().count() >= ZIP_LEN,
            WizardStep::MethodSelection => session.donation_method.is_some(),
            WizardStep::DetailsAndValue => {
                session.contact.is_complete() && session.estimated_value.is_positive()
            }
            WizardStep::Contribution => true,
            WizardStep::Confirmation => false,
        }
    }

    /// What is still missing before the current step can advance
    pub fn gate_hint(&self) -> Option<&'static str> {
        if self.can_advance() || self.step.is_terminal() {
            return None;
        }
        Some(match self.step {
            WizardStep::TypeSelection => "Select a donation type to continue",
            WizardStep::AddressInput => "Enter a 5-digit ZIP code to continue",
            WizardStep::MethodSelection => "Choose drop-off or pickup to continue",
            WizardStep::DetailsAndValue => {
                "Name, email, and an estimated value are required to continue"
            }
            _ => "Cannot continue from this step",
        })
    }

    /// Move forward one step if the gate holds; returns whether we moved
    ///
    /// A no-op at the terminal step and while the gate is blocked.
    pub fn advance(&mut self) -> bool {
        if self.submission.is_accepted() || !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step; returns whether we moved
    ///
    /// Unconditional except at the welcome step, and once a submission has
    /// been accepted the flow is over and the session frozen.
    pub fn retreat(&mut self) -> bool {
        if self.submission.is_accepted() {
            return false;
        }
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Merge a field update into the session
    ///
    /// Field updates never change the step, and are ignored entirely once
    /// the donation has been accepted.
    pub fn update(&mut self, update: SessionUpdate) {
        if self.submission.is_accepted() {
            return;
        }
        self.session.apply(update);
    }

    /// Submit the session through the collaborator port
    ///
    /// Only valid from the confirmation step. At most one attempt may be in
    /// flight, and once accepted no further attempt is made; on failure the
    /// session stays on the confirmation step with submit re-enabled.
    pub async fn submit(
        &mut self,
        service: &(dyn SubmitDonation + '_),
    ) -> DonateResult<DonationReceipt> {
        if self.step != WizardStep::Confirmation {
            return Err(DonateError::Validation(
                "Donations can only be submitted from the confirmation step".into(),
            ));
        }
        if self.submission.is_accepted() {
            return Err(DonateError::AlreadySubmitted);
        }
        if self.submission.is_in_flight() {
            return Err(DonateError::SubmissionInFlight);
        }

        self.submission = SubmissionState::InFlight;
        match service.submit(&self.session).await {
            Ok(receipt) => {
                self.submission = SubmissionState::Accepted(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                let reason = err.to_string();
                self.submission = SubmissionState::Failed(reason.clone());
                Err(DonateError::Submission(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoxSize, ContactUpdate, DonationMethod, DonationType, Money};
    use crate::services::submit::{InMemorySubmitService, SubmitError};
    use async_trait::async_trait;

    /// Collaborator that always refuses, counting attempts
    struct RejectingService {
        attempts: std::sync::Mutex<u32>,
    }

    impl RejectingService {
        fn new() -> Self {
            Self {
                attempts: std::sync::Mutex::new(0),
            }
        }

        fn attempts(&self) -> u32 {
            *self.attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl SubmitDonation for RejectingService {
        async fn submit(
            &self,
            _session: &DonationSession,
        ) -> Result<DonationReceipt, SubmitError> {
            *self.attempts.lock().unwrap() += 1;
            Err(SubmitError::Unavailable("donation service offline".into()))
        }
    }

    fn wizard_at_confirmation() -> DonationWizard {
        let mut wizard = DonationWizard::new();
        wizard.update(
            SessionUpdate::new()
                .donation_type(DonationType::Clothes)
                .zip_code("12345")
                .donation_method(DonationMethod::Pickup)
                .box_size(BoxSize::Standard)
                .estimated_value(Money::from_dollars(150))
                .contact(ContactUpdate::new().name("Jane Doe").email("jane@example.com")),
        );
        while wizard.step() != WizardStep::Confirmation {
            assert!(wizard.advance(), "stuck at {:?}", wizard.step());
        }
        wizard
    }

    #[test]
    fn test_welcome_always_advances() {
        let mut wizard = DonationWizard::new();
        assert!(wizard.can_advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::TypeSelection);
    }

    #[test]
    fn test_blocked_advance_leaves_state_unchanged() {
        let mut wizard = DonationWizard::new();
        wizard.advance();
        // No donation type picked yet
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), WizardStep::TypeSelection);
        assert!(wizard.gate_hint().is_some());
    }

    #[test]
    fn test_type_selection_gate() {
        let mut wizard = DonationWizard::new();
        wizard.advance();
        wizard.update(SessionUpdate::new().donation_type(DonationType::Clothes));
        assert!(wizard.can_advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::AddressInput);
    }

    #[test]
    fn test_zip_gate_requires_five_chars() {
        let mut wizard = DonationWizard::new();
        wizard.update(SessionUpdate::new().donation_type(DonationType::Clothes));
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::AddressInput);

        wizard.update(SessionUpdate::new().zip_code("1234"));
        assert!(!wizard.can_advance());

        wizard.update(SessionUpdate::new().zip_code("12345"));
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_later_edit_invalidates_gate() {
        let mut wizard = DonationWizard::new();
        wizard.update(SessionUpdate::new().donation_type(DonationType::Clothes));
        wizard.advance();
        wizard.advance();
        wizard.update(SessionUpdate::new().zip_code("12345"));
        assert!(wizard.can_advance());

        wizard.update(SessionUpdate::new().zip_code("12"));
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_details_gate() {
        let mut wizard = DonationWizard::new();
        wizard.update(
            SessionUpdate::new()
                .donation_type(DonationType::Clothes)
                .zip_code("12345")
                .donation_method(DonationMethod::Dropoff),
        );
        for _ in 0..4 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), WizardStep::DetailsAndValue);
        assert!(!wizard.can_advance());

        wizard.update(
            SessionUpdate::new()
                .contact(ContactUpdate::new().name("Jane Doe").email("jane@example.com")),
        );
        assert!(!wizard.can_advance(), "estimated value still missing");

        wizard.update(SessionUpdate::new().estimated_value(Money::from_dollars(150)));
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_retreat_unconditional_and_bounded() {
        let mut wizard = DonationWizard::new();
        assert!(!wizard.retreat(), "no-op at the welcome step");

        wizard.advance();
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Welcome);
    }

    #[test]
    fn test_gate_is_idempotent() {
        let wizard = DonationWizard::new();
        let first = wizard.can_advance();
        for _ in 0..10 {
            assert_eq!(wizard.can_advance(), first);
        }
    }

    #[test]
    fn test_update_never_changes_step() {
        let mut wizard = DonationWizard::new();
        wizard.advance();
        let before = wizard.step();
        wizard.update(
            SessionUpdate::new()
                .donation_type(DonationType::Clothes)
                .zip_code("12345")
                .estimated_value(Money::from_dollars(40)),
        );
        assert_eq!(wizard.step(), before);
    }

    #[tokio::test]
    async fn test_submit_only_from_confirmation() {
        let mut wizard = DonationWizard::new();
        let service = InMemorySubmitService::new();
        let err = wizard.submit(&service).await.unwrap_err();
        assert!(matches!(err, DonateError::Validation(_)));
        assert_eq!(service.accepted_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_success_freezes_session() {
        let mut wizard = wizard_at_confirmation();
        let service = InMemorySubmitService::new();

        let receipt = wizard.submit(&service).await.unwrap();
        assert!(wizard.submission().is_accepted());
        assert_eq!(receipt.total_charged, Money::from_dollars(20));
        assert_eq!(service.accepted_count(), 1);

        // Frozen: no further mutation or movement
        wizard.update(SessionUpdate::new().zip_code("00000"));
        assert_eq!(wizard.session().zip_code, "12345");
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Confirmation);
    }

    #[tokio::test]
    async fn test_submit_at_most_once_after_acceptance() {
        let mut wizard = wizard_at_confirmation();
        let service = InMemorySubmitService::new();

        wizard.submit(&service).await.unwrap();
        let err = wizard.submit(&service).await.unwrap_err();
        assert!(matches!(err, DonateError::AlreadySubmitted));
        assert_eq!(service.accepted_count(), 1, "no duplicate submission sent");
    }

    #[tokio::test]
    async fn test_submit_failure_is_retryable() {
        let mut wizard = wizard_at_confirmation();
        let rejecting = RejectingService::new();

        let err = wizard.submit(&rejecting).await.unwrap_err();
        assert!(matches!(err, DonateError::Submission(_)));
        assert_eq!(wizard.step(), WizardStep::Confirmation);
        assert!(matches!(wizard.submission(), SubmissionState::Failed(_)));
        assert!(wizard.submission().can_submit());
        assert_eq!(rejecting.attempts(), 1);

        // Retry against a working collaborator succeeds
        let service = InMemorySubmitService::new();
        wizard.submit(&service).await.unwrap();
        assert!(wizard.submission().is_accepted());
    }
}
