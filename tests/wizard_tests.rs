//! End-to-end tests for the donation wizard state machine

use async_trait::async_trait;
use donate_cli::error::DonateError;
use donate_cli::models::{
    BoxSize, ContactUpdate, DonationMethod, DonationSession, DonationType, Money, SessionUpdate,
};
use donate_cli::services::{
    DonationReceipt, InMemorySubmitService, SubmitDonation, SubmitError,
};
use donate_cli::wizard::{DonationWizard, SubmissionState, WizardStep};

/// Fill every gate so the wizard can be walked to any step
fn filled_update() -> SessionUpdate {
    SessionUpdate::new()
        .donation_type(DonationType::Clothes)
        .zip_code("12345")
        .donation_method(DonationMethod::Pickup)
        .box_size(BoxSize::Standard)
        .estimated_value(Money::from_dollars(150))
        .contact(
            ContactUpdate::new()
                .name("Jane Doe")
                .email("jane@example.com"),
        )
}

fn wizard_at(step: WizardStep) -> DonationWizard {
    let mut wizard = DonationWizard::new();
    wizard.update(filled_update());
    while wizard.step() != step {
        assert!(wizard.advance(), "could not reach {:?}", step);
    }
    wizard
}

struct RejectingService;

#[async_trait]
impl SubmitDonation for RejectingService {
    async fn submit(&self, _session: &DonationSession) -> Result<DonationReceipt, SubmitError> {
        Err(SubmitError::Unavailable("donation service offline".into()))
    }
}

#[test]
fn gated_advance_walks_the_whole_flow() {
    // With every gate satisfied, advance() moves exactly one step at a time
    let mut wizard = DonationWizard::new();
    wizard.update(filled_update());

    for expected in WizardStep::ALL {
        assert_eq!(wizard.step(), expected);
        if !expected.is_terminal() {
            assert!(wizard.advance());
        }
    }
    assert_eq!(wizard.step(), WizardStep::Confirmation);
}

#[test]
fn advance_blocked_by_each_unmet_gate() {
    // Type step: fresh session has no type picked
    let mut wizard = DonationWizard::new();
    wizard.advance();
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::TypeSelection);

    // Address step: clearing the ZIP re-blocks the gate
    let mut wizard = wizard_at(WizardStep::AddressInput);
    wizard.update(SessionUpdate::new().zip_code(""));
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::AddressInput);

    // Method step: type and ZIP set, but no method picked
    let mut wizard = DonationWizard::new();
    wizard.update(
        SessionUpdate::new()
            .donation_type(DonationType::Clothes)
            .zip_code("12345"),
    );
    for _ in 0..3 {
        assert!(wizard.advance());
    }
    assert_eq!(wizard.step(), WizardStep::MethodSelection);
    assert!(!wizard.advance());

    // Details step: blanking the email re-blocks the gate
    let mut wizard = wizard_at(WizardStep::DetailsAndValue);
    wizard.update(SessionUpdate::new().contact(ContactUpdate::new().email("")));
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::DetailsAndValue);
}

#[test]
fn retreat_is_unconditional_from_every_step() {
    for step in WizardStep::ALL.into_iter().skip(1) {
        let mut wizard = wizard_at(step);
        assert!(wizard.retreat());
        assert_eq!(wizard.step().index(), step.index() - 1);
    }
}

#[test]
fn boundary_transitions_are_no_ops() {
    let mut wizard = DonationWizard::new();
    assert!(!wizard.retreat());
    assert_eq!(wizard.step(), WizardStep::Welcome);

    let mut wizard = wizard_at(WizardStep::Confirmation);
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Confirmation);
}

#[test]
fn gate_is_idempotent_without_mutation() {
    let wizard = wizard_at(WizardStep::AddressInput);
    let first = wizard.can_advance();
    for _ in 0..100 {
        assert_eq!(wizard.can_advance(), first);
    }
}

#[test]
fn scenario_type_selection_unlocks_advance() {
    let mut wizard = DonationWizard::new();
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::TypeSelection);
    assert!(!wizard.can_advance());

    wizard.update(SessionUpdate::new().donation_type(DonationType::Clothes));
    assert!(wizard.can_advance());
    assert!(wizard.advance());
    assert_eq!(wizard.step().index(), 2);
}

#[test]
fn scenario_short_zip_blocks_until_five_chars() {
    let mut wizard = wizard_at(WizardStep::AddressInput);
    wizard.update(SessionUpdate::new().zip_code("1234"));
    assert!(!wizard.can_advance());

    wizard.update(SessionUpdate::new().zip_code("12345"));
    assert!(wizard.can_advance());
}

#[test]
fn scenario_three_large_boxes_cost_ninety() {
    let mut wizard = DonationWizard::new();
    wizard.update(
        SessionUpdate::new()
            .donation_method(DonationMethod::Pickup)
            .box_size(BoxSize::Large)
            .num_boxes(3),
    );
    assert_eq!(wizard.session().total_box_cost(), Money::from_dollars(90));
}

#[test]
fn scenario_contribution_adds_to_total() {
    let mut wizard = DonationWizard::new();
    wizard.update(
        SessionUpdate::new()
            .donation_method(DonationMethod::Pickup)
            .box_size(BoxSize::Standard)
            .num_boxes(1)
            .wants_to_contribute(true)
            .contribution_amount(Money::from_dollars(20)),
    );
    assert_eq!(wizard.session().total_box_cost(), Money::from_dollars(20));
    assert_eq!(wizard.session().total_amount(), Money::from_dollars(40));
}

#[test]
fn box_cost_ignored_for_dropoff_regardless_of_boxes() {
    let mut wizard = DonationWizard::new();
    wizard.update(
        SessionUpdate::new()
            .donation_method(DonationMethod::Dropoff)
            .box_size(BoxSize::Large)
            .num_boxes(10),
    );
    assert_eq!(wizard.session().total_box_cost(), Money::zero());
    assert_eq!(wizard.session().total_amount(), Money::zero());
}

#[tokio::test]
async fn scenario_failed_submission_stays_retryable() {
    let mut wizard = wizard_at(WizardStep::Confirmation);

    let err = wizard.submit(&RejectingService).await.unwrap_err();
    assert!(matches!(err, DonateError::Submission(_)));

    // Still on Confirmation, unsubmitted, with submit re-enabled
    assert_eq!(wizard.step(), WizardStep::Confirmation);
    assert!(matches!(wizard.submission(), SubmissionState::Failed(_)));
    assert!(wizard.submission().can_submit());

    // Retry succeeds and exactly one donation reaches the collaborator
    let service = InMemorySubmitService::new();
    let receipt = wizard.submit(&service).await.unwrap();
    assert_eq!(service.accepted_count(), 1);
    assert_eq!(receipt.total_charged, Money::from_dollars(20));

    // No duplicate send after acceptance
    let err = wizard.submit(&service).await.unwrap_err();
    assert!(matches!(err, DonateError::AlreadySubmitted));
    assert_eq!(service.accepted_count(), 1);
}

#[tokio::test]
async fn submit_refused_before_confirmation() {
    let mut wizard = wizard_at(WizardStep::Contribution);
    let service = InMemorySubmitService::new();

    let err = wizard.submit(&service).await.unwrap_err();
    assert!(matches!(err, DonateError::Validation(_)));
    assert_eq!(service.accepted_count(), 0);
    assert_eq!(wizard.step(), WizardStep::Contribution);
}

#[tokio::test]
async fn accepted_session_is_frozen() {
    let mut wizard = wizard_at(WizardStep::Confirmation);
    let service = InMemorySubmitService::new();
    wizard.submit(&service).await.unwrap();

    let zip_before = wizard.session().zip_code.clone();
    wizard.update(SessionUpdate::new().zip_code("99999"));
    assert_eq!(wizard.session().zip_code, zip_before);
    assert!(!wizard.retreat());
    assert!(!wizard.advance());
}
