//! Application state for the wizard TUI
//!
//! The App struct holds the wizard engine, the per-step form state, and the
//! handle to the submission collaborator.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::config::Settings;
use crate::models::session::coerce_box_count;
use crate::models::{ContactUpdate, Money, SessionUpdate};
use crate::services::SubmitDonation;
use crate::wizard::{DonationWizard, WizardStep};

use super::views::address::AddressForm;
use super::views::contribution::ContributionForm;
use super::views::details::DetailsForm;
use super::widgets::{ChoiceState, Notification, NotificationQueue};

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// The wizard state machine
    pub wizard: DonationWizard,

    /// Submission collaborator
    pub submitter: Arc<dyn SubmitDonation>,

    /// Runtime driving the async submission boundary
    pub runtime: Runtime,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Pending notification banners
    pub notifications: NotificationQueue,

    /// Selection state for the type step
    pub type_choice: ChoiceState,

    /// Selection state for the method step
    pub method_choice: ChoiceState,

    /// Form state for the address step
    pub address_form: AddressForm,

    /// Form state for the details step
    pub details_form: DetailsForm,

    /// Form state for the contribution step
    pub contribution_form: ContributionForm,
}

impl App {
    /// Create a new App with a fresh donor session
    pub fn new(settings: Settings, submitter: Arc<dyn SubmitDonation>, runtime: Runtime) -> Self {
        Self {
            settings,
            wizard: DonationWizard::new(),
            submitter,
            runtime,
            should_quit: false,
            notifications: NotificationQueue::new(),
            type_choice: ChoiceState::default(),
            method_choice: ChoiceState::default(),
            address_form: AddressForm::new(),
            details_form: DetailsForm::new(),
            contribution_form: ContributionForm::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the wizard, or surface why the gate is blocked
    pub fn try_advance(&mut self) {
        if self.wizard.advance() {
            self.on_step_entered();
        } else if let Some(hint) = self.wizard.gate_hint() {
            self.notifications.push(Notification::warning(hint));
        }
    }

    /// Move the wizard back one step
    pub fn retreat(&mut self) {
        self.wizard.retreat();
    }

    /// Re-focus form state when a step is entered
    fn on_step_entered(&mut self) {
        match self.wizard.step() {
            WizardStep::AddressInput => self.address_form.update_focus(),
            WizardStep::DetailsAndValue => {
                self.details_form.update_focus(self.wizard.session().is_pickup())
            }
            WizardStep::Contribution => self
                .contribution_form
                .update_focus(self.wizard.session().wants_to_contribute),
            _ => {}
        }
    }

    /// Commit both address inputs into the session
    pub fn commit_address(&mut self) {
        let update = SessionUpdate::new()
            .zip_code(self.address_form.zip.value().to_string())
            .address(self.address_form.street.value().to_string());
        self.wizard.update(update);
    }

    /// Commit the details-step text inputs into the session, coercing the
    /// numeric fields to their documented defaults
    pub fn commit_details(&mut self) {
        let form = &self.details_form;
        let update = SessionUpdate::new()
            .num_boxes(coerce_box_count(form.box_count.value()))
            .estimated_value(Money::parse_or_zero(form.value.value()))
            .contact(
                ContactUpdate::new()
                    .name(form.name.value().to_string())
                    .email(form.email.value().to_string())
                    .phone(form.phone.value().to_string()),
            );
        self.wizard.update(update);
    }

    /// Commit the contribution amount input into the session
    pub fn commit_contribution(&mut self) {
        let amount = Money::parse_or_zero(self.contribution_form.amount.value());
        self.wizard.update(SessionUpdate::new().contribution_amount(amount));
    }

    /// Set a preset contribution amount and reflect it in the input
    pub fn apply_contribution_preset(&mut self, amount: Money) {
        self.contribution_form.amount.clear();
        for c in amount.dollars().to_string().chars() {
            self.contribution_form.amount.insert(c);
        }
        self.wizard.update(
            SessionUpdate::new()
                .wants_to_contribute(true)
                .contribution_amount(amount),
        );
        self.contribution_form
            .update_focus(self.wizard.session().wants_to_contribute);
    }

    /// Submit the donation through the collaborator port
    ///
    /// Blocks the (single-threaded) event loop for the duration of the call,
    /// which is what freezes the submit control while a request is in
    /// flight.
    pub fn submit_donation(&mut self) {
        if self.wizard.step() != WizardStep::Confirmation {
            return;
        }

        let service = Arc::clone(&self.submitter);
        let result = self.runtime.block_on(self.wizard.submit(service.as_ref()));
        match result {
            Ok(receipt) => {
                self.notifications
                    .push(Notification::success(receipt.thank_you_line()));
            }
            Err(err) => {
                self.notifications.push(Notification::error(err.to_string()));
            }
        }
    }
}
