//! Event handler for the wizard TUI
//!
//! Routes key presses to the current step. Every edit is committed into the
//! session immediately so the gate for the step is re-evaluated on each
//! mutation, not just when the donor presses Continue.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{BoxSize, DonationMethod, DonationType, SessionUpdate};
use crate::wizard::WizardStep;

use super::app::App;
use super::event::Event;
use super::views::contribution::ContributionField;
use super::views::details::DetailsField;
use super::views::type_select;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event for the current step
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.wizard.step() {
        WizardStep::Welcome => handle_welcome_key(app, key),
        WizardStep::TypeSelection => handle_type_key(app, key),
        WizardStep::AddressInput => handle_address_key(app, key),
        WizardStep::MethodSelection => handle_method_key(app, key),
        WizardStep::DetailsAndValue => handle_details_key(app, key),
        WizardStep::Contribution => handle_contribution_key(app, key),
        WizardStep::Confirmation => handle_confirmation_key(app, key),
    }

    Ok(())
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.try_advance(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_type_key(app: &mut App, key: KeyEvent) {
    let items = type_select::choice_items();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.type_choice.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.type_choice.move_down(items.len()),
        KeyCode::Char(' ') => {
            let cursor = app.type_choice.cursor;
            let donation_type = DonationType::ALL[cursor];
            if donation_type.is_available() {
                app.type_choice.chosen = Some(cursor);
                app.wizard
                    .update(SessionUpdate::new().donation_type(donation_type));
            } else {
                app.notifications.push(Notification::warning(format!(
                    "{} donations are coming soon - only used clothes are accepted today",
                    donation_type.label()
                )));
            }
        }
        KeyCode::Enter => app.try_advance(),
        KeyCode::Esc => app.retreat(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_address_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.address_form.toggle_focus(),
        KeyCode::Enter => app.try_advance(),
        KeyCode::Esc => app.retreat(),
        KeyCode::Left => app.address_form.focused_input().move_left(),
        KeyCode::Right => app.address_form.focused_input().move_right(),
        KeyCode::Backspace => {
            app.address_form.focused_input().backspace();
            app.commit_address();
        }
        KeyCode::Char(c) => {
            app.address_form.focused_input().insert(c);
            app.commit_address();
        }
        _ => {}
    }
}

fn handle_method_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.method_choice.move_up(),
        KeyCode::Down | KeyCode::Char('j') => {
            app.method_choice.move_down(DonationMethod::ALL.len())
        }
        KeyCode::Char(' ') => {
            let cursor = app.method_choice.cursor;
            app.method_choice.chosen = Some(cursor);
            let method = DonationMethod::ALL[cursor];
            app.wizard
                .update(SessionUpdate::new().donation_method(method));
        }
        KeyCode::Enter => app.try_advance(),
        KeyCode::Esc => app.retreat(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    let pickup = app.wizard.session().is_pickup();
    match key.code {
        KeyCode::Tab => app.details_form.next_field(pickup),
        KeyCode::BackTab => app.details_form.prev_field(pickup),
        KeyCode::Enter => app.try_advance(),
        KeyCode::Esc => app.retreat(),
        KeyCode::Left | KeyCode::Right if app.details_form.focus == DetailsField::BoxSize => {
            let next = match app.wizard.session().box_size.unwrap_or(BoxSize::Standard) {
                BoxSize::Standard => BoxSize::Large,
                BoxSize::Large => BoxSize::Standard,
            };
            app.wizard.update(SessionUpdate::new().box_size(next));
        }
        KeyCode::Left => {
            if let Some(input) = app.details_form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.details_form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Backspace => {
            let edited = match app.details_form.focused_input() {
                Some(input) => {
                    input.backspace();
                    true
                }
                None => false,
            };
            if edited {
                app.commit_details();
            }
        }
        KeyCode::Char(c) => {
            let edited = match app.details_form.focused_input() {
                Some(input) => {
                    input.insert(c);
                    true
                }
                None => false,
            };
            if edited {
                app.commit_details();
            }
        }
        _ => {}
    }
}

fn handle_contribution_key(app: &mut App, key: KeyEvent) {
    let wants = app.wizard.session().wants_to_contribute;
    let on_checkbox = app.contribution_form.focus == ContributionField::OptIn;

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.contribution_form.toggle_field(wants),
        KeyCode::Enter => app.try_advance(),
        KeyCode::Esc => app.retreat(),
        KeyCode::Char(' ') if on_checkbox => {
            let wants = !wants;
            app.wizard
                .update(SessionUpdate::new().wants_to_contribute(wants));
            if wants {
                // Keep the session amount in sync with whatever is typed
                app.commit_contribution();
            }
            app.contribution_form.update_focus(wants);
        }
        KeyCode::Char(c @ '1'..='3') if on_checkbox => {
            let index = (c as usize) - ('1' as usize);
            if let Some(&amount) = app.settings.preset_amounts().get(index) {
                app.apply_contribution_preset(amount);
            }
        }
        KeyCode::Left if !on_checkbox => app.contribution_form.amount.move_left(),
        KeyCode::Right if !on_checkbox => app.contribution_form.amount.move_right(),
        KeyCode::Backspace if !on_checkbox => {
            app.contribution_form.amount.backspace();
            app.commit_contribution();
        }
        KeyCode::Char(c) if !on_checkbox => {
            app.contribution_form.amount.insert(c);
            app.commit_contribution();
        }
        _ => {}
    }
}

fn handle_confirmation_key(app: &mut App, key: KeyEvent) {
    let accepted = app.wizard.submission().is_accepted();
    match key.code {
        KeyCode::Enter if !accepted => app.submit_donation(),
        KeyCode::Esc | KeyCode::Char('b') if !accepted => app.retreat(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
