//! Wizard step views
//!
//! One render module per wizard step, plus the progress indicator. Which
//! view is drawn is decided here from the wizard's current state.

pub mod address;
pub mod confirm;
pub mod contribution;
pub mod details;
pub mod indicator;
pub mod method;
pub mod type_select;
pub mod welcome;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::wizard::{SubmissionState, WizardStep};

use super::app::App;
use super::layout::{centered_rect_fixed, WizardLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    render_header(frame, app, layout.header);

    // The welcome screen hides the progress indicator, like the original
    if app.wizard.step() != WizardStep::Welcome {
        indicator::render(frame, app, layout.indicator);
    }

    match app.wizard.step() {
        WizardStep::Welcome => welcome::render(frame, app, layout.content),
        WizardStep::TypeSelection => type_select::render(frame, app, layout.content),
        WizardStep::AddressInput => address::render(frame, app, layout.content),
        WizardStep::MethodSelection => method::render(frame, app, layout.content),
        WizardStep::DetailsAndValue => details::render(frame, app, layout.content),
        WizardStep::Contribution => contribution::render(frame, app, layout.content),
        WizardStep::Confirmation => confirm::render(frame, app, layout.content),
    }

    render_status_bar(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = centered_rect_fixed(64, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the organization header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.settings.organization.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.settings.tagline.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the key-hint line for the current step
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.wizard.step() {
        WizardStep::Welcome => "Enter start  |  Ctrl+C quit",
        WizardStep::TypeSelection | WizardStep::MethodSelection => {
            "Up/Down move  |  Space select  |  Enter continue  |  Esc back"
        }
        WizardStep::AddressInput => "Tab next field  |  Enter continue  |  Esc back",
        WizardStep::DetailsAndValue => {
            "Tab next field  |  Left/Right box size  |  Enter continue  |  Esc back"
        }
        WizardStep::Contribution => {
            "Space toggle  |  1/2/3 presets  |  Enter review  |  Esc back"
        }
        WizardStep::Confirmation => match app.wizard.submission() {
            SubmissionState::Accepted(_) => "q quit",
            _ => "Enter submit  |  Esc back to edit",
        },
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        area,
    );
}
