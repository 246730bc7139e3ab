//! Confirmation step
//!
//! Review panels for the donation and contact details, the payment summary,
//! and the submit control. What the submit line shows follows the
//! submission state: ready, failed with a retry hint, or accepted.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{BoxSize, DonationSession};
use crate::wizard::SubmissionState;

use super::super::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.wizard.session();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Review Your Donation",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Please review all details before submitting",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 2.min(area.height), ..area });

    let mut lines = Vec::new();
    lines.extend(donation_lines(session));
    lines.push(Line::default());
    lines.extend(contact_lines(session));

    if session.total_amount().is_positive() {
        lines.push(Line::default());
        lines.extend(payment_lines(session));
    }

    lines.push(Line::default());
    lines.push(submit_line(app));

    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            y: area.y + 3,
            height: area.height.saturating_sub(3),
            ..area
        },
    );
}

fn detail_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn donation_lines(session: &DonationSession) -> Vec<Line<'static>> {
    let mut lines = vec![section("Donation Details")];

    let type_label = session
        .donation_type
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(detail_row("Type:", type_label));

    let method_label = session
        .donation_method
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(detail_row("Method:", method_label));

    if session.is_pickup() {
        let size = session.box_size.unwrap_or(BoxSize::Standard);
        lines.push(detail_row("Box Size:", size.label().to_string()));
        lines.push(detail_row("Number of Boxes:", session.num_boxes.to_string()));
    }

    lines.push(detail_row(
        "Estimated Value:",
        session.estimated_value.to_string(),
    ));
    lines
}

fn contact_lines(session: &DonationSession) -> Vec<Line<'static>> {
    let mut lines = vec![section("Contact Information")];
    lines.push(detail_row("Name:", session.contact.name.clone()));
    lines.push(detail_row("Email:", session.contact.email.clone()));
    if !session.contact.phone.is_empty() {
        lines.push(detail_row("Phone:", session.contact.phone.clone()));
    }
    lines.push(detail_row("ZIP Code:", session.zip_code.clone()));
    lines
}

fn payment_lines(session: &DonationSession) -> Vec<Line<'static>> {
    let mut lines = vec![section("Payment Summary")];
    if session.is_pickup() {
        lines.push(detail_row(
            "Shipping Cost:",
            session.total_box_cost().to_string(),
        ));
    }
    if session.wants_to_contribute {
        lines.push(detail_row(
            "Contribution:",
            session.contribution_amount.to_string(),
        ));
    }
    lines.push(detail_row("Total Amount:", session.total_amount().to_string()));
    lines
}

/// The submit control, reflecting the submission state
fn submit_line(app: &App) -> Line<'static> {
    match app.wizard.submission() {
        SubmissionState::Idle => Line::from(Span::styled(
            "Press Enter to submit your donation",
            Style::default().fg(Color::Green),
        )),
        SubmissionState::InFlight => Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionState::Failed(reason) => Line::from(Span::styled(
            format!("Submission failed: {} - press Enter to try again", reason),
            Style::default().fg(Color::Red),
        )),
        SubmissionState::Accepted(receipt) => Line::from(Span::styled(
            format!(
                "Donation submitted! Confirmation {}",
                receipt.confirmation_code
            ),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    }
}
