//! Method selection step
//!
//! Drop-off vs pickup, with the relevant reference data shown for the card
//! under the cursor: nearby centers for drop-off, box prices for pickup.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::{box_specs, NEARBY_CENTERS};
use crate::models::DonationMethod;

use super::super::app::App;
use super::super::widgets::{ChoiceItem, ChoiceList};

/// Build the choice cards for the donation methods
pub fn choice_items() -> Vec<ChoiceItem> {
    vec![
        ChoiceItem::new(
            DonationMethod::Dropoff.label(),
            "Bring your donation to one of our nearby centers",
        )
        .badge("Free"),
        ChoiceItem::new(
            DonationMethod::Pickup.label(),
            "We'll arrange UPS pickup from your location",
        )
        .badge("Shipping Cost"),
    ]
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "How would you like to donate?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Choose between drop-off or pickup service",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 2.min(area.height), ..area });

    let items = choice_items();
    let list_area = Rect {
        y: area.y + 3,
        height: (items.len() as u16) * ChoiceList::CARD_HEIGHT,
        ..area
    };
    frame.render_widget(ChoiceList::new(&items, &app.method_choice), list_area);

    let info_area = Rect {
        y: list_area.y + list_area.height + 1,
        height: area
            .height
            .saturating_sub(list_area.height + 4),
        ..area
    };
    match app.method_choice.cursor {
        0 => render_centers(frame, info_area),
        _ => render_boxes(frame, info_area),
    }
}

/// List the nearby collection centers
fn render_centers(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Nearby collection centers:",
        Style::default().fg(Color::White),
    ))];
    for center in NEARBY_CENTERS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", center.name), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  ({})", center.distance),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}  |  {}", center.address, center.hours),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// List the box sizes and shipping contributions
fn render_boxes(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Shipping boxes:",
        Style::default().fg(Color::White),
    ))];
    for spec in box_specs() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", spec.name), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {}  -  {} shipping contribution", spec.dimensions, spec.price),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
