//! Type selection step
//!
//! Pick what is being donated. Only clothes are currently accepted; the
//! other cards stay visible but disabled.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::DonationType;

use super::super::app::App;
use super::super::widgets::{ChoiceItem, ChoiceList};

/// Build the choice cards for the donation types
pub fn choice_items() -> Vec<ChoiceItem> {
    DonationType::ALL
        .iter()
        .map(|t| {
            let item = ChoiceItem::new(t.label(), t.description());
            if t.is_available() {
                item.badge("Available Now")
            } else {
                item.badge("Coming Soon").disabled()
            }
        })
        .collect()
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "What would you like to donate?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Select the type of items you're donating",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ])
    .alignment(Alignment::Center);

    let header_area = Rect { height: 3.min(area.height), ..area };
    frame.render_widget(header, header_area);

    let list_area = Rect {
        y: area.y + 4,
        height: area.height.saturating_sub(4),
        ..area
    };
    let items = choice_items();
    frame.render_widget(ChoiceList::new(&items, &app.type_choice), list_area);
}
