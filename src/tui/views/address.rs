//! Address input step
//!
//! ZIP code (required, capped at 5 characters) and an optional street
//! address.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ZIP_LEN;

use super::super::app::App;
use super::super::widgets::TextInput;

/// Which address field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressField {
    #[default]
    Zip,
    Street,
}

/// Form state for the address step
#[derive(Debug, Clone)]
pub struct AddressForm {
    /// Currently focused field
    pub focus: AddressField,
    /// ZIP code input
    pub zip: TextInput,
    /// Street address input
    pub street: TextInput,
}

impl AddressForm {
    /// Create the form with empty inputs
    pub fn new() -> Self {
        let mut form = Self {
            focus: AddressField::Zip,
            zip: TextInput::new()
                .label("ZIP Code *")
                .placeholder("12345")
                .max_len(ZIP_LEN),
            street: TextInput::new()
                .label("Full Address (Optional)")
                .placeholder("123 Main Street, City, State"),
        };
        form.update_focus();
        form
    }

    /// Switch focus to the other field
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AddressField::Zip => AddressField::Street,
            AddressField::Street => AddressField::Zip,
        };
        self.update_focus();
    }

    /// Propagate focus to the inputs
    pub fn update_focus(&mut self) {
        self.zip.focused = self.focus == AddressField::Zip;
        self.street.focused = self.focus == AddressField::Street;
    }

    /// The input currently being edited
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            AddressField::Zip => &mut self.zip,
            AddressField::Street => &mut self.street,
        }
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Enter Your Location",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "We'll find the best donation options near you",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 2.min(area.height), ..area });

    let zip_area = Rect {
        y: area.y + 3,
        height: 1,
        ..area
    };
    frame.render_widget(&app.address_form.zip, zip_area);

    let street_area = Rect {
        y: area.y + 5,
        height: 1,
        ..area
    };
    frame.render_widget(&app.address_form.street, street_area);
}
