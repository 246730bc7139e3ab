//! Details & value step
//!
//! Contact information, pickup box choices, and the estimated value of the
//! donated items.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::BoxSize;

use super::super::app::App;
use super::super::widgets::TextInput;

/// Which details field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsField {
    #[default]
    Name,
    Email,
    Phone,
    /// Pickup only: cycled with Left/Right rather than typed
    BoxSize,
    /// Pickup only
    BoxCount,
    Value,
}

impl DetailsField {
    /// Next field for Tab navigation; pickup-only fields are skipped when
    /// the donor chose drop-off
    pub fn next(self, pickup: bool) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone if pickup => Self::BoxSize,
            Self::Phone => Self::Value,
            Self::BoxSize => Self::BoxCount,
            Self::BoxCount => Self::Value,
            Self::Value => Self::Name,
        }
    }

    /// Previous field for Shift+Tab navigation
    pub fn prev(self, pickup: bool) -> Self {
        match self {
            Self::Name => Self::Value,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::BoxSize => Self::Phone,
            Self::BoxCount => Self::BoxSize,
            Self::Value if pickup => Self::BoxCount,
            Self::Value => Self::Phone,
        }
    }
}

/// Form state for the details step
#[derive(Debug, Clone)]
pub struct DetailsForm {
    /// Currently focused field
    pub focus: DetailsField,
    /// Full name input
    pub name: TextInput,
    /// Email input
    pub email: TextInput,
    /// Phone input
    pub phone: TextInput,
    /// Number-of-boxes input
    pub box_count: TextInput,
    /// Estimated value input
    pub value: TextInput,
}

impl DetailsForm {
    /// Create the form with empty inputs
    pub fn new() -> Self {
        let mut form = Self {
            focus: DetailsField::Name,
            name: TextInput::new().label("Full Name *").placeholder("John Doe"),
            email: TextInput::new()
                .label("Email Address *")
                .placeholder("john@example.com"),
            phone: TextInput::new()
                .label("Phone Number")
                .placeholder("(555) 123-4567"),
            box_count: TextInput::new()
                .label("Number of Boxes")
                .placeholder("1")
                .max_len(2),
            value: TextInput::new()
                .label("Estimated Value ($) *")
                .placeholder("150"),
        };
        form.update_focus(false);
        form
    }

    /// Move focus forward
    pub fn next_field(&mut self, pickup: bool) {
        self.focus = self.focus.next(pickup);
        self.update_focus(pickup);
    }

    /// Move focus backward
    pub fn prev_field(&mut self, pickup: bool) {
        self.focus = self.focus.prev(pickup);
        self.update_focus(pickup);
    }

    /// Propagate focus to the inputs
    pub fn update_focus(&mut self, pickup: bool) {
        // A stale pickup-only focus can linger after the donor switches to
        // drop-off and retreats back here
        if !pickup && matches!(self.focus, DetailsField::BoxSize | DetailsField::BoxCount) {
            self.focus = DetailsField::Value;
        }
        self.name.focused = self.focus == DetailsField::Name;
        self.email.focused = self.focus == DetailsField::Email;
        self.phone.focused = self.focus == DetailsField::Phone;
        self.box_count.focused = self.focus == DetailsField::BoxCount;
        self.value.focused = self.focus == DetailsField::Value;
    }

    /// The text input being edited, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            DetailsField::Name => Some(&mut self.name),
            DetailsField::Email => Some(&mut self.email),
            DetailsField::Phone => Some(&mut self.phone),
            DetailsField::BoxSize => None,
            DetailsField::BoxCount => Some(&mut self.box_count),
            DetailsField::Value => Some(&mut self.value),
        }
    }
}

impl Default for DetailsForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.wizard.session();
    let form = &app.details_form;

    let header = Paragraph::new(vec![Line::from(Span::styled(
        "Donation Details",
        Style::default().fg(Color::White),
    ))])
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 1, ..area });

    let mut y = area.y + 2;

    input_row(frame, area, &form.name, &mut y);
    input_row(frame, area, &form.email, &mut y);
    input_row(frame, area, &form.phone, &mut y);

    if session.is_pickup() {
        if y < area.y + area.height {
            render_box_size_row(frame, app, Rect { y, height: 1, ..area });
        }
        y += 2;
        input_row(frame, area, &form.box_count, &mut y);
    }

    input_row(frame, area, &form.value, &mut y);

    if y < area.y + area.height {
        let note = Paragraph::new(Line::from(Span::styled(
            "Fair market value for tax deduction purposes",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(note, Rect { y, height: 1, ..area });
    }
}

/// Render one input on its own row, leaving a blank line after it
fn input_row(frame: &mut Frame, area: Rect, input: &TextInput, y: &mut u16) {
    if *y < area.y + area.height {
        frame.render_widget(input, Rect { y: *y, height: 1, ..area });
    }
    *y += 2;
}

/// Render the Left/Right box size selector
fn render_box_size_row(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.wizard.session().box_size.unwrap_or(BoxSize::Standard);
    let focused = app.details_form.focus == DetailsField::BoxSize;

    let label_style = Style::default().fg(Color::Cyan);
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = Line::from(vec![
        Span::styled("Box Size", label_style),
        Span::raw(": "),
        Span::styled(
            format!(
                "< {} ({}, {} per box) >",
                selected.label(),
                selected.dimensions(),
                selected.price()
            ),
            value_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_skips_pickup_fields_for_dropoff() {
        let mut field = DetailsField::Name;
        let order: Vec<DetailsField> = (0..4)
            .map(|_| {
                field = field.next(false);
                field
            })
            .collect();
        assert_eq!(
            order,
            vec![
                DetailsField::Email,
                DetailsField::Phone,
                DetailsField::Value,
                DetailsField::Name,
            ]
        );
    }

    #[test]
    fn test_tab_order_includes_pickup_fields() {
        assert_eq!(DetailsField::Phone.next(true), DetailsField::BoxSize);
        assert_eq!(DetailsField::BoxSize.next(true), DetailsField::BoxCount);
        assert_eq!(DetailsField::Value.prev(true), DetailsField::BoxCount);
    }

    #[test]
    fn test_stale_pickup_focus_resets() {
        let mut form = DetailsForm::new();
        form.focus = DetailsField::BoxCount;
        form.update_focus(false);
        assert_eq!(form.focus, DetailsField::Value);
    }
}
