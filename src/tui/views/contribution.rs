//! Contribution step
//!
//! Optional operational contribution on top of the shipping cost, with the
//! running total recomputed from the session on every draw.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;
use super::super::widgets::TextInput;

/// Which contribution control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContributionField {
    /// The opt-in checkbox
    #[default]
    OptIn,
    /// The custom amount input, reachable only after opting in
    Amount,
}

/// Form state for the contribution step
#[derive(Debug, Clone)]
pub struct ContributionForm {
    /// Currently focused control
    pub focus: ContributionField,
    /// Custom amount input
    pub amount: TextInput,
}

impl ContributionForm {
    /// Create the form with an empty amount
    pub fn new() -> Self {
        Self {
            focus: ContributionField::OptIn,
            amount: TextInput::new()
                .label("Custom Amount")
                .placeholder("Enter amount"),
        }
    }

    /// Move focus between the checkbox and the amount input
    pub fn toggle_field(&mut self, wants_to_contribute: bool) {
        self.focus = match self.focus {
            ContributionField::OptIn if wants_to_contribute => ContributionField::Amount,
            _ => ContributionField::OptIn,
        };
        self.update_focus(wants_to_contribute);
    }

    /// Propagate focus to the input
    pub fn update_focus(&mut self, wants_to_contribute: bool) {
        if !wants_to_contribute {
            self.focus = ContributionField::OptIn;
        }
        self.amount.focused = self.focus == ContributionField::Amount;
    }
}

impl Default for ContributionForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.wizard.session();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Support Our Mission",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Help us cover operational costs to ensure your donation reaches those in need",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 2.min(area.height), ..area });

    let mut lines = Vec::new();

    if session.is_pickup() {
        let boxes = session.num_boxes;
        lines.push(Line::from(vec![
            Span::styled(
                format!("Shipping Cost ({} box{})", boxes, if boxes > 1 { "es" } else { "" }),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            Span::styled(
                session.total_box_cost().to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::default());
    }

    let checkbox = if session.wants_to_contribute { "[x]" } else { "[ ]" };
    let checkbox_style = if app.contribution_form.focus == ContributionField::OptIn {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(
        format!("{} I'd like to contribute toward operational costs", checkbox),
        checkbox_style,
    )));

    if session.wants_to_contribute {
        let presets = app
            .settings
            .preset_amounts()
            .iter()
            .enumerate()
            .map(|(i, amount)| format!("{}:{}", i + 1, amount))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(
            format!("    Presets  {}", presets),
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            y: area.y + 3,
            height: area.height.saturating_sub(3),
            ..area
        },
    );

    let bottom = area.y + area.height;
    let mut y = area.y + 8;
    if session.wants_to_contribute {
        if y < bottom {
            frame.render_widget(
                &app.contribution_form.amount,
                Rect { y, height: 1, ..area },
            );
        }
        y += 2;
    }

    if y < bottom {
        let total = Line::from(vec![
            Span::styled(
                "Total Amount  ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                session.total_amount().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(total), Rect { y, height: 1, ..area });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_unreachable_without_opt_in() {
        let mut form = ContributionForm::new();
        form.toggle_field(false);
        assert_eq!(form.focus, ContributionField::OptIn);

        form.toggle_field(true);
        assert_eq!(form.focus, ContributionField::Amount);
    }

    #[test]
    fn test_focus_resets_when_opt_out() {
        let mut form = ContributionForm::new();
        form.focus = ContributionField::Amount;
        form.update_focus(false);
        assert_eq!(form.focus, ContributionField::OptIn);
        assert!(!form.amount.focused);
    }
}
