//! Step progress indicator
//!
//! Numbered markers joined by connectors; completed and current steps are
//! highlighted.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::wizard::WizardStep;

use super::super::app::App;

/// Render the progress indicator for the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.wizard.step().index();

    let mut spans = Vec::new();
    for step in WizardStep::ALL {
        let reached = step.index() <= current;
        let style = if reached {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("({})", step.index() + 1), style));

        if step.index() + 1 < WizardStep::COUNT {
            let connector_style = if step.index() < current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled("--", connector_style));
        }
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            app.wizard.step().title(),
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
