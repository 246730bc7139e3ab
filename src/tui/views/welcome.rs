//! Welcome step
//!
//! Landing screen introducing the donation program.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Donate Your Used Clothes", title_style)),
        Line::from(Span::styled(
            "Help families in Pakistan with your generous donations",
            muted,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Make a Difference", Style::default().fg(Color::White)),
            Span::styled("  -  your clothes can change lives", muted),
        ]),
        Line::from(vec![
            Span::styled("Tax Deductible", Style::default().fg(Color::White)),
            Span::styled("  -  get proper receipts for tax benefits", muted),
        ]),
        Line::from(vec![
            Span::styled("Trusted Process", Style::default().fg(Color::White)),
            Span::styled("  -  transparent and reliable delivery", muted),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to start your donation",
            Style::default().fg(Color::Green),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
