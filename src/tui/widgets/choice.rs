//! Choice card widget
//!
//! A vertical list of selectable option cards, used for the donation type
//! and method steps. Entries can be disabled ("Coming Soon") and stay
//! visible but unselectable.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// One selectable card
#[derive(Debug, Clone)]
pub struct ChoiceItem {
    /// Card title
    pub title: String,
    /// Card description, shown under the title
    pub subtitle: String,
    /// Short badge, e.g. "Available Now" or "Free"
    pub badge: String,
    /// Whether this card can be selected
    pub enabled: bool,
}

impl ChoiceItem {
    /// Create a selectable item
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            badge: String::new(),
            enabled: true,
        }
    }

    /// Set the badge text
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    /// Mark this item as unselectable
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// State for a choice list: which card the cursor is on, which is chosen
#[derive(Debug, Clone, Default)]
pub struct ChoiceState {
    /// Cursor position
    pub cursor: usize,
    /// Index of the chosen card, if any
    pub chosen: Option<usize>,
}

impl ChoiceState {
    /// Move the cursor up
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down within `len` items
    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }
}

/// Widget rendering a list of choice cards
pub struct ChoiceList<'a> {
    items: &'a [ChoiceItem],
    state: &'a ChoiceState,
}

impl<'a> ChoiceList<'a> {
    /// Each card takes this many rows
    pub const CARD_HEIGHT: u16 = 3;

    /// Create a widget over items and their selection state
    pub fn new(items: &'a [ChoiceItem], state: &'a ChoiceState) -> Self {
        Self { items, state }
    }
}

impl Widget for ChoiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + (i as u16) * Self::CARD_HEIGHT;
            if y + 1 >= area.y + area.height {
                break;
            }

            let under_cursor = i == self.state.cursor;
            let chosen = self.state.chosen == Some(i);

            let marker = if chosen { "(x)" } else { "( )" };
            let title_style = if !item.enabled {
                Style::default().fg(Color::DarkGray)
            } else if under_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::styled(if under_cursor { "> " } else { "  " }, title_style),
                Span::styled(format!("{} {}", marker, item.title), title_style),
            ];
            if !item.badge.is_empty() {
                let badge_style = if item.enabled {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(format!("[{}]", item.badge), badge_style));
            }
            buf.set_line(area.x, y, &Line::from(spans), area.width);

            let subtitle_style = Style::default().fg(if item.enabled {
                Color::Gray
            } else {
                Color::DarkGray
            });
            let subtitle = Line::from(vec![
                Span::raw("      "),
                Span::styled(item.subtitle.as_str(), subtitle_style),
            ]);
            buf.set_line(area.x, y + 1, &subtitle, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_bounds() {
        let mut state = ChoiceState::default();
        state.move_up();
        assert_eq!(state.cursor, 0);

        state.move_down(3);
        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_item_builder() {
        let item = ChoiceItem::new("Shoes", "All types of footwear")
            .badge("Coming Soon")
            .disabled();
        assert!(!item.enabled);
        assert_eq!(item.badge, "Coming Soon");
    }
}
