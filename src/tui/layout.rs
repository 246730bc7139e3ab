//! Layout definitions for the wizard TUI
//!
//! Header, step indicator, step content, and status bar regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard screen
pub struct WizardLayout {
    /// Organization header
    pub header: Rect,
    /// Step progress indicator
    pub indicator: Rect,
    /// Current step content
    pub content: Rect,
    /// Key hints / status line
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate the layout from the available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Step indicator
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            indicator: chunks[1],
            content: centered_content(chunks[2], 76),
            status_bar: chunks[3],
        }
    }
}

/// Center content horizontally within a maximum width
pub fn centered_content(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Create a fixed-size centered rect, e.g. for notification banners
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
