//! Notification widget
//!
//! Temporary banners surfaced by the event loop. Submission results are
//! returned to the caller as values and end up here, rather than being
//! pushed through a global toast mechanism.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Success message
    Success,
    /// Warning message (e.g. a blocked gate)
    Warning,
    /// Error message (e.g. a failed submission)
    Error,
}

impl NotificationType {
    /// Border and title color
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Title text
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Notice",
            Self::Error => "Error",
        }
    }
}

/// A transient banner
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to show
    pub message: String,
    /// Kind of notification
    pub notification_type: NotificationType,
    /// When it was created, for auto-dismiss
    pub created_at: std::time::Instant,
    /// Seconds to keep it on screen
    pub duration_secs: u64,
}

impl Notification {
    /// Create a notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: std::time::Instant::now(),
            duration_secs: 4,
        }
    }

    /// Create a success banner
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create a warning banner
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Create an error banner
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Whether the banner should be dismissed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Widget for rendering a notification banner
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Wrap a notification for rendering
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.notification_type.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Queue of pending banners, shown oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a banner
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop expired banners
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The banner currently on screen, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Whether anything is queued
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
