//! Terminal User Interface module
//!
//! The donor-facing wizard rendered with ratatui: one view per step, form
//! widgets, and an event loop that commits every edit into the session.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
