//! Reusable TUI widgets

pub mod choice;
pub mod input;
pub mod notification;

pub use choice::{ChoiceItem, ChoiceList, ChoiceState};
pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationWidget};
