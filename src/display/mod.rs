//! Terminal output formatting for the non-interactive commands

pub mod boxes;
pub mod centers;

pub use boxes::format_box_list;
pub use centers::format_center_list;
