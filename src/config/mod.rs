//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::DonatePaths;
pub use settings::Settings;
