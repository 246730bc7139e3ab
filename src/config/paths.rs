//! Path management for donate-cli
//!
//! Resolves where settings live:
//!
//! 1. `DONATE_CLI_DATA_DIR` environment variable (explicit override)
//! 2. The platform config directory (`~/.config/donate-cli` on Linux,
//!    the equivalent on macOS/Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DonateError;

/// Manages all paths used by donate-cli
#[derive(Debug, Clone)]
pub struct DonatePaths {
    /// Base directory for all donate-cli data
    base_dir: PathBuf,
}

impl DonatePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DonateError> {
        let base_dir = if let Ok(custom) = std::env::var("DONATE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("org", "akhuwatusa", "donate-cli").ok_or_else(|| {
                DonateError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Base directory for all donate-cli data
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DonateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DonateError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}
