//! User-tunable settings for donate-cli
//!
//! Branding and the contribution presets offered on the contribution step.

use serde::{Deserialize, Serialize};

use super::paths::DonatePaths;
use crate::error::DonateError;
use crate::models::Money;

/// Settings for the donation intake app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Organization name shown in the header
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Tagline shown under the header
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Quick-pick contribution amounts, in whole dollars
    #[serde(default = "default_contribution_presets")]
    pub contribution_presets: Vec<i64>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_organization() -> String {
    "Akhuwat USA".to_string()
}

fn default_tagline() -> String {
    "Used Clothes Donation Platform".to_string()
}

fn default_contribution_presets() -> Vec<i64> {
    vec![10, 20, 50]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            organization: default_organization(),
            tagline: default_tagline(),
            contribution_presets: default_contribution_presets(),
        }
    }
}

impl Settings {
    /// Contribution presets as Money amounts
    pub fn preset_amounts(&self) -> Vec<Money> {
        self.contribution_presets
            .iter()
            .map(|&d| Money::from_dollars(d.max(0)))
            .collect()
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &DonatePaths) -> Result<Self, DonateError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DonateError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DonateError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DonatePaths) -> Result<(), DonateError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DonateError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DonateError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.organization, "Akhuwat USA");
        assert_eq!(settings.contribution_presets, vec![10, 20, 50]);
        assert_eq!(settings.preset_amounts()[1], Money::from_dollars(20));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DonatePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.organization = "Test Charity".to_string();
        settings.contribution_presets = vec![5, 25];
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.organization, "Test Charity");
        assert_eq!(loaded.contribution_presets, vec![5, 25]);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DonatePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.organization, "Akhuwat USA");
    }
}
