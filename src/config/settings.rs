//! User settings for salesdash
//!
//! Controls how uploads are parsed (delimiter, date formats) and how the
//! reports are labelled and bucketed. Settings never carry dataset state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::DashError;

/// User settings for salesdash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date formats tried, in order, when coercing `Order Date`
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// Label of the bucket holding rows without a category
    #[serde(default = "default_unknown_label")]
    pub unknown_category_label: String,

    /// Emit zero-sales points for months between the first and last month
    #[serde(default)]
    pub fill_empty_months: bool,

    /// Field delimiter of uploaded files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Default log filter when neither `RUST_LOG` nor `--log-level` is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_unknown_label() -> String {
    "(unknown)".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Month-first formats come before day-first ones, matching how
/// ambiguous dates like `01/02/2023` are usually read in sales exports.
/// Two-digit years are tried before four-digit ones since `%Y` would
/// otherwise read `1/5/23` as the year 23.
pub fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%y",
        "%m/%d/%Y",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m-%d-%Y",
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%d %b %Y",
        "%b %d, %Y",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_formats: default_date_formats(),
            unknown_category_label: default_unknown_label(),
            fill_empty_months: false,
            delimiter: default_delimiter(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if the file doesn't exist
    pub fn load_or_default(paths: &DashPaths) -> Result<Self, DashError> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from an explicit file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, DashError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| DashError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| DashError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the loader cannot work with
    pub fn validate(&self) -> Result<(), DashError> {
        if !self.delimiter.is_ascii() {
            return Err(DashError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if self.date_formats.is_empty() {
            return Err(DashError::Config(
                "At least one date format is required".into(),
            ));
        }
        Ok(())
    }

    /// Save settings to the default location
    pub fn save(&self, paths: &DashPaths) -> Result<(), DashError> {
        paths.ensure_directories()?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), DashError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DashError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| DashError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
