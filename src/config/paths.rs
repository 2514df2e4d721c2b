//! Path management for salesdash
//!
//! Resolves where the settings file and the dashboard log live.
//!
//! ## Path Resolution Order
//!
//! 1. `SALESDASH_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/salesdash` on Linux,
//!    `~/Library/Application Support/salesdash` on macOS,
//!    `%APPDATA%\salesdash` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SALESDASH_CONFIG_DIR";

/// Manages all paths used by salesdash
#[derive(Debug, Clone)]
pub struct DashPaths {
    /// Base directory for configuration and logs
    base_dir: PathBuf,
}

impl DashPaths {
    /// Create a new DashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, DashError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory the dashboard writes its log into
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// File name of the dashboard log inside [`DashPaths::log_dir`]
    pub fn log_file_name(&self) -> &'static str {
        "salesdash.log"
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, DashError> {
    ProjectDirs::from("", "", "salesdash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashError::Config("Could not determine a home directory".into()))
}
