//! Export module for salesdash
//!
//! Writes a computed dashboard in multiple formats:
//! - CSV: flat, section-tagged rows (spreadsheet-compatible)
//! - JSON: machine-readable, with schema version and metadata
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;

use clap::ValueEnum;

pub use self::csv::export_dashboard_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;

use crate::error::DashResult;
use crate::reports::Dashboard;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Section-tagged CSV rows
    Csv,
    /// JSON document with metadata
    Json,
    /// YAML document with metadata
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Export a dashboard in the given format
pub fn export_dashboard<W: std::io::Write>(
    dashboard: &Dashboard,
    format: ExportFormat,
    writer: &mut W,
) -> DashResult<()> {
    match format {
        ExportFormat::Csv => export_dashboard_csv(dashboard, writer),
        ExportFormat::Json => export_dashboard_json(dashboard, writer),
        ExportFormat::Yaml => export_dashboard_yaml(dashboard, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            ExportFormat::from_str("CSV", true).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_str("yml", false).unwrap(),
            ExportFormat::Yaml
        );
        assert!(ExportFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
