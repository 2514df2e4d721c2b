//! JSON Export functionality
//!
//! Exports the computed dashboard to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::reports::Dashboard;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported dashboard with metadata
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The dashboard panels
    pub dashboard: &'a Dashboard,
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            dashboard,
        }
    }
}

/// Export the dashboard as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(dashboard: &Dashboard, writer: &mut W) -> DashResult<()> {
    let export = DashboardExport::new(dashboard);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DashError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::loader::{DatasetLoader, LoadOptions};

    fn dashboard(csv: &str) -> Dashboard {
        let ds = DatasetLoader::new(LoadOptions::default())
            .load_bytes(csv.as_bytes())
            .unwrap();
        Dashboard::build(&ds, &Settings::default()).unwrap()
    }

    #[test]
    fn test_export_json_structure() {
        let dashboard = dashboard(
            "Order Date,Sales,Profit,Category\n\
             2023-01-15,100,20,A\n\
             2023-02-01,0,-5,B\n",
        );
        let mut buf = Vec::new();
        export_dashboard_json(&dashboard, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["dashboard"]["health"]["total_missing"], 0);
        assert_eq!(value["dashboard"]["summary"]["Ok"]["total_sales"], "100");
        assert_eq!(
            value["dashboard"]["summary"]["Ok"]["margin"]["kind"],
            "percent"
        );
        assert_eq!(
            value["dashboard"]["trend"]["Ok"]["points"][0]["month_end"],
            "2023-01-31"
        );
    }

    #[test]
    fn test_export_json_undefined_margin() {
        let dashboard = dashboard("Order Date,Sales,Profit,Category\n2023-01-15,0,5,A\n");
        let mut buf = Vec::new();
        export_dashboard_json(&dashboard, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value["dashboard"]["summary"]["Ok"]["margin"]["kind"],
            "undefined"
        );
    }
}
