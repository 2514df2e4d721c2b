//! YAML Export functionality
//!
//! Exports the dashboard to YAML for human-readable archiving.

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::export::json::DashboardExport;
use crate::reports::Dashboard;

/// Export the dashboard to YAML format
pub fn export_dashboard_yaml<W: Write>(dashboard: &Dashboard, writer: &mut W) -> DashResult<()> {
    let export = DashboardExport::new(dashboard);

    writeln!(writer, "# salesdash report export")
        .map_err(|e| DashError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DashError::Export(e.to_string()))?;
    if let Some(source) = &dashboard.source {
        writeln!(writer, "# Source: {}", source).map_err(|e| DashError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| DashError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DashError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::loader::{DatasetLoader, LoadOptions};

    #[test]
    fn test_export_yaml() {
        let ds = DatasetLoader::new(LoadOptions::default())
            .load_bytes(b"Order Date,Sales,Profit,Category\n2023-01-15,100,20,A\n")
            .unwrap();
        let dashboard = Dashboard::build(&ds, &Settings::default()).unwrap();

        let mut buf = Vec::new();
        export_dashboard_yaml(&dashboard, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# salesdash report export"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("total_missing: 0"));
    }
}
