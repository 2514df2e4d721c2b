//! CLI command for dashboard export
//!
//! Writes the computed dashboard to a file, or to stdout when no output
//! path is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{DashError, DashResult};
use crate::export::{export_dashboard, ExportFormat};
use crate::reports::Dashboard;

/// Handle the export command
pub fn handle_export_command(
    file: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
    settings: &Settings,
) -> DashResult<()> {
    let dashboard = Dashboard::from_path(file, settings)?;

    match output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                DashError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_dashboard(&dashboard, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| DashError::Export(e.to_string()))?;
            println!("Dashboard exported as {} to: {}", format, output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_dashboard(&dashboard, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| DashError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sales.csv");
        fs::write(
            &input,
            "Order Date,Sales,Profit,Category\n2023-01-15,100,20,A\n",
        )
        .unwrap();
        let output = temp_dir.path().join("out.json");

        handle_export_command(
            &input,
            ExportFormat::Json,
            Some(output.clone()),
            &Settings::default(),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["dashboard"]["source"], "sales.csv");
    }

    #[test]
    fn test_export_bad_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sales.txt");
        fs::write(&input, "Order Date,Sales,Profit,Category\n").unwrap();

        let err = handle_export_command(&input, ExportFormat::Csv, None, &Settings::default())
            .unwrap_err();
        assert!(err.is_load());
    }
}
