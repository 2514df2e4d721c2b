//! Dashboard
//!
//! Runs the four analyses over one validated dataset. The schema is
//! checked before anything is computed; after that each panel carries its
//! own result so a failure in one does not hide the others.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::{CategoryReport, FinancialSummary, HealthReport, MonthlyTrend};
use crate::config::Settings;
use crate::display::double_separator;
use crate::error::DashResult;
use crate::models::Dataset;
use crate::services::loader::{DatasetLoader, LoadOptions};
use crate::services::schema;

/// Outcome of one analysis panel; the error is kept as its message
pub type Panel<T> = Result<T, String>;

/// All panels computed from one upload
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// File name of the upload, if it came from disk
    pub source: Option<String>,
    pub health: HealthReport,
    pub summary: Panel<FinancialSummary>,
    pub categories: Panel<CategoryReport>,
    pub trend: Panel<MonthlyTrend>,
}

fn panel<T>(name: &str, result: DashResult<T>) -> Panel<T> {
    result.map_err(|e| {
        warn!(panel = name, error = %e, "Panel failed");
        e.to_string()
    })
}

impl Dashboard {
    /// Validate the schema, then compute every panel
    pub fn build(dataset: &Dataset, settings: &Settings) -> DashResult<Self> {
        schema::validate(dataset)?;

        Ok(Self {
            source: None,
            health: HealthReport::generate(dataset),
            summary: panel("summary", FinancialSummary::generate(dataset)),
            categories: panel(
                "categories",
                CategoryReport::generate(dataset, &settings.unknown_category_label),
            ),
            trend: panel(
                "trend",
                MonthlyTrend::generate(dataset, settings.fill_empty_months),
            ),
        })
    }

    /// Load a `.csv` upload and build its dashboard
    ///
    /// A load or schema failure stops here; no panel is computed.
    pub fn from_path(path: &Path, settings: &Settings) -> DashResult<Self> {
        let loader = DatasetLoader::new(LoadOptions::from_settings(settings));
        let dataset = loader.load_path(path)?;
        let mut dashboard = Self::build(&dataset, settings)?;
        dashboard.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        info!(
            source = dashboard.source.as_deref().unwrap_or("-"),
            rows = dashboard.health.row_count,
            "Dashboard ready"
        );
        Ok(dashboard)
    }

    /// Whether every panel computed successfully
    pub fn is_complete(&self) -> bool {
        self.summary.is_ok() && self.categories.is_ok() && self.trend.is_ok()
    }

    /// Render all panels as text, in display order
    pub fn format_terminal(&self, currency: &str) -> String {
        let rule = double_separator(60);
        let mut output = String::new();

        if let Some(source) = &self.source {
            output.push_str(&format!("Sales Analysis: {}\n{}\n\n", source, rule));
        }

        output.push_str(&self.health.format_terminal());
        output.push_str(&format!("\n{}\n\n", rule));
        output.push_str(&render_panel(&self.summary, |s| s.format_terminal(currency)));
        output.push_str(&format!("\n{}\n\n", rule));
        output.push_str(&render_panel(&self.categories, |c| {
            c.format_terminal(currency)
        }));
        output.push_str(&format!("\n{}\n\n", rule));
        output.push_str(&render_panel(&self.trend, |t| t.format_terminal(currency)));

        output
    }
}

fn render_panel<T>(panel: &Panel<T>, render: impl Fn(&T) -> String) -> String {
    match panel {
        Ok(value) => render(value),
        Err(message) => format!("Panel unavailable: {}\n", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::models::Money;
    use tempfile::TempDir;

    const SCENARIO: &str = "Order Date,Sales,Profit,Category\n\
                            2023-01-15,100,20,A\n\
                            2023-01-20,50,-10,B\n\
                            2023-02-01,200,40,A\n";

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_from_path_builds_all_panels() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "superstore.csv", SCENARIO);

        let dashboard = Dashboard::from_path(&path, &Settings::default()).unwrap();

        assert!(dashboard.is_complete());
        assert_eq!(dashboard.source.as_deref(), Some("superstore.csv"));
        assert!(dashboard.health.is_clean());
        let summary = dashboard.summary.as_ref().unwrap();
        assert_eq!(summary.total_sales, Money::new(350, 0));
        assert_eq!(dashboard.trend.as_ref().unwrap().points.len(), 2);
    }

    #[test]
    fn test_missing_profit_fails_before_panels() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "broken.csv",
            "Order Date,Sales,Category\n2023-01-15,100,A\n",
        );

        let err = Dashboard::from_path(&path, &Settings::default()).unwrap_err();
        match err {
            DashError::Schema { missing } => assert_eq!(missing, vec!["Profit"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_error_stops_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "ragged.csv",
            "Order Date,Sales,Profit,Category\n2023-01-15,1,1,A,extra\n",
        );

        let err = Dashboard::from_path(&path, &Settings::default()).unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn test_format_terminal_section_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "superstore.csv", SCENARIO);
        let text = Dashboard::from_path(&path, &Settings::default())
            .unwrap()
            .format_terminal("$");

        let health = text.find("Data Health Check").unwrap();
        let summary = text.find("Business Summary").unwrap();
        let category = text.find("Performance by Category").unwrap();
        let trend = text.find("Monthly Sales Trend").unwrap();
        assert!(health < summary && summary < category && category < trend);
        assert!(text.contains("14.29%"));
    }

    #[test]
    fn test_failed_panel_rendered_in_place() {
        let panel: Panel<FinancialSummary> = Err("boom".into());
        assert_eq!(
            render_panel(&panel, |s| s.format_terminal("$")),
            "Panel unavailable: boom\n"
        );
    }

    #[test]
    fn test_overflowing_sales_fail_their_panels_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "huge.csv",
            "Order Date,Sales,Profit,Category\n\
             2023-01-15,5e28,1,A\n\
             2023-01-20,5e28,1,A\n",
        );

        let dashboard = Dashboard::from_path(&path, &Settings::default()).unwrap();

        assert!(!dashboard.is_complete());
        assert_eq!(dashboard.health.row_count, 2);
        assert!(dashboard.summary.is_err());
        assert!(dashboard.categories.is_err());
        assert!(dashboard.trend.is_err());

        let text = dashboard.format_terminal("$");
        assert!(text.contains("Data Health Check"));
        assert_eq!(text.matches("Panel unavailable").count(), 3);
        assert!(text.contains("too large"));
    }

    #[test]
    fn test_settings_flow_into_panels() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "gaps.csv",
            "Order Date,Sales,Profit,Category\n2023-01-15,1,1,\n2023-03-15,1,1,A\n",
        );
        let settings = Settings {
            fill_empty_months: true,
            unknown_category_label: "Unassigned".into(),
            ..Settings::default()
        };

        let dashboard = Dashboard::from_path(&path, &settings).unwrap();
        assert_eq!(dashboard.trend.as_ref().unwrap().points.len(), 3);
        assert_eq!(
            dashboard.categories.as_ref().unwrap().unknown().unwrap().category,
            "Unassigned"
        );
    }
}
