//! CSV Export functionality
//!
//! Writes the dashboard as one flat CSV: every line is tagged with the
//! section it belongs to so spreadsheets can filter on it.

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::reports::Dashboard;

fn export_err(e: impl std::fmt::Display) -> DashError {
    DashError::Export(e.to_string())
}

/// Export the dashboard to CSV
pub fn export_dashboard_csv<W: Write>(dashboard: &Dashboard, writer: &mut W) -> DashResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Section", "Key", "Value", "Profit", "Rows"])
        .map_err(export_err)?;

    csv.write_record([
        "health",
        "rows",
        dashboard.health.row_count.to_string().as_str(),
        "",
        "",
    ])
    .map_err(export_err)?;
    for column in &dashboard.health.columns {
        csv.write_record([
            "health",
            column.column.as_str(),
            column.missing.to_string().as_str(),
            "",
            column.unparseable.to_string().as_str(),
        ])
        .map_err(export_err)?;
    }

    if let Ok(summary) = &dashboard.summary {
        csv.write_record([
            "summary",
            "total",
            summary.total_sales.amount().to_string().as_str(),
            summary.total_profit.amount().to_string().as_str(),
            "",
        ])
        .map_err(export_err)?;
        let margin = summary
            .margin
            .as_percent()
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "N/A".to_string());
        csv.write_record(["summary", "margin_percent", margin.as_str(), "", ""])
            .map_err(export_err)?;
    }

    if let Ok(categories) = &dashboard.categories {
        for row in &categories.rows {
            csv.write_record([
                "category",
                row.category.as_str(),
                row.sales.amount().to_string().as_str(),
                row.profit.amount().to_string().as_str(),
                row.rows.to_string().as_str(),
            ])
            .map_err(export_err)?;
        }
    }

    if let Ok(trend) = &dashboard.trend {
        for point in &trend.points {
            csv.write_record([
                "trend",
                point.month_end.to_string().as_str(),
                point.sales.amount().to_string().as_str(),
                "",
                point.rows.to_string().as_str(),
            ])
            .map_err(export_err)?;
        }
        if trend.excluded_rows > 0 {
            csv.write_record([
                "trend",
                "excluded",
                trend.excluded_sales.amount().to_string().as_str(),
                "",
                trend.excluded_rows.to_string().as_str(),
            ])
            .map_err(export_err)?;
        }
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
