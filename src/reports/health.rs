//! Health Check Report
//!
//! Counts missing values per column. A dataset with no missing cells is
//! reported as clean; otherwise only the affected columns are listed.

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_section, render_table};
use crate::models::Dataset;

/// Missing-value count of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ColumnMissing {
    /// Column name
    #[tabled(rename = "Column")]
    pub column: String,
    /// Missing cells, coerced failures included
    #[tabled(rename = "Missing")]
    pub missing: usize,
    /// Cells that had a value the loader could not coerce
    #[tabled(rename = "Unparseable")]
    pub unparseable: usize,
}

/// Missingness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Rows in the dataset
    pub row_count: usize,
    /// Columns in the dataset
    pub column_count: usize,
    /// Missing cells across all columns
    pub total_missing: usize,
    /// Columns with at least one missing cell, in column order
    pub columns: Vec<ColumnMissing>,
}

impl HealthReport {
    /// Generate the report; a pure read of the dataset
    pub fn generate(dataset: &Dataset) -> Self {
        let columns: Vec<ColumnMissing> = dataset
            .columns()
            .iter()
            .filter(|c| c.missing_count() > 0)
            .map(|c| ColumnMissing {
                column: c.name().to_string(),
                missing: c.missing_count(),
                unparseable: c.unparseable_count(),
            })
            .collect();
        let total_missing = columns.iter().map(|c| c.missing).sum();

        debug!(total_missing, affected = columns.len(), "Health check done");

        Self {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            total_missing,
            columns,
        }
    }

    /// True when no cell in the dataset is missing
    pub fn is_clean(&self) -> bool {
        self.total_missing == 0
    }

    /// Missing count for a column (zero if the column is clean or absent)
    pub fn missing_for(&self, column: &str) -> usize {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.missing)
            .unwrap_or(0)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_section("Data Health Check", 60);
        output.push_str(&format!(
            "{} rows × {} columns\n\n",
            self.row_count, self.column_count
        ));

        if self.is_clean() {
            output.push_str("Clean data! No missing values found.\n");
        } else {
            output.push_str(&format!(
                "Found {} missing value(s).\n",
                self.total_missing
            ));
            output.push_str(&render_table(&self.columns, &[1, 2]));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loader::{DatasetLoader, LoadOptions};

    fn load(csv: &str) -> Dataset {
        DatasetLoader::new(LoadOptions::default())
            .load_bytes(csv.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_clean_dataset() {
        let ds = load(
            "Order Date,Sales,Profit,Category\n\
             2023-01-15,100,20,A\n\
             2023-01-20,50,-10,B\n",
        );
        let report = HealthReport::generate(&ds);

        assert!(report.is_clean());
        assert!(report.columns.is_empty());
        assert!(report.format_terminal().contains("Clean data"));
    }

    #[test]
    fn test_counts_per_column_sum_to_total() {
        let ds = load(
            "Order Date,Sales,Profit,Category,Region\n\
             2023-01-15,,20,,West\n\
             garbage,50,-10,,\n\
             2023-02-01,200,40,A,East\n",
        );
        let report = HealthReport::generate(&ds);

        assert!(!report.is_clean());
        assert_eq!(report.missing_for("Category"), 2);
        assert_eq!(report.missing_for("Sales"), 1);
        assert_eq!(report.missing_for("Order Date"), 1);
        assert_eq!(report.missing_for("Region"), 1);
        assert_eq!(report.missing_for("Profit"), 0);
        assert_eq!(report.total_missing, 5);
        assert_eq!(report.total_missing, ds.total_missing());

        let names: Vec<_> = report.columns.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(names, vec!["Order Date", "Sales", "Category", "Region"]);
    }

    #[test]
    fn test_unparseable_reported() {
        let ds = load("Order Date,Sales,Profit,Category\n2023-01-15,abc,1,A\n");
        let report = HealthReport::generate(&ds);

        let sales = report.columns.iter().find(|c| c.column == "Sales").unwrap();
        assert_eq!(sales.missing, 1);
        assert_eq!(sales.unparseable, 1);
        assert!(report.format_terminal().contains("Unparseable"));
    }

    #[test]
    fn test_generate_does_not_mutate() {
        let ds = load("Order Date,Sales,Profit,Category\n,1,1,\n");
        let before = ds.clone();
        let _ = HealthReport::generate(&ds);
        assert_eq!(ds, before);
    }
}
