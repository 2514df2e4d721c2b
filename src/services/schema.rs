//! Schema validation
//!
//! Checked right after loading so a wrong-shaped upload fails before any
//! panel is computed.

use tracing::warn;

use crate::error::{DashError, DashResult};
use crate::models::{ColumnKind, Dataset, CATEGORY, ORDER_DATE, PROFIT, REQUIRED_COLUMNS, SALES};

/// Verify every required column is present with the expected kind
pub fn validate(dataset: &Dataset) -> DashResult<()> {
    let missing = dataset.missing_columns(&REQUIRED_COLUMNS);
    if !missing.is_empty() {
        warn!(missing = ?missing, "Upload is missing required columns");
        return Err(DashError::Schema { missing });
    }

    let expected = [
        (ORDER_DATE, ColumnKind::Date),
        (SALES, ColumnKind::Amount),
        (PROFIT, ColumnKind::Amount),
        (CATEGORY, ColumnKind::Text),
    ];
    for (name, kind) in expected {
        let column = dataset.require(name)?;
        if column.kind() != kind {
            return Err(DashError::ColumnType {
                column: name.to_string(),
                expected: kind.to_string(),
                found: column.kind().to_string(),
            });
        }
    }

    Ok(())
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
    fn test_valid_schema() {
        let ds = load("Order Date,Sales,Profit,Category\n2023-01-01,1,1,A\n");
        assert!(validate(&ds).is_ok());
    }

    #[test]
    fn test_missing_profit_named() {
        let ds = load("Order Date,Sales,Category\n2023-01-01,1,A\n");
        let err = validate(&ds).unwrap_err();

        assert!(err.is_schema());
        assert!(err.to_string().contains("Profit"));
    }

    #[test]
    fn test_all_missing_columns_listed() {
        let ds = load("order date,sales\n2023-01-01,1\n");
        match validate(&ds).unwrap_err() {
            DashError::Schema { missing } => {
                assert_eq!(missing, vec!["Order Date", "Sales", "Profit", "Category"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
