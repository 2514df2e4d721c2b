//! In-memory transaction table
//!
//! A [`Dataset`] is built once per upload and never mutated afterwards.
//! Every column keeps its header position; the well-known columns are
//! coerced to dates or amounts by the loader, everything else stays text.

use chrono::NaiveDate;

use super::money::Money;
use crate::error::{DashError, DashResult};

/// Header of the order date column
pub const ORDER_DATE: &str = "Order Date";
/// Header of the sales column
pub const SALES: &str = "Sales";
/// Header of the profit column
pub const PROFIT: &str = "Profit";
/// Header of the category column
pub const CATEGORY: &str = "Category";

/// Columns every upload must carry, in the order they are reported
pub const REQUIRED_COLUMNS: [&str; 4] = [ORDER_DATE, SALES, PROFIT, CATEGORY];

/// The kind of values a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Date,
    Amount,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Amount => "amount",
        };
        write!(f, "{}", label)
    }
}

/// Column values; `None` is the missing marker
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Text(Vec<Option<String>>),
    Date(Vec<Option<NaiveDate>>),
    Amount(Vec<Option<Money>>),
}

impl ColumnValues {
    fn len(&self) -> usize {
        match self {
            Self::Text(v) => v.len(),
            Self::Date(v) => v.len(),
            Self::Amount(v) => v.len(),
        }
    }

    fn missing(&self) -> usize {
        match self {
            Self::Text(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Date(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Amount(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }
}

/// A named column of the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
    /// Non-empty cells that failed coercion and became missing
    unparseable: usize,
}

impl Column {
    /// Create a text column
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Text(values),
            unparseable: 0,
        }
    }

    /// Create a date column, recording how many cells failed to parse
    pub fn dates(name: impl Into<String>, values: Vec<Option<NaiveDate>>, unparseable: usize) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Date(values),
            unparseable,
        }
    }

    /// Create an amount column, recording how many cells failed to parse
    pub fn amounts(name: impl Into<String>, values: Vec<Option<Money>>, unparseable: usize) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Amount(values),
            unparseable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn kind(&self) -> ColumnKind {
        match self.values {
            ColumnValues::Text(_) => ColumnKind::Text,
            ColumnValues::Date(_) => ColumnKind::Date,
            ColumnValues::Amount(_) => ColumnKind::Amount,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells, including the ones that failed coercion
    pub fn missing_count(&self) -> usize {
        self.values.missing()
    }

    /// Number of cells that held a value which could not be coerced
    pub fn unparseable_count(&self) -> usize {
        self.unparseable
    }

    fn type_error(&self, expected: ColumnKind) -> DashError {
        DashError::ColumnType {
            column: self.name.clone(),
            expected: expected.to_string(),
            found: self.kind().to_string(),
        }
    }
}

/// The parsed, immutable transaction table of one upload
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Assemble a dataset; column names must be unique and all columns
    /// must have the same length
    pub fn new(columns: Vec<Column>) -> DashResult<Self> {
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.name == column.name) {
                return Err(DashError::Load(format!(
                    "Duplicate column name: {}",
                    column.name
                )));
            }
        }
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != row_count) {
            return Err(DashError::Load(format!(
                "Column '{}' has {} values, expected {}",
                bad.name(),
                bad.len(),
                row_count
            )));
        }
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by exact, case-sensitive name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Dataset::column`] but a missing column is a schema error
    pub fn require(&self, name: &str) -> DashResult<&Column> {
        self.column(name)
            .ok_or_else(|| DashError::missing_column(name))
    }

    /// Names from `required` that this dataset lacks, in the given order
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    pub fn text(&self, name: &str) -> DashResult<&[Option<String>]> {
        let column = self.require(name)?;
        match &column.values {
            ColumnValues::Text(v) => Ok(v),
            _ => Err(column.type_error(ColumnKind::Text)),
        }
    }

    pub fn dates(&self, name: &str) -> DashResult<&[Option<NaiveDate>]> {
        let column = self.require(name)?;
        match &column.values {
            ColumnValues::Date(v) => Ok(v),
            _ => Err(column.type_error(ColumnKind::Date)),
        }
    }

    pub fn amounts(&self, name: &str) -> DashResult<&[Option<Money>]> {
        let column = self.require(name)?;
        match &column.values {
            ColumnValues::Amount(v) => Ok(v),
            _ => Err(column.type_error(ColumnKind::Amount)),
        }
    }

    /// Total missing cells across every column
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }
}
