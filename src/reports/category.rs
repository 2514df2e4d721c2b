//! Category Performance Report
//!
//! Sums sales and profit per category. Rows without a category are
//! collected in an explicit unknown bucket so the groups always partition
//! the dataset.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_section, render_table, truncate};
use crate::error::{DashError, DashResult};
use crate::models::{Dataset, Money, CATEGORY, PROFIT, SALES};

/// Aggregates of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// Category value, or the unknown label for the missing bucket
    pub category: String,
    /// Whether this row is the bucket of rows without a category
    pub is_unknown: bool,
    /// Summed sales
    pub sales: Money,
    /// Summed profit
    pub profit: Money,
    /// Number of dataset rows in the group
    pub rows: usize,
}

/// Category aggregate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Rows sorted by category name, unknown bucket last
    pub rows: Vec<CategoryRow>,
    /// Dataset rows without a category
    pub unknown_rows: usize,
}

#[derive(Tabled)]
struct CategoryTableRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Rows")]
    rows: usize,
}

#[derive(Default)]
struct Accumulator {
    sales: Money,
    profit: Money,
    rows: usize,
}

impl Accumulator {
    fn add(&mut self, sales: Option<&Money>, profit: Option<&Money>) -> DashResult<()> {
        if let Some(s) = sales {
            self.sales = self
                .sales
                .checked_add(*s)
                .ok_or_else(|| DashError::overflow("Category sales"))?;
        }
        if let Some(p) = profit {
            self.profit = self
                .profit
                .checked_add(*p)
                .ok_or_else(|| DashError::overflow("Category profit"))?;
        }
        self.rows += 1;
        Ok(())
    }
}

impl CategoryReport {
    /// Generate the category table
    pub fn generate(dataset: &Dataset, unknown_label: &str) -> DashResult<Self> {
        let categories = dataset.text(CATEGORY)?;
        let sales = dataset.amounts(SALES)?;
        let profit = dataset.amounts(PROFIT)?;

        let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
        let mut unknown = Accumulator::default();

        for ((category, s), p) in categories.iter().zip(sales).zip(profit) {
            match category {
                Some(name) => groups
                    .entry(name.as_str())
                    .or_default()
                    .add(s.as_ref(), p.as_ref())?,
                None => unknown.add(s.as_ref(), p.as_ref())?,
            }
        }

        let mut rows: Vec<CategoryRow> = groups
            .into_iter()
            .map(|(name, acc)| CategoryRow {
                category: name.to_string(),
                is_unknown: false,
                sales: acc.sales,
                profit: acc.profit,
                rows: acc.rows,
            })
            .collect();

        let unknown_rows = unknown.rows;
        if unknown_rows > 0 {
            rows.push(CategoryRow {
                category: unknown_label.to_string(),
                is_unknown: true,
                sales: unknown.sales,
                profit: unknown.profit,
                rows: unknown_rows,
            });
        }

        debug!(groups = rows.len(), unknown_rows, "Category report done");

        Ok(Self { rows, unknown_rows })
    }

    /// Find a named category (never the unknown bucket)
    pub fn get(&self, category: &str) -> Option<&CategoryRow> {
        self.rows
            .iter()
            .find(|r| !r.is_unknown && r.category == category)
    }

    /// The bucket of rows without a category, if any
    pub fn unknown(&self) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| r.is_unknown)
    }

    /// Sales over every group, `None` on overflow
    pub fn total_sales(&self) -> Option<Money> {
        Money::checked_sum(self.rows.iter().map(|r| &r.sales))
    }

    /// Profit over every group, `None` on overflow
    pub fn total_profit(&self) -> Option<Money> {
        Money::checked_sum(self.rows.iter().map(|r| &r.profit))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = format_section("Performance by Category", 60);

        if self.rows.is_empty() {
            output.push_str("No rows to group.\n");
            return output;
        }

        let table_rows: Vec<CategoryTableRow> = self
            .rows
            .iter()
            .map(|r| CategoryTableRow {
                category: truncate(&r.category, 32),
                sales: r.sales.format_with_symbol(currency),
                profit: r.profit.format_with_symbol(currency),
                rows: r.rows,
            })
            .collect();
        output.push_str(&render_table(&table_rows, &[1, 2, 3]));
        output.push('\n');

        if self.unknown_rows > 0 {
            output.push_str(&format!(
                "{} row(s) without a category are grouped separately.\n",
                self.unknown_rows
            ));
        }

        output
    }
}
