//! Financial Summary Report
//!
//! Total sales, total profit and the profit margin of the whole upload.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::display::format_section;
use crate::error::{DashError, DashResult};
use crate::models::{Dataset, Money, PROFIT, SALES};

/// Profit margin; undefined when total sales is zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Margin {
    /// Profit as a percentage of sales
    Percent(f64),
    /// Total sales is zero
    Undefined,
}

impl Margin {
    /// Compute profit / sales × 100 without dividing by zero
    pub fn compute(profit: Money, sales: Money) -> Self {
        if sales.is_zero() {
            return Self::Undefined;
        }
        profit
            .amount()
            .checked_div(sales.amount())
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|pct| pct.to_f64())
            .map(Self::Percent)
            .unwrap_or(Self::Undefined)
    }

    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{:.2}%", p),
            Self::Undefined => write!(f, "N/A"),
        }
    }
}

/// Aggregate financial figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// Sum of every present sales value
    pub total_sales: Money,
    /// Sum of every present profit value
    pub total_profit: Money,
    /// Profit margin
    pub margin: Margin,
    /// Rows whose sales value is missing
    pub rows_without_sales: usize,
    /// Rows whose profit value is missing
    pub rows_without_profit: usize,
}

impl FinancialSummary {
    /// Generate the summary; rows with a missing category are included
    pub fn generate(dataset: &Dataset) -> DashResult<Self> {
        let sales = dataset.amounts(SALES)?;
        let profit = dataset.amounts(PROFIT)?;

        let total_sales = Money::checked_sum(sales.iter().flatten())
            .ok_or_else(|| DashError::overflow("Sales"))?;
        let total_profit = Money::checked_sum(profit.iter().flatten())
            .ok_or_else(|| DashError::overflow("Profit"))?;
        let margin = Margin::compute(total_profit, total_sales);

        debug!(%total_sales, %total_profit, %margin, "Financial summary done");

        Ok(Self {
            total_sales,
            total_profit,
            margin,
            rows_without_sales: sales.iter().filter(|v| v.is_none()).count(),
            rows_without_profit: profit.iter().filter(|v| v.is_none()).count(),
        })
    }

    /// Margin as a number, or `DivisionUndefined` when total sales is zero
    pub fn margin_percent(&self) -> DashResult<f64> {
        self.margin.as_percent().ok_or(DashError::DivisionUndefined)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = format_section("Business Summary", 60);
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Sales",
            self.total_sales.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Profit",
            self.total_profit.format_with_symbol(currency)
        ));
        output.push_str(&format!("{:<20} {:>20}\n", "Profit Margin", self.margin));
        output
    }
}
