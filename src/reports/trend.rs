//! Monthly Sales Trend
//!
//! Buckets rows by the calendar month of their order date and sums sales
//! per month. Each bucket is labelled with the last day of its month.
//! Rows without a usable date are excluded and reported.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_bar, format_section, render_table};
use crate::error::{DashError, DashResult};
use crate::models::{Dataset, Money, ORDER_DATE, SALES};

/// One month of the trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Last day of the month
    pub month_end: NaiveDate,
    /// Summed sales of the month
    pub sales: Money,
    /// Dataset rows dated in this month (zero for filled gaps)
    pub rows: usize,
}

impl TrendPoint {
    /// Short label such as `Jan 2023`
    pub fn label(&self) -> String {
        self.month_end.format("%b %Y").to_string()
    }
}

/// Chronological monthly sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    /// Points in chronological order
    pub points: Vec<TrendPoint>,
    /// Rows left out because their order date is missing or unparseable
    pub excluded_rows: usize,
    /// Sales of the excluded rows
    pub excluded_sales: Money,
    /// Zero points inserted for months without transactions
    pub filled_months: usize,
}

#[derive(Tabled)]
struct TrendTableRow {
    #[tabled(rename = "Month End")]
    month_end: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Trend")]
    bar: String,
}

/// Last calendar day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

fn next_month(key: (i32, u32)) -> (i32, u32) {
    if key.1 == 12 {
        (key.0 + 1, 1)
    } else {
        (key.0, key.1 + 1)
    }
}

impl MonthlyTrend {
    /// Generate the trend; with `fill_empty_months` gap months get a zero point
    pub fn generate(dataset: &Dataset, fill_empty_months: bool) -> DashResult<Self> {
        let dates = dataset.dates(ORDER_DATE)?;
        let sales = dataset.amounts(SALES)?;

        let mut buckets: BTreeMap<(i32, u32), (NaiveDate, Money, usize)> = BTreeMap::new();
        let mut excluded_rows = 0;
        let mut excluded_sales = Money::zero();

        for (date, amount) in dates.iter().zip(sales) {
            let amount = amount.unwrap_or_default();
            match date {
                Some(d) => {
                    let entry = buckets
                        .entry(month_key(*d))
                        .or_insert((month_end(*d), Money::zero(), 0));
                    entry.1 = entry
                        .1
                        .checked_add(amount)
                        .ok_or_else(|| DashError::overflow("Monthly sales"))?;
                    entry.2 += 1;
                }
                None => {
                    excluded_rows += 1;
                    excluded_sales = excluded_sales
                        .checked_add(amount)
                        .ok_or_else(|| DashError::overflow("Undated sales"))?;
                }
            }
        }

        let mut filled_months = 0;
        if fill_empty_months {
            if let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) {
                let mut key = first;
                while key < last {
                    key = next_month(key);
                    if !buckets.contains_key(&key) {
                        if let Some(day) = NaiveDate::from_ymd_opt(key.0, key.1, 1) {
                            buckets.insert(key, (month_end(day), Money::zero(), 0));
                            filled_months += 1;
                        }
                    }
                }
            }
        }

        let points = buckets
            .into_values()
            .map(|(month_end, sales, rows)| TrendPoint {
                month_end,
                sales,
                rows,
            })
            .collect::<Vec<_>>();

        debug!(
            points = points.len(),
            excluded_rows, filled_months, "Monthly trend done"
        );

        Ok(Self {
            points,
            excluded_rows,
            excluded_sales,
            filled_months,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all trend points, `None` if it does not fit
    pub fn total_sales(&self) -> Option<Money> {
        Money::checked_sum(self.points.iter().map(|p| &p.sales))
    }

    /// Highest monthly sales (zero when the trend is empty)
    pub fn peak_sales(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.sales)
            .max()
            .unwrap_or_default()
    }

    /// Lowest monthly sales (zero when the trend is empty)
    pub fn min_sales(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.sales)
            .min()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = format_section("Monthly Sales Trend", 60);

        if self.is_empty() {
            output.push_str("No dated rows to chart.\n");
        } else {
            let peak = self.peak_sales().to_f64();
            let rows: Vec<TrendTableRow> = self
                .points
                .iter()
                .map(|p| TrendTableRow {
                    month_end: p.month_end.to_string(),
                    sales: p.sales.format_with_symbol(currency),
                    bar: format_bar(p.sales.to_f64(), peak, 30),
                })
                .collect();
            output.push_str(&render_table(&rows, &[1]));
            output.push('\n');
        }

        if self.excluded_rows > 0 {
            output.push_str(&format!(
                "{} row(s) without a valid order date excluded ({} in sales).\n",
                self.excluded_rows,
                self.excluded_sales.format_with_symbol(currency)
            ));
        }

        output
    }
}
