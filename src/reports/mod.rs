//! Reports module for salesdash
//!
//! The four read-only analyses of an upload (health check, financial
//! summary, category breakdown, monthly trend) and the dashboard that
//! gathers them.

pub mod category;
pub mod dashboard;
pub mod health;
pub mod summary;
pub mod trend;

pub use category::{CategoryReport, CategoryRow};
pub use dashboard::{Dashboard, Panel};
pub use health::{ColumnMissing, HealthReport};
pub use summary::{FinancialSummary, Margin};
pub use trend::{month_end, MonthlyTrend, TrendPoint};
