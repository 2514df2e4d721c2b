//! Display formatting for terminal output
//!
//! Shared helpers for the plain text report: bars, separators and tables.

pub mod report;
pub mod table;

pub use report::{double_separator, format_bar, format_section, separator, truncate};
pub use table::render_table;
