//! Table rendering for the text report

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Render rows as a rounded table, right-aligning the given column indices
pub fn render_table<T: Tabled>(rows: &[T], numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for &col in numeric_columns {
        table.with(Modify::new(Columns::single(col)).with(Alignment::right()));
    }
    table.to_string()
}
