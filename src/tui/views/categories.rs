//! Category performance table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::reports::{CategoryReport, Panel};

use super::render_unavailable;

/// Render the category table starting at `scroll`
pub fn render(
    frame: &mut Frame,
    report: &Panel<CategoryReport>,
    currency: &str,
    scroll: usize,
    area: Rect,
) {
    let report = match report {
        Ok(report) => report,
        Err(message) => {
            render_unavailable(frame, "Performance by Category", message, area);
            return;
        }
    };

    let title = if report.rows.len() > 1 {
        format!(
            " Performance by Category ({}/{}) ",
            scroll.min(report.rows.len() - 1) + 1,
            report.rows.len()
        )
    } else {
        " Performance by Category ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from(Text::from("Sales").right_aligned()),
        Cell::from(Text::from("Profit").right_aligned()),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = report
        .rows
        .iter()
        .skip(scroll)
        .map(|row| {
            let name_style = if row.is_unknown {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let profit_style = if row.profit.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(row.category.clone()).style(name_style),
                Cell::from(Text::from(row.sales.format_with_symbol(currency)).right_aligned()),
                Cell::from(Text::from(row.profit.format_with_symbol(currency)).right_aligned())
                    .style(profit_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
