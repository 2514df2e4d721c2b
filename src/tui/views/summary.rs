//! Business summary panel
//!
//! Three side-by-side metrics: total sales, total profit, profit margin.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports::{FinancialSummary, Margin, Panel};

use super::render_unavailable;

/// Render the summary metrics
pub fn render(frame: &mut Frame, summary: &Panel<FinancialSummary>, currency: &str, area: Rect) {
    let summary = match summary {
        Ok(summary) => summary,
        Err(message) => {
            render_unavailable(frame, "Business Summary", message, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_metric(
        frame,
        "Total Sales",
        summary.total_sales.format_with_symbol(currency),
        Color::White,
        chunks[0],
    );
    render_metric(
        frame,
        "Total Profit",
        summary.total_profit.format_with_symbol(currency),
        money_color(summary.total_profit),
        chunks[1],
    );

    let margin_color = match summary.margin {
        Margin::Percent(p) if p < 0.0 => Color::Red,
        Margin::Percent(_) => Color::Green,
        Margin::Undefined => Color::DarkGray,
    };
    render_metric(
        frame,
        "Profit Margin",
        summary.margin.to_string(),
        margin_color,
        chunks[2],
    );
}

fn money_color(amount: Money) -> Color {
    if amount.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

fn render_metric(frame: &mut Frame, title: &str, value: String, color: Color, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let text = Paragraph::new(Line::from(value))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(text, area);
}
