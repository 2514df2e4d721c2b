//! Monthly sales trend chart

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports::{MonthlyTrend, Panel};

use super::render_unavailable;

/// Render the trend as a line chart
pub fn render(frame: &mut Frame, trend: &Panel<MonthlyTrend>, currency: &str, area: Rect) {
    let trend = match trend {
        Ok(trend) => trend,
        Err(message) => {
            render_unavailable(frame, "Monthly Sales Trend", message, area);
            return;
        }
    };

    let mut title = " Monthly Sales Trend ".to_string();
    if trend.excluded_rows > 0 {
        title = format!(
            " Monthly Sales Trend ({} undated row(s) excluded) ",
            trend.excluded_rows
        );
    }
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if trend.is_empty() {
        let text = Paragraph::new("No rows with a valid Order Date.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let points = chart_points(trend);
    let (y_min, y_max) = y_bounds(trend);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![ChartDataset::default()
        .name("Sales")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Month")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels(trend)),
        )
        .y_axis(
            Axis::default()
                .title("Sales")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels(y_min, y_max, currency)),
        );

    frame.render_widget(chart, area);
}

/// One point per month: x is the month index, y the sales total
pub(crate) fn chart_points(trend: &MonthlyTrend) -> Vec<(f64, f64)> {
    trend
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.sales.to_f64()))
        .collect()
}

/// Y range always includes zero and leaves headroom above the peak
pub(crate) fn y_bounds(trend: &MonthlyTrend) -> (f64, f64) {
    let low = trend.min_sales().to_f64().min(0.0);
    let high = trend.peak_sales().to_f64().max(0.0);
    let span = (high - low).max(1.0);
    (low, high + span * 0.1)
}

fn x_labels(trend: &MonthlyTrend) -> Vec<Span<'static>> {
    let first = trend.points.first().map(|p| p.label());
    let last = trend.points.last().map(|p| p.label());
    match (first, last) {
        (Some(first), Some(last)) if trend.points.len() > 2 => {
            let middle = trend.points[trend.points.len() / 2].label();
            vec![Span::raw(first), Span::raw(middle), Span::raw(last)]
        }
        (Some(first), Some(last)) if trend.points.len() == 2 => {
            vec![Span::raw(first), Span::raw(last)]
        }
        (Some(first), _) => vec![Span::raw(first)],
        _ => Vec::new(),
    }
}

fn y_labels(low: f64, high: f64, currency: &str) -> Vec<Span<'static>> {
    [low, (low + high) / 2.0, high]
        .iter()
        .map(|v| Span::raw(short_money(*v, currency)))
        .collect()
}

/// Compact axis label: `$1.2k`, `$3.4M`
fn short_money(value: f64, currency: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}{}{:.1}M", sign, currency, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{}{:.1}k", sign, currency, abs / 1_000.0)
    } else {
        Money::from_decimal(rust_decimal::Decimal::from_f64_retain(value).unwrap_or_default())
            .format_with_symbol(currency)
    }
}
