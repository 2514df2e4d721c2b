//! Data health panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::HealthReport;

/// Tallest the panel grows before the column list is cut short
const MAX_HEIGHT: u16 = 10;

/// Rows the panel wants, borders included
pub fn height(report: &HealthReport) -> u16 {
    let listed = if report.is_clean() {
        0
    } else {
        report.columns.len()
    };
    let lines = u16::try_from(2 + listed).unwrap_or(u16::MAX);
    lines.saturating_add(2).min(MAX_HEIGHT)
}

/// Render the data health panel
///
/// Columns that do not fit are summarized on a final "+N more" line.
pub fn render(frame: &mut Frame, report: &HealthReport, area: Rect) {
    let block = Block::default()
        .title(" Data Health Check ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let mut lines = vec![Line::from(format!(
        "{} rows × {} columns",
        report.row_count, report.column_count
    ))];

    if report.is_clean() {
        lines.push(Line::from(Span::styled(
            "Clean data! No missing values found.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{} missing value(s)", report.total_missing),
            Style::default().fg(Color::Yellow),
        )));
        for column in &report.columns {
            let mut spans = vec![
                Span::styled(
                    format!("  {}: ", column.column),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(column.missing.to_string()),
            ];
            if column.unparseable > 0 {
                spans.push(Span::styled(
                    format!(" ({} unparseable)", column.unparseable),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let inner = usize::from(area.height.saturating_sub(2));
    if inner >= 3 && lines.len() > inner {
        lines.truncate(inner - 1);
        let hidden = report.columns.len() - (inner - 3);
        lines.push(Line::from(Span::styled(
            format!("  +{} more column(s)", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ColumnMissing;
    use ratatui::{backend::TestBackend, Terminal};

    fn report(affected: usize) -> HealthReport {
        let columns: Vec<ColumnMissing> = (0..affected)
            .map(|i| ColumnMissing {
                column: format!("col_{:02}", i),
                missing: 1,
                unparseable: 0,
            })
            .collect();
        HealthReport {
            row_count: 3,
            column_count: affected,
            total_missing: affected,
            columns,
        }
    }

    fn draw(report: &HealthReport, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, report, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_height_follows_affected_columns() {
        assert_eq!(height(&report(0)), 4);
        assert_eq!(height(&report(3)), 7);
        assert_eq!(height(&report(40)), MAX_HEIGHT);
    }

    #[test]
    fn test_every_column_listed_when_it_fits() {
        let report = report(3);
        let text = draw(&report, height(&report));

        assert!(text.contains("3 missing value(s)"));
        assert!(text.contains("col_02: 1"));
        assert!(!text.contains("more column"));
    }

    #[test]
    fn test_overflowing_columns_summarized() {
        let report = report(12);
        let text = draw(&report, height(&report));

        // Ten rows leave eight inside the border: two header lines,
        // five columns and the summary line
        assert!(text.contains("col_04: 1"));
        assert!(!text.contains("col_05"));
        assert!(text.contains("+7 more column(s)"));
    }
}
