//! Status bar view
//!
//! Shows the row count, the status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, DashboardState, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    match &app.state {
        DashboardState::Ready(dashboard) => {
            spans.push(Span::styled(" Rows: ", Style::default().fg(Color::White)));
            spans.push(Span::styled(
                dashboard.health.row_count.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            if !dashboard.is_complete() {
                spans.push(Span::raw(" │ "));
                spans.push(Span::styled(
                    "some panels unavailable",
                    Style::default().fg(Color::Red),
                ));
            }
        }
        DashboardState::Failed(_) => {
            spans.push(Span::styled(" Error", Style::default().fg(Color::Red)));
        }
        DashboardState::Empty => {
            spans.push(Span::styled(
                " No data",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Editing => " Enter:Load  Esc:Cancel ",
        InputMode::Normal => " o:Open  r:Reload  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
