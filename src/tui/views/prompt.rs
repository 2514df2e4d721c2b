//! File prompt, welcome screen and error panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::REQUIRED_COLUMNS;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Shown before any file is loaded
pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Upload ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines = vec![
        Line::from("Load a retail sales CSV to see the dashboard."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Required columns: "),
            Span::styled(REQUIRED_COLUMNS.join(", "), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(" open a file   "),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::raw(" help   "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Shown instead of every panel when loading or schema checks fail
pub fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .title(" Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press o to open another file or r to reload.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// File path prompt drawn over the body
pub fn render_prompt(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(70, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Open CSV ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let input_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    frame.render_widget(app.file_input.clone(), input_area);

    if inner.height > 2 {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Enter load   Esc cancel",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(
            hint,
            Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), 1),
        );
    }
}
