//! Help overlay
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Dashboard"),
        Line::from(""),
        key_line("o", "Open a CSV file"),
        key_line("r", "Reload the current file"),
        key_line("j/↓", "Scroll categories down"),
        key_line("k/↑", "Scroll categories up"),
        key_line("g", "Back to the first category"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("File Prompt"),
        Line::from(""),
        key_line("Enter", "Load the typed path"),
        key_line("Esc", "Cancel"),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
