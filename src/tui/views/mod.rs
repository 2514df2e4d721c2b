//! TUI Views module
//!
//! The dashboard panels, the file prompt, the error panel and the
//! overlays drawn on top of them.

pub mod categories;
pub mod health;
pub mod help;
pub mod prompt;
pub mod status_bar;
pub mod summary;
pub mod trend;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, DashboardState, InputMode};
use super::layout::{AppLayout, DashboardLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match &app.state {
        DashboardState::Empty => prompt::render_welcome(frame, layout.body),
        DashboardState::Failed(message) => prompt::render_error(frame, message, layout.body),
        DashboardState::Ready(dashboard) => {
            let panels = DashboardLayout::new(layout.body, health::height(&dashboard.health));
            let currency = app.settings.currency_symbol.as_str();
            health::render(frame, &dashboard.health, panels.health);
            summary::render(frame, &dashboard.summary, currency, panels.summary);
            categories::render(
                frame,
                &dashboard.categories,
                currency,
                app.category_scroll,
                panels.categories,
            );
            trend::render(frame, &dashboard.trend, currency, panels.trend);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.input_mode == InputMode::Editing {
        prompt::render_prompt(frame, app);
    }
    if app.show_help {
        help::render(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let source = app
        .current_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "no file loaded".to_string());

    let line = Line::from(vec![
        Span::styled(
            "Retail Sales Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(source, Style::default().fg(Color::White)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render a panel whose analysis failed
pub(crate) fn render_unavailable(frame: &mut Frame, title: &str, message: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Panel unavailable",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(message.to_string()),
    ])
    .block(block);

    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SALES: &str = "Order Date,Sales,Profit,Category\n\
                         2023-01-15,100,20,A\n\
                         2023-01-20,50,-10,B\n\
                         2023-02-03,200,40,A\n";

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_shows_upload_prompt() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let text = draw(&mut app);

        assert!(text.contains(" Upload "));
        assert!(text.contains("Required columns: Order Date, Sales, Profit, Category"));
        assert!(text.contains(" Open CSV "));
        assert!(!text.contains("Data Health Check"));
    }

    #[test]
    fn test_failed_load_hides_every_panel() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "broken.csv",
            "Order Date,Sales,Category\n2023-01-15,100,A\n",
        );
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.cancel_prompt();
        app.load_file(&path);

        let text = draw(&mut app);

        assert!(text.contains(" Error "));
        assert!(text.contains("Missing required column(s): Profit"));
        assert!(!text.contains("Data Health Check"));
        assert!(!text.contains("Total Sales"));
        assert!(!text.contains("Performance by Category"));
        assert!(!text.contains("Monthly Sales Trend"));
    }

    #[test]
    fn test_ready_draws_all_panels() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "sales.csv", SALES);
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.cancel_prompt();
        app.load_file(&path);

        let text = draw(&mut app);

        assert!(text.contains("Data Health Check"));
        assert!(text.contains("Clean data!"));
        assert!(text.contains("Total Sales"));
        assert!(text.contains("$350.00"));
        assert!(text.contains("14.29%"));
        assert!(text.contains("Performance by Category"));
        assert!(text.contains("Monthly Sales Trend"));
        assert!(!text.contains("Panel unavailable"));

        let health = text.find("Data Health Check").unwrap();
        let summary = text.find("Total Sales").unwrap();
        let categories = text.find("Performance by Category").unwrap();
        let trend = text.find("Monthly Sales Trend").unwrap();
        assert!(health < summary && summary < categories && categories < trend);
    }

    #[test]
    fn test_failed_panel_keeps_the_others() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "sales.csv", SALES);
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.cancel_prompt();
        app.load_file(&path);
        if let DashboardState::Ready(dashboard) = &mut app.state {
            dashboard.summary = Err("Sales total is too large to compute exactly".into());
        }

        let text = draw(&mut app);

        assert!(text.contains(" Business Summary "));
        assert!(text.contains("Panel unavailable"));
        assert!(text.contains("Sales total is too large to compute exactly"));
        assert!(!text.contains("Total Sales"));
        assert!(text.contains("Data Health Check"));
        assert!(text.contains("Performance by Category"));
        assert!(text.contains("Monthly Sales Trend"));
    }
}
