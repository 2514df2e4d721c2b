//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, dashboard body, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line with the loaded file
    pub header: Rect,
    /// Dashboard panels, prompt or error
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            body: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Panel regions once a dataset is loaded
pub struct DashboardLayout {
    /// Data health panel
    pub health: Rect,
    /// Business summary metrics
    pub summary: Rect,
    /// Category table
    pub categories: Rect,
    /// Monthly trend chart
    pub trend: Rect,
}

impl DashboardLayout {
    /// Stack the panels top to bottom: health, summary, categories, trend
    ///
    /// The health panel gets `health_height` rows; categories and the chart
    /// share what is left after the summary.
    pub fn new(area: Rect, health_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(health_height), // Health
                Constraint::Length(3),             // Summary metrics
                Constraint::Fill(1),               // Categories
                Constraint::Fill(1),               // Chart
            ])
            .split(area);

        Self {
            health: rows[0],
            summary: rows[1],
            categories: rows[2],
            trend: rows[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
