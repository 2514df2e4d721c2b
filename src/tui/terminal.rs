//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::error::DashError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// With a file the dashboard opens on it; otherwise it starts at the file
/// prompt.
pub fn run_tui(settings: &Settings, file: Option<&Path>) -> Result<()> {
    let mut app = App::new(settings);
    if let Some(path) = file {
        app.cancel_prompt();
        app.load_file(path);
    }

    let mut terminal = init_terminal()?;
    info!("Dashboard started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed
    restore_terminal()?;
    info!("Dashboard closed");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| DashError::Tui("Terminal event stream closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
