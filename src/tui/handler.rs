//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Help overlay swallows everything except its own close keys
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.toggle_help(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('o') => app.open_prompt(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') | KeyCode::Home => app.category_scroll = 0,
        _ => {}
    }

    Ok(())
}

/// Handle keys while typing a file path
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => {
            // With nothing loaded there is nothing to go back to
            if app.current_file.is_none() {
                app.quit();
            } else {
                app.cancel_prompt();
            }
        }
        KeyCode::Backspace => app.file_input.backspace(),
        KeyCode::Delete => app.file_input.delete(),
        KeyCode::Left => app.file_input.move_left(),
        KeyCode::Right => app.file_input.move_right(),
        KeyCode::Home => app.file_input.move_start(),
        KeyCode::End => app.file_input.move_end(),
        KeyCode::Char(c) => app.file_input.insert(c),
        _ => {}
    }

    Ok(())
}
