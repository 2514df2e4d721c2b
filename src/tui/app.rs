//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Settings;
use crate::reports::Dashboard;

use super::widgets::input::TextInput;

/// What the dashboard area currently shows
#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    /// No file loaded yet
    #[default]
    Empty,
    /// The last load or schema check failed; no panel is drawn
    Failed(String),
    /// A dataset was loaded and analysed
    Ready(Box<Dashboard>),
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a file path into the prompt
    Editing,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current dashboard contents
    pub state: DashboardState,

    /// File the current state was produced from
    pub current_file: Option<PathBuf>,

    /// Current input mode
    pub input_mode: InputMode,

    /// File path prompt
    pub file_input: TextInput,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// First visible row of the category table
    pub category_scroll: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            state: DashboardState::Empty,
            current_file: None,
            input_mode: InputMode::Editing,
            file_input: TextInput::new()
                .label("CSV file")
                .placeholder("path/to/sales.csv")
                .focused(true),
            show_help: false,
            category_scroll: 0,
            status_message: None,
        }
    }

    /// Request that the app quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The loaded dashboard, if any
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.state {
            DashboardState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    /// Load a file and replace the dashboard
    ///
    /// Each load starts from scratch; nothing from the previous file is kept.
    pub fn load_file(&mut self, path: &Path) {
        self.category_scroll = 0;
        self.current_file = Some(path.to_path_buf());

        match Dashboard::from_path(path, self.settings) {
            Ok(dashboard) => {
                let message = format!(
                    "Loaded {} ({} rows)",
                    path.display(),
                    dashboard.health.row_count
                );
                self.state = DashboardState::Ready(Box::new(dashboard));
                self.set_status(message);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Dashboard load failed");
                self.state = DashboardState::Failed(e.to_string());
                self.set_status("Load failed");
            }
        }
    }

    /// Reload the current file
    pub fn reload(&mut self) {
        match self.current_file.clone() {
            Some(path) => {
                info!(path = %path.display(), "Reloading");
                self.load_file(&path);
            }
            None => self.set_status("No file to reload"),
        }
    }

    /// Show the file prompt
    pub fn open_prompt(&mut self) {
        self.input_mode = InputMode::Editing;
        self.file_input.focused = true;
    }

    /// Load the file typed into the prompt
    pub fn submit_prompt(&mut self) {
        let value = self.file_input.value().trim().to_string();
        if value.is_empty() {
            self.set_status("Enter a path to a .csv file");
            return;
        }

        self.input_mode = InputMode::Normal;
        self.file_input.focused = false;
        self.file_input.clear();
        self.load_file(Path::new(&value));
    }

    /// Leave the file prompt without loading
    pub fn cancel_prompt(&mut self) {
        self.input_mode = InputMode::Normal;
        self.file_input.focused = false;
        self.file_input.clear();
    }

    /// Number of rows in the category table
    pub fn category_count(&self) -> usize {
        self.dashboard()
            .and_then(|d| d.categories.as_ref().ok())
            .map(|c| c.rows.len())
            .unwrap_or(0)
    }

    /// Scroll the category table down
    pub fn scroll_down(&mut self) {
        let max = self.category_count().saturating_sub(1);
        if self.category_scroll < max {
            self.category_scroll += 1;
        }
    }

    /// Scroll the category table up
    pub fn scroll_up(&mut self) {
        self.category_scroll = self.category_scroll.saturating_sub(1);
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
