//! Terminal User Interface module
//!
//! This module provides the interactive dashboard for salesdash using
//! ratatui: a file prompt, the four analysis panels and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
