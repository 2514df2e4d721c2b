//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod config;
pub mod export;
pub mod report;

pub use config::handle_config_command;
pub use export::handle_export_command;
pub use report::handle_report_command;
