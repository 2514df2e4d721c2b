//! salesdash - Terminal dashboard for retail sales data
//!
//! This library loads a retail sales CSV, checks its schema and computes
//! four independent analyses: a data health check, business totals with
//! profit margin, per-category performance and a monthly sales trend.
//! The results can be printed, exported or browsed in a terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money and the typed, column-oriented dataset
//! - `services`: CSV loading and schema validation
//! - `reports`: The dashboard analyses
//! - `display`: Text formatting helpers
//! - `export`: CSV, JSON and YAML export
//! - `logging`: tracing subscriber setup
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use salesdash::config::Settings;
//! use salesdash::reports::Dashboard;
//!
//! let settings = Settings::default();
//! let dashboard = Dashboard::from_path(Path::new("sales.csv"), &settings)?;
//! println!("{}", dashboard.format_terminal(&settings.currency_symbol));
//! # Ok::<(), salesdash::error::DashError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{DashError, DashResult};
