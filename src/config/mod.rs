//! Configuration module for salesdash
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings loading and persistence

pub mod paths;
pub mod settings;

pub use paths::DashPaths;
pub use settings::Settings;
