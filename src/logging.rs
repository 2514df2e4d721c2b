//! Logging setup
//!
//! Text commands log to stderr so stdout stays clean for reports and
//! exports. The terminal dashboard owns the screen, so it logs to a file.

use std::io::stderr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DashPaths;
use crate::error::{DashError, DashResult};

/// Build the filter: `RUST_LOG` wins, then the explicit level
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr
pub fn init_stderr(level: &str) -> DashResult<()> {
    let layer = fmt::layer().with_target(false).with_writer(stderr);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init()
        .map_err(|e| DashError::Config(format!("Failed to initialise logging: {}", e)))
}

/// Log to `salesdash.log` in the config directory
///
/// The returned guard flushes the log when dropped; keep it alive for the
/// whole dashboard session.
pub fn init_file(paths: &DashPaths, level: &str) -> DashResult<WorkerGuard> {
    paths.ensure_directories()?;
    let appender = tracing_appender::rolling::never(paths.log_dir(), paths.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init()
        .map_err(|e| DashError::Config(format!("Failed to initialise logging: {}", e)))?;

    Ok(guard)
}
