//! CLI command for the plain text dashboard

use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::error::DashResult;
use crate::reports::Dashboard;

/// Load a file and print every dashboard section to stdout
pub fn handle_report_command(file: &Path, settings: &Settings) -> DashResult<()> {
    let report = render_report(file, settings)?;
    print!("{}", report);
    Ok(())
}

/// Build the text report without printing it
pub fn render_report(file: &Path, settings: &Settings) -> DashResult<String> {
    let dashboard = Dashboard::from_path(file, settings)?;
    if !dashboard.is_complete() {
        info!("Some dashboard panels could not be computed");
    }
    Ok(dashboard.format_terminal(&settings.currency_symbol))
}
