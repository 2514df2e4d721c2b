//! CLI command for showing and initialising configuration

use std::path::Path;

use crate::config::{DashPaths, Settings};
use crate::error::DashResult;

/// Print paths and effective settings, optionally writing the defaults first
///
/// `settings_file` is the file in effect: the default one under the config
/// directory, or the one passed with `--config`.
pub fn handle_config_command(
    paths: &DashPaths,
    settings_file: &Path,
    settings: &Settings,
    init: bool,
) -> DashResult<()> {
    if init {
        Settings::default().save_to(settings_file)?;
        println!("Default settings written to: {}", settings_file.display());
        println!();
    }

    println!("salesdash Configuration");
    println!("=======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", settings_file.display());
    println!(
        "Log file:         {}",
        paths.log_dir().join(paths.log_file_name()).display()
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date formats:      {}", settings.date_formats.join(", "));
    println!("  Unknown category:  {}", settings.unknown_category_label);
    println!("  Fill empty months: {}", settings.fill_empty_months);
    println!("  Delimiter:         {:?}", settings.delimiter);
    println!("  Log level:         {}", settings.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_config_command(&paths, &paths.settings_file(), &Settings::default(), true)
            .unwrap();

        assert!(paths.settings_file().exists());
        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_config_init_custom_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashPaths::with_base_dir(temp_dir.path().join("default"));
        let custom = temp_dir.path().join("custom").join("dash.json");

        handle_config_command(&paths, &custom, &Settings::default(), true).unwrap();

        assert!(custom.exists());
        assert!(!paths.settings_file().exists());
    }
}
