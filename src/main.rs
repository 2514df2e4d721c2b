use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use salesdash::cli::{handle_config_command, handle_export_command, handle_report_command};
use salesdash::config::{DashPaths, Settings};
use salesdash::export::ExportFormat;
use salesdash::logging;

#[derive(Parser)]
#[command(
    name = "salesdash",
    version,
    about = "Terminal dashboard for retail sales CSV files",
    long_about = "salesdash loads a retail sales CSV (Order Date, Sales, Profit, \
                  Category) and shows a data health check, business totals, \
                  per-category performance and the monthly sales trend."
)]
struct Cli {
    /// Settings file to use instead of the default config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level or filter directive (overrides the settings file)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard as plain text
    Report {
        /// CSV file to analyse
        file: PathBuf,
    },

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        /// CSV file to open on start
        file: Option<PathBuf>,
    },

    /// Write the computed dashboard to a file or stdout
    Export {
        /// CSV file to analyse
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = DashPaths::new()?;
    let settings_file = cli
        .config
        .clone()
        .unwrap_or_else(|| paths.settings_file());
    let settings = Settings::load_from(&settings_file)?;
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);

    match cli.command {
        Some(Commands::Tui { file }) => {
            // The dashboard owns the screen, so logs go to a file
            let _guard = logging::init_file(&paths, level)?;
            debug!(settings = %settings_file.display(), "Settings loaded");
            salesdash::tui::run_tui(&settings, file.as_deref())?;
        }
        Some(Commands::Report { file }) => {
            logging::init_stderr(level)?;
            handle_report_command(&file, &settings)?;
        }
        Some(Commands::Export {
            file,
            format,
            output,
        }) => {
            logging::init_stderr(level)?;
            handle_export_command(&file, format, output, &settings)?;
        }
        Some(Commands::Config { init }) => {
            logging::init_stderr(level)?;
            handle_config_command(&paths, &settings_file, &settings, init)?;
        }
        None => {
            println!("salesdash - Terminal dashboard for retail sales CSV files");
            println!();
            println!("Run 'salesdash --help' for usage information.");
            println!("Run 'salesdash tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
