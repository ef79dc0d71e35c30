#![forbid(unsafe_code)]

mod color;
mod config;
mod constants;
mod rules;
mod scheme;
mod sync;

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use rules::RuleSet;
use sync::SyncPaths;

/// Sync KWin titlebar color rules and generate their color schemes
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Location of the kwinrulesrc file to update
    #[arg(long, value_name = "PATH")]
    kwinrulesrc: PathBuf,

    /// Location of the template color scheme file
    #[arg(long, value_name = "PATH")]
    template: PathBuf,

    /// Existing directory to create the color scheme files in
    #[arg(long, value_name = "DIR")]
    color_scheme_dest: PathBuf,
}

impl From<Cli> for SyncPaths {
    fn from(cli: Cli) -> Self {
        Self {
            kwinrulesrc: cli.kwinrulesrc,
            template: cli.template,
            color_scheme_dest: cli.color_scheme_dest,
        }
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var(constants::logging::LEVEL_ENV)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() {
    // Usage errors exit here (status 2) before any file is touched
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let paths = SyncPaths::from(cli);
    let rules = RuleSet::builtin();

    match sync::run(&paths, &rules) {
        Ok(report) => {
            info!(
                rules = report.reconcile.rules_written,
                schemes = report.schemes_written.len(),
                "Titlebar colors synced"
            );
        }
        Err(err) => {
            error!("Titlebar sync failed: {err:?}");
            std::process::exit(1);
        }
    }
}
