//! Command-line interface entry point for `UniRecords`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uni_records::config::Config;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let level = if args.debug_flag {
        LevelFilter::DEBUG
    } else {
        args.log_level
            .map(LevelFilter::from)
            .or_else(|| parse_level(&config.logging.level))
            .unwrap_or(LevelFilter::WARN)
    };

    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };
    init_tracing(
        level,
        args.log_file.as_deref().or(config_log_path.as_deref()),
        verbose,
    );

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Admin {
            password,
            subcommand,
        } => commands::admin::run(subcommand, password, &config, verbose),
        Command::Student {
            id,
            password,
            subcommand,
        } => commands::student::run(id, password, subcommand, &config, verbose),
        Command::Instructor {
            id,
            password,
            subcommand,
        } => commands::instructor::run(id, password, subcommand, &config, verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` directives, when set, refine the chosen level. Logs go to
/// stderr unless a log file is given and can be opened.
fn init_tracing(level: LevelFilter, log_path: Option<&Path>, verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if let Some(log_path) = log_path {
        match open_log_file(log_path) {
            Ok(file) => {
                builder.with_writer(Mutex::new(file)).with_ansi(false).init();
                if verbose {
                    eprintln!("✓ File logging initialized at: {}", log_path.display());
                } else {
                    info!("File logging initialized at: {}", log_path.display());
                }
                return;
            }
            Err(e) => {
                eprintln!(
                    "✗ Failed to initialize file logging at {}: {e}",
                    log_path.display()
                );
            }
        }
    }

    builder.with_writer(std::io::stderr).init();
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        _ => None,
    }
}
