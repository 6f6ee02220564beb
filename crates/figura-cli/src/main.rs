//! Command-line entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error};

use figura_cli::{Args, error_adapter};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match figura_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            for report in error_adapter::to_reports(&err) {
                error!("{}", error_adapter::render(report.as_ref()));
            }
            ExitCode::FAILURE
        }
    }
}

/// An unknown `--log-level` falls back to `warn`.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
