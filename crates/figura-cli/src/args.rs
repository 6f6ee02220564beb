//! Command-line argument definitions for the Figura CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the export format and
//! viewport, configuration file selection, and logging verbosity.

use clap::Parser;

use figura::viewport::Viewport;

/// Command-line arguments for the Figura diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file
    #[arg(help = "Path to the input file, or - to read standard input")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "diagram.svg")]
    pub output: String,

    /// Output format (svg or png); inferred from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Visible part of user space as xmin,ymin,xmax,ymax
    #[arg(long, allow_hyphen_values = true)]
    pub viewport: Option<Viewport>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail when any record is dropped instead of only reporting it
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
