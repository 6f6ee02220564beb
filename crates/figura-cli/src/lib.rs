//! Figura CLI library
//!
//! This module contains the core CLI logic for the Figura diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use log::{info, warn};

use figura::{DiagramBuilder, FiguraError, export::ExportFormat};

/// Run the Figura CLI application
///
/// This function compiles the input through the Figura pipeline and writes
/// the result to the output file in the requested format.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FiguraError` for:
/// - An unsupported output format (checked before any input is read)
/// - File I/O errors
/// - Configuration loading errors
/// - Dropped records, when `--strict` is set
/// - Rendering and export errors
///
/// Diagnostics of a run that goes on to write the diagram are logged as
/// miette reports, each at its own severity.
pub fn run(args: &Args) -> Result<(), FiguraError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let format = resolve_format(args)?;
    let app_config = config::load_config(args.config.as_ref())?;
    let source = read_source(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let compilation = builder.compile(source.as_str(), args.viewport.unwrap_or_default())?;

    // A strict failure reports its diagnostics through the returned error.
    if !(args.strict && compilation.has_errors()) {
        error_adapter::report_diagnostics(compilation.diagnostics(), &source);
    }

    let diagram = if args.strict {
        compilation
            .into_strict()
            .map_err(|err| FiguraError::new_parse_error(err, source.as_str()))?
    } else {
        if compilation.has_errors() {
            warn!("Some records were dropped; pass --strict to fail instead");
        }
        compilation.into_diagram()
    };

    builder.write_diagram(&diagram, format, Path::new(&args.output))?;

    info!(output_file = args.output, format:% = format; "Diagram exported successfully");

    Ok(())
}

/// Picks the export format: `--format` first, then the output file
/// extension, then SVG.
fn resolve_format(args: &Args) -> Result<ExportFormat, FiguraError> {
    match &args.format {
        Some(format) => Ok(format.parse()?),
        None => Ok(ExportFormat::from_path(Path::new(&args.output)).unwrap_or(ExportFormat::Svg)),
    }
}

/// Reads the input file, or standard input for `-`.
fn read_source(input: &str) -> Result<String, FiguraError> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}
