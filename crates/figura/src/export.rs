//! Export functionality for Figura diagrams.
//!
//! This module provides the [`Exporter`] trait implemented by every output
//! backend, and [`ExportFormat`] for choosing one from user input.
//!
//! # Available Backends
//!
//! - [`svg`] - SVG documents via the `svg` crate
//! - [`png`] - PNG images rasterized by `resvg` from the SVG document

pub mod png;
pub mod svg;

use std::{fmt, path::Path, str::FromStr};

use thiserror::Error;

use crate::Diagram;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Writes `diagram` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

/// A format name that is neither `svg` nor `png`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported export format `{0}`, expected one of: svg, png")]
pub struct UnsupportedFormat(pub String);

/// Output file formats.
///
/// # Examples
///
/// ```
/// use figura::export::ExportFormat;
///
/// assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
/// assert!("bmp".parse::<ExportFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Infers the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
