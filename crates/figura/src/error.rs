//! Error types for Figura operations.
//!
//! This module provides the main error type [`FiguraError`] which wraps
//! the error conditions that abort a whole compile or export call. Problems
//! confined to a single record are diagnostics, not errors.

use std::io;

use thiserror::Error;

use figura_core::draw::SizeMappingError;
use figura_parser::error::ParseError;

use crate::{export::UnsupportedFormat, viewport::ViewportError};

/// The main error type for Figura operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries every diagnostic of a compilation together
/// with the source text, so callers can render labeled snippets. It is only
/// produced when the caller asks for strict handling.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{0}")]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FiguraError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<SizeMappingError> for FiguraError {
    fn from(error: SizeMappingError) -> Self {
        Self::Config(error.to_string())
    }
}

impl FiguraError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
