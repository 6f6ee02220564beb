//! Error and diagnostic system for the Figura parser.
//!
//! The parser never aborts on malformed input. Every problem is reported as a
//! [`Diagnostic`] pushed into a [`DiagnosticCollector`] that the caller passes
//! into the extractor and the validator:
//!
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source text
//! - The offending attribute and value, when there is one
//! - Severity levels: errors drop a record, warnings keep it
//!
//! # Example
//!
//! ```
//! # use figura_parser::error::{Diagnostic, ErrorCode};
//! # use figura_parser::Span;
//!
//! let diag = Diagnostic::error("missing required attribute 'x' in 'point' primitive")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(0..24), "in this record")
//!     .with_help("add \"x\": <number in [0, 100]>");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
