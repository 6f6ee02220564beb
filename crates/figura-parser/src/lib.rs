//! # Figura Parser
//!
//! Turns loosely formatted diagram text into validated primitives:
//!
//! 1. **Extract** - find every `{...}` object in the text ([`extract`])
//! 2. **Canonicalize** - lowercase and strip whitespace ([`canonical`])
//! 3. **Validate** - check against the primitive schema ([`validate`])
//!
//! Malformed input never aborts the pipeline. Every problem becomes a
//! [`error::Diagnostic`] in the caller's [`error::DiagnosticCollector`] and
//! only the affected record is dropped.
//!
//! ## Usage
//!
//! ```
//! use figura_parser::{error::DiagnosticCollector, parse};
//!
//! let source = r#"
//!     {primitive: "circle", x: 50, y: 50, radius: 10, fill_color: "Light Blue"}
//!     {primitive: "hexagon"}
//! "#;
//!
//! let mut sink = DiagnosticCollector::new();
//! let primitives = parse(source, &mut sink);
//! assert_eq!(primitives.len(), 1);
//! assert!(sink.has_errors());
//! ```

pub mod canonical;
pub mod error;
pub mod extract;
pub mod record;
pub mod schema;
mod span;
pub mod validate;

pub use span::{Span, Spanned};

use figura_core::semantic::ValidatedPrimitive;
use log::{debug, info};

use crate::{error::DiagnosticCollector, record::Record};

/// Parse source text into validated primitives, in source order.
///
/// Records that fail extraction or validation are skipped; their diagnostics,
/// and the warnings of the records that were kept, go to `sink`.
pub fn parse(source: &str, sink: &mut DiagnosticCollector) -> Vec<Spanned<ValidatedPrimitive>> {
    let records = extract::extract_records(source, sink);
    info!(records = records.len(); "Extracted records");
    validate_records(records, sink)
}

/// Canonicalize and validate already extracted records, in order.
///
/// # Examples
///
/// ```
/// use figura_parser::{error::DiagnosticCollector, record::{Record, Value}, validate_records};
///
/// let point: Record = [("PRIMITIVE", Value::from("Point")), ("x", 1.into()), ("y", 2.into())]
///     .into_iter()
///     .collect();
///
/// let mut sink = DiagnosticCollector::new();
/// let primitives = validate_records(vec![point], &mut sink);
/// assert_eq!(primitives.len(), 1);
/// assert_eq!(primitives[0].span(), None);
/// ```
pub fn validate_records(
    records: impl IntoIterator<Item = Record>,
    sink: &mut DiagnosticCollector,
) -> Vec<Spanned<ValidatedPrimitive>> {
    let mut primitives = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let canonical = canonical::canonicalize(&record);
        match validate::validate(&canonical, sink) {
            Ok(primitive) => {
                debug!(index, kind = primitive.kind().as_str(); "Record accepted");
                primitives.push(Spanned::new(primitive, record.span()));
            }
            Err(diagnostic) => {
                debug!(index, code:? = diagnostic.code(); "Record dropped");
                sink.emit(diagnostic);
            }
        }
    }
    primitives
}
