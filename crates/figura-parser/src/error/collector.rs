//! Collector for accumulating diagnostics during a diagram compilation.
//!
//! The [`DiagnosticCollector`] is the sink every phase reports into. No phase
//! fails on the first problem; the caller inspects the collected diagnostics
//! afterwards.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics.
///
/// # Example
///
/// ```
/// # use figura_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
///
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(Diagnostic::warning("unknown attribute 'foo'").with_code(ErrorCode::E104));
/// assert!(!collector.has_errors());
/// assert_eq!(collector.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is added to the collection and if it's an error,
    /// the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any emitted diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns the diagnostics emitted so far, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, returns `Ok(())`.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_emit_warning_finish_ok() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("test warning"));

        assert!(!collector.has_errors());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_finish_with_errors() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(
            Diagnostic::error("test error")
                .with_code(ErrorCode::E102)
                .with_label(Span::new(10..20), "here"),
        );
        collector.emit(Diagnostic::warning("test warning"));
        assert!(collector.has_errors());

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "test error");
    }

    #[test]
    fn test_collector_preserves_order() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("first"));
        collector.emit(Diagnostic::error("second"));

        let messages: Vec<_> = collector
            .diagnostics()
            .iter()
            .map(|d| d.message().to_string())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
