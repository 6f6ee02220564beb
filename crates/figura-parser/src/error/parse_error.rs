//! The ParseError type for wrapping diagnostics.
//!
//! [`ParseError`] wraps the diagnostics of a compilation when the caller asks
//! for the strict behaviour, where any error-level diagnostic fails the run.

use std::fmt;

use crate::error::Diagnostic;

/// Error type wrapping one or more diagnostics.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_error())
            .count()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first_error = self
            .diagnostics
            .iter()
            .find(|d| d.severity().is_error())
            .or(self.diagnostics.first());
        if let Some(first) = first_error {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error("test error").with_code(ErrorCode::E101);
        let err = ParseError::new(vec![diag]);

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.error_count(), 1);
    }

    #[test]
    fn test_parse_error_display_skips_leading_warnings() {
        let diags = vec![
            Diagnostic::warning("unknown attribute 'foo'"),
            Diagnostic::error("first error"),
            Diagnostic::error("second error"),
        ];
        let err = ParseError::new(diags);

        assert_eq!(err.to_string(), "error: first error (+2 more)");
        assert_eq!(err.error_count(), 2);
    }
}
