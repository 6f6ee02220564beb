//! Source spans attached to diagnostics.

use crate::span::Span;

/// Marks the part of the source a diagnostic is about, usually the whole
/// `{...}` candidate of the record that was dropped or repaired.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
