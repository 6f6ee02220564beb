//! The core diagnostic type for the Figura error system.
//!
//! A [`Diagnostic`] represents a single error or warning with an optional
//! error code, labeled source spans, the offending attribute and help text.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A structured diagnostic message.
///
/// # Example
///
/// ```text
/// error[E103]: attribute 'opacity' cannot have value '2'. Should be a number in [0, 1]
///   --> diagram.txt:3:1
///    |
///  3 | {"primitive": "circle", "x": 5, "y": 5, "radius": 2, "opacity": 2}
///    | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ record dropped
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    attribute: Option<String>,
    value: Option<String>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use figura_parser::error::{Diagnostic, ErrorCode};
    /// # use figura_parser::Span;
    ///
    /// let diag = Diagnostic::error("unknown primitive kind 'hexagon'")
    ///     .with_code(ErrorCode::E101)
    ///     .with_label(Span::new(0..10), "in this record")
    ///     .with_attribute("primitive", "hexagon");
    /// assert_eq!(diag.attribute(), Some("primitive"));
    /// assert_eq!(diag.value(), Some("hexagon"));
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the offending attribute name, if any.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Get the offending value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Point this diagnostic at `span`.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Point this diagnostic at `span` when it is known.
    pub fn with_optional_label(self, span: Option<Span>, message: impl Into<String>) -> Self {
        match span {
            Some(span) => self.with_label(span, message),
            None => self,
        }
    }

    /// Record the offending attribute and its value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self.value = Some(value.into());
        self
    }

    /// Record the offending attribute when it has no value (e.g. it is missing).
    pub fn with_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Create a new diagnostic with the given severity and message.
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            attribute: None,
            value: None,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
