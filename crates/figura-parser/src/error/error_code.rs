//! Error codes for the Figura diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Extraction diagnostics
//! - `E1xx` - Validation diagnostics
//! - `E2xx` - Rendering diagnostics

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Extraction (E0xx)
    // =========================================================================
    /// Unterminated object.
    ///
    /// A `{` was found with no `}` after it. The rest of the input is discarded.
    E001,

    /// Unparsable object.
    ///
    /// A `{...}` candidate could not be parsed, even after quoting bare keys.
    E002,

    // =========================================================================
    // Validation (E1xx)
    // =========================================================================
    /// Missing primitive kind.
    ///
    /// The record has no `primitive` attribute.
    E100,

    /// Unknown primitive kind.
    ///
    /// The `primitive` attribute does not name one of the supported kinds.
    E101,

    /// Missing required attribute.
    E102,

    /// Invalid attribute value.
    ///
    /// The value has the wrong type or lies outside the accepted range or set.
    E103,

    /// Unknown attribute.
    ///
    /// The attribute is not used by this primitive kind and is ignored.
    E104,

    /// Primitive invariant violated.
    ///
    /// For example, the two endpoints of a segment coincide.
    E105,

    // =========================================================================
    // Rendering (E2xx)
    // =========================================================================
    /// Render precondition violated.
    ///
    /// A primitive reached the renderer in a state it cannot draw.
    E200,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E200 => "E200",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
