//! The compiled diagram and the result of a compilation.

use figura_core::draw::DrawCommand;
use figura_parser::error::{Diagnostic, DiagnosticCollector, ParseError};

use crate::viewport::Viewport;

/// Ordered drawing commands plus the viewport they are viewed through.
///
/// Command order is paint order: later commands draw over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    commands: Vec<DrawCommand>,
    viewport: Viewport,
}

impl Diagram {
    pub fn new(commands: Vec<DrawCommand>, viewport: Viewport) -> Self {
        Self { commands, viewport }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the same commands viewed through another viewport.
    ///
    /// Nothing is re-rendered; only the crop changes.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A compiled diagram together with every diagnostic raised while building it.
#[derive(Debug)]
pub struct Compilation {
    diagram: Diagram,
    diagnostics: DiagnosticCollector,
}

impl Compilation {
    pub(crate) fn new(diagram: Diagram, diagnostics: DiagnosticCollector) -> Self {
        Self {
            diagram,
            diagnostics,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Diagnostics in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Returns `true` if any record was dropped.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    /// Returns the diagram only if no record was dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] holding every diagnostic, warnings included,
    /// when at least one of them is an error.
    pub fn into_strict(self) -> Result<Diagram, ParseError> {
        self.diagnostics.finish()?;
        Ok(self.diagram)
    }
}
