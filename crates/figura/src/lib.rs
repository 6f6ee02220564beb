//! Figura - compile loosely formatted primitive records into 2-D diagrams.
//!
//! Input text holds flat `{ "attr": value }` records, each describing one
//! geometric primitive on a fixed 100x100 user space. Figura extracts and
//! validates the records, renders the valid ones into drawing commands and
//! exports the result as SVG or PNG. A bad record is reported and skipped;
//! it never aborts the rest of the diagram.

pub mod config;
pub mod export;
pub mod render;
pub mod viewport;

mod diagram;
mod error;

pub use figura_core::{color, draw, geometry, semantic};
pub use figura_parser::{Span, Spanned, error as diagnostics, record};

pub use diagram::{Compilation, Diagram};
pub use error::FiguraError;

use std::path::Path;

use log::{debug, info, trace};

use figura_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};

use config::AppConfig;
use export::{ExportFormat, Exporter, png::PngFile, svg::Svg, svg::SvgFile};
use record::Record;
use render::Renderer;
use viewport::Viewport;

/// Input accepted by the compiler: raw text or already extracted records.
#[derive(Debug, Clone)]
pub enum DiagramSource<'a> {
    /// Free-form text scanned for records.
    Text(&'a str),
    /// Records built by the caller, processed in order.
    Records(Vec<Record>),
}

impl<'a> From<&'a str> for DiagramSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Record>> for DiagramSource<'_> {
    fn from(records: Vec<Record>) -> Self {
        Self::Records(records)
    }
}

/// Builder for compiling and exporting Figura diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use figura::{DiagramBuilder, config::AppConfig, viewport::Viewport};
///
/// let source = r#"{"primitive": "circle", "x": 50, "y": 50, "radius": 20}"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Compile source to drawing commands
/// let compilation = builder.compile(source, Viewport::default())
///     .expect("Failed to compile");
///
/// // Render to an SVG string
/// let svg = builder.render_svg(compilation.diagram())
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render, style and export settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile a source into ordered drawing commands.
    ///
    /// Records are extracted, canonicalized, validated and rendered in input
    /// order. Every problem with a single record is collected as a diagnostic
    /// on the returned [`Compilation`]; the record is skipped and compilation
    /// goes on. Reporting the diagnostics is left to the caller.
    /// The result is deterministic for a given source and configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - Text or a record list
    /// * `viewport` - The part of user space the diagram is viewed through
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Config`] if the render configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figura::{DiagramBuilder, viewport::Viewport};
    ///
    /// let builder = DiagramBuilder::default();
    /// let compilation = builder
    ///     .compile(r#"{primitive: "point", x: 10, y: 20}"#, Viewport::default())
    ///     .unwrap();
    /// assert_eq!(compilation.diagram().len(), 1);
    /// assert!(compilation.diagnostics().is_empty());
    /// ```
    pub fn compile<'a>(
        &self,
        source: impl Into<DiagramSource<'a>>,
        viewport: Viewport,
    ) -> Result<Compilation, FiguraError> {
        let renderer = Renderer::new(self.config.render())?;
        let mut sink = DiagnosticCollector::new();

        info!(viewport:% = viewport; "Compiling diagram");
        let primitives = match source.into() {
            DiagramSource::Text(text) => figura_parser::parse(text, &mut sink),
            DiagramSource::Records(records) => {
                figura_parser::validate_records(records, &mut sink)
            }
        };
        debug!(primitives = primitives.len(); "Records validated");

        let mut commands = Vec::new();
        for primitive in &primitives {
            match renderer.render(primitive) {
                Ok(rendered) => commands.extend(rendered),
                Err(err) => sink.emit(
                    Diagnostic::error(err.to_string())
                        .with_code(ErrorCode::E200)
                        .with_optional_label(primitive.span(), "in this primitive"),
                ),
            }
        }

        let diagram = Diagram::new(commands, viewport);
        info!(
            commands = diagram.len(),
            diagnostics = sink.diagnostics().len(),
            dropped = sink.has_errors();
            "Diagram compiled"
        );
        trace!(diagram:?; "Compiled diagram");

        Ok(Compilation::new(diagram, sink))
    }

    /// Render a compiled diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Export`] if the configured background color is invalid.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, FiguraError> {
        let svg = Svg::new(self.config.style())?;
        Ok(svg.render_document(diagram).to_string())
    }

    /// Render a compiled diagram to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Export`] if rasterization fails.
    pub fn render_png(&self, diagram: &Diagram) -> Result<Vec<u8>, FiguraError> {
        let svg = self.render_svg(diagram)?;
        Ok(export::png::rasterize(&svg, self.config.export().png_scale())?)
    }

    /// Compile a source and write it to `destination` in `format`.
    ///
    /// The format name is checked before anything else happens, so an
    /// unsupported format never touches the file system.
    ///
    /// # Arguments
    ///
    /// * `source` - Text or a record list
    /// * `format` - `svg` or `png`, case-insensitive
    /// * `destination` - Output file path
    /// * `viewport` - The part of user space to export
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::UnsupportedFormat`] for an unknown format, or
    /// the errors of [`DiagramBuilder::compile`] and
    /// [`DiagramBuilder::write_diagram`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use figura::{DiagramBuilder, viewport::Viewport};
    ///
    /// let builder = DiagramBuilder::default();
    /// let result = builder.export("{}", "bmp", Path::new("out.bmp"), Viewport::default());
    /// assert!(result.is_err());
    /// ```
    pub fn export<'a>(
        &self,
        source: impl Into<DiagramSource<'a>>,
        format: &str,
        destination: &Path,
        viewport: Viewport,
    ) -> Result<Compilation, FiguraError> {
        let format: ExportFormat = format.parse()?;
        let compilation = self.compile(source, viewport)?;
        self.write_diagram(compilation.diagram(), format, destination)?;
        Ok(compilation)
    }

    /// Write an already compiled diagram to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Export`] if rendering or writing the file fails.
    pub fn write_diagram(
        &self,
        diagram: &Diagram,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<(), FiguraError> {
        info!(format:% = format, destination:? = destination; "Exporting diagram");
        let svg = Svg::new(self.config.style())?;
        let mut exporter: Box<dyn Exporter> = match format {
            ExportFormat::Svg => Box::new(SvgFile::new(destination, svg)),
            ExportFormat::Png => Box::new(PngFile::new(
                destination,
                svg,
                self.config.export().png_scale(),
            )),
        };
        exporter.export_diagram(diagram)?;

        info!("Diagram exported successfully");
        Ok(())
    }
}
