//! miette reports for figura diagnostics and run errors.
//!
//! A record-level [`Diagnostic`] becomes a [`RecordReport`] that points at the
//! record's `{...}` candidate in the source and names the offending attribute
//! in its label. Everything that aborts a whole run becomes a [`RunReport`]
//! with a `figura::*` code.

use std::fmt;

use log::{Level, log};
use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceSpan,
};

use figura::FiguraError;
use figura_parser::{
    Span,
    error::{self, Diagnostic, Label},
};

/// One record diagnostic, with the source it points into.
pub struct RecordReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> RecordReport<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }

    /// The label message, extended with the attribute the diagnostic is about.
    fn label_text(&self, label: &Label) -> String {
        match (self.diag.attribute(), self.diag.value()) {
            (Some(name), Some(value)) => format!("{}: {name} = {value}", label.message()),
            (Some(name), None) => format!("{}: {name}", label.message()),
            _ => label.message().to_string(),
        }
    }
}

impl fmt::Debug for RecordReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordReport")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for RecordReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for RecordReport<'_> {}

impl MietteDiagnostic for RecordReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.diag.severity() {
            error::Severity::Error => Severity::Error,
            error::Severity::Warning => Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            LabeledSpan::new_primary_with_span(
                Some(self.label_text(label)),
                source_span(label.span()),
            )
        })))
    }
}

/// An error that stopped the run before anything was written.
#[derive(Debug)]
pub struct RunReport<'a>(pub &'a FiguraError);

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for RunReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for RunReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FiguraError::Io(_) => "figura::io",
            FiguraError::Parse { .. } => "figura::strict",
            FiguraError::UnsupportedFormat(_) => "figura::format",
            FiguraError::InvalidViewport(_) => "figura::viewport",
            FiguraError::Config(_) => "figura::config",
            FiguraError::Export(_) => "figura::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FiguraError::UnsupportedFormat(_) => Some(Box::new(
                "pass --format svg or --format png, or use a .svg/.png output file",
            )),
            FiguraError::InvalidViewport(_) => Some(Box::new(
                "the viewport is xmin,ymin,xmax,ymax with xmin < xmax and ymin < ymax",
            )),
            FiguraError::Parse { .. } => Some(Box::new(
                "drop --strict to write the diagram without the rejected records",
            )),
            _ => None,
        }
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Reports for a failed run.
///
/// A strict-mode failure yields one report per diagnostic, warnings
/// included, followed by a summary. Every other error is a single report.
pub fn to_reports(err: &FiguraError) -> Vec<Box<dyn MietteDiagnostic + '_>> {
    let mut reports: Vec<Box<dyn MietteDiagnostic + '_>> = Vec::new();
    if let FiguraError::Parse { err: parse_err, src } = err {
        for diag in parse_err.diagnostics() {
            reports.push(Box::new(RecordReport::new(diag, src)));
        }
    }
    reports.push(Box::new(RunReport(err)));
    reports
}

/// Render a report with miette's graphical handler.
pub fn render(report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut out, report)
        .is_err()
    {
        out = report.to_string();
    }
    out
}

/// Log every diagnostic of a compilation, each at its own severity.
pub fn report_diagnostics(diagnostics: &[Diagnostic], src: &str) {
    for diag in diagnostics {
        let level = Level::from(diag.severity());
        log!(level, "{}", render(&RecordReport::new(diag, src)));
    }
}
