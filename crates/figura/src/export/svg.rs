//! SVG rendering of drawing commands.
//!
//! The document's `viewBox` is the diagram's viewport and its width and
//! height are the viewport size in user units. A background rectangle covers
//! the viewport. Arrowheads are shared `<marker>` definitions, one per
//! distinct size and color.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use figura_core::{
    color::{Color, Paint},
    draw::{ArrowHead, DrawCommand},
};

use crate::{
    Diagram,
    config::StyleConfig,
    export::{self, Exporter},
};

macro_rules! apply_style {
    ($element:expr, $style:expr) => {{
        let style = $style;
        let mut elem = figura_core::apply_stroke!($element, style.stroke())
            .set("fill", style.fill().to_svg_value());

        let fill_alpha = style.fill().alpha();
        if fill_alpha < 1.0 {
            elem = elem.set("fill-opacity", fill_alpha);
        }
        if style.opacity() < 1.0 {
            elem = elem.set("opacity", style.opacity());
        }
        if let Some(rotation) = style.rotation() {
            elem = elem.set("transform", rotation.to_svg_value());
        }

        elem
    }};
}

/// Converts diagrams into SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Paint,
}

impl Svg {
    /// Creates an SVG renderer using the configured background color.
    ///
    /// The background defaults to white.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// cannot be parsed.
    pub fn new(style: &StyleConfig) -> Result<Self, export::Error> {
        let background = match style.background_color().map_err(export::Error::Render)? {
            Some(color) => color,
            None => Color::new("white").map_err(export::Error::Render)?,
        };
        Ok(Self {
            background: Paint::Color(background),
        })
    }

    /// Renders the full document for `diagram`.
    pub fn render_document(&self, diagram: &Diagram) -> Document {
        let viewport = diagram.viewport();
        let bounds = viewport.bounds();

        let mut doc = Document::new()
            .set("viewBox", viewport.to_view_box())
            .set("width", viewport.width())
            .set("height", viewport.height());

        let mut background = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", self.background.to_svg_value());
        if self.background.alpha() < 1.0 {
            background = background.set("fill-opacity", self.background.alpha());
        }
        doc = doc.add(background);

        let markers = collect_markers(diagram);
        if !markers.is_empty() {
            doc = doc.add(marker_definitions(&markers));
        }

        for command in diagram.commands() {
            doc = doc.add(render_command(command, &markers));
        }

        debug!(commands = diagram.len(), markers = markers.len(); "SVG document rendered");
        doc
    }
}

/// Writes diagrams to an SVG file.
#[derive(Debug)]
pub struct SvgFile {
    path: PathBuf,
    svg: Svg,
}

impl SvgFile {
    pub fn new(path: impl AsRef<Path>, svg: Svg) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            svg,
        }
    }

    /// Writes an SVG document to the target file.
    fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let file_name = self.path.display().to_string();
        info!(file_name; "Creating SVG file");

        let f = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for SvgFile {
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), export::Error> {
        let doc = self.svg.render_document(diagram);
        self.write_document(&doc)
    }
}

/// Distinct arrowheads in order of first use.
fn collect_markers(diagram: &Diagram) -> Vec<ArrowHead> {
    let mut markers = Vec::new();
    for command in diagram.commands() {
        if let DrawCommand::Line {
            marker_end: Some(head),
            ..
        } = command
        {
            if !markers.contains(head) {
                markers.push(*head);
            }
        }
    }
    markers
}

fn marker_id(index: usize) -> String {
    format!("arrowhead-{index}")
}

fn marker_definitions(markers: &[ArrowHead]) -> svg_element::Definitions {
    markers
        .iter()
        .enumerate()
        .fold(svg_element::Definitions::new(), |defs, (index, head)| {
            let mut path = svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", head.paint().to_svg_value());
            if head.paint().alpha() < 1.0 {
                path = path.set("fill-opacity", head.paint().alpha());
            }

            let marker = svg_element::Marker::new()
                .set("id", marker_id(index))
                .set("viewBox", "0 0 10 10")
                .set("refX", 5)
                .set("refY", 5)
                .set("markerUnits", "userSpaceOnUse")
                .set("markerWidth", head.size())
                .set("markerHeight", head.size())
                .set("orient", "auto-start-reverse")
                .add(path);

            defs.add(marker)
        })
}

fn render_command(command: &DrawCommand, markers: &[ArrowHead]) -> Box<dyn svg::Node> {
    match command {
        DrawCommand::Line {
            from,
            to,
            style,
            marker_end,
        } => {
            let mut line = svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y());
            if let Some(index) =
                marker_end.and_then(|head| markers.iter().position(|marker| *marker == head))
            {
                line = line.set("marker-end", format!("url(#{})", marker_id(index)));
            }
            Box::new(apply_style!(line, style))
        }
        DrawCommand::Circle {
            center,
            radius,
            style,
        } => {
            let circle = svg_element::Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", *radius);
            Box::new(apply_style!(circle, style))
        }
        DrawCommand::Rectangle { bounds, style } => {
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height());
            Box::new(apply_style!(rect, style))
        }
        DrawCommand::Polygon { points, style } => {
            let points = points
                .iter()
                .map(|point| format!("{},{}", point.x(), point.y()))
                .collect::<Vec<_>>()
                .join(" ");
            let polygon = svg_element::Polygon::new().set("points", points);
            Box::new(apply_style!(polygon, style))
        }
    }
}

#[cfg(test)]
mod tests {
    use figura_core::{
        draw::{Rotation, StrokeDefinition, StrokeStyle, Style},
        geometry::{Bounds, Point},
    };

    use super::*;
    use crate::viewport::Viewport;

    fn black() -> Paint {
        Paint::Color(Color::default())
    }

    fn style() -> Style {
        Style::new(StrokeDefinition::new(black(), 0.2), Paint::None, 1.0)
    }

    fn render(commands: Vec<DrawCommand>, viewport: Viewport) -> String {
        let svg = Svg::new(&StyleConfig::default()).unwrap();
        svg.render_document(&Diagram::new(commands, viewport))
            .to_string()
    }

    #[test]
    fn test_empty_document_has_background_and_view_box() {
        let doc = render(Vec::new(), Viewport::default());
        assert!(doc.contains(r#"viewBox="0 0 100 100""#));
        assert!(doc.contains(r##"fill="#ffffff""##));
        assert!(!doc.contains("<marker"));
    }

    #[test]
    fn test_viewport_crops_without_rerender() {
        let line = DrawCommand::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 100.0),
            style: style(),
            marker_end: None,
        };
        let doc = render(vec![line], Viewport::new(25.0, 25.0, 75.0, 75.0).unwrap());
        assert!(doc.contains(r#"viewBox="25 25 50 50""#));
        assert!(doc.contains(r#"x2="100""#));
    }

    #[test]
    fn test_arrow_markers_are_shared() {
        let head = ArrowHead::new(3.5, black());
        let arrow = |from: Point, to: Point| DrawCommand::Line {
            from,
            to,
            style: style(),
            marker_end: Some(head),
        };
        let doc = render(
            vec![
                arrow(Point::new(10.0, 10.0), Point::new(90.0, 10.0)),
                arrow(Point::new(90.0, 10.0), Point::new(10.0, 10.0)),
            ],
            Viewport::default(),
        );

        assert_eq!(doc.matches("<marker").count(), 1);
        assert_eq!(doc.matches("url(#arrowhead-0)").count(), 2);
        assert!(doc.contains(r#"orient="auto-start-reverse""#));
        assert!(doc.contains(r#"markerUnits="userSpaceOnUse""#));
        assert!(doc.contains(r#"markerWidth="3.5""#));
    }

    #[test]
    fn test_style_attributes() {
        let styled = Style::new(
            StrokeDefinition::new(black(), 2.0).with_style(StrokeStyle::Dashed(3.0)),
            Paint::Color(Color::new("red").unwrap()),
            0.5,
        )
        .with_rotation(Rotation::new(45.0, Point::new(50.0, 50.0)));
        let rect = DrawCommand::Rectangle {
            bounds: Bounds::from_corners(Point::new(10.0, 10.0), Point::new(30.0, 20.0)),
            style: styled,
        };
        let doc = render(vec![rect], Viewport::default());

        assert!(doc.contains(r#"width="20""#));
        assert!(doc.contains(r#"height="10""#));
        assert!(doc.contains(r##"fill="#ff0000""##));
        assert!(doc.contains(r#"stroke-width="2""#));
        assert!(doc.contains(r#"stroke-dasharray="3""#));
        assert!(doc.contains(r#"opacity="0.5""#));
        assert!(doc.contains(r#"transform="rotate(45 50 50)""#));
    }

    #[test]
    fn test_polygon_points() {
        let triangle = DrawCommand::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 8.5),
            ],
            style: style(),
        };
        let doc = render(vec![triangle], Viewport::default());
        assert!(doc.contains(r#"points="0,0 10,0 5,8.5""#));
    }

    #[test]
    fn test_invalid_background() {
        let style = StyleConfig::new(Some("nope".to_string()));
        assert!(matches!(Svg::new(&style), Err(export::Error::Render(_))));
    }
}
