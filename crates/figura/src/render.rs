//! Turning validated primitives into drawing commands.
//!
//! The [`Renderer`] is stateless between calls: the same primitive always
//! yields the same command list. Each primitive is rendered on its own, so a
//! render failure never affects the commands of any other primitive.

mod extend;

pub use extend::extend_beyond_viewport;

use log::trace;
use thiserror::Error;

use figura_core::{
    draw::{ArrowHead, DrawCommand, Rotation, SizeMapping, StrokeDefinition, StrokeStyle, Style},
    geometry::{Bounds, Point},
    semantic::{
        ARROW_HEAD_SIZE_RANGE, Geometry, PrimitiveKind, STROKE_WIDTH_RANGE, ValidatedPrimitive,
    },
};

use crate::{FiguraError, config::RenderConfig};

/// A primitive that reached the renderer in a state it cannot draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("cannot extend from ({x}, {y}) along a zero or non-finite direction")]
    DegenerateDirection { x: f64, y: f64 },

    #[error(
        "rectangle from ({min_x}, {min_y}) to ({max_x}, {max_y}) does not have a positive width and height"
    )]
    EmptyRectangle {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("`{kind}` primitive does not carry {expected} geometry")]
    GeometryMismatch {
        kind: PrimitiveKind,
        expected: &'static str,
    },
}

/// Renders validated primitives into [`DrawCommand`]s.
///
/// # Examples
///
/// ```
/// use figura::{config::RenderConfig, render::Renderer};
/// use figura::geometry::Point;
/// use figura::semantic::{Attributes, Geometry, PrimitiveKind, ValidatedPrimitive};
///
/// let renderer = Renderer::new(&RenderConfig::default()).unwrap();
/// let segment = ValidatedPrimitive::new(
///     PrimitiveKind::Segment,
///     Geometry::TwoPoint { start: Point::new(10.0, 10.0), end: Point::new(20.0, 20.0) },
///     Attributes::default(),
/// );
/// assert_eq!(renderer.render(&segment).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    stroke_width: SizeMapping,
    arrow_head_size: SizeMapping,
    point_radius: f64,
}

impl Renderer {
    /// Creates a renderer from the render configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Config`] if the size exponent is not a positive
    /// finite number or the point radius is not positive.
    pub fn new(config: &RenderConfig) -> Result<Self, FiguraError> {
        let exponent = config.size_exponent();
        let stroke_width = SizeMapping::new(&STROKE_WIDTH_RANGE, exponent)?;
        let arrow_head_size = SizeMapping::new(&ARROW_HEAD_SIZE_RANGE, exponent)?;

        let point_radius = config.point_radius();
        if !(point_radius.is_finite() && point_radius > 0.0) {
            return Err(FiguraError::Config(format!(
                "point radius must be positive and finite, got {point_radius}"
            )));
        }

        Ok(Self {
            stroke_width,
            arrow_head_size,
            point_radius,
        })
    }

    /// Renders one primitive into its ordered command list.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the primitive breaks a precondition the
    /// validator should have enforced.
    pub fn render(&self, primitive: &ValidatedPrimitive) -> Result<Vec<DrawCommand>, RenderError> {
        let kind = primitive.kind();
        let geometry = primitive.geometry();
        let style = self.resolve_style(primitive);

        let commands = match (kind, *geometry) {
            (PrimitiveKind::Point, Geometry::Point(center)) => {
                // A dot filled with its own stroke color.
                let fill = style.stroke().paint();
                vec![DrawCommand::Circle {
                    center,
                    radius: self.point_radius,
                    style: style.with_fill(fill),
                }]
            }
            (PrimitiveKind::Circle, Geometry::Circle { center, radius }) => {
                vec![DrawCommand::Circle {
                    center,
                    radius,
                    style,
                }]
            }
            (PrimitiveKind::Rectangle, Geometry::Rectangle { min, max }) => {
                let bounds = Bounds::from_corners(min, max);
                if !(bounds.is_finite() && bounds.has_positive_area()) {
                    return Err(RenderError::EmptyRectangle {
                        min_x: min.x(),
                        min_y: min.y(),
                        max_x: max.x(),
                        max_y: max.y(),
                    });
                }
                vec![DrawCommand::Rectangle { bounds, style }]
            }
            (PrimitiveKind::Triangle, Geometry::Triangle(vertices)) => {
                vec![DrawCommand::Polygon {
                    points: vertices.to_vec(),
                    style,
                }]
            }
            (PrimitiveKind::Segment, Geometry::TwoPoint { start, end }) => {
                vec![line(start, end, style, None)]
            }
            (PrimitiveKind::Ray, Geometry::TwoPoint { start, end }) => {
                let far = extend_beyond_viewport(end, end.sub_point(start))?;
                vec![line(start, far, style, None)]
            }
            (PrimitiveKind::Line, Geometry::TwoPoint { start, end }) => {
                let direction = end.sub_point(start);
                let near = extend_beyond_viewport(start, direction.scale(-1.0))?;
                let far = extend_beyond_viewport(end, direction)?;
                vec![line(near, far, style, None)]
            }
            (PrimitiveKind::Arrow, Geometry::TwoPoint { start, end }) => {
                let head = self.arrow_head(primitive);
                vec![line(start, end, style, Some(head))]
            }
            (PrimitiveKind::DoubleArrow, Geometry::TwoPoint { start, end }) => {
                let head = self.arrow_head(primitive);
                vec![
                    line(start, end, style.clone(), Some(head)),
                    line(end, start, style, Some(head)),
                ]
            }
            (kind, _) => {
                return Err(RenderError::GeometryMismatch {
                    kind,
                    expected: expected_geometry(kind),
                });
            }
        };

        trace!(kind = kind.as_str(), commands = commands.len(); "Rendered primitive");
        Ok(commands)
    }

    fn resolve_style(&self, primitive: &ValidatedPrimitive) -> Style {
        let attributes = primitive.attributes();
        let stroke = StrokeDefinition::new(
            attributes.color(),
            self.stroke_width.map(attributes.stroke_width()),
        )
        .with_style(StrokeStyle::from_dash_length(attributes.stroke_dash()))
        .with_cap(attributes.linecap());

        let rotation = Rotation::new(attributes.rotation(), primitive.geometry().pivot());

        Style::new(stroke, attributes.fill_color(), attributes.opacity()).with_rotation(rotation)
    }

    fn arrow_head(&self, primitive: &ValidatedPrimitive) -> ArrowHead {
        let attributes = primitive.attributes();
        ArrowHead::new(
            self.arrow_head_size.map(attributes.arrow_head_size()),
            attributes.color(),
        )
    }
}

fn line(from: Point, to: Point, style: Style, marker_end: Option<ArrowHead>) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        style,
        marker_end,
    }
}

fn expected_geometry(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Point => "point",
        PrimitiveKind::Circle => "circle",
        PrimitiveKind::Rectangle => "rectangle",
        PrimitiveKind::Triangle => "triangle",
        PrimitiveKind::Segment
        | PrimitiveKind::Ray
        | PrimitiveKind::Line
        | PrimitiveKind::Arrow
        | PrimitiveKind::DoubleArrow => "two-point",
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use figura_core::{
        color::{Color, Paint},
        draw::StrokeCap,
        semantic::Attributes,
    };

    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(&RenderConfig::default()).unwrap()
    }

    fn two_point(kind: PrimitiveKind, start: (f64, f64), end: (f64, f64)) -> ValidatedPrimitive {
        ValidatedPrimitive::new(
            kind,
            Geometry::TwoPoint {
                start: Point::new(start.0, start.1),
                end: Point::new(end.0, end.1),
            },
            Attributes::default(),
        )
    }

    fn endpoints(command: &DrawCommand) -> (Point, Point) {
        match command {
            DrawCommand::Line { from, to, .. } => (*from, *to),
            other => panic!("expected a line, got {}", other.name()),
        }
    }

    #[test]
    fn test_ray_extends_second_endpoint() {
        let ray = two_point(PrimitiveKind::Ray, (50.0, 50.0), (60.0, 50.0));
        let commands = renderer().render(&ray).unwrap();
        assert_eq!(commands.len(), 1);

        let (from, to) = endpoints(&commands[0]);
        assert_eq!(from, Point::new(50.0, 50.0));
        assert!(to.x() >= 100.0);
        assert_eq!(to.y(), 50.0);
    }

    #[test]
    fn test_line_extends_both_endpoints() {
        let line = two_point(PrimitiveKind::Line, (40.0, 10.0), (40.0, 20.0));
        let (from, to) = endpoints(&renderer().render(&line).unwrap()[0]);
        assert_eq!(from.x(), 40.0);
        assert!(from.y() < 0.0);
        assert_eq!(to.x(), 40.0);
        assert!(to.y() > 100.0);
    }

    #[test]
    fn test_segment_is_unmodified() {
        let segment = two_point(PrimitiveKind::Segment, (10.0, 10.0), (20.0, 30.0));
        let commands = renderer().render(&segment).unwrap();
        assert_eq!(
            endpoints(&commands[0]),
            (Point::new(10.0, 10.0), Point::new(20.0, 30.0))
        );
    }

    #[test]
    fn test_double_arrow_draws_both_directions() {
        let arrow = two_point(PrimitiveKind::DoubleArrow, (10.0, 10.0), (90.0, 10.0));
        let commands = renderer().render(&arrow).unwrap();
        assert_eq!(commands.len(), 2);

        let forward = endpoints(&commands[0]);
        let backward = endpoints(&commands[1]);
        assert_eq!(forward, (backward.1, backward.0));

        for command in &commands {
            let DrawCommand::Line { marker_end, .. } = command else {
                panic!("expected a line");
            };
            let head = marker_end.expect("arrowhead");
            assert_eq!(head.size(), 3.5);
            assert_eq!(head.paint(), Paint::Color(Color::default()));
        }
    }

    #[test]
    fn test_point_is_filled_with_stroke_color() {
        let red = Paint::Color(Color::new("red").unwrap());
        let point = ValidatedPrimitive::new(
            PrimitiveKind::Point,
            Geometry::Point(Point::new(5.0, 5.0)),
            Attributes::default().with_color(red),
        );
        let commands = renderer().render(&point).unwrap();
        let DrawCommand::Circle { radius, style, .. } = &commands[0] else {
            panic!("expected a circle");
        };
        assert_eq!(*radius, 0.7);
        assert_eq!(style.fill(), red);
    }

    #[test]
    fn test_style_passthrough() {
        let circle = ValidatedPrimitive::new(
            PrimitiveKind::Circle,
            Geometry::Circle {
                center: Point::new(50.0, 50.0),
                radius: 10.0,
            },
            Attributes::default()
                .with_stroke_width(2.0)
                .with_opacity(0.5)
                .with_stroke_dash(1.5)
                .with_linecap(StrokeCap::Round)
                .with_rotation(30.0),
        );
        let commands = renderer().render(&circle).unwrap();
        let style = commands[0].style();
        assert_eq!(style.stroke().width(), 2.0);
        assert_eq!(style.stroke().style(), StrokeStyle::Dashed(1.5));
        assert_eq!(style.stroke().cap(), StrokeCap::Round);
        assert_eq!(style.opacity(), 0.5);
        assert_eq!(
            style.rotation(),
            Rotation::new(30.0, Point::new(50.0, 50.0))
        );
    }

    #[test]
    fn test_size_mapping_applies_to_stroke_width() {
        let renderer = Renderer::new(&RenderConfig::new(2.0, 0.7)).unwrap();
        let segment = ValidatedPrimitive::new(
            PrimitiveKind::Segment,
            Geometry::TwoPoint {
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 1.0),
            },
            Attributes::default().with_stroke_width(50.0),
        );
        let commands = renderer.render(&segment).unwrap();
        let width = commands[0].style().stroke().width();
        let (lo, hi): (f64, f64) = (0.0001, 100.0);
        let expected = lo + (hi - lo) * ((50.0 - lo) / (hi - lo)).powi(2);
        assert!(approx_eq!(f64, width, expected, epsilon = 1e-9));
        assert!(width < 50.0);
    }

    #[test]
    fn test_empty_rectangle_is_rejected() {
        let rectangle = ValidatedPrimitive::new(
            PrimitiveKind::Rectangle,
            Geometry::Rectangle {
                min: Point::new(10.0, 10.0),
                max: Point::new(10.0, 20.0),
            },
            Attributes::default(),
        );
        assert!(matches!(
            renderer().render(&rectangle),
            Err(RenderError::EmptyRectangle { .. })
        ));
    }

    #[test]
    fn test_degenerate_ray_is_rejected() {
        let ray = two_point(PrimitiveKind::Ray, (30.0, 30.0), (30.0, 30.0));
        assert_eq!(
            renderer().render(&ray),
            Err(RenderError::DegenerateDirection { x: 30.0, y: 30.0 })
        );
    }

    #[test]
    fn test_geometry_mismatch() {
        let broken = ValidatedPrimitive::new(
            PrimitiveKind::Triangle,
            Geometry::Point(Point::new(1.0, 1.0)),
            Attributes::default(),
        );
        assert_eq!(
            renderer().render(&broken),
            Err(RenderError::GeometryMismatch {
                kind: PrimitiveKind::Triangle,
                expected: "triangle",
            })
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(Renderer::new(&RenderConfig::new(0.0, 0.7)).is_err());
        assert!(Renderer::new(&RenderConfig::new(1.0, -1.0)).is_err());
    }
}
