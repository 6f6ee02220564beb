//! Drawing commands: the renderer's output unit.
//!
//! Every [`DrawCommand`] carries fully resolved coordinates and a complete
//! [`Style`], so a drawing surface can execute it without consulting the
//! primitive that produced it.

use crate::{
    color::Paint,
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

/// Rotation applied as a final transform, in degrees around `pivot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    degrees: f64,
    pivot: Point,
}

impl Rotation {
    /// Creates a rotation; returns `None` for a zero angle.
    pub fn new(degrees: f64, pivot: Point) -> Option<Self> {
        (degrees != 0.0).then_some(Self { degrees, pivot })
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Returns the SVG `transform` value, e.g. `rotate(45 50 50)`.
    pub fn to_svg_value(&self) -> String {
        format!(
            "rotate({} {} {})",
            self.degrees,
            self.pivot.x(),
            self.pivot.y()
        )
    }
}

/// Style shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    stroke: StrokeDefinition,
    fill: Paint,
    opacity: f64,
    rotation: Option<Rotation>,
}

impl Style {
    pub fn new(stroke: StrokeDefinition, fill: Paint, opacity: f64) -> Self {
        Self {
            stroke,
            fill,
            opacity,
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Option<Rotation>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> Paint {
        self.fill
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }
}

/// An isosceles-triangle arrowhead placed at the end of a line.
///
/// `size` is the marker's width and height in user units, already passed
/// through the arrow-head size mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    size: f64,
    paint: Paint,
}

impl ArrowHead {
    pub fn new(size: f64, paint: Paint) -> Self {
        Self { size, paint }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }
}

/// A primitive drawing operation with resolved coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroke a straight line, optionally ending in an arrowhead at `to`.
    Line {
        from: Point,
        to: Point,
        style: Style,
        marker_end: Option<ArrowHead>,
    },
    /// Fill and stroke a circle.
    Circle {
        center: Point,
        radius: f64,
        style: Style,
    },
    /// Fill and stroke an axis-aligned rectangle.
    Rectangle { bounds: Bounds, style: Style },
    /// Fill and stroke a closed polygon over `points`, in order.
    Polygon { points: Vec<Point>, style: Style },
}

impl DrawCommand {
    /// Returns the style of this command.
    pub fn style(&self) -> &Style {
        match self {
            Self::Line { style, .. }
            | Self::Circle { style, .. }
            | Self::Rectangle { style, .. }
            | Self::Polygon { style, .. } => style,
        }
    }

    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Rectangle { .. } => "rectangle",
            Self::Polygon { .. } => "polygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn style() -> Style {
        Style::new(
            StrokeDefinition::new(Paint::Color(Color::default()), 0.2),
            Paint::None,
            1.0,
        )
    }

    #[test]
    fn test_zero_rotation_is_none() {
        assert_eq!(Rotation::new(0.0, Point::new(1.0, 1.0)), None);
        let rotation = Rotation::new(90.0, Point::new(50.0, 25.0)).unwrap();
        assert_eq!(rotation.to_svg_value(), "rotate(90 50 25)");
    }

    #[test]
    fn test_command_style_accessor() {
        let rotated = style().with_rotation(Rotation::new(45.0, Point::default()));
        let command = DrawCommand::Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
            style: rotated.clone(),
        };
        assert_eq!(command.style(), &rotated);
        assert_eq!(command.name(), "circle");
    }

    #[test]
    fn test_style_with_fill() {
        let red = Paint::Color(Color::new("red").unwrap());
        let styled = style().with_fill(red);
        assert_eq!(styled.fill(), red);
        assert_eq!(styled.opacity(), 1.0);
        assert_eq!(styled.rotation(), None);
    }
}
