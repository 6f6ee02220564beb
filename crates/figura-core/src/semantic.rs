//! Semantic model of validated diagram primitives.
//!
//! A [`ValidatedPrimitive`] is what the validator hands to the renderer: a
//! [`PrimitiveKind`], its resolved [`Geometry`] and the fully defaulted
//! [`Attributes`] shared by every kind.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use thiserror::Error;

use crate::{
    color::{Color, Paint},
    draw::StrokeCap,
    geometry::{Point, USER_SPACE_SIZE},
};

/// Accepted range of every coordinate attribute.
pub const COORDINATE_RANGE: RangeInclusive<f64> = 0.0..=USER_SPACE_SIZE;
/// Accepted range of a circle radius.
pub const RADIUS_RANGE: RangeInclusive<f64> = 0.0001..=2.0 * USER_SPACE_SIZE;
/// Accepted range of `stroke_width`.
pub const STROKE_WIDTH_RANGE: RangeInclusive<f64> = 0.0001..=100.0;
/// Accepted range of `opacity`.
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
/// Accepted range of `arrow_head_size`.
pub const ARROW_HEAD_SIZE_RANGE: RangeInclusive<f64> = 0.0001..=100.0;
/// Accepted range of `stroke_dash`.
pub const STROKE_DASH_RANGE: RangeInclusive<f64> = 0.0..=10.0;
/// Accepted range of `rotation`, in degrees.
pub const ROTATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// One of the nine supported primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Point,
    Segment,
    Ray,
    Line,
    Arrow,
    DoubleArrow,
    Rectangle,
    Circle,
    Triangle,
}

impl PrimitiveKind {
    /// Every kind, in documentation order.
    pub const ALL: [Self; 9] = [
        Self::Point,
        Self::Segment,
        Self::Ray,
        Self::Line,
        Self::Arrow,
        Self::DoubleArrow,
        Self::Rectangle,
        Self::Circle,
        Self::Triangle,
    ];

    /// Returns the canonical name used in the `primitive` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Segment => "segment",
            Self::Ray => "ray",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::DoubleArrow => "double_arrow",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// Returns true for kinds defined by the two endpoints `x1,y1,x2,y2`.
    pub fn is_two_point(self) -> bool {
        matches!(
            self,
            Self::Segment | Self::Ray | Self::Line | Self::Arrow | Self::DoubleArrow
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not match any [`PrimitiveKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown primitive kind `{0}`")]
pub struct UnknownPrimitiveKind(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitiveKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPrimitiveKind(s.to_string()))
    }
}

/// The defining points of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// A single location (`point`).
    Point(Point),
    /// Two endpoints (`segment`, `ray`, `line`, `arrow`, `double_arrow`).
    TwoPoint { start: Point, end: Point },
    /// Axis-aligned rectangle given by its minimum and maximum corners.
    Rectangle { min: Point, max: Point },
    /// Circle given by center and radius.
    Circle { center: Point, radius: f64 },
    /// Three vertices, in source order.
    Triangle([Point; 3]),
}

impl Geometry {
    /// Returns the points the user supplied for this geometry.
    pub fn defining_points(&self) -> Vec<Point> {
        match *self {
            Self::Point(at) => vec![at],
            Self::TwoPoint { start, end } => vec![start, end],
            Self::Rectangle { min, max } => vec![min, max],
            Self::Circle { center, .. } => vec![center],
            Self::Triangle(vertices) => vertices.to_vec(),
        }
    }

    /// Returns the rotation pivot: the centroid of the defining points.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_core::geometry::Point;
    /// use figura_core::semantic::Geometry;
    ///
    /// let seg = Geometry::TwoPoint { start: Point::new(10.0, 10.0), end: Point::new(30.0, 50.0) };
    /// assert_eq!(seg.pivot(), Point::new(20.0, 30.0));
    /// ```
    pub fn pivot(&self) -> Point {
        Point::centroid(&self.defining_points()).unwrap_or_default()
    }
}

/// Optional attributes shared by every kind, with their defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    color: Paint,
    fill_color: Paint,
    stroke_width: f64,
    opacity: f64,
    arrow_head_size: f64,
    stroke_dash: f64,
    linecap: StrokeCap,
    rotation: f64,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            color: Paint::Color(Color::default()),
            fill_color: Paint::None,
            stroke_width: 0.2,
            opacity: 1.0,
            arrow_head_size: 3.5,
            stroke_dash: 0.0,
            linecap: StrokeCap::Butt,
            rotation: 0.0,
        }
    }
}

impl Attributes {
    pub fn color(&self) -> Paint {
        self.color
    }

    pub fn fill_color(&self) -> Paint {
        self.fill_color
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn arrow_head_size(&self) -> f64 {
        self.arrow_head_size
    }

    /// Dash length in user units; `0` means solid.
    pub fn stroke_dash(&self) -> f64 {
        self.stroke_dash
    }

    pub fn linecap(&self) -> StrokeCap {
        self.linecap
    }

    /// Rotation in degrees, clockwise in SVG's y-down space.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn with_color(mut self, color: Paint) -> Self {
        self.color = color;
        self
    }

    pub fn with_fill_color(mut self, fill_color: Paint) -> Self {
        self.fill_color = fill_color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_arrow_head_size(mut self, arrow_head_size: f64) -> Self {
        self.arrow_head_size = arrow_head_size;
        self
    }

    pub fn with_stroke_dash(mut self, stroke_dash: f64) -> Self {
        self.stroke_dash = stroke_dash;
        self
    }

    pub fn with_linecap(mut self, linecap: StrokeCap) -> Self {
        self.linecap = linecap;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A primitive that passed schema validation, every optional attribute populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPrimitive {
    kind: PrimitiveKind,
    geometry: Geometry,
    attributes: Attributes,
}

impl ValidatedPrimitive {
    pub fn new(kind: PrimitiveKind, geometry: Geometry, attributes: Attributes) -> Self {
        Self {
            kind,
            geometry,
            attributes,
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
