//! The primitive schema: attribute and primitive definitions.
//!
//! Every table here is a `static` built at compile time and shared read-only
//! by all validations.
//!
//! | Kind | Required attributes |
//! |------|---------------------|
//! | `point` | `x`, `y` |
//! | `segment`, `ray`, `line`, `arrow`, `double_arrow` | `x1`, `y1`, `x2`, `y2` |
//! | `rectangle` | `xmin`, `ymin`, `xmax`, `ymax` |
//! | `circle` | `x`, `y`, `radius` |
//! | `triangle` | `x1`, `y1`, `x2`, `y2`, `x3`, `y3` |
//!
//! Every kind also accepts the [`OPTIONAL_ATTRIBUTES`].

use std::{fmt, ops::RangeInclusive};

use figura_core::{
    color::Paint,
    draw::StrokeCap,
    geometry::Point,
    semantic::{
        ARROW_HEAD_SIZE_RANGE, COORDINATE_RANGE, Geometry, OPACITY_RANGE, PrimitiveKind,
        RADIUS_RANGE, ROTATION_RANGE, STROKE_DASH_RANGE, STROKE_WIDTH_RANGE,
    },
};

use crate::record::Value;

/// The distinguished attribute selecting the primitive kind.
pub const PRIMITIVE_ATTRIBUTE: &str = "primitive";

/// The type of an attribute and the predicate its values must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    /// A finite number inside a closed range.
    Number(RangeInclusive<f64>),
    /// `"none"` or any CSS color.
    Color,
    /// One of a fixed set of names.
    Choice(&'static [&'static str]),
}

/// A value that satisfied its [`AttributeType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Paint(Paint),
    Choice(&'static str),
}

impl AttributeType {
    /// Check `value` against this type, returning the typed value on success.
    ///
    /// Numbers are accepted as JSON numbers or as text holding a decimal number.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_parser::record::Value;
    /// use figura_parser::schema::{AttributeType, TypedValue};
    ///
    /// let opacity = AttributeType::Number(0.0..=1.0);
    /// assert_eq!(opacity.check(&Value::from("0.5")), Some(TypedValue::Number(0.5)));
    /// assert_eq!(opacity.check(&Value::Number(1.5)), None);
    /// assert_eq!(opacity.check(&Value::Bool(true)), None);
    /// ```
    pub fn check(&self, value: &Value) -> Option<TypedValue> {
        match self {
            Self::Number(range) => {
                let number = match value {
                    Value::Number(n) => *n,
                    Value::Text(text) => parse_number(text)?,
                    _ => return None,
                };
                (number.is_finite() && range.contains(&number)).then_some(TypedValue::Number(number))
            }
            Self::Color => Paint::new(value.as_text()?).ok().map(TypedValue::Paint),
            Self::Choice(choices) => {
                let text = value.as_text()?;
                choices
                    .iter()
                    .copied()
                    .find(|choice| *choice == text)
                    .map(TypedValue::Choice)
            }
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(range) => write!(
                f,
                "a number in the range [{}, {}]",
                range.start(),
                range.end()
            ),
            Self::Color => write!(f, "\"none\" or a CSS color"),
            Self::Choice(choices) => write!(f, "one of {}", choices.join(", ")),
        }
    }
}

/// Default of an optional attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Number(f64),
    Text(&'static str),
}

impl DefaultValue {
    /// The default as a record value.
    pub fn to_value(self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n),
            Self::Text(text) => Value::Text(text.to_string()),
        }
    }
}

/// One attribute: its name, type and, for optional attributes, its default.
///
/// An attribute without a default is required.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    name: &'static str,
    ty: AttributeType,
    default: Option<DefaultValue>,
}

impl AttributeSpec {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> &AttributeType {
        &self.ty
    }

    pub fn default(&self) -> Option<DefaultValue> {
        self.default
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Human-readable description of the accepted values.
    pub fn description(&self) -> String {
        self.ty.to_string()
    }
}

const fn coordinate(name: &'static str) -> AttributeSpec {
    AttributeSpec {
        name,
        ty: AttributeType::Number(COORDINATE_RANGE),
        default: None,
    }
}

const fn optional(name: &'static str, ty: AttributeType, default: DefaultValue) -> AttributeSpec {
    AttributeSpec {
        name,
        ty,
        default: Some(default),
    }
}

/// Attributes every primitive kind accepts, with their defaults.
pub static OPTIONAL_ATTRIBUTES: [AttributeSpec; 8] = [
    optional("color", AttributeType::Color, DefaultValue::Text("black")),
    optional("fill_color", AttributeType::Color, DefaultValue::Text("none")),
    optional(
        "stroke_width",
        AttributeType::Number(STROKE_WIDTH_RANGE),
        DefaultValue::Number(0.2),
    ),
    optional(
        "opacity",
        AttributeType::Number(OPACITY_RANGE),
        DefaultValue::Number(1.0),
    ),
    optional(
        "arrow_head_size",
        AttributeType::Number(ARROW_HEAD_SIZE_RANGE),
        DefaultValue::Number(3.5),
    ),
    optional(
        "stroke_dash",
        AttributeType::Number(STROKE_DASH_RANGE),
        DefaultValue::Number(0.0),
    ),
    optional(
        "linecap",
        AttributeType::Choice(&StrokeCap::NAMES),
        DefaultValue::Text("butt"),
    ),
    optional(
        "rotation",
        AttributeType::Number(ROTATION_RANGE),
        DefaultValue::Number(0.0),
    ),
];

static POINT_ATTRIBUTES: [AttributeSpec; 2] = [coordinate("x"), coordinate("y")];

static TWO_POINT_ATTRIBUTES: [AttributeSpec; 4] = [
    coordinate("x1"),
    coordinate("y1"),
    coordinate("x2"),
    coordinate("y2"),
];

static RECTANGLE_ATTRIBUTES: [AttributeSpec; 4] = [
    coordinate("xmin"),
    coordinate("ymin"),
    coordinate("xmax"),
    coordinate("ymax"),
];

static CIRCLE_ATTRIBUTES: [AttributeSpec; 3] = [
    coordinate("x"),
    coordinate("y"),
    AttributeSpec {
        name: "radius",
        ty: AttributeType::Number(RADIUS_RANGE),
        default: None,
    },
];

static TRIANGLE_ATTRIBUTES: [AttributeSpec; 6] = [
    coordinate("x1"),
    coordinate("y1"),
    coordinate("x2"),
    coordinate("y2"),
    coordinate("x3"),
    coordinate("y3"),
];

/// One primitive kind: its required attributes and its invariant.
///
/// `geometry` receives the required attributes' values in declaration order.
pub struct PrimitiveSpec {
    kind: PrimitiveKind,
    required: &'static [AttributeSpec],
    geometry: fn(&[f64]) -> Option<Geometry>,
    invariant: fn(&Geometry) -> bool,
    invariant_description: &'static str,
}

impl PrimitiveSpec {
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Required attributes, in the order they are checked.
    pub fn required(&self) -> &'static [AttributeSpec] {
        self.required
    }

    /// Returns true if `name` is a required attribute of this kind.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|attr| attr.name == name)
    }

    /// Build the geometry from the required values, in declaration order.
    ///
    /// Returns `None` when the number of values does not match.
    pub fn build_geometry(&self, values: &[f64]) -> Option<Geometry> {
        (self.geometry)(values)
    }

    /// Check the whole-primitive invariant.
    pub fn check_invariant(&self, geometry: &Geometry) -> bool {
        (self.invariant)(geometry)
    }

    pub fn invariant_description(&self) -> &'static str {
        self.invariant_description
    }
}

impl fmt::Debug for PrimitiveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveSpec")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("invariant_description", &self.invariant_description)
            .finish_non_exhaustive()
    }
}

fn point_geometry(values: &[f64]) -> Option<Geometry> {
    let &[x, y] = values else { return None };
    Some(Geometry::Point(Point::new(x, y)))
}

fn two_point_geometry(values: &[f64]) -> Option<Geometry> {
    let &[x1, y1, x2, y2] = values else {
        return None;
    };
    Some(Geometry::TwoPoint {
        start: Point::new(x1, y1),
        end: Point::new(x2, y2),
    })
}

fn rectangle_geometry(values: &[f64]) -> Option<Geometry> {
    let &[xmin, ymin, xmax, ymax] = values else {
        return None;
    };
    Some(Geometry::Rectangle {
        min: Point::new(xmin, ymin),
        max: Point::new(xmax, ymax),
    })
}

fn circle_geometry(values: &[f64]) -> Option<Geometry> {
    let &[x, y, radius] = values else {
        return None;
    };
    Some(Geometry::Circle {
        center: Point::new(x, y),
        radius,
    })
}

fn triangle_geometry(values: &[f64]) -> Option<Geometry> {
    let &[x1, y1, x2, y2, x3, y3] = values else {
        return None;
    };
    Some(Geometry::Triangle([
        Point::new(x1, y1),
        Point::new(x2, y2),
        Point::new(x3, y3),
    ]))
}

fn always(_: &Geometry) -> bool {
    true
}

fn distinct_endpoints(geometry: &Geometry) -> bool {
    match geometry {
        Geometry::TwoPoint { start, end } => start != end,
        _ => false,
    }
}

fn positive_extent(geometry: &Geometry) -> bool {
    match geometry {
        Geometry::Rectangle { min, max } => min.x() < max.x() && min.y() < max.y(),
        _ => false,
    }
}

fn distinct_vertices(geometry: &Geometry) -> bool {
    match geometry {
        Geometry::Triangle([a, b, c]) => a != b && a != c && b != c,
        _ => false,
    }
}

const fn two_point(kind: PrimitiveKind) -> PrimitiveSpec {
    PrimitiveSpec {
        kind,
        required: &TWO_POINT_ATTRIBUTES,
        geometry: two_point_geometry,
        invariant: distinct_endpoints,
        invariant_description: "the two points (x1,y1) and (x2,y2) must be different",
    }
}

static POINT: PrimitiveSpec = PrimitiveSpec {
    kind: PrimitiveKind::Point,
    required: &POINT_ATTRIBUTES,
    geometry: point_geometry,
    invariant: always,
    invariant_description: "",
};
static SEGMENT: PrimitiveSpec = two_point(PrimitiveKind::Segment);
static RAY: PrimitiveSpec = two_point(PrimitiveKind::Ray);
static LINE: PrimitiveSpec = two_point(PrimitiveKind::Line);
static ARROW: PrimitiveSpec = two_point(PrimitiveKind::Arrow);
static DOUBLE_ARROW: PrimitiveSpec = two_point(PrimitiveKind::DoubleArrow);
static RECTANGLE: PrimitiveSpec = PrimitiveSpec {
    kind: PrimitiveKind::Rectangle,
    required: &RECTANGLE_ATTRIBUTES,
    geometry: rectangle_geometry,
    invariant: positive_extent,
    invariant_description: "the width and height of a rectangle primitive must be positive (xmin < xmax and ymin < ymax)",
};
static CIRCLE: PrimitiveSpec = PrimitiveSpec {
    kind: PrimitiveKind::Circle,
    required: &CIRCLE_ATTRIBUTES,
    geometry: circle_geometry,
    invariant: always,
    invariant_description: "",
};
static TRIANGLE: PrimitiveSpec = PrimitiveSpec {
    kind: PrimitiveKind::Triangle,
    required: &TRIANGLE_ATTRIBUTES,
    geometry: triangle_geometry,
    invariant: distinct_vertices,
    invariant_description: "the three points (x1,y1), (x2,y2), (x3,y3) must be different",
};

/// Returns the definition of `kind`.
pub fn spec_for(kind: PrimitiveKind) -> &'static PrimitiveSpec {
    match kind {
        PrimitiveKind::Point => &POINT,
        PrimitiveKind::Segment => &SEGMENT,
        PrimitiveKind::Ray => &RAY,
        PrimitiveKind::Line => &LINE,
        PrimitiveKind::Arrow => &ARROW,
        PrimitiveKind::DoubleArrow => &DOUBLE_ARROW,
        PrimitiveKind::Rectangle => &RECTANGLE,
        PrimitiveKind::Circle => &CIRCLE,
        PrimitiveKind::Triangle => &TRIANGLE,
    }
}

/// Look up a shared optional attribute by name.
pub fn optional_attribute(name: &str) -> Option<&'static AttributeSpec> {
    OPTIONAL_ATTRIBUTES.iter().find(|attr| attr.name == name)
}
