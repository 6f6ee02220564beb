//! Stroke and line-style definitions.
//!
//! Exported types:
//! - [`StrokeDefinition`]: paint, width, dash style and cap of a stroke
//! - [`StrokeStyle`]: solid or dashed with a given dash length
//! - [`StrokeCap`]: how line endpoints are rendered (butt, round, square)
//! - [`apply_stroke!`](crate::apply_stroke!): macro applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `paint` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `0.2` |
//! | `style` | `stroke-dasharray` | `"2"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |

use std::{fmt, str::FromStr};

use crate::color::Paint;

/// Defines the dash pattern of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed(d)`: `stroke-dasharray="d"`, equal dash and gap lengths
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashes and gaps of the given length in user units
    Dashed(f64),
}

impl StrokeStyle {
    /// Builds a style from a dash length, where `0` means solid.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_core::draw::StrokeStyle;
    ///
    /// assert_eq!(StrokeStyle::from_dash_length(0.0), StrokeStyle::Solid);
    /// assert_eq!(StrokeStyle::from_dash_length(2.5), StrokeStyle::Dashed(2.5));
    /// ```
    pub fn from_dash_length(length: f64) -> Self {
        if length > 0.0 {
            Self::Dashed(length)
        } else {
            Self::Solid
        }
    }

    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed(length) => Some(length.to_string()),
        }
    }
}

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Every accepted cap name, in documentation order.
    pub const NAMES: [&'static str; 3] = ["butt", "round", "square"];

    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

impl fmt::Display for StrokeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_svg_value())
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use figura_core::color::{Color, Paint};
/// use figura_core::draw::{StrokeCap, StrokeDefinition, StrokeStyle};
///
/// let stroke = StrokeDefinition::new(Paint::Color(Color::new("red").unwrap()), 0.5)
///     .with_style(StrokeStyle::Dashed(2.0))
///     .with_cap(StrokeCap::Round);
/// assert_eq!(stroke.width(), 0.5);
/// assert_eq!(stroke.cap(), StrokeCap::Round);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    paint: Paint,
    width: f64,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new solid, butt-capped stroke with the given paint and width.
    pub fn new(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
        }
    }

    /// Returns the stroke paint.
    pub fn paint(&self) -> Paint {
        self.paint
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke with the given style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the stroke with the given cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies paint, opacity of the paint, width, line cap and dash pattern (if
/// not solid) to any SVG element.
///
/// # Examples
///
/// ```
/// use figura_core::color::Paint;
/// use figura_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Paint::None, 0.2);
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
///
/// let line = figura_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.paint().to_svg_value())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value());

        let alpha = $stroke.paint().alpha();
        if alpha < 1.0 {
            elem = elem.set("stroke-opacity", alpha);
        }

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_stroke_new() {
        let stroke = StrokeDefinition::new(Paint::Color(Color::default()), 0.2);
        assert_eq!(stroke.width(), 0.2);
        assert_eq!(stroke.paint().to_svg_value(), "#000000");
        assert_eq!(stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_stroke_builders() {
        let stroke = StrokeDefinition::new(Paint::None, 1.0)
            .with_style(StrokeStyle::Dashed(3.0))
            .with_cap(StrokeCap::Square);
        assert_eq!(stroke.style(), StrokeStyle::Dashed(3.0));
        assert_eq!(stroke.cap(), StrokeCap::Square);
    }

    #[test]
    fn test_stroke_style_svg_value() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed(2.0).to_svg_value(), Some("2".to_string()));
        assert_eq!(
            StrokeStyle::Dashed(0.5).to_svg_value(),
            Some("0.5".to_string())
        );
    }

    #[test]
    fn test_stroke_cap_from_str() {
        assert_eq!("butt".parse::<StrokeCap>().unwrap(), StrokeCap::Butt);
        assert_eq!("round".parse::<StrokeCap>().unwrap(), StrokeCap::Round);
        assert_eq!("square".parse::<StrokeCap>().unwrap(), StrokeCap::Square);
        assert!("flat".parse::<StrokeCap>().is_err());
        assert!("Round".parse::<StrokeCap>().is_err());
    }

    #[test]
    fn test_stroke_cap_names_parse() {
        for name in StrokeCap::NAMES {
            let cap: StrokeCap = name.parse().unwrap();
            assert_eq!(cap.to_svg_value(), name);
        }
    }
}
