//! Color handling for Figura diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and [`Paint`], which is either a color or the literal
//! `none` accepted by every color attribute.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// The color crate is the color-name validity oracle: anything it parses as a
/// CSS color is a valid color attribute value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255,0,0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("bluish").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the opaque sRGB part of this color as a `#rrggbb` string.
    ///
    /// The alpha channel is dropped; use [`Color::alpha`] for it.
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The alpha value is a `f32` between 0.0 (fully transparent) and 1.0
    /// (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A stroke or fill paint: either nothing or a concrete color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Paint nothing (the `"none"` keyword).
    #[default]
    None,
    /// Paint with a color.
    Color(Color),
}

impl Paint {
    /// Parse a paint value: the literal `none` or any CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_core::color::Paint;
    ///
    /// assert_eq!(Paint::new("none").unwrap(), Paint::None);
    /// assert!(Paint::new("rebeccapurple").unwrap().is_visible());
    /// ```
    pub fn new(value: &str) -> Result<Self, String> {
        if value == "none" {
            return Ok(Self::None);
        }
        Color::new(value).map(Self::Color)
    }

    /// Returns `true` when this paint draws something.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// Returns the color, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Color(color) => Some(*color),
        }
    }

    /// Returns the SVG paint value (`none` or `#rrggbb`).
    pub fn to_svg_value(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Color(color) => color.to_hex(),
        }
    }

    /// Returns the paint's own opacity; `none` reports fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color().map_or(1.0, |color| color.alpha())
    }
}

impl FromStr for Paint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&Paint> for svg::node::Value {
    fn from(paint: &Paint) -> Self {
        Self::from(paint.to_svg_value())
    }
}
