//! The visible sub-rectangle of user space.
//!
//! A [`Viewport`] never changes what the renderer produces. It is applied to
//! the finished document as the SVG `viewBox`, cropping or padding the fixed
//! 100x100 user space.

use std::{fmt, str::FromStr};

use thiserror::Error;

use figura_core::geometry::{Bounds, Point};

/// Reasons a viewport is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport coordinates must be finite")]
    NotFinite,

    #[error("viewport must satisfy xmin < xmax and ymin < ymax, got ({xmin}, {ymin}, {xmax}, {ymax})")]
    Empty {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error("expected `xmin,ymin,xmax,ymax`, got `{0}`")]
    Syntax(String),
}

/// A validated, non-empty rectangle of user space.
///
/// # Examples
///
/// ```
/// use figura::viewport::Viewport;
///
/// let viewport: Viewport = "10,10,60,40".parse().unwrap();
/// assert_eq!(viewport.to_view_box(), "10 10 50 30");
/// assert!(Viewport::new(0.0, 0.0, 0.0, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
}

impl Viewport {
    /// Creates a viewport from its corner coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError`] if any coordinate is not finite or the
    /// rectangle has no positive width and height.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, ViewportError> {
        if ![xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite()) {
            return Err(ViewportError::NotFinite);
        }
        if !(xmin < xmax && ymin < ymax) {
            return Err(ViewportError::Empty {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            bounds: Bounds::from_corners(Point::new(xmin, ymin), Point::new(xmax, ymax)),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Returns the SVG `viewBox` value: `xmin ymin width height`.
    pub fn to_view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.bounds.min_x(),
            self.bounds.min_y(),
            self.width(),
            self.height()
        )
    }
}

impl Default for Viewport {
    /// The whole user space, `0,0,100,100`.
    fn default() -> Self {
        Self {
            bounds: Bounds::user_space(),
        }
    }
}

impl FromStr for Viewport {
    type Err = ViewportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ViewportError::Syntax(s.to_string()))?;

        match values.as_slice() {
            &[xmin, ymin, xmax, ymax] => Self::new(xmin, ymin, xmax, ymax),
            _ => Err(ViewportError::Syntax(s.to_string())),
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.bounds.min_x(),
            self.bounds.min_y(),
            self.bounds.max_x(),
            self.bounds.max_y()
        )
    }
}
