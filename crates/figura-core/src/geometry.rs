//! Geometric primitives for diagram coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in user space
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Figura uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Every coordinate attribute of a diagram lives in the fixed user space
//! `[0, USER_SPACE_SIZE] × [0, USER_SPACE_SIZE]`. Coordinates are `f64` so that
//! nearby endpoints stay distinct after arithmetic.

/// The fixed extent of user space along both axes.
pub const USER_SPACE_SIZE: f64 = 100.0;

/// A 2D point representing a position in user space.
///
/// # Examples
///
/// ```
/// # use figura_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    ///
    /// Used to obtain the direction vector between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use figura_core::geometry::Point;
    /// let direction = Point::new(60.0, 50.0).sub_point(Point::new(50.0, 50.0));
    /// assert_eq!(direction, Point::new(10.0, 0.0));
    /// ```
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the centroid (arithmetic mean) of a set of points.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use figura_core::geometry::Point;
    /// let c = Point::centroid(&[
    ///     Point::new(0.0, 0.0),
    ///     Point::new(30.0, 0.0),
    ///     Point::new(0.0, 30.0),
    /// ]);
    /// assert_eq!(c, Some(Point::new(10.0, 10.0)));
    /// ```
    pub fn centroid(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let sum = points
            .iter()
            .fold(Point::default(), |acc, p| acc.add_point(*p));
        let count = points.len() as f64;
        Some(Point::new(sum.x / count, sum.y / count))
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from its minimum and maximum corners, as given.
    ///
    /// No normalization happens: bounds whose minimum exceeds their maximum
    /// report a negative width or height, which [`Bounds::has_positive_area`]
    /// rejects.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    /// The whole user space, `[0, USER_SPACE_SIZE]²`.
    pub fn user_space() -> Self {
        Self::from_corners(
            Point::default(),
            Point::new(USER_SPACE_SIZE, USER_SPACE_SIZE),
        )
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns true if all four coordinates are finite
    pub fn is_finite(self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Returns true when both width and height are strictly positive.
    pub fn has_positive_area(self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Returns true if the point lies inside the bounds, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use figura_core::geometry::{Bounds, Point};
    /// let space = Bounds::user_space();
    /// assert!(space.contains(Point::new(100.0, 0.0)));
    /// assert!(!space.contains(Point::new(100.5, 50.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
