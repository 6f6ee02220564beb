//! Pushing a point past the visible user space.
//!
//! Rays and infinite lines are drawn as ordinary segments whose free ends sit
//! outside `[0, 100]²`. The step grows tenfold on every iteration, so even a
//! tiny direction vector leaves the square in a few hundred steps at most.
//! This is not an exact clip against the boundary.

use figura_core::geometry::{Bounds, Point};

use super::RenderError;

/// Moves `start` along `direction` until it leaves user space.
///
/// Each iteration adds the current step to the point and then multiplies the
/// step by ten. A point already outside user space is returned unchanged.
///
/// # Errors
///
/// Returns [`RenderError::DegenerateDirection`] when the direction is zero or
/// not finite, or when the walk overflows before leaving user space.
pub fn extend_beyond_viewport(start: Point, direction: Point) -> Result<Point, RenderError> {
    let degenerate = || RenderError::DegenerateDirection {
        x: start.x(),
        y: start.y(),
    };

    if direction.is_zero() || !direction.is_finite() || !start.is_finite() {
        return Err(degenerate());
    }

    let visible = Bounds::user_space();
    let mut point = start;
    let mut step = direction;
    while visible.contains(point) {
        point = point.add_point(step);
        step = step.scale(10.0);
    }

    if point.is_finite() {
        Ok(point)
    } else {
        Err(degenerate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rightward_ray() {
        let end = extend_beyond_viewport(Point::new(60.0, 50.0), Point::new(10.0, 0.0)).unwrap();
        assert_eq!(end, Point::new(170.0, 50.0));
    }

    #[test]
    fn test_outside_point_is_unchanged() {
        let start = Point::new(150.0, -3.0);
        let end = extend_beyond_viewport(start, Point::new(1.0, 1.0)).unwrap();
        assert_eq!(end, start);
    }

    #[test]
    fn test_tiny_direction_terminates() {
        let end = extend_beyond_viewport(Point::new(50.0, 50.0), Point::new(0.0, -1e-9)).unwrap();
        assert!(end.y() < 0.0);
        assert_eq!(end.x(), 50.0);
    }

    #[test]
    fn test_degenerate_direction() {
        let start = Point::new(5.0, 5.0);
        assert_eq!(
            extend_beyond_viewport(start, Point::default()),
            Err(RenderError::DegenerateDirection { x: 5.0, y: 5.0 })
        );
        assert!(extend_beyond_viewport(start, Point::new(f64::NAN, 1.0)).is_err());
        assert!(extend_beyond_viewport(start, Point::new(f64::INFINITY, 0.0)).is_err());
    }
}
