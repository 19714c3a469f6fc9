use thiserror::Error;

use crate::point::Point;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SlopeError {
    #[error("Line needs two points, got fewer")]
    MissingPoint,
    #[error("Vertical line at x = {x} has no slope")]
    Vertical { x: f64 },
    #[error("Slope or intercept is not finite")]
    NonFinite,
}

/// A line in slope-intercept form `y = m·x + b`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSlopeCoefficient {
    /// Slope
    pub m: f64,
    /// Value at `x = 0`
    pub b: f64,
}

impl LineSlopeCoefficient {
    pub fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    /// Line through `(x1, y1)` and `(x2, y2)`.
    ///
    /// Equal x-coordinates divide by zero; the resulting infinite or NaN
    /// slope is returned as is.
    pub fn from_coordinates(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let m = (y2 - y1) / (x2 - x1);
        Self { m, b: y1 - m * x1 }
    }

    /// Line through two optional points.
    ///
    /// If either point is missing the result is the flat line `(m = 0, b = 0)`.
    /// Callers that need to tell that case apart should use
    /// [`LineSlopeCoefficient::try_from_points`].
    pub fn from_points(p1: Option<Point>, p2: Option<Point>) -> Self {
        match (p1, p2) {
            (Some(p1), Some(p2)) => Self::from_coordinates(p1.x, p1.y, p2.x, p2.y),
            _ => Self { m: 0.0, b: 0.0 },
        }
    }

    pub fn try_from_points(p1: Option<Point>, p2: Option<Point>) -> Result<Self, SlopeError> {
        let (Some(p1), Some(p2)) = (p1, p2) else {
            return Err(SlopeError::MissingPoint);
        };
        if p1.x == p2.x {
            return Err(SlopeError::Vertical { x: p1.x });
        }
        let line = Self::from_coordinates(p1.x, p1.y, p2.x, p2.y);
        if !line.is_finite() {
            return Err(SlopeError::NonFinite);
        }
        Ok(line)
    }

    pub fn is_finite(&self) -> bool {
        self.m.is_finite() && self.b.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coordinates() {
        // y = 2x + 1 through (0, 1) and (2, 5)
        let line = LineSlopeCoefficient::from_coordinates(0.0, 1.0, 2.0, 5.0);
        assert_eq!(line, LineSlopeCoefficient::new(2.0, 1.0));
    }

    #[test]
    fn test_vertical_coordinates_give_non_finite_slope() {
        let line = LineSlopeCoefficient::from_coordinates(3.0, 0.0, 3.0, 4.0);
        assert!(!line.m.is_finite(), "m = {}", line.m);
        assert!(!line.is_finite());

        // Same point twice: 0/0
        let line = LineSlopeCoefficient::from_coordinates(1.0, 1.0, 1.0, 1.0);
        assert!(line.m.is_nan());
    }

    #[test]
    fn test_missing_point_falls_back_to_flat_line() {
        let p = Some(Point::new(0.0, 9.0));
        let flat = LineSlopeCoefficient::new(0.0, 0.0);

        assert_eq!(LineSlopeCoefficient::from_points(p, None), flat);
        assert_eq!(LineSlopeCoefficient::from_points(None, p), flat);
        assert_eq!(LineSlopeCoefficient::from_points(None, None), flat);
    }

    #[test]
    fn test_from_points() {
        let line = LineSlopeCoefficient::from_points(
            Some(Point::new(0.0, 9.0)),
            Some(Point::new(4.0, 0.0)),
        );
        assert_eq!(line.m, -2.25);
        assert_eq!(line.b, 9.0);
    }

    #[test]
    fn test_try_from_points_reports_each_degenerate_case() {
        let a = Some(Point::new(2.0, 1.0));
        let b = Some(Point::new(2.0, 7.0));

        assert_eq!(
            LineSlopeCoefficient::try_from_points(a, None),
            Err(SlopeError::MissingPoint)
        );
        assert_eq!(
            LineSlopeCoefficient::try_from_points(a, b),
            Err(SlopeError::Vertical { x: 2.0 })
        );
        assert_eq!(
            LineSlopeCoefficient::try_from_points(Some(Point::new(f64::INFINITY, 0.0)), a),
            Err(SlopeError::NonFinite)
        );

        let line = LineSlopeCoefficient::try_from_points(a, Some(Point::new(4.0, 5.0))).unwrap();
        assert_eq!(line, LineSlopeCoefficient::new(2.0, -3.0));
    }
}
