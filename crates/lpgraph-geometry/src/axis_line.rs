use crate::point::Point;
use crate::slope::LineSlopeCoefficient;

/// A titled two-point segment, used for the chart axes and other raw lines.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLine {
    pub title: String,
    pub points: [Point; 2],
    pub slope: f64,
    pub intercept: f64,
}

impl AxisLine {
    /// Segment from `(x1, y1)` to `(x2, y2)`. A vertical segment gets a
    /// non-finite slope and intercept.
    pub fn new(title: impl Into<String>, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let line = LineSlopeCoefficient::from_coordinates(x1, y1, x2, y2);
        Self {
            title: title.into(),
            points: [Point::new(x1, y1), Point::new(x2, y2)],
            slope: line.m,
            intercept: line.b,
        }
    }
}
