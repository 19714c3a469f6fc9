use crate::point::Point;

/// Optimization direction of the objective.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Max,
    Min,
}

/// The objective `c1·x + c2·y -> max | min`.
///
/// Only drawn as a direction vector; nothing here optimizes it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFunction {
    pub c1: f64,
    pub c2: f64,
    pub target: Target,
}

impl TargetFunction {
    pub fn new(c1: f64, c2: f64, target: Target) -> Self {
        Self { c1, c2, target }
    }

    /// Direction in which the objective improves, in chart coordinates.
    ///
    /// The chart puts the first variable on the vertical axis, so the
    /// gradient `(c1, c2)` is drawn as `(c2, c1)`, negated for `Min`.
    pub fn chart_vector(&self) -> Point {
        let gradient = Point::new(self.c2, self.c1);
        match self.target {
            Target::Max => gradient,
            Target::Min => Point::new(-gradient.x, -gradient.y),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.c1 == 0.0 && self.c2 == 0.0
    }
}
