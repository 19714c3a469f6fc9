//! Constraint lines in standard form and their intersections.
//!
//! An equation `a1·x + a2·y = b` is laid out on the chart with the second
//! variable on the horizontal axis and the first on the vertical axis. Axis
//! points, [`LinearEquation::find_intersection`] and [`intersect_constraint`]
//! all report chart coordinates in that layout. [`LinearEquation::solve`]
//! reports the solution in variable order instead.

use crate::constraint::{FixedAxis, LineConstraint};
use crate::point::Point;
use crate::slope::LineSlopeCoefficient;

/// Inequality direction of a constraint line.
///
/// Carried for display; no geometry depends on it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Less than or equal (<=)
    LessOrEqual,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Equal (=)
    #[default]
    Equal,
}

/// How an equation's line sits on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineForm {
    /// `y = m·x + b` on the chart
    Sloped(LineSlopeCoefficient),
    /// `x = x` on the chart
    Vertical { x: f64 },
    /// Both coefficients are zero; there is no line
    Degenerate,
}

/// Serialized shape of a [`LinearEquation`]: just its literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
struct EquationLiteral {
    a1: f64,
    a2: f64,
    b: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    sign: Sign,
}

/// A constraint line `a1·x + a2·y = b`.
///
/// Axis crossings and the point-derived slope are computed once at
/// construction; the value is immutable afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EquationLiteral", into = "EquationLiteral"))]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation {
    a1: f64,
    a2: f64,
    b: f64,
    sign: Sign,
    x1: Option<f64>,
    x2: Option<f64>,
    point_one: Option<Point>,
    point_two: Option<Point>,
    slope_coefficient: LineSlopeCoefficient,
}

impl LinearEquation {
    pub fn new(a1: f64, a2: f64, b: f64, sign: Sign) -> Self {
        let x1 = (a1 != 0.0).then(|| b / a1);
        let x2 = (a2 != 0.0).then(|| b / a2);
        let point_one = x1.map(|x1| Point::new(0.0, x1));
        let point_two = x2.map(|x2| Point::new(x2, 0.0));
        Self {
            a1,
            a2,
            b,
            sign,
            x1,
            x2,
            point_one,
            point_two,
            slope_coefficient: LineSlopeCoefficient::from_points(point_one, point_two),
        }
    }

    pub fn a1(&self) -> f64 {
        self.a1
    }

    pub fn a2(&self) -> f64 {
        self.a2
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `b / a1`: where the line crosses the vertical axis. `None` if `a1 == 0`.
    pub fn x1(&self) -> Option<f64> {
        self.x1
    }

    /// `b / a2`: where the line crosses the horizontal axis. `None` if `a2 == 0`.
    pub fn x2(&self) -> Option<f64> {
        self.x2
    }

    /// `(0, x1)`
    pub fn point_one(&self) -> Option<Point> {
        self.point_one
    }

    /// `(x2, 0)`
    pub fn point_two(&self) -> Option<Point> {
        self.point_two
    }

    /// Slope form through [`point_one`](Self::point_one) and
    /// [`point_two`](Self::point_two).
    ///
    /// Falls back to `(m = 0, b = 0)` when either axis point is missing, and
    /// has a NaN slope when both points coincide at the origin. Use
    /// [`line_form`](Self::line_form) for a result that covers those lines.
    pub fn slope_coefficient(&self) -> LineSlopeCoefficient {
        self.slope_coefficient
    }

    /// Classify the line from its coefficients.
    pub fn line_form(&self) -> LineForm {
        if self.a1 != 0.0 {
            LineForm::Sloped(LineSlopeCoefficient::new(-self.a2 / self.a1, self.b / self.a1))
        } else if self.a2 != 0.0 {
            LineForm::Vertical { x: self.b / self.a2 }
        } else {
            LineForm::Degenerate
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a1 == 0.0 && self.a2 == 0.0
    }

    /// Left-hand side `a1·x + a2·y` evaluated at a chart point.
    pub fn evaluate(&self, point: Point) -> f64 {
        self.a1 * point.y + self.a2 * point.x
    }

    /// Whether a chart point lies on the line within `tolerance`.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        (self.evaluate(point) - self.b).abs() <= tolerance
    }

    /// Intersection of two lines by Cramer's rule, in chart coordinates.
    ///
    /// Returns `None` when the determinant is exactly zero (parallel or
    /// coincident lines). The returned point is `(y, x)` for the solution
    /// `(x, y)` of the system.
    pub fn find_intersection(eq1: &LinearEquation, eq2: &LinearEquation) -> Option<Point> {
        let determinant = eq1.a1 * eq2.a2 - eq2.a1 * eq1.a2;
        if determinant == 0.0 {
            return None;
        }

        let x = (eq1.b * eq2.a2 - eq2.b * eq1.a2) / determinant;
        let y = (eq1.a1 * eq2.b - eq2.a1 * eq1.b) / determinant;
        Some(Point::new(y, x))
    }

    /// Solution `(x, y)` of the two equations in variable order.
    pub fn solve(eq1: &LinearEquation, eq2: &LinearEquation) -> Option<Point> {
        Self::find_intersection(eq1, eq2).map(Point::transposed)
    }
}

impl From<EquationLiteral> for LinearEquation {
    fn from(lit: EquationLiteral) -> Self {
        Self::new(lit.a1, lit.a2, lit.b, lit.sign)
    }
}

impl From<LinearEquation> for EquationLiteral {
    fn from(eq: LinearEquation) -> Self {
        Self {
            a1: eq.a1,
            a2: eq.a2,
            b: eq.b,
            sign: eq.sign,
        }
    }
}

/// Where an equation's line meets an axis-aligned constraint, in chart
/// coordinates.
///
/// A zero coefficient on the solved-for side divides by zero; the point then
/// carries infinite or NaN coordinates and should be skipped by the caller.
pub fn intersect_constraint(equation: &LinearEquation, constraint: &LineConstraint) -> Point {
    match constraint.axis {
        FixedAxis::Y(k) => Point::new((equation.b - equation.a1 * k) / equation.a2, k),
        FixedAxis::X(k) => Point::new(k, (equation.b - equation.a2 * k) / equation.a1),
    }
}
