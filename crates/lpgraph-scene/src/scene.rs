//! Chart scene construction.
//!
//! A [`Scene`] is the full list of series a chart shows for one problem and
//! one visible window. It is rebuilt from scratch whenever the window or the
//! problem changes; nothing is updated in place.

use lpgraph_geometry::{
    AxisLine, FixedAxis, LineForm, LinearEquation, Point, TargetFunction, border_points,
    intersect_constraint,
};
use thiserror::Error;

use crate::problem::GraphicalProblem;
use crate::range::{AxisRange, RangeError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid axis range: {0}")]
    Range(#[from] RangeError),
    #[error("Invalid scene option {name}: {value}")]
    InvalidOption { name: &'static str, value: f64 },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Points joined in order
    Line,
    /// Unconnected markers
    Scatter,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Whatever the chart picks for the series
    #[default]
    Auto,
    Gray,
    Red,
    Black,
    Blue,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub stroke: Color,
    pub fill: Option<Color>,
    pub dashed: bool,
}

impl Style {
    fn marker(color: Color) -> Self {
        Self {
            stroke: color,
            fill: Some(color),
            dashed: false,
        }
    }

    fn dashed(color: Color) -> Self {
        Self {
            stroke: color,
            fill: None,
            dashed: true,
        }
    }

    fn solid(color: Color) -> Self {
        Self {
            stroke: color,
            fill: None,
            dashed: false,
        }
    }
}

/// One titled series of chart points
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: String,
    pub kind: SeriesKind,
    pub points: Vec<Point>,
    pub style: Style,
}

impl Series {
    fn line(title: impl Into<String>, points: Vec<Point>, style: Style) -> Self {
        Self {
            title: title.into(),
            kind: SeriesKind::Line,
            points,
            style,
        }
    }

    fn scatter(title: impl Into<String>, points: Vec<Point>, color: Color) -> Self {
        Self {
            title: title.into(),
            kind: SeriesKind::Scatter,
            points,
            style: Style::marker(color),
        }
    }
}

/// Everything drawn for one problem in one window, in drawing order
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub series: Vec<Series>,
}

impl Scene {
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// First series with the given title
    pub fn get(&self, title: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.title.as_str()).collect()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    /// Draw equation lines from their point-derived slope, which is the flat
    /// `(m = 0, b = 0)` fallback when an axis point is missing, instead of
    /// from their coefficients
    pub legacy_slope_fallback: bool,
    pub show_target_vector: bool,
    pub show_origin: bool,
    /// Length multiplier applied to the objective vector
    pub vector_scale: f64,
    pub arrow_head_length: f64,
    /// Half-angle between the arrowhead strokes, radians
    pub arrow_head_angle: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            legacy_slope_fallback: false,
            show_target_vector: true,
            show_origin: true,
            vector_scale: 1.0,
            arrow_head_length: 0.5,
            arrow_head_angle: 25f64.to_radians(),
        }
    }
}

impl SceneOptions {
    pub fn with_legacy_slope_fallback(mut self, enabled: bool) -> Self {
        self.legacy_slope_fallback = enabled;
        self
    }

    pub fn with_target_vector(mut self, shown: bool) -> Self {
        self.show_target_vector = shown;
        self
    }

    pub fn with_origin(mut self, shown: bool) -> Self {
        self.show_origin = shown;
        self
    }

    pub fn with_vector_scale(mut self, scale: f64) -> Self {
        self.vector_scale = scale;
        self
    }

    pub fn with_arrow_head(mut self, length: f64, angle: f64) -> Self {
        self.arrow_head_length = length;
        self.arrow_head_angle = angle;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let positive = [
            ("vector_scale", self.vector_scale),
            ("arrow_head_length", self.arrow_head_length),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::InvalidOption { name, value });
            }
        }
        let angle = self.arrow_head_angle;
        if !angle.is_finite() || angle <= 0.0 || angle >= std::f64::consts::PI {
            return Err(SceneError::InvalidOption {
                name: "arrow_head_angle",
                value: angle,
            });
        }
        Ok(())
    }
}

/// Builds scenes for the graphical method
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    options: SceneOptions,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: SceneOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the scene for `problem` inside `range`.
    ///
    /// Series order: axes, constraints, pairwise and axis intersections,
    /// equation lines, equation/constraint intersections, objective vector,
    /// origin. Points that are missing or not finite are left out.
    pub fn build(
        &self,
        problem: &GraphicalProblem,
        range: &AxisRange,
    ) -> Result<Scene, SceneError> {
        range.validate()?;
        self.options.validate()?;

        let mut series = Vec::new();
        add_axis_lines(&mut series, range);
        add_constraints(&mut series, problem, range);
        add_intersections(&mut series, &problem.equations);
        self.add_equation_lines(&mut series, &problem.equations, range);
        add_constraint_intersections(&mut series, problem);
        if self.options.show_target_vector {
            if let Some(target) = &problem.target {
                self.add_target_vector(&mut series, target);
            }
        }
        if self.options.show_origin {
            series.push(Series::scatter("Origin", vec![Point::ORIGIN], Color::Black));
        }

        tracing::debug!(
            equations = problem.num_equations(),
            constraints = problem.num_constraints(),
            series = series.len(),
            "scene rebuilt"
        );
        Ok(Scene { series })
    }

    fn add_equation_lines(
        &self,
        series: &mut Vec<Series>,
        equations: &[LinearEquation],
        range: &AxisRange,
    ) {
        for (i, equation) in equations.iter().enumerate() {
            let title = format!("Line {}", i + 1);
            let points = if self.options.legacy_slope_fallback {
                let line = equation.slope_coefficient();
                border_points(range.min_x, range.max_x, line.m, line.b)
            } else {
                match equation.line_form() {
                    LineForm::Sloped(line) => {
                        border_points(range.min_x, range.max_x, line.m, line.b)
                    }
                    LineForm::Vertical { x } if x.is_finite() => {
                        Some([Point::new(x, range.min_y), Point::new(x, range.max_y)])
                    }
                    LineForm::Vertical { .. } | LineForm::Degenerate => None,
                }
            };

            match points {
                Some(points) if points.iter().all(Point::is_finite) => {
                    series.push(Series::line(title, points.to_vec(), Style::default()));
                }
                _ => tracing::debug!(line = i + 1, "equation has no drawable line"),
            }
        }
    }

    fn add_target_vector(&self, series: &mut Vec<Series>, target: &TargetFunction) {
        if target.is_zero() {
            tracing::debug!("zero objective, no vector drawn");
            return;
        }
        let dir = target.chart_vector();
        let tip = Point::new(dir.x * self.options.vector_scale, dir.y * self.options.vector_scale);
        let len = tip.x.hypot(tip.y);
        if !(len.is_finite() && len > 0.0) {
            tracing::debug!(?tip, "objective vector has no drawable length");
            return;
        }

        // Strokes start at the tip and point back along the shaft
        let (bx, by) = (-tip.x / len, -tip.y / len);
        let stroke = |angle: f64| {
            let (sin, cos) = angle.sin_cos();
            Point::new(
                tip.x + (bx * cos - by * sin) * self.options.arrow_head_length,
                tip.y + (bx * sin + by * cos) * self.options.arrow_head_length,
            )
        };
        let angle = self.options.arrow_head_angle;
        let head = vec![stroke(angle), tip, stroke(-angle)];

        series.push(Series::line(
            "Target vector",
            vec![Point::ORIGIN, tip],
            Style::solid(Color::Blue),
        ));
        if head.iter().all(Point::is_finite) {
            series.push(Series::line("Target arrowhead", head, Style::solid(Color::Blue)));
        } else {
            tracing::debug!(?head, "arrowhead is not finite");
        }
    }
}

fn add_axis_lines(series: &mut Vec<Series>, range: &AxisRange) {
    let y_axis = AxisLine::new("Y", 0.0, range.min_y, 0.0, range.max_y);
    let x_axis = AxisLine::new("X", range.min_x, 0.0, range.max_x, 0.0);
    for axis in [y_axis, x_axis] {
        series.push(Series::line(axis.title, axis.points.to_vec(), Style::default()));
    }
}

fn add_constraints(series: &mut Vec<Series>, problem: &GraphicalProblem, range: &AxisRange) {
    for constraint in &problem.constraints {
        let (title, points) = match constraint.axis {
            FixedAxis::Y(k) => (
                format!("Constraint Y {}", k),
                border_points(range.min_x, range.max_x, 0.0, k).map(|p| p.to_vec()),
            ),
            FixedAxis::X(k) => (
                format!("Constraint X {}", k),
                Some(vec![Point::new(k, range.min_y), Point::new(k, range.max_y)]),
            ),
        };
        match points {
            Some(points) if points.iter().all(Point::is_finite) => {
                series.push(Series::line(title, points, Style::dashed(Color::Gray)));
            }
            _ => tracing::debug!(%title, "constraint is not drawable"),
        }
    }
}

fn add_intersections(series: &mut Vec<Series>, equations: &[LinearEquation]) {
    for (i, first) in equations.iter().enumerate() {
        for (j, second) in equations.iter().enumerate().skip(i + 1) {
            match LinearEquation::find_intersection(first, second) {
                Some(p) if p.is_finite() => series.push(Series::scatter(
                    format!("Intersection of line {} and {}", i + 1, j + 1),
                    vec![p],
                    Color::Red,
                )),
                other => tracing::debug!(first = i + 1, second = j + 1, ?other, "no intersection"),
            }
        }

        let axis_points: Vec<Point> = [first.point_two(), first.point_one()]
            .into_iter()
            .flatten()
            .filter(Point::is_finite)
            .collect();
        if !axis_points.is_empty() {
            series.push(Series::scatter(
                format!("Axis intersections (line {})", i + 1),
                axis_points,
                Color::Black,
            ));
        }
    }
}

fn add_constraint_intersections(series: &mut Vec<Series>, problem: &GraphicalProblem) {
    for (i, equation) in problem.equations.iter().enumerate() {
        for (j, constraint) in problem.constraints.iter().enumerate() {
            let p = intersect_constraint(equation, constraint);
            if !p.is_finite() {
                tracing::debug!(
                    line = i + 1,
                    constraint = j + 1,
                    ?p,
                    "constraint intersection dropped"
                );
                continue;
            }
            series.push(Series::scatter(
                format!("Intersection of line {} and constraint {}", i + 1, j + 1),
                vec![p],
                Color::Black,
            ));
        }
    }
}
