mod axis_line;
mod border;
mod constraint;
mod equation;
mod point;
mod slope;
mod target;

pub use axis_line::AxisLine;
pub use border::border_points;
pub use constraint::{ConstraintError, FixedAxis, LineConstraint};
pub use equation::{LineForm, LinearEquation, Sign, intersect_constraint};
pub use point::Point;
pub use slope::{LineSlopeCoefficient, SlopeError};
pub use target::{Target, TargetFunction};
