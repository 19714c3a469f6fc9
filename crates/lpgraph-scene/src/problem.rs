use lpgraph_geometry::{LineConstraint, LinearEquation, Sign, Target, TargetFunction};

/// The inputs of a graphical-method chart
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicalProblem {
    /// Constraint lines, numbered from 1 in series titles
    pub equations: Vec<LinearEquation>,
    /// Axis-aligned bounds, numbered from 1 in series titles
    pub constraints: Vec<LineConstraint>,
    /// Objective drawn as a vector from the origin
    pub target: Option<TargetFunction>,
}

impl GraphicalProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two constraint lines, one bound and an objective:
    ///
    /// ```text
    /// 4x + 9y <= 36
    /// 2x +  y <= 11
    /// y <= 5
    /// 3x + 2y -> max
    /// ```
    pub fn demo() -> Self {
        let mut problem = Self::new();
        problem.add_equation(4.0, 9.0, 36.0, Sign::LessOrEqual);
        problem.add_equation(2.0, 1.0, 11.0, Sign::LessOrEqual);
        problem.add_constraint(LineConstraint::fix_y(5.0, Sign::LessOrEqual));
        problem.set_target(3.0, 2.0, Target::Max);
        problem
    }

    pub fn add_equation(&mut self, a1: f64, a2: f64, b: f64, sign: Sign) {
        self.equations.push(LinearEquation::new(a1, a2, b, sign));
    }

    pub fn add_constraint(&mut self, constraint: LineConstraint) {
        self.constraints.push(constraint);
    }

    pub fn set_target(&mut self, c1: f64, c2: f64, target: Target) {
        self.target = Some(TargetFunction::new(c1, c2, target));
    }

    pub fn num_equations(&self) -> usize {
        self.equations.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpgraph_geometry::FixedAxis;

    #[test]
    fn test_demo_problem() {
        let problem = GraphicalProblem::demo();
        assert_eq!(problem.num_equations(), 2);
        assert_eq!(problem.num_constraints(), 1);

        assert_eq!(problem.equations[0], LinearEquation::new(4.0, 9.0, 36.0, Sign::LessOrEqual));
        assert_eq!(problem.equations[1].b(), 11.0);
        assert_eq!(problem.constraints[0].axis, FixedAxis::Y(5.0));
        assert_eq!(problem.target, Some(TargetFunction::new(3.0, 2.0, Target::Max)));
    }

    #[test]
    fn test_builder_methods() {
        let mut problem = GraphicalProblem::new();
        assert!(problem.target.is_none());

        problem.add_equation(1.0, 1.0, 4.0, Sign::GreaterOrEqual);
        problem.add_constraint(LineConstraint::fix_x(3.0, Sign::LessOrEqual));
        problem.set_target(1.0, -1.0, Target::Min);

        assert_eq!(problem.equations[0].sign(), Sign::GreaterOrEqual);
        assert_eq!(problem.constraints[0].fixed_x(), Some(3.0));
        assert_eq!(problem.target.map(|t| t.target), Some(Target::Min));
    }
}
