use thiserror::Error;

use crate::equation::Sign;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Constraint fixes neither x nor y")]
    NoAxis,
    #[error("Constraint fixes both x and y")]
    BothAxes,
}

/// The coordinate an axis-aligned constraint pins down.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixedAxis {
    /// The vertical line `x = k`
    X(f64),
    /// The horizontal line `y = k`
    Y(f64),
}

/// An axis-aligned bound such as `y <= 5`, in chart coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConstraint {
    pub axis: FixedAxis,
    /// Inequality direction; descriptive only
    pub sign: Sign,
}

impl LineConstraint {
    pub fn new(axis: FixedAxis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    pub fn fix_x(k: f64, sign: Sign) -> Self {
        Self::new(FixedAxis::X(k), sign)
    }

    pub fn fix_y(k: f64, sign: Sign) -> Self {
        Self::new(FixedAxis::Y(k), sign)
    }

    /// Build from the `(fixed_x, fixed_y)` pair form, where exactly one side
    /// must be set.
    pub fn from_optional(
        fixed_x: Option<f64>,
        fixed_y: Option<f64>,
        sign: Sign,
    ) -> Result<Self, ConstraintError> {
        match (fixed_x, fixed_y) {
            (Some(k), None) => Ok(Self::fix_x(k, sign)),
            (None, Some(k)) => Ok(Self::fix_y(k, sign)),
            (None, None) => Err(ConstraintError::NoAxis),
            (Some(_), Some(_)) => Err(ConstraintError::BothAxes),
        }
    }

    pub fn fixed_x(&self) -> Option<f64> {
        match self.axis {
            FixedAxis::X(k) => Some(k),
            FixedAxis::Y(_) => None,
        }
    }

    pub fn fixed_y(&self) -> Option<f64> {
        match self.axis {
            FixedAxis::Y(k) => Some(k),
            FixedAxis::X(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional() {
        let c = LineConstraint::from_optional(None, Some(5.0), Sign::LessOrEqual).unwrap();
        assert_eq!(c.axis, FixedAxis::Y(5.0));
        assert_eq!(c.fixed_y(), Some(5.0));
        assert_eq!(c.fixed_x(), None);
        assert_eq!(c.sign, Sign::LessOrEqual);

        let c = LineConstraint::from_optional(Some(-3.0), None, Sign::default()).unwrap();
        assert_eq!(c.fixed_x(), Some(-3.0));
        assert_eq!(c.sign, Sign::Equal);
    }

    #[test]
    fn test_from_optional_rejects_unpinned_shapes() {
        assert_eq!(
            LineConstraint::from_optional(None, None, Sign::Equal),
            Err(ConstraintError::NoAxis)
        );
        assert_eq!(
            LineConstraint::from_optional(Some(1.0), Some(2.0), Sign::Equal),
            Err(ConstraintError::BothAxes)
        );
    }
}
