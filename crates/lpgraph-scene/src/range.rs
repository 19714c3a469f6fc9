use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Axis range bounds must be finite")]
    NonFinite,
    #[error("Empty {axis} range: min {min} is not below max {max}")]
    Empty { axis: char, min: f64, max: f64 },
}

/// The visible chart window `[min_x, max_x] × [min_y, max_y]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            min_x: -20.0,
            max_x: 20.0,
            min_y: -20.0,
            max_y: 20.0,
        }
    }
}

impl AxisRange {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, RangeError> {
        let range = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), RangeError> {
        let bounds = [self.min_x, self.max_x, self.min_y, self.max_y];
        if !bounds.iter().all(|v| v.is_finite()) {
            return Err(RangeError::NonFinite);
        }
        if self.min_x >= self.max_x {
            return Err(RangeError::Empty {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_y >= self.max_y {
            return Err(RangeError::Empty {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }
}
