pub mod problem;
pub mod range;
pub mod scene;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use problem::GraphicalProblem;
pub use range::{AxisRange, RangeError};
pub use scene::{Color, Scene, SceneBuilder, SceneError, SceneOptions, Series, SeriesKind, Style};
