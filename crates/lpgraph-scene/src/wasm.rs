//! WASM bindings for lpgraph
//!
//! Lets a JavaScript chart component ask for the scene of a problem on every
//! axis-range change and draw the returned series as is.

use wasm_bindgen::prelude::*;

use crate::problem::GraphicalProblem;
use crate::range::AxisRange;
use crate::scene::{SceneBuilder, SceneOptions};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn range_from_js(range: JsValue) -> Result<AxisRange, JsValue> {
    if range.is_undefined() || range.is_null() {
        return Ok(AxisRange::default());
    }
    serde_wasm_bindgen::from_value(range).map_err(to_js_error)
}

/// Build the scene for a problem inside a visible window.
///
/// `range` may be omitted for the default `[-20, 20]` window.
#[wasm_bindgen]
pub fn build_scene(problem: JsValue, range: JsValue) -> Result<JsValue, JsValue> {
    build_scene_with_options(problem, range, JsValue::UNDEFINED)
}

/// Like [`build_scene`], with a partial `SceneOptions` object.
#[wasm_bindgen]
pub fn build_scene_with_options(
    problem: JsValue,
    range: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let problem: GraphicalProblem = serde_wasm_bindgen::from_value(problem).map_err(to_js_error)?;
    let range = range_from_js(range)?;
    let options: SceneOptions = if options.is_undefined() || options.is_null() {
        SceneOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(to_js_error)?
    };

    let scene = SceneBuilder::new()
        .with_options(options)
        .build(&problem, &range)
        .map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&scene).map_err(to_js_error)
}

/// The built-in example problem, as a starting point for editors
#[wasm_bindgen]
pub fn demo_problem() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&GraphicalProblem::demo()).map_err(to_js_error)
}
