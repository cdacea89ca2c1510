use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

use crate::calculator::ViewingInputs;

pub mod calculator_js;

/// Deserialize a plain JS object into [`ViewingInputs`].
///
/// Field names follow the Rust record; enums use kebab-case
/// (`{ "field-of-view": "thx" }`, `"diagonal-heuristic"`, `"reclined"`).
fn js_inputs(inputs: JsValue) -> Result<ViewingInputs, JsValue> {
    from_value(inputs).map_err(|e| JsValue::from_str(&format!("Failed to read inputs from JS: {e}")))
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
