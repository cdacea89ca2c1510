use crate::breakdown::Breakdown;
use crate::calculator::{ViewingInputs, ViewingResult, calculate};
use crate::wasm::{js_error, js_inputs};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(feature = "svg-io")]
use crate::diagram::SideView;

#[wasm_bindgen]
pub struct ViewingResultJs {
    inputs: ViewingInputs,
    inner: ViewingResult,
}

#[wasm_bindgen]
impl ViewingResultJs {
    /// Validates and computes in one step; errors surface as JS strings.
    #[wasm_bindgen(constructor)]
    pub fn new(inputs: JsValue) -> Result<ViewingResultJs, JsValue> {
        let inputs = js_inputs(inputs)?;
        let inner = calculate(&inputs).map_err(js_error)?;
        Ok(ViewingResultJs { inputs, inner })
    }

    #[wasm_bindgen(getter, js_name = distanceM)]
    pub fn distance_m(&self) -> f64 {
        self.inner.distance_m as f64
    }

    #[wasm_bindgen(getter, js_name = recommendedDistanceM)]
    pub fn recommended_distance_m(&self) -> f64 {
        self.inner.recommended_distance_m as f64
    }

    #[wasm_bindgen(getter, js_name = centerHeightCm)]
    pub fn center_height_cm(&self) -> f64 {
        self.inner.tv_center_height_cm as f64
    }

    #[wasm_bindgen(getter, js_name = bottomHeightCm)]
    pub fn bottom_height_cm(&self) -> f64 {
        self.inner.tv_bottom_height_cm as f64
    }

    #[wasm_bindgen(getter, js_name = verticalAngleDeg)]
    pub fn vertical_angle_deg(&self) -> f64 {
        self.inner.vertical_angle_deg as f64
    }

    #[wasm_bindgen(getter, js_name = horizontalAngleDeg)]
    pub fn horizontal_angle_deg(&self) -> f64 {
        self.inner.horizontal_angle_deg as f64
    }

    #[wasm_bindgen(getter, js_name = distanceLabel)]
    pub fn distance_label(&self) -> String {
        self.inner.distance_source.label().to_string()
    }

    /// Whole result record as a plain JS object.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner).map_err(js_error)
    }

    pub fn breakdown(&self) -> String {
        Breakdown::new(&self.inputs, &self.inner).to_string()
    }

    #[cfg(feature = "svg-io")]
    #[wasm_bindgen(js_name = sideViewSvg)]
    pub fn side_view_svg(&self, width_px: u32) -> String {
        SideView::new(&self.inputs, &self.inner).to_svg(width_px)
    }
}

/// Plain-object variant: `calculate({...})` returns the result record.
#[wasm_bindgen(js_name = calculate)]
pub fn calculate_js(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs = js_inputs(inputs)?;
    let result = calculate(&inputs).map_err(js_error)?;
    to_value(&result).map_err(js_error)
}
