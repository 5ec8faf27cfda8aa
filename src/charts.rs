//! Seam to the charting collaborator living in the static shell. The Rust
//! side only hands over labels and amounts, in the order the server sent
//! them; everything about how the charts look belongs to the JS side.

use js_sys::Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = renderCategoryCharts)]
    fn render_category_charts(labels: Array, values: Array) -> Result<(), JsValue>;
}

pub fn render(summary: &[(String, f64)]) {
    let labels: Array = summary
        .iter()
        .map(|(label, _)| JsValue::from_str(label))
        .collect();
    let values: Array = summary
        .iter()
        .map(|(_, amount)| JsValue::from_f64(*amount))
        .collect();
    if let Err(err) = render_category_charts(labels, values) {
        log::warn!("chart renderer unavailable: {err:?}");
    }
}
