//! Conversions between JavaScript values and core types.

use dx_dashboard_core::Spot;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Render a JS value the way a template literal would.
pub fn js_to_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    value.unchecked_ref::<js_sys::Object>().to_string().into()
}

/// Read a spot record from a plain JS object.
pub fn spot_from_js(obj: &JsValue) -> Spot {
    let field = |name: &str| {
        js_sys::Reflect::get(obj, &name.into())
            .map(|v| js_to_text(&v))
            .unwrap_or_else(|_| "undefined".to_string())
    };

    Spot {
        formatted_time: field("formatted_time"),
        formatted_freq: field("formatted_freq"),
        callsign: field("callsign"),
        spotter: field("spotter"),
        comment: field("comment"),
        band: field("band"),
    }
}

/// Read a list of spots from a JS array (or any iterable).
pub fn spots_from_js(spots: &JsValue) -> Vec<Spot> {
    if spots.is_undefined() || spots.is_null() {
        return Vec::new();
    }
    js_sys::Array::from(spots)
        .iter()
        .map(|spot| spot_from_js(&spot))
        .collect()
}

/// JS value to JSON. `None` for values JSON cannot hold (`undefined`, functions).
pub fn js_to_json(value: &JsValue) -> Result<Option<Value>, JsValue> {
    let text = js_sys::JSON::stringify(value)?;
    match text.as_string() {
        Some(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(None),
    }
}

/// JSON to a JS value.
pub fn json_to_js(value: &Value) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}
