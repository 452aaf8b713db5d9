//! Shared JavaScript interop helpers for the WASM bindings.

use js_sys::{BigInt, Number, Object};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::HelperError;

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<HelperError> for JsValue {
    fn from(err: HelperError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
pub(crate) fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

/// String conversion the way `Array.prototype.join` performs it.
///
/// `null` and `undefined` become the empty string; objects and functions go
/// through their own `toString`.
pub(crate) fn js_string(value: &JsValue) -> String {
    if value.is_null() || value.is_undefined() {
        return String::new();
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(number) = value.as_f64() {
        return Number::from(number)
            .to_string(10)
            .map(String::from)
            .unwrap_or_else(|_| number.to_string());
    }
    if value.is_bigint() {
        return value
            .unchecked_ref::<BigInt>()
            .to_string(10)
            .map(String::from)
            .unwrap_or_default();
    }
    if let Some(flag) = value.as_bool() {
        return flag.to_string();
    }
    if value.is_object() || value.is_function() {
        return String::from(value.unchecked_ref::<Object>().to_string());
    }
    String::new()
}
