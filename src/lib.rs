use serde::Serialize;
use wasm_bindgen::prelude::*;

mod bit_set;
mod unique;
mod validate;

pub use unique::{Duplicate, find_duplicate, has_unique_chars};
pub use validate::{InvalidCharacterError, check_invalid};

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = hasUniqueChars)]
#[allow(clippy::missing_errors_doc)]
pub fn has_unique_chars_js(input: &str) -> Result<bool, JsValue> {
    has_unique_chars(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = checkInvalid)]
#[allow(clippy::missing_errors_doc)]
pub fn check_invalid_js(input: &str) -> Result<(), JsValue> {
    check_invalid(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolves to `null` when every character is unique.
#[wasm_bindgen(js_name = findDuplicate)]
#[allow(clippy::missing_errors_doc)]
pub fn find_duplicate_js(input: &str) -> Result<JsValue, JsValue> {
    let duplicate = find_duplicate(input).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    duplicate
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {e}")))
}
