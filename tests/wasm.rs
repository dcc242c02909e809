#![cfg(target_arch = "wasm32")]

use unique_chars::{check_invalid_js, find_duplicate_js, has_unique_chars_js};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn has_unique_chars_returns_bool() {
    assert!(has_unique_chars_js(" a ").unwrap());
    assert!(!has_unique_chars_js("a a").unwrap());
}

#[wasm_bindgen_test]
fn control_characters_throw_the_fixed_message() {
    let err = has_unique_chars_js("a\tb").unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("invalid character in string"));
    let err = check_invalid_js("\u{7f}").unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("invalid character in string"));
    assert!(check_invalid_js("ok").is_ok());
}

#[wasm_bindgen_test]
fn find_duplicate_is_null_when_unique() {
    let value = find_duplicate_js("abc").unwrap();
    assert!(value.is_null());
    assert!(!value.is_undefined());
}

#[wasm_bindgen_test]
fn find_duplicate_is_an_object_on_repeat() {
    let value = find_duplicate_js("ab cba").unwrap();
    assert!(value.is_object());
}
