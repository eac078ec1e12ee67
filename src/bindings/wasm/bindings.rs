/*!
WebAssembly bindings for the cipher library.
*/

use wasm_bindgen::prelude::*;
use js_sys::Array;
use web_sys::console;

use crate::{
    core::crypto::{keygen, registry},
    dispatch,
};

/// Install the panic hook so panics show up in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Run one request from a form: returns the result text or `Error: ...`
#[wasm_bindgen(js_name = processText)]
pub fn process_text(action: &str, algorithm: &str, key: &str, text: &str) -> String {
    let output = dispatch::process_text(action, algorithm, key, text);
    if output.starts_with("Error: ") {
        console::warn_1(&JsValue::from_str(&output));
    }
    output
}

/// Canonical algorithm identifiers, for populating a selector
#[wasm_bindgen(js_name = listAlgorithms)]
pub fn list_algorithms() -> Array {
    registry::list_algorithms()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Random key for the named algorithm, or an `Error: ...` message
#[wasm_bindgen(js_name = randomKey)]
pub fn random_key(algorithm: &str) -> String {
    match registry::get_algorithm(algorithm) {
        Some(algorithm) => keygen::random_key(algorithm),
        None => dispatch::render(Err(crate::core::error::ValidationError::UnknownAlgorithm(
            algorithm.to_string(),
        ))),
    }
}
