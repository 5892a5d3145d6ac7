//! argschema WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string inputs and return JSON strings.

use argschema_core::{compile_to_json, parse_to_json};
use wasm_bindgen::prelude::*;

/// Compile schema text and return its declarations as JSON.
///
/// @param schema - schema text such as `l,p#,d*`
/// @returns JSON string with `{ success: boolean, data?: Schema, error?: string }`
#[wasm_bindgen(js_name = "compile")]
pub fn wasm_compile(schema: &str) -> String {
    compile_to_json(schema)
}

/// Scan tokens against schema text and return the result as JSON.
///
/// @param schema - schema text such as `l,p#,d*`
/// @param tokens_json - JSON array of token strings
/// @returns JSON string with `{ success: boolean, data?: ParseReport, error?: string }`
#[wasm_bindgen(js_name = "parse")]
pub fn wasm_parse(schema: &str, tokens_json: &str) -> String {
    parse_to_json(schema, tokens_json)
}
