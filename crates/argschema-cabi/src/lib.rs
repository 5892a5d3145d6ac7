//! C ABI bindings for the argschema parser.
//!
//! All functions use C-compatible string types:
//! - Input: `*const c_char` (null-terminated C string)
//! - Output: `*mut c_char` (caller must free with `argschema_free_string`)
//!
//! This crate builds as a cdylib for use via P/Invoke (C#), ctypes (Python), etc.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use argschema_core::{compile_to_json, parse_to_json};

/// Compile schema text and return its declarations as JSON.
///
/// # Safety
/// - `schema` must be a valid null-terminated UTF-8 string.
/// - The returned pointer must be freed with `argschema_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn argschema_compile(schema: *const c_char) -> *mut c_char {
    let schema = unsafe { CStr::from_ptr(schema) };

    let schema_str = match schema.to_str() {
        Ok(s) => s,
        Err(_) => return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in schema"}"#),
    };

    to_c_string(&compile_to_json(schema_str))
}

/// Scan a JSON array of tokens against schema text and return the result
/// as JSON.
///
/// # Safety
/// - `schema` must be a valid null-terminated UTF-8 string.
/// - `tokens_json` must be a valid null-terminated UTF-8 JSON string.
/// - The returned pointer must be freed with `argschema_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn argschema_parse(
    schema: *const c_char,
    tokens_json: *const c_char,
) -> *mut c_char {
    let schema = unsafe { CStr::from_ptr(schema) };
    let tokens_json = unsafe { CStr::from_ptr(tokens_json) };

    let schema_str = match schema.to_str() {
        Ok(s) => s,
        Err(_) => return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in schema"}"#),
    };
    let tokens_str = match tokens_json.to_str() {
        Ok(s) => s,
        Err(_) => {
            return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in tokens_json"}"#)
        }
    };

    to_c_string(&parse_to_json(schema_str, tokens_str))
}

/// Free a string previously returned by argschema_compile or argschema_parse.
///
/// # Safety
/// - `ptr` must be a pointer previously returned by one of the argschema_*
///   functions, or null (in which case this is a no-op).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn argschema_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Convert a Rust string to a C-compatible heap-allocated string.
/// Interior NUL bytes cannot cross the boundary and yield an empty string.
fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}
