//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area.

use serde::Serialize;

use crate::catalogs::PARSER_VERSION;
use crate::types::*;
use crate::{compile, scan};

// ---------------------------------------------------------------------------
// Result types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Scan outcome as exposed over FFI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub parser_version: &'static str,
    pub usage: String,
    pub error_code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub result: ParseResult,
}

impl ParseReport {
    pub fn new(schema: &Schema, result: ParseResult) -> Self {
        Self {
            parser_version: PARSER_VERSION,
            usage: schema.usage(),
            error_code: result.error_code(),
            error_message: result.error_message(),
            result,
        }
    }
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Compile schema text and return its declarations as JSON.
///
/// Input: schema text such as `l,p#,d*`
/// Output: JSON string with `{ success, data?: Schema, error? }`
pub fn compile_to_json(schema_text: &str) -> String {
    let result = std::panic::catch_unwind(|| compile(schema_text));

    match result {
        Ok(Ok(schema)) => success_json(schema),
        Ok(Err(e)) => failure_json(e.to_string()),
        Err(_) => failure_json("Internal parser panic".to_string()),
    }
}

/// Compile schema text, scan the tokens against it and return the result
/// as JSON.
///
/// Input: schema text + JSON array of token strings
/// Output: JSON string with `{ success, data?: ParseReport, error? }`
///
/// A malformed schema or token list yields `success: false`; invalid
/// arguments are a successful call whose `data.valid` is `false`.
pub fn parse_to_json(schema_text: &str, tokens_json: &str) -> String {
    let tokens: Vec<String> = match serde_json::from_str(tokens_json) {
        Ok(t) => t,
        Err(e) => return failure_json(format!("Invalid tokens JSON: {e}")),
    };

    let result = std::panic::catch_unwind(|| {
        compile(schema_text).map(|schema| {
            let result = scan(&schema, &tokens);
            ParseReport::new(&schema, result)
        })
    });

    match result {
        Ok(Ok(report)) => success_json(report),
        Ok(Err(e)) => failure_json(e.to_string()),
        Err(_) => failure_json("Internal parser panic".to_string()),
    }
}

fn success_json<T: Serialize>(data: T) -> String {
    let ffi_result = FfiResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&ffi_result)
        .unwrap_or_else(|e| failure_json(format!("JSON serialization error: {e}")))
}

fn failure_json(error: String) -> String {
    serde_json::to_string(&FfiResult::<()> {
        success: false,
        data: None,
        error: Some(error),
    })
    .unwrap_or_else(|_| r#"{"success":false}"#.to_string())
}
