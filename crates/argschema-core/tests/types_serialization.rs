use argschema_core::types::*;
use argschema_core::{compile, scan, ArgError};
use pretty_assertions::assert_eq;

#[test]
fn schema_json_keys() {
    let schema = compile("l,p#,d*").unwrap();

    let json = serde_json::to_value(&schema).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("source"));
    assert!(obj.contains_key("declarations"));

    // declaration order is preserved in the serialized text
    assert_eq!(
        serde_json::to_string(&schema).unwrap(),
        r#"{"source":"l,p#,d*","declarations":{"l":"boolean","p":"integer","d":"string"}}"#
    );
}

#[test]
fn parse_result_json_keys() {
    let schema = compile("l,p#").unwrap();
    let result = scan(&schema, &["-l", "-p", "x", "rest"]);

    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().unwrap();

    for key in ["values", "found", "unexpected", "ignored", "errors", "valid"] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(obj["valid"], false);
    assert_eq!(obj["values"]["l"], true);
    assert_eq!(obj["values"]["p"], 0);
    assert_eq!(obj["ignored"], serde_json::json!([3]));
}

#[test]
fn arg_error_json_shape() {
    let missing = serde_json::to_value(ArgError::MissingInteger('p')).unwrap();
    assert_eq!(
        missing,
        serde_json::json!({
            "code": "MISSING_INTEGER",
            "argument": "p",
            "message": "Could not find integer parameter for -p.",
        })
    );

    let invalid = serde_json::to_value(ArgError::InvalidInteger {
        argument: 'p',
        parameter: "1.5".into(),
    })
    .unwrap();
    assert_eq!(invalid["parameter"], "1.5");
}

#[test]
fn arg_kind_serialization() {
    assert_eq!(serde_json::to_value(ArgKind::Boolean).unwrap(), "boolean");
    assert_eq!(serde_json::to_value(ArgKind::String).unwrap(), "string");
    assert_eq!(serde_json::to_value(ArgKind::Integer).unwrap(), "integer");

    let kind: ArgKind = serde_json::from_str(r#""integer""#).unwrap();
    assert_eq!(kind, ArgKind::Integer);
}

#[test]
fn arg_value_untagged() {
    assert_eq!(serde_json::to_value(ArgValue::Boolean(true)).unwrap(), true);
    assert_eq!(serde_json::to_value(ArgValue::Integer(-3)).unwrap(), -3);
    assert_eq!(
        serde_json::to_value(ArgValue::String("x".into())).unwrap(),
        "x"
    );

    let value: ArgValue = serde_json::from_str("17").unwrap();
    assert_eq!(value, ArgValue::Integer(17));
}

#[test]
fn error_code_strings() {
    for code in [
        ErrorCode::Ok,
        ErrorCode::MissingString,
        ErrorCode::MissingInteger,
        ErrorCode::InvalidInteger,
        ErrorCode::UnexpectedArgument,
    ] {
        assert_eq!(serde_json::to_value(code).unwrap(), code.as_str());
    }
    assert_eq!(ErrorCode::UnexpectedArgument.to_string(), "UNEXPECTED_ARGUMENT");
}

#[test]
fn kind_markers() {
    assert_eq!(ArgKind::from_marker(""), Some(ArgKind::Boolean));
    assert_eq!(ArgKind::from_marker("*"), Some(ArgKind::String));
    assert_eq!(ArgKind::from_marker("#"), Some(ArgKind::Integer));
    assert_eq!(ArgKind::from_marker("**"), None);

    for kind in [ArgKind::Boolean, ArgKind::String, ArgKind::Integer] {
        assert_eq!(ArgKind::from_marker(kind.marker()), Some(kind));
    }
}
