//! Upstream JSON input tests.

use serde_json::json;

use crate::convert::{convert_json_variable, ConvertError, Converter};

#[test]
fn converts_upstream_json() {
    let json = json!({"type": "SassNumber", "value": 10, "unit": "px"});
    let token = convert_json_variable(&json, "gap", false).unwrap();
    assert_eq!(token.to_json(), json!({"gap": "10px"}));
}

#[test]
fn unknown_kind_fails_for_every_name_and_flag() {
    let json = json!({"type": "Unknown"});
    for name in ["", "token"] {
        for is_sub_prop in [false, true] {
            let err = convert_json_variable(&json, name, is_sub_prop).unwrap_err();
            assert!(
                matches!(
                    &err,
                    ConvertError::UnsupportedRuleKind { kind: Some(k), .. } if k == "Unknown"
                ),
                "unexpected error: {err:?}"
            );
        }
    }
}

#[test]
fn unknown_kind_deep_inside_fails_whole_tree() {
    let json = json!({
        "type": "SassMap",
        "value": {
            "fine": {"type": "SassString", "value": "ok"},
            "nested": {
                "type": "SassList",
                "value": [
                    {"type": "SassBoolean", "value": true},
                    {"type": "SassFunction", "value": "lighten"}
                ]
            }
        }
    });
    let err = Converter::default().convert_json(&json, "theme", false).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"unexpected Sass type encountered: {"type":"SassFunction","value":"lighten"}"#
    );
}

#[test]
fn missing_tag_is_unsupported() {
    let err = convert_json_variable(&json!({"value": "x"}), "", false).unwrap_err();
    assert!(err.is_unsupported_kind());
}
