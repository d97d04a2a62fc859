//! Test infrastructure for conversion tests.

use serde_json::Value as JsonValue;

use crate::config::{Config, MapNaming};
use crate::convert::{convert_sass_variable, Converter};
use crate::rule::Rule;

/// Assert that `rule` converts to `expected` under `name`.
///
/// The sub-property flag must not change the output, so both settings are
/// checked.
pub fn assert_converts(rule: &Rule, name: &str, expected: JsonValue) {
    for is_sub_prop in [false, true] {
        let actual = convert_sass_variable(rule, name, is_sub_prop).to_json();
        assert_eq!(
            actual, expected,
            "rule {rule:?} with name {name:?} (sub-prop: {is_sub_prop})"
        );
    }
}

/// Like [`assert_converts`] but also compares serialized text, which pins
/// down key order.
pub fn assert_converts_ordered(rule: &Rule, name: &str, expected: JsonValue) {
    let actual = convert_sass_variable(rule, name, false).to_json();
    assert_eq!(actual.to_string(), expected.to_string(), "key order differs");
    assert_converts(rule, name, expected);
}

/// A converter that nests named maps.
pub fn nesting_converter() -> Converter {
    Converter::new(Config::builder().map_naming(MapNaming::Nest).build())
}

/// Parse upstream JSON, panicking on failure.
pub fn rule(json: JsonValue) -> Rule {
    Rule::from_json(&json).unwrap_or_else(|e| panic!("parse failed: {e}"))
}
