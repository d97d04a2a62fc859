//! Map tests, including the named-map flattening.

use serde_json::json;

use super::common::{assert_converts, assert_converts_ordered, nesting_converter};
use crate::rule::Rule;

fn point() -> Rule {
    Rule::map([("x", Rule::string("1")), ("y", Rule::string("2"))])
}

#[test]
fn named_map_drops_its_name() {
    // The name is discarded: a named map yields its children directly.
    assert_converts(&point(), "point", json!({"x": "1", "y": "2"}));
}

#[test]
fn unnamed_map() {
    assert_converts(&point(), "", json!({"x": "1", "y": "2"}));
}

#[test]
fn named_and_unnamed_are_identical() {
    let named = crate::convert::convert_sass_variable(&point(), "point", false);
    let unnamed = crate::convert::convert_sass_variable(&point(), "", true);
    assert_eq!(named, unnamed);
}

#[test]
fn empty_map() {
    assert_converts(&Rule::map::<&str>([]), "nothing", json!({}));
}

#[test]
fn declaration_order_is_kept() {
    let rule = Rule::map([
        ("small", Rule::number_with_unit(4.0, "px")),
        ("large", Rule::number_with_unit(16.0, "px")),
        ("medium", Rule::number_with_unit(8.0, "px")),
    ]);
    assert_converts_ordered(
        &rule,
        "spacing",
        json!({"small": "4px", "large": "16px", "medium": "8px"}),
    );
}

#[test]
fn children_are_unnamed_sub_properties() {
    let rule = Rule::map([
        ("flag", Rule::boolean(true)),
        ("sizes", Rule::list([Rule::number(1.0), Rule::number(2.0)])),
        ("brand", Rule::color([("r", 255.0)])),
    ]);
    assert_converts(
        &rule,
        "theme",
        json!({"flag": true, "sizes": ["1", "2"], "brand": {"r": 255}}),
    );
}

#[test]
fn nest_mode_wraps_named_maps() {
    let converter = nesting_converter();
    assert_eq!(
        converter.convert(&point(), "point", false).to_json(),
        json!({"point": {"x": "1", "y": "2"}})
    );
    assert_eq!(
        converter.convert(&point(), "", false).to_json(),
        json!({"x": "1", "y": "2"})
    );
}

#[test]
fn nest_mode_leaves_inner_maps_unnamed() {
    let rule = Rule::map([("inner", point())]);
    assert_eq!(
        nesting_converter().convert(&rule, "outer", false).to_json(),
        json!({"outer": {"inner": {"x": "1", "y": "2"}}})
    );
}
