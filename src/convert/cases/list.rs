//! List tests.

use serde_json::json;

use super::common::{assert_converts, assert_converts_ordered};
use crate::convert::convert_sass_variable;
use crate::rule::Rule;
use crate::token::TokenValue;

#[test]
fn named_list() {
    let rule = Rule::list([Rule::string("a"), Rule::string("b")]);
    assert_converts(&rule, "colors", json!({"colors": ["a", "b"]}));
}

#[test]
fn unnamed_list() {
    let rule = Rule::list([Rule::number_with_unit(1.0, "px"), Rule::boolean(true)]);
    assert_converts(&rule, "", json!(["1px", true]));
}

#[test]
fn empty_list() {
    assert_converts(&Rule::list([]), "", json!([]));
    assert_converts(&Rule::list([]), "none", json!({"none": []}));
}

#[test]
fn order_is_preserved() {
    let rule = Rule::list(["z", "a", "m", "a"].map(Rule::string));
    assert_converts_ordered(&rule, "", json!(["z", "a", "m", "a"]));
}

#[test]
fn elements_are_unnamed() {
    // Each element is converted without a name, so scalars stay bare even
    // inside a named list.
    let rule = Rule::list([Rule::string("x"), Rule::color([("r", 1.0)])]);
    let token = convert_sass_variable(&rule, "items", false);
    let items = token.get("items").and_then(TokenValue::as_sequence).unwrap();
    assert_eq!(items[0], TokenValue::from("x"));
    assert_eq!(items[1].to_json(), json!({"r": 1}));
}

#[test]
fn list_of_lists() {
    let rule = Rule::list([
        Rule::list([Rule::string("a")]),
        Rule::list([Rule::string("b"), Rule::string("c")]),
    ]);
    assert_converts(&rule, "grid", json!({"grid": [["a"], ["b", "c"]]}));
}
