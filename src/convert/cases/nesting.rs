//! Deep nesting and purity tests.

use serde_json::json;

use super::common::{assert_converts, rule};
use crate::convert::{convert_sass_variable, Converter};
use crate::rule::Rule;

fn theme() -> Rule {
    Rule::map([
        (
            "palette",
            Rule::list([
                Rule::map([
                    ("name", Rule::string("primary")),
                    ("value", Rule::color([("r", 0.0), ("g", 85.0), ("b", 170.0)])),
                    ("weight", Rule::number_with_unit(600.0, "")),
                ]),
                Rule::map([
                    ("name", Rule::string("muted")),
                    ("dark", Rule::boolean(true)),
                ]),
            ]),
        ),
        ("radius", Rule::number_with_unit(4.0, "px")),
    ])
}

#[test]
fn map_in_list_in_map() {
    assert_converts(
        &theme(),
        "theme",
        json!({
            "palette": [
                {"name": "primary", "value": {"r": 0, "g": 85, "b": 170}, "weight": "600"},
                {"name": "muted", "dark": true}
            ],
            "radius": "4px"
        }),
    );
}

#[test]
fn leaf_types_survive_nesting() {
    let token = convert_sass_variable(&theme(), "", false);
    let first = &token.get("palette").and_then(|p| p.as_sequence()).unwrap()[0];
    assert_eq!(first.get("name").map(|t| t.type_name()), Some("string"));
    assert_eq!(first.get("value").map(|t| t.type_name()), Some("mapping"));
    let second = &token.get("palette").and_then(|p| p.as_sequence()).unwrap()[1];
    assert_eq!(second.get("dark").and_then(|t| t.as_bool()), Some(true));
}

#[test]
fn conversion_is_repeatable() {
    let converter = Converter::default();
    let rule = theme();
    for (name, is_sub_prop) in [("", false), ("theme", false), ("theme", true)] {
        let first = converter.convert(&rule, name, is_sub_prop);
        let second = converter.convert(&rule, name, is_sub_prop);
        assert_eq!(first, second);
    }
}

#[test]
fn deep_lists() {
    let mut nested = Rule::string("core");
    for _ in 0..64 {
        nested = Rule::list([nested]);
    }
    let mut token = convert_sass_variable(&nested, "", false);
    for _ in 0..64 {
        token = token.as_sequence().unwrap()[0].clone();
    }
    assert_eq!(token.as_str(), Some("core"));
}

#[test]
fn parsed_tree_matches_built_tree() {
    let parsed = rule(json!({
        "type": "SassMap",
        "value": {
            "palette": {
                "type": "SassList",
                "value": [
                    {
                        "type": "SassMap",
                        "value": {
                            "name": {"type": "SassString", "value": "primary"},
                            "value": {"type": "SassColor", "value": {"r": 0, "g": 85, "b": 170}},
                            "weight": {"type": "SassNumber", "value": 600, "unit": ""}
                        }
                    },
                    {
                        "type": "SassMap",
                        "value": {
                            "name": {"type": "SassString", "value": "muted"},
                            "dark": {"type": "SassBoolean", "value": true}
                        }
                    }
                ]
            },
            "radius": {"type": "SassNumber", "value": 4, "unit": "px"}
        }
    }));
    assert_eq!(
        convert_sass_variable(&parsed, "theme", false),
        convert_sass_variable(&theme(), "theme", false)
    );
}
