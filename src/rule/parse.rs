//! JSON → Rule parsing.
//!
//! The upstream parser writes each Sass value as a tagged object:
//!
//! ```json
//! {"type": "SassNumber", "value": 10, "unit": "px"}
//! {"type": "SassList", "value": [{"type": "SassString", "value": "a"}]}
//! {"type": "SassColor", "value": {"r": 255, "g": 0, "b": 0, "a": 1}}
//! ```

use serde_json::{Map, Value as JsonValue};

use super::{Rule, RuleKind, RuleMap};
use crate::convert::ConvertError;
use crate::token::TokenMap;

impl Rule {
    /// Read a rule from the upstream parser's JSON output.
    ///
    /// Fails with [`ConvertError::UnsupportedRuleKind`] when this node or any
    /// nested node has a missing or unknown `type` tag. No partial rule is
    /// returned.
    pub fn from_json(json: &JsonValue) -> Result<Self, ConvertError> {
        let Some(obj) = json.as_object() else {
            return Err(ConvertError::unsupported(json));
        };
        let kind = obj
            .get("type")
            .and_then(JsonValue::as_str)
            .and_then(RuleKind::from_tag)
            .ok_or_else(|| ConvertError::unsupported(json))?;
        let value = obj
            .get("value")
            .ok_or_else(|| ConvertError::malformed(kind, "missing 'value' field"))?;

        match kind {
            RuleKind::String => value
                .as_str()
                .map(Rule::string)
                .ok_or_else(|| expected(kind, "a string", value)),
            RuleKind::Number => {
                let number = value.as_f64().ok_or_else(|| expected(kind, "a number", value))?;
                Ok(Rule::Number {
                    value: number,
                    unit: parse_unit(obj)?,
                })
            }
            RuleKind::List => {
                let items = value.as_array().ok_or_else(|| expected(kind, "an array", value))?;
                let rules = items.iter().map(Rule::from_json).collect::<Result<Vec<_>, _>>()?;
                Ok(Rule::List(rules))
            }
            RuleKind::Map => {
                let children = value.as_object().ok_or_else(|| expected(kind, "an object", value))?;
                parse_children(children).map(Rule::Map)
            }
            RuleKind::Color => {
                let channels = value.as_object().ok_or_else(|| expected(kind, "an object", value))?;
                Ok(Rule::Color(TokenMap::from_json(channels)))
            }
            RuleKind::Boolean => value
                .as_bool()
                .map(Rule::boolean)
                .ok_or_else(|| expected(kind, "a boolean", value)),
        }
    }

    /// Read a rule from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConvertError> {
        let json: JsonValue = serde_json::from_str(text)?;
        Self::from_json(&json)
    }
}

fn parse_children(children: &Map<String, JsonValue>) -> Result<RuleMap, ConvertError> {
    let mut map = RuleMap::with_capacity(children.len());
    for (key, child) in children {
        map.insert(key.as_str(), Rule::from_json(child)?);
    }
    Ok(map)
}

/// A missing, `null` or empty `unit` all mean a unitless number.
fn parse_unit(obj: &Map<String, JsonValue>) -> Result<Option<String>, ConvertError> {
    match obj.get("unit") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(unit)) if unit.is_empty() => Ok(None),
        Some(JsonValue::String(unit)) => Ok(Some(unit.clone())),
        Some(other) => Err(ConvertError::malformed(
            RuleKind::Number,
            format!("expected 'unit' to be a string, got {}", json_type_name(other)),
        )),
    }
}

fn expected(kind: RuleKind, what: &str, got: &JsonValue) -> ConvertError {
    let reason = format!("expected 'value' to be {what}, got {}", json_type_name(got));
    ConvertError::malformed(kind, reason)
}

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
