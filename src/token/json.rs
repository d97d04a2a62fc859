//! Token tree ↔ JSON conversion.

use serde_json::{Map, Value as JsonValue};

use super::{Scalar, TokenMap, TokenValue};

impl TokenValue {
    /// Convert to a JSON value, keeping mapping order and exact numbers.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Scalar(scalar) => scalar_to_json(scalar),
            Self::Sequence(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Mapping(map) => JsonValue::Object(map_to_json(map)),
        }
    }

    /// Serialize to compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Serialize to pretty-printed JSON text (2-space indent).
    pub fn to_json_pretty(&self) -> String {
        // Serializing a `Value` cannot fail: keys are always strings.
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Build a token tree from arbitrary JSON.
    ///
    /// Every JSON shape has a token counterpart, so this never fails.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Scalar(Scalar::Null),
            JsonValue::Bool(b) => Self::Scalar(Scalar::Boolean(*b)),
            JsonValue::Number(n) => Self::Scalar(Scalar::Number(n.clone())),
            JsonValue::String(s) => Self::Scalar(Scalar::String(s.clone())),
            JsonValue::Array(arr) => Self::Sequence(arr.iter().map(Self::from_json).collect()),
            JsonValue::Object(obj) => Self::Mapping(map_from_json(obj)),
        }
    }
}

impl TokenMap {
    /// Convert to a JSON object, keeping entry order.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(map_to_json(self))
    }

    /// Build a map from the entries of a JSON object.
    pub fn from_json(obj: &Map<String, JsonValue>) -> Self {
        map_from_json(obj)
    }
}

impl From<&TokenValue> for JsonValue {
    fn from(token: &TokenValue) -> Self {
        token.to_json()
    }
}

impl From<TokenValue> for JsonValue {
    fn from(token: TokenValue) -> Self {
        token.to_json()
    }
}

impl From<&TokenMap> for JsonValue {
    fn from(map: &TokenMap) -> Self {
        map.to_json()
    }
}

fn scalar_to_json(scalar: &Scalar) -> JsonValue {
    match scalar {
        Scalar::String(s) => JsonValue::String(s.clone()),
        Scalar::Boolean(b) => JsonValue::Bool(*b),
        Scalar::Null => JsonValue::Null,
        Scalar::Number(n) => JsonValue::Number(n.clone()),
    }
}

fn map_to_json(map: &TokenMap) -> Map<String, JsonValue> {
    map.iter().map(|(k, v)| (k.to_string(), v.to_json())).collect()
}

fn map_from_json(obj: &Map<String, JsonValue>) -> TokenMap {
    let mut map = TokenMap::with_capacity(obj.len());
    for (key, value) in obj {
        map.insert(key.as_str(), TokenValue::from_json(value));
    }
    map
}
