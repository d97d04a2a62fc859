//! Design token output tree.
//!
//! A converted variable is a [`TokenValue`]: a scalar leaf, an ordered
//! sequence, or an ordered [`TokenMap`]. The tree is plain data, owns all of
//! its contents and can be handed to any serializer.
//!
//! # Modules
//!
//! - `map` - [`TokenMap`], the insertion-ordered mapping
//! - `json` - Conversion to and from `serde_json::Value`

mod json;
mod map;

use serde_json::Number;

pub use map::TokenMap;

/// A leaf value in the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text, including rendered numbers such as `"10px"`.
    String(String),
    /// A raw number, kept exactly as read. Only produced by opaque color
    /// channels.
    Number(Number),
    /// A boolean flag.
    Boolean(bool),
    /// An explicit null. Only produced by opaque color channels.
    Null,
}

/// A node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A leaf.
    Scalar(Scalar),
    /// An ordered list of tokens.
    Sequence(Vec<TokenValue>),
    /// An ordered mapping of named tokens.
    Mapping(TokenMap),
}

impl TokenValue {
    /// Wrap `value` in a single-entry mapping `{ name: value }`.
    pub fn named(name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        Self::Mapping(TokenMap::single(name, value))
    }

    /// Get the text of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Get the value of a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Get the value of a number scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Get the elements of a sequence.
    pub fn as_sequence(&self) -> Option<&[TokenValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries of a mapping.
    pub fn as_mapping(&self) -> Option<&TokenMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Get the entries of a mapping for mutation.
    pub fn as_mapping_mut(&mut self) -> Option<&mut TokenMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this is a mapping.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Short name of the node type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Scalar(Scalar::Number(_)) => "number",
            Self::Scalar(Scalar::Boolean(_)) => "boolean",
            Self::Scalar(Scalar::Null) => "null",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<Scalar> for TokenValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Boolean(b))
    }
}

/// Integral values below 2^53 become integers. Non-finite values have no
/// number form and become [`Scalar::Null`].
impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < (1u64 << 53) as f64 {
            return Self::Scalar(Scalar::Number(Number::from(n as i64)));
        }
        Number::from_f64(n).map_or(Self::Scalar(Scalar::Null), |n| Self::Scalar(Scalar::Number(n)))
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u64> for TokenValue {
    fn from(n: u64) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<Number> for TokenValue {
    fn from(n: Number) -> Self {
        Self::Scalar(Scalar::Number(n))
    }
}

impl From<Vec<TokenValue>> for TokenValue {
    fn from(items: Vec<TokenValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<TokenMap> for TokenValue {
    fn from(map: TokenMap) -> Self {
        Self::Mapping(map)
    }
}
