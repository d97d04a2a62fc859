//! Typed Sass rules, the converter's input.
//!
//! A [`Rule`] is one node of the value tree an upstream Sass parser produces
//! for a variable declaration. Rules are usually read from that parser's JSON
//! output with [`Rule::from_json`], but can be built directly:
//!
//! ```
//! use sass_tokens::Rule;
//!
//! let spacing = Rule::map([
//!     ("small", Rule::number_with_unit(4.0, "px")),
//!     ("large", Rule::number_with_unit(16.0, "px")),
//! ]);
//! assert_eq!(spacing.kind().tag(), "SassMap");
//! ```

mod kind;
mod parse;

use rustc_hash::FxHashMap;

use crate::token::{TokenMap, TokenValue};

pub use kind::RuleKind;

/// A typed Sass value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A quoted or unquoted string.
    String(String),
    /// A number with an optional unit such as `px` or `%`.
    Number {
        /// Numeric value.
        value: f64,
        /// Unit appended verbatim when rendered.
        unit: Option<String>,
    },
    /// An ordered list.
    List(Vec<Rule>),
    /// A map in declaration order.
    Map(RuleMap),
    /// A color as an opaque channel mapping (e.g. `r`, `g`, `b`, `a`).
    Color(TokenMap),
    /// `true` or `false`.
    Boolean(bool),
}

impl Rule {
    /// The type tag of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::String(_) => RuleKind::String,
            Self::Number { .. } => RuleKind::Number,
            Self::List(_) => RuleKind::List,
            Self::Map(_) => RuleKind::Map,
            Self::Color(_) => RuleKind::Color,
            Self::Boolean(_) => RuleKind::Boolean,
        }
    }

    /// Create a string rule.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a unitless number rule.
    pub fn number(value: f64) -> Self {
        Self::Number { value, unit: None }
    }

    /// Create a number rule with a unit.
    pub fn number_with_unit(value: f64, unit: impl Into<String>) -> Self {
        Self::Number {
            value,
            unit: Some(unit.into()),
        }
    }

    /// Create a list rule.
    pub fn list(items: impl IntoIterator<Item = Rule>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Create a map rule from `(key, rule)` pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Rule)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Create a color rule from `(channel, value)` pairs.
    pub fn color<K, V>(channels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<TokenValue>,
    {
        Self::Color(channels.into_iter().collect())
    }

    /// Create a boolean rule.
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Children of a [`Rule::Map`], in declaration order.
///
/// Re-inserting a key replaces the child in place.
#[derive(Debug, Clone, Default)]
pub struct RuleMap {
    entries: Vec<(String, Rule)>,
    index: FxHashMap<String, usize>,
}

impl RuleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` children.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a child, returning the rule it replaced.
    pub fn insert(&mut self, key: impl Into<String>, rule: Rule) -> Option<Rule> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, rule)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, rule));
                None
            }
        }
    }

    /// Look up a child by key.
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}

// The index is derived from `entries`, so equality only looks at entries.
impl PartialEq for RuleMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, rule) in iter {
            map.insert(key, rule);
        }
        map
    }
}
