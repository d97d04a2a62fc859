//! Insertion-ordered token mapping.

use rustc_hash::FxHashMap;

use super::TokenValue;

/// An ordered mapping from token name to [`TokenValue`].
///
/// Entries keep the order in which keys were first inserted. Inserting an
/// existing key replaces its value without moving it, which is how the
/// mappings of the upstream tooling behave when a key is assigned twice.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    entries: Vec<(String, TokenValue)>,
    index: FxHashMap<String, usize>,
}

impl TokenMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Create a map holding exactly one entry.
    pub fn single(key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        let mut map = Self::with_capacity(1);
        map.insert(key, value);
        map
    }

    /// Insert an entry, returning the previous value for `key` if any.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Move every entry of `other` into this map, in `other`'s order.
    pub fn merge(&mut self, other: TokenMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Look up a value by key for mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut TokenValue> {
        match self.index.get(key) {
            Some(&slot) => Some(&mut self.entries[slot].1),
            None => None,
        }
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in order.
    pub fn values(&self) -> impl Iterator<Item = &TokenValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

// The index is derived from `entries`, so equality only looks at entries.
impl PartialEq for TokenMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<TokenValue>> Extend<(K, V)> for TokenMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for TokenMap {
    type Item = (String, TokenValue);
    type IntoIter = std::vec::IntoIter<(String, TokenValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = &'a (String, TokenValue);
    type IntoIter = std::slice::Iter<'a, (String, TokenValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
