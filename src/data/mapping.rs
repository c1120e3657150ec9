//! Mapping (hash-map literal) storage.
//!
//! Keys may be any [`Value`], including lists and other mappings.
//! Rather than require `Hash` over the whole tree, entries are keyed by the
//! canonical rendering of the key, and the original key is kept next to the
//! value. Two keys that render identically are the same key.
//!
//! The rendering-ordered `BTreeMap` also gives mappings a stable print order.

use std::collections::BTreeMap;

use super::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<String, (Value, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert a pair, returning the value previously stored for the key.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.entries
            .insert(key.to_string(), (key, value))
            .map(|(_, old)| old)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&key.to_string()).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (key, value) pairs, ordered by key rendering.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Value, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut m = Mapping::new();
        for (k, v) in iter {
            m.insert(k, v);
        }
        m
    }
}
