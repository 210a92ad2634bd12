//! Ordered mapping type for block and flow mappings.
//!
//! This module provides [`Mapping`], a wrapper around [`IndexMap`] keyed by
//! [`Value`]. Entries keep the order in which they were read (or inserted), so
//! dumping a parsed document writes keys back in source order.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: entries dump in insertion order
//! - **Any key type**: keys are full values, so `1: one` keeps an integer key
//! - **Order-independent equality**: two mappings with the same entries are equal
//!   regardless of order
//!
//! ## Examples
//!
//! ```rust
//! use serde_yamlite::{Mapping, Value};
//!
//! let mut map = Mapping::new();
//! map.insert(Value::from("name"), Value::from("Alice"));
//! map.insert(Value::from(1), Value::from("one"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_str("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(map.get(&Value::from(1)).and_then(|v| v.as_str()), Some("one"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// An insertion-ordered map of values to values.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{Mapping, Value};
///
/// let mut map = Mapping::new();
/// map.insert(Value::from("first"), Value::from(1));
/// map.insert(Value::from("second"), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping(IndexMap<Value, Value>);

impl Mapping {
    /// Creates an empty `Mapping`.
    #[must_use]
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place (the
    /// key keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_yamlite::{Mapping, Value};
    ///
    /// let mut map = Mapping::new();
    /// assert!(map.insert(Value::from("key"), Value::from(42)).is_none());
    /// assert!(map.insert(Value::from("key"), Value::from(43)).is_some());
    /// assert_eq!(map.get_str("key").and_then(|v| v.as_i64()), Some(43));
    /// ```
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a reference to the value stored under a string key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.0.get(&Value::String(key.to_string()))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::new()
    }
}

// Equal mappings may differ in order, so only the length feeds the hash.
impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
    }
}

impl From<HashMap<String, Value>> for Mapping {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().map(|(k, v)| (Value::String(k), v)).collect()
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Value, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Value, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Mapping(IndexMap::from_iter(iter))
    }
}

impl Extend<(Value, Value)> for Mapping {
    fn extend<T: IntoIterator<Item = (Value, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a: Mapping = vec![
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let b: Mapping = vec![
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut map = Mapping::new();
        map.insert(Value::from("a"), Value::from(1));
        map.insert(Value::from("b"), Value::from(2));
        map.insert(Value::from("a"), Value::from(3));

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries[0], (&Value::from("a"), &Value::from(3)));
        assert_eq!(entries[1], (&Value::from("b"), &Value::from(2)));
    }

    #[test]
    fn test_non_string_keys() {
        let mut map = Mapping::new();
        map.insert(Value::from(1), Value::from("int"));
        map.insert(Value::from("1"), Value::from("string"));
        map.insert(Value::Null, Value::from("null"));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&Value::from(1)), Some(&Value::from("int")));
        assert_eq!(map.get_str("1"), Some(&Value::from("string")));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: Mapping = (0..4).map(|i| (Value::from(i), Value::Null)).collect();
        map.remove(&Value::from(1));
        let keys: Vec<_> = map.keys().filter_map(Value::as_i64).collect();
        assert_eq!(keys, vec![0, 2, 3]);
    }
}
