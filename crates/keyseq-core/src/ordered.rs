// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Insertion-Ordered Map
//!
//! `OrderedMap<K, V>` keeps its entries in a dense vector in the order keys
//! were first inserted, and an `FxHashMap` from key to position for lookups.
//! Overwriting an existing key keeps its original position.
//!
//! ```rust
//! use keyseq_core::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 1);
//! map.insert("a", 2);
//! map.insert("b", 3);
//!
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert_eq!(map.get(&"b"), Some(&3));
//! ```

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A hash map that iterates in insertion order.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    positions: FxHashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + DoubleEndedIterator + Clone + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. An existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions.get(key).map(|&p| &self.entries[p].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for OrderedMap<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    /// Two maps are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn test_insertion_order_is_kept() {
        let map: OrderedMap<&str, i32> = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(map.get(&"m"), Some(&3));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(map.insert("a", 10), Some(1));

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get(&"a"), Some(&10));
        assert!(map.contains_key(&"b"));
        assert!(!map.contains_key(&"c"));
    }

    #[test]
    fn test_debug_lists_entries_in_order() {
        let map: OrderedMap<&str, i32> = [("y", 1), ("x", 2)].into_iter().collect();
        assert_eq!(format!("{:?}", map), r#"{"y": 1, "x": 2}"#);
    }
}
