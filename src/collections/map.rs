//! Insertion-ordered key-value map.
//!
//! [`Map`] stores its pairs in insertion order next to a hash index from
//! key to position. Updating an existing key keeps its position; new keys
//! are appended. All operations beyond the storage primitives below are
//! provided by the [`Dictionary`] trait.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `get` / `has`       | O(1)       |
//! | `set` (upsert)      | O(1)*      |
//! | `remove`            | O(n)       |
//! | `first` / `last`    | O(1)       |
//! | `len` / `is_empty`  | O(1)       |
//!
//! *amortized

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::Index;

use super::{
    ArrayMap, Collection, Dictionary, IndexHasher, ObjectMap, ReferenceCounter, ScalarMap,
    Structure,
};
use crate::scalar::ScalarValue;

/// Keys usable in a [`Map`]: integers and strings in practice, any
/// hashable, comparable and clonable value in general.
pub trait MapKey: Hash + Eq + Clone {}

impl<T: Hash + Eq + Clone> MapKey for T {}

/// An insertion-ordered key-value map.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let mut map: Map<&str, i32> = Map::new();
/// map.set("b", 2);
/// map.set("a", 1);
/// map.set("b", 20);
///
/// let pairs: Vec<_> = map.iter().collect();
/// assert_eq!(pairs, vec![(&"b", &20), (&"a", &1)]);
/// ```
#[derive(Clone)]
pub struct Map<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize, IndexHasher>,
}

impl<K: MapKey, V> Map<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Iterates over the pairs in order.
    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter {
            inner: self.entries.iter(),
        }
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = *self.index.get(key)?;
        Some(&mut self.entries[position].1)
    }

    // =========================================================================
    // Storage primitives
    // =========================================================================

    pub(crate) fn from_entries(entries: Vec<(K, V)>) -> Self {
        let mut map = Self::with_capacity(entries.len());
        for (key, value) in entries {
            map.upsert(key, value);
        }
        map
    }

    pub(crate) fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn lookup(&self, key: &K) -> Option<&V> {
        self.position(key).map(|position| &self.entries[position].1)
    }

    /// Inserts or updates a pair. An existing key keeps its position.
    pub(crate) fn upsert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub(crate) fn get_or_insert_with<F>(&mut self, key: K, create: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, create()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn take(&mut self, key: &K) -> Option<V> {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        self.reindex_from(position);
        Some(value)
    }

    pub(crate) fn clear_entries(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, (key, _)) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = position;
            }
        }
    }
}

impl<K: MapKey, V: ScalarValue> Map<K, V> {
    /// Reinterprets the map as a [`ScalarMap`].
    #[inline]
    #[must_use]
    pub fn into_scalars(self) -> ScalarMap<K, V> {
        ScalarMap::from_map(self)
    }
}

impl<K: MapKey, T> Map<K, ReferenceCounter<T>> {
    /// Reinterprets a map of shared handles as an [`ObjectMap`].
    #[inline]
    #[must_use]
    pub fn into_objects(self) -> ObjectMap<K, T> {
        ObjectMap::from_map(self)
    }
}

impl<K: MapKey, F: MapKey, V: Clone> Map<K, Map<F, V>> {
    /// Reinterprets a map of records as an [`ArrayMap`].
    #[inline]
    #[must_use]
    pub fn into_arrays(self) -> ArrayMap<K, F, V> {
        ArrayMap::from_map(self)
    }
}

impl<K: MapKey, V> Structure for Map<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: MapKey, V: Clone> Dictionary for Map<K, V> {
    type Key = K;
    type Value = V;
    type Values = Collection<V>;
    type Rekeyed<K2: MapKey> = Map<K2, V>;

    fn from_map(map: Map<K, V>) -> Self {
        map
    }

    fn as_map(&self) -> &Map<K, V> {
        self
    }

    fn as_map_mut(&mut self) -> &mut Map<K, V> {
        self
    }

    fn into_map(self) -> Map<K, V> {
        self
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<K: MapKey, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Map<K, V> {
    /// Two maps are equal when they hold the same pairs in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Map<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K: MapKey, V> Index<&K> for Map<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.lookup(key) {
            Some(value) => value,
            None => panic!("key not found in map"),
        }
    }
}

impl<K: MapKey, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: MapKey, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: MapKey, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the pairs of a map, in order.
pub struct MapIter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for MapIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for MapIter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for MapIter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_take_reindexes_following_entries() {
        let mut map: Map<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.take(&"a"), Some(1));
        assert_eq!(map.position(&"b"), Some(0));
        assert_eq!(map.position(&"c"), Some(1));
        assert_eq!(map.lookup(&"c"), Some(&3));
    }

    #[rstest]
    fn test_upsert_keeps_position() {
        let mut map = Map::new();
        map.upsert(1, "one");
        map.upsert(2, "two");
        map.upsert(1, "uno");
        assert_eq!(map.entries(), &[(1, "uno"), (2, "two")]);
    }

    #[rstest]
    fn test_display() {
        let map: Map<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(format!("{map}"), "{a: 1, b: 2}");
    }

    #[rstest]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_key_panics() {
        let map: Map<i32, i32> = Map::new();
        let _ = map[&3];
    }
}
