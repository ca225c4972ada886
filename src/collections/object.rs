//! Lists and maps of shared objects.
//!
//! Elements are held through [`ReferenceCounter`] handles, so the same
//! object can sit in several containers at once. Equality for `unique`,
//! `intersect` and `diff` is handle identity: two handles are the same
//! element only when they point to the same allocation, whatever the
//! objects' contents.

use std::cmp::Ordering;
use std::fmt;

use super::{Collection, Dictionary, Map, MapKey, ReferenceCounter, Sequence, Structure};

/// A list of shared objects.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// #[derive(Debug)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let users = ObjectList::from_objects([
///     User { id: 7, name: "ada" },
///     User { id: 9, name: "grace" },
/// ]);
///
/// assert_eq!(users.column(|user| user.name).to_vec(), vec!["ada", "grace"]);
///
/// let by_id = users.index_by(|user| user.id);
/// assert_eq!(by_id.get(&9).unwrap().name, "grace");
/// ```
pub struct ObjectList<T> {
    values: Collection<ReferenceCounter<T>>,
}

impl<T> ObjectList<T> {
    /// Creates a list holding a fresh handle to every object.
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_iterable(objects.into_iter().map(ReferenceCounter::new))
    }

    /// Drops handles that point to an object already seen.
    pub fn unique(&self) -> Self {
        let mut kept: Vec<ReferenceCounter<T>> = Vec::with_capacity(self.len());
        for handle in self.iter() {
            if !kept.iter().any(|seen| ReferenceCounter::ptr_eq(seen, handle)) {
                kept.push(ReferenceCounter::clone(handle));
            }
        }
        Self::from_iterable(kept)
    }

    /// Returns the handles present in every iterable.
    pub fn intersect<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = ReferenceCounter<T>>,
    {
        self.intersect_using(compare_identity, iterables)
    }

    /// Returns the handles present in none of the iterables.
    pub fn diff<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = ReferenceCounter<T>>,
    {
        self.diff_using(compare_identity, iterables)
    }

    /// Reads a property of every object.
    pub fn column<U, F>(&self, mut property: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.column_with(|object| Some(property(object)))
    }

    /// Builds a map from two properties of every object. Later objects win
    /// on duplicate keys.
    pub fn map_column<K, U, FK, FV>(&self, mut key: FK, mut value: FV) -> Map<K, U>
    where
        K: MapKey,
        FK: FnMut(&T) -> K,
        FV: FnMut(&T) -> U,
    {
        self.map_column_with(|object| Some(key(object)), |object| Some(value(object)))
    }

    /// Keys every object by one of its properties. Later objects win on
    /// duplicate keys.
    pub fn index_by<K, F>(&self, mut key: F) -> ObjectMap<K, T>
    where
        K: MapKey,
        F: FnMut(&T) -> K,
    {
        self.index_by_with(|object| Some(key(object)))
    }
}

fn compare_identity<T>(left: &ReferenceCounter<T>, right: &ReferenceCounter<T>) -> Ordering {
    ReferenceCounter::as_ptr(left).cmp(&ReferenceCounter::as_ptr(right))
}

impl<T> Structure for ObjectList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<T> Sequence for ObjectList<T> {
    type Item = ReferenceCounter<T>;
    type Keyed<K: MapKey> = ObjectMap<K, T>;

    fn from_collection(values: Collection<ReferenceCounter<T>>) -> Self {
        Self { values }
    }

    fn as_collection(&self) -> &Collection<ReferenceCounter<T>> {
        &self.values
    }

    fn as_collection_mut(&mut self) -> &mut Collection<ReferenceCounter<T>> {
        &mut self.values
    }

    fn into_collection(self) -> Collection<ReferenceCounter<T>> {
        self.values
    }
}

impl<T> Clone for ObjectList<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Default for ObjectList<T> {
    fn default() -> Self {
        Self {
            values: Collection::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjectList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ObjectList").field(&self.values).finish()
    }
}

impl<T> FromIterator<ReferenceCounter<T>> for ObjectList<T> {
    fn from_iter<I: IntoIterator<Item = ReferenceCounter<T>>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<T> IntoIterator for ObjectList<T> {
    type Item = ReferenceCounter<T>;
    type IntoIter = std::vec::IntoIter<ReferenceCounter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// =============================================================================
// ObjectMap
// =============================================================================

/// A map whose values are shared objects.
pub struct ObjectMap<K, T> {
    pairs: Map<K, ReferenceCounter<T>>,
}

impl<K: MapKey, T> ObjectMap<K, T> {
    /// Returns the pairs whose handle every iterable holds under the same
    /// key.
    pub fn intersect<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (K, ReferenceCounter<T>)>,
    {
        self.intersect_using(compare_identity, iterables)
    }

    /// Returns the pairs whose handle no iterable holds under the same key.
    pub fn diff<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (K, ReferenceCounter<T>)>,
    {
        self.diff_using(compare_identity, iterables)
    }

    /// Reads a property of every object, keeping the keys.
    pub fn column<U, F>(&self, mut property: F) -> Map<K, U>
    where
        F: FnMut(&T) -> U,
    {
        self.column_with(|object| Some(property(object)))
    }

    /// Reads a property of every object, keyed by another of its
    /// properties. Later objects win on duplicate keys.
    pub fn column_indexed<K2, U, F, G>(&self, mut property: F, mut index: G) -> Map<K2, U>
    where
        K2: MapKey,
        F: FnMut(&T) -> U,
        G: FnMut(&T) -> K2,
    {
        self.iter()
            .map(|(_, object)| {
                let object: &T = object;
                (index(object), property(object))
            })
            .collect()
    }

    /// Re-keys every object by one of its properties. Later objects win on
    /// duplicate keys.
    pub fn index_by<K2, F>(&self, mut key: F) -> ObjectMap<K2, T>
    where
        K2: MapKey,
        F: FnMut(&T) -> K2,
    {
        self.index_by_with(|object| Some(key(object)))
    }
}

impl<K: MapKey, T> Structure for ObjectMap<K, T> {
    #[inline]
    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K: MapKey, T> Dictionary for ObjectMap<K, T> {
    type Key = K;
    type Value = ReferenceCounter<T>;
    type Values = ObjectList<T>;
    type Rekeyed<K2: MapKey> = ObjectMap<K2, T>;

    fn from_map(pairs: Map<K, ReferenceCounter<T>>) -> Self {
        Self { pairs }
    }

    fn as_map(&self) -> &Map<K, ReferenceCounter<T>> {
        &self.pairs
    }

    fn as_map_mut(&mut self) -> &mut Map<K, ReferenceCounter<T>> {
        &mut self.pairs
    }

    fn into_map(self) -> Map<K, ReferenceCounter<T>> {
        self.pairs
    }
}

impl<K: Clone, T> Clone for ObjectMap<K, T> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: MapKey, T> Default for ObjectMap<K, T> {
    fn default() -> Self {
        Self { pairs: Map::new() }
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for ObjectMap<K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ObjectMap").field(&self.pairs).finish()
    }
}

impl<K: MapKey, T> FromIterator<(K, ReferenceCounter<T>)> for ObjectMap<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, ReferenceCounter<T>)>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<K, T> IntoIterator for ObjectMap<K, T> {
    type Item = (K, ReferenceCounter<T>);
    type IntoIter = std::vec::IntoIter<(K, ReferenceCounter<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
