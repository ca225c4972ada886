//! Lists and maps of records.
//!
//! A record is a [`Map`] from field names to values, the shape rows take
//! when they come out of a table or a decoded document. The column
//! operations pull one field out of every record; records missing the
//! field are skipped.

use std::fmt;

use super::{Collection, Dictionary, Map, MapKey, Sequence, Structure};

/// A list of records.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let rows = ArrayList::from_iterable([
///     map! { "id" => "1", "name" => "ada" },
///     map! { "id" => "2", "name" => "grace" },
///     map! { "id" => "3" },
/// ]);
///
/// assert_eq!(rows.column(&"name").to_vec(), vec!["ada", "grace"]);
///
/// let names = rows.map_column(&"id", &"name");
/// assert_eq!(names.get(&"2").copied().unwrap(), "grace");
/// ```
pub struct ArrayList<F, V> {
    values: Collection<Map<F, V>>,
}

impl<F: MapKey, V: Clone> ArrayList<F, V> {
    /// Collects `field` from every record that has it.
    pub fn column(&self, field: &F) -> Collection<V> {
        self.column_with(|record| record.lookup(field).cloned())
    }

    /// Builds a map from the `key_field` and `value_field` of every record.
    /// Records missing either field are skipped; later records win on
    /// duplicate keys.
    pub fn map_column(&self, key_field: &F, value_field: &F) -> Map<V, V>
    where
        V: MapKey,
    {
        self.map_column_with(
            |record| record.lookup(key_field).cloned(),
            |record| record.lookup(value_field).cloned(),
        )
    }

    /// Keys every record by the value of `field`. Records missing the field
    /// are skipped; later records win on duplicate keys.
    pub fn index_by(&self, field: &F) -> ArrayMap<V, F, V>
    where
        V: MapKey,
    {
        self.index_by_with(|record| record.lookup(field).cloned())
    }
}

impl<F, V> Structure for ArrayList<F, V> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<F: MapKey, V: Clone> Sequence for ArrayList<F, V> {
    type Item = Map<F, V>;
    type Keyed<K: MapKey> = ArrayMap<K, F, V>;

    fn from_collection(values: Collection<Map<F, V>>) -> Self {
        Self { values }
    }

    fn as_collection(&self) -> &Collection<Map<F, V>> {
        &self.values
    }

    fn as_collection_mut(&mut self) -> &mut Collection<Map<F, V>> {
        &mut self.values
    }

    fn into_collection(self) -> Collection<Map<F, V>> {
        self.values
    }
}

impl<F: Clone, V: Clone> Clone for ArrayList<F, V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<F: PartialEq, V: PartialEq> PartialEq for ArrayList<F, V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<F, V> Default for ArrayList<F, V> {
    fn default() -> Self {
        Self {
            values: Collection::new(),
        }
    }
}

impl<F: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayList<F, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ArrayList").field(&self.values).finish()
    }
}

impl<F: MapKey, V: Clone> FromIterator<Map<F, V>> for ArrayList<F, V> {
    fn from_iter<I: IntoIterator<Item = Map<F, V>>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<F, V> IntoIterator for ArrayList<F, V> {
    type Item = Map<F, V>;
    type IntoIter = std::vec::IntoIter<Map<F, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// =============================================================================
// ArrayMap
// =============================================================================

/// A map whose values are records.
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let users = ArrayMap::from_iterable([
///     (10, map! { "login" => "ada", "role" => "admin" }),
///     (11, map! { "login" => "bob" }),
/// ]);
///
/// assert_eq!(users.column(&"role").to_pairs(), vec![(10, "admin")]);
/// assert_eq!(users.index_by(&"login").keys().to_vec(), vec!["ada", "bob"]);
/// ```
pub struct ArrayMap<K, F, V> {
    pairs: Map<K, Map<F, V>>,
}

impl<K: MapKey, F: MapKey, V: Clone> ArrayMap<K, F, V> {
    /// Collects `field` from every record that has it, keeping the keys.
    pub fn column(&self, field: &F) -> Map<K, V> {
        self.column_with(|record| record.lookup(field).cloned())
    }

    /// Collects `field` from every record, keyed by the record's
    /// `index_field`. Records missing either field are skipped.
    pub fn column_indexed(&self, field: &F, index_field: &F) -> Map<V, V>
    where
        V: MapKey,
    {
        self.iter()
            .filter_map(|(_, record)| {
                Some((
                    record.lookup(index_field)?.clone(),
                    record.lookup(field)?.clone(),
                ))
            })
            .collect()
    }

    /// Re-keys every record by the value of `field`. Records missing the
    /// field are skipped; later records win on duplicate keys.
    pub fn index_by(&self, field: &F) -> ArrayMap<V, F, V>
    where
        V: MapKey,
    {
        self.index_by_with(|record| record.lookup(field).cloned())
    }
}

impl<K: MapKey, F, V> Structure for ArrayMap<K, F, V> {
    #[inline]
    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K: MapKey, F: MapKey, V: Clone> Dictionary for ArrayMap<K, F, V> {
    type Key = K;
    type Value = Map<F, V>;
    type Values = ArrayList<F, V>;
    type Rekeyed<K2: MapKey> = ArrayMap<K2, F, V>;

    fn from_map(pairs: Map<K, Map<F, V>>) -> Self {
        Self { pairs }
    }

    fn as_map(&self) -> &Map<K, Map<F, V>> {
        &self.pairs
    }

    fn as_map_mut(&mut self) -> &mut Map<K, Map<F, V>> {
        &mut self.pairs
    }

    fn into_map(self) -> Map<K, Map<F, V>> {
        self.pairs
    }
}

impl<K: Clone, F: Clone, V: Clone> Clone for ArrayMap<K, F, V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: PartialEq, F: PartialEq, V: PartialEq> PartialEq for ArrayMap<K, F, V> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<K: MapKey, F, V> Default for ArrayMap<K, F, V> {
    fn default() -> Self {
        Self { pairs: Map::new() }
    }
}

impl<K: fmt::Debug, F: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayMap<K, F, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ArrayMap").field(&self.pairs).finish()
    }
}

impl<K: MapKey, F: MapKey, V: Clone> FromIterator<(K, Map<F, V>)> for ArrayMap<K, F, V> {
    fn from_iter<I: IntoIterator<Item = (K, Map<F, V>)>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<K, F, V> IntoIterator for ArrayMap<K, F, V> {
    type Item = (K, Map<F, V>);
    type IntoIter = std::vec::IntoIter<(K, Map<F, V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
