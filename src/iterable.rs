//! Conversion of arbitrary iterables into concrete containers.
//!
//! Two target shapes exist: a dense list, which discards whatever keys the
//! source carried, and a key-preserving [`Map`], where a key seen more than
//! once keeps the position of its first occurrence and the value of its
//! last. Lazy sources are consumed completely.
//!
//! # Examples
//!
//! ```rust
//! use kuria_collections::iterable;
//!
//! let pairs = [("a", 1), ("b", 2), ("a", 3)];
//! let map = iterable::to_array(pairs);
//! assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&"a", &3), (&"b", &2)]);
//!
//! assert_eq!(iterable::values_of(pairs), vec![1, 2, 3]);
//! ```

use crate::collections::{Map, MapKey};

/// Collects the values of an iterable into a dense list.
#[inline]
pub fn to_list<I>(values: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    values.into_iter().collect()
}

/// Applies [`to_list`] to every iterable of a sequence.
pub fn to_lists<I>(iterables: I) -> Vec<Vec<<I::Item as IntoIterator>::Item>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterables.into_iter().map(to_list).collect()
}

/// Collects key/value pairs into a map. The last value of a repeated key
/// wins.
#[inline]
pub fn to_array<K, V, I>(pairs: I) -> Map<K, V>
where
    K: MapKey,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Applies [`to_array`] to every iterable of a sequence.
pub fn to_arrays<K, V, I>(iterables: I) -> Vec<Map<K, V>>
where
    K: MapKey,
    I: IntoIterator,
    I::Item: IntoIterator<Item = (K, V)>,
{
    iterables.into_iter().map(to_array).collect()
}

/// Drops the keys of a pair iterable, keeping the values in order.
pub fn values_of<K, V, I>(pairs: I) -> Vec<V>
where
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(_, value)| value).collect()
}
