//! The `Dictionary` trait: every operation shared by the map types.
//!
//! Like [`Sequence`], a map type only says how it wraps a [`Map`]. The
//! provided operations keep insertion order unless they exist to reorder
//! (`reverse`, `shuffle`, the sorts), and transformations return `Self`.
//!
//! Set algebra (`intersect*`, `diff*`) takes any number of iterables of
//! pairs and is empty when either the receiver or the list of iterables is
//! empty.

use std::cmp::Ordering;

use rand::Rng;

use super::collection::resolve_span;
use super::random;
use super::{Collection, Map, MapIter, MapKey, Sequence, Structure};
use crate::error::CollectionError;
use crate::iterable;
use crate::maybe::Maybe;
use crate::scalar::{ScalarValue, SortMode};

/// Operations shared by [`Map`] and the specialized maps.
pub trait Dictionary: Structure + Sized {
    /// The key type.
    type Key: MapKey;

    /// The value type.
    type Value: Clone;

    /// The list type returned by [`values`](Self::values).
    type Values: Sequence<Item = Self::Value>;

    /// The map type returned by [`remap`](Self::remap) and
    /// [`index_by_with`](Self::index_by_with).
    type Rekeyed<K2: MapKey>: Dictionary<Key = K2, Value = Self::Value>;

    /// Wraps a plain map.
    fn from_map(map: Map<Self::Key, Self::Value>) -> Self;

    /// Borrows the underlying map.
    fn as_map(&self) -> &Map<Self::Key, Self::Value>;

    /// Mutably borrows the underlying map.
    fn as_map_mut(&mut self) -> &mut Map<Self::Key, Self::Value>;

    /// Unwraps the underlying map.
    fn into_map(self) -> Map<Self::Key, Self::Value>;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a map from key/value pairs; a repeated key keeps its first
    /// position and its last value.
    fn from_iterable<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        Self::from_map(iterable::to_array(pairs))
    }

    /// Zips a list of keys with a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::LengthMismatch`] when the lists differ in
    /// length.
    fn try_combine<KI, VI>(keys: KI, values: VI) -> Result<Self, CollectionError>
    where
        KI: IntoIterator<Item = Self::Key>,
        VI: IntoIterator<Item = Self::Value>,
    {
        let keys = iterable::to_list(keys);
        let values = iterable::to_list(values);
        if keys.len() != values.len() {
            let error = CollectionError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            };
            tracing::debug!(%error, "rejected map combination");
            return Err(error);
        }
        Ok(Self::from_iterable(keys.into_iter().zip(values)))
    }

    /// Zips a list of keys with a list of values.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let map: Map<&str, i32> = Map::combine(["a", "b"], [1, 2]);
    /// assert_eq!(map.get(&"b").copied().unwrap(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the lists differ in length.
    #[track_caller]
    fn combine<KI, VI>(keys: KI, values: VI) -> Self
    where
        KI: IntoIterator<Item = Self::Key>,
        VI: IntoIterator<Item = Self::Value>,
    {
        match Self::try_combine(keys, values) {
            Ok(map) => map,
            Err(error) => panic!("{error}"),
        }
    }

    /// Reinterprets the pairs as another map type with the same key and
    /// value types.
    fn into_kind<D>(self) -> D
    where
        D: Dictionary<Key = Self::Key, Value = Self::Value>,
    {
        D::from_map(self.into_map())
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// Returns `true` if `key` is present.
    fn has(&self, key: &Self::Key) -> bool {
        self.as_map().position(key).is_some()
    }

    /// Returns `true` if some pair holds `value`.
    fn contains(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.as_map()
            .entries()
            .iter()
            .any(|(_, candidate)| candidate == value)
    }

    /// Returns the key of the first pair holding `value`.
    fn find(&self, value: &Self::Value) -> Maybe<&Self::Key>
    where
        Self::Value: PartialEq,
    {
        self.find_using(|candidate| candidate == value)
    }

    /// Returns the key of the first pair whose value matches `predicate`.
    fn find_using<F>(&self, mut predicate: F) -> Maybe<&Self::Key>
    where
        F: FnMut(&Self::Value) -> bool,
    {
        Maybe::from_option(
            self.as_map()
                .entries()
                .iter()
                .find(|(_, value)| predicate(value))
                .map(|(key, _)| key),
        )
    }

    /// Returns the value stored under `key`.
    fn get(&self, key: &Self::Key) -> Maybe<&Self::Value> {
        Maybe::from_option(self.as_map().lookup(key))
    }

    /// Returns the value of the first pair.
    fn first(&self) -> Maybe<&Self::Value> {
        Maybe::from_option(self.as_map().entries().first().map(|(_, value)| value))
    }

    /// Returns the value of the last pair.
    fn last(&self) -> Maybe<&Self::Value> {
        Maybe::from_option(self.as_map().entries().last().map(|(_, value)| value))
    }

    /// Returns the key of the first pair.
    fn first_key(&self) -> Maybe<&Self::Key> {
        Maybe::from_option(self.as_map().entries().first().map(|(key, _)| key))
    }

    /// Returns the key of the last pair.
    fn last_key(&self) -> Maybe<&Self::Key> {
        Maybe::from_option(self.as_map().entries().last().map(|(key, _)| key))
    }

    /// Returns a value picked at random.
    fn random(&self) -> Maybe<&Self::Value> {
        self.random_with(&mut random::default_rng())
    }

    /// Returns a value picked with `rng`.
    fn random_with<R>(&self, rng: &mut R) -> Maybe<&Self::Value>
    where
        R: Rng + ?Sized,
    {
        let entries = self.as_map().entries();
        Maybe::from_option(random::position(entries.len(), rng).map(|position| &entries[position].1))
    }

    /// Returns a key picked at random.
    fn random_key(&self) -> Maybe<&Self::Key> {
        self.random_key_with(&mut random::default_rng())
    }

    /// Returns a key picked with `rng`.
    fn random_key_with<R>(&self, rng: &mut R) -> Maybe<&Self::Key>
    where
        R: Rng + ?Sized,
    {
        let entries = self.as_map().entries();
        Maybe::from_option(random::position(entries.len(), rng).map(|position| &entries[position].0))
    }

    /// Returns the keys in order.
    fn keys(&self) -> Collection<Self::Key> {
        self.as_map().entries().iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values in order.
    fn values(&self) -> Self::Values {
        <Self::Values as Sequence>::from_iterable(
            self.as_map().entries().iter().map(|(_, value)| value.clone()),
        )
    }

    /// Iterates over the pairs in order.
    #[inline]
    fn iter(&self) -> MapIter<'_, Self::Key, Self::Value> {
        self.as_map().iter()
    }

    /// Copies the pairs into a `Vec`.
    fn to_pairs(&self) -> Vec<(Self::Key, Self::Value)> {
        self.as_map().entries().to_vec()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Inserts or updates a pair. An existing key keeps its position.
    fn set(&mut self, key: Self::Key, value: Self::Value) {
        self.as_map_mut().upsert(key, value);
    }

    /// Stores `value` under every key of `keys`.
    fn set_multiple<I>(&mut self, keys: I, value: Self::Value)
    where
        I: IntoIterator<Item = Self::Key>,
    {
        let map = self.as_map_mut();
        for key in keys {
            map.upsert(key, value.clone());
        }
    }

    /// Replaces all pairs.
    fn set_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        *self.as_map_mut() = iterable::to_array(pairs);
    }

    /// Inserts `pairs` right before the pair stored under `key`, or at the
    /// start when `key` is absent.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let mut map = Map::from_iterable([("a", 1), ("c", 3)]);
    /// map.insert_before(&"c", [("b", 2)]);
    /// assert_eq!(map.keys().to_vec(), vec!["a", "b", "c"]);
    ///
    /// map.insert_before(&"missing", [("z", 0)]);
    /// assert_eq!(map.first_key().copied().unwrap(), "z");
    /// ```
    fn insert_before<I>(&mut self, key: &Self::Key, pairs: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        let map = self.as_map_mut();
        if map.position(key).is_some() {
            insert_relative(map, key, pairs, false);
        } else {
            let mut inserted: Map<Self::Key, Self::Value> = iterable::to_array(pairs);
            for (existing, value) in std::mem::take(map) {
                if inserted.position(&existing).is_none() {
                    inserted.upsert(existing, value);
                }
            }
            *map = inserted;
        }
    }

    /// Inserts `pairs` right after the pair stored under `key`, or at the
    /// end when `key` is absent.
    fn insert_after<I>(&mut self, key: &Self::Key, pairs: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        let map = self.as_map_mut();
        if map.position(key).is_some() {
            insert_relative(map, key, pairs, true);
        } else {
            map.extend(pairs);
        }
    }

    /// Upserts every pair of an iterable.
    fn add<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        self.as_map_mut().extend(pairs);
    }

    /// Removes the pairs stored under `keys`. Absent keys are ignored.
    fn remove(&mut self, keys: &[Self::Key]) {
        let map = self.as_map_mut();
        for key in keys {
            map.take(key);
        }
    }

    /// Removes all pairs.
    fn clear(&mut self) {
        self.as_map_mut().clear_entries();
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Folds the pairs from the left.
    fn reduce<A, F>(&self, mut reducer: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Key, &Self::Value) -> A,
    {
        self.iter()
            .fold(initial, |carry, (key, value)| reducer(carry, key, value))
    }

    /// Returns the pairs selected by `index` and `length`, with the same
    /// offset rules as [`Sequence::slice`].
    fn slice(&self, index: isize, length: Option<isize>) -> Self {
        let entries = self.as_map().entries();
        let span = resolve_span(entries.len(), index, length);
        from_pairs(entries[span].to_vec())
    }

    /// Splits the map into maps of `size` pairs; the last one may be
    /// smaller.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[track_caller]
    fn chunk(&self, size: usize) -> Collection<Self> {
        assert!(size > 0, "Chunk size must be greater than zero");
        self.as_map()
            .entries()
            .chunks(size)
            .map(|chunk| from_pairs(chunk.to_vec()))
            .collect()
    }

    /// Splits the map into `number` maps of roughly equal size.
    fn split(&self, number: usize) -> Collection<Self> {
        if number == 0 || self.is_empty() {
            return Collection::new();
        }
        self.chunk(self.len().div_ceil(number))
    }

    /// Returns the pairs in reverse order.
    fn reverse(&self) -> Self {
        from_pairs(self.as_map().entries().iter().rev().cloned().collect())
    }

    /// Returns the pairs in a random order.
    fn shuffle(&self) -> Self {
        self.shuffle_with(&mut random::default_rng())
    }

    /// Returns the pairs in an order drawn from `rng`.
    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        from_pairs(random::shuffled(self.to_pairs(), rng))
    }

    /// Returns `count` pairs picked at random, in their original relative
    /// order. A `count` reaching the length returns every pair.
    fn pick(&self, count: usize) -> Self {
        self.pick_with(count, &mut random::default_rng())
    }

    /// Like [`pick`](Self::pick), drawing from `rng`.
    fn pick_with<R>(&self, count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let entries = self.as_map().entries();
        let count = count.min(entries.len());
        from_pairs(
            random::ordered_sample(entries.len(), count, rng)
                .into_iter()
                .map(|position| entries[position].clone())
                .collect(),
        )
    }

    /// Returns the pairs matching `predicate`.
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        from_pairs(
            self.as_map()
                .entries()
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        )
    }

    /// Maps every value through `mapper`, keeping the keys.
    fn apply<U, F>(&self, mut mapper: F) -> Map<Self::Key, U>
    where
        F: FnMut(&Self::Key, &Self::Value) -> U,
    {
        Map::from_entries(
            self.iter()
                .map(|(key, value)| (key.clone(), mapper(key, value)))
                .collect(),
        )
    }

    /// Calls `callback` on every pair.
    fn walk<F>(&self, mut callback: F)
    where
        F: FnMut(&Self::Key, &Self::Value),
    {
        self.iter().for_each(|(key, value)| callback(key, value));
    }

    /// Upserts the pairs of every iterable into a copy of the receiver.
    fn merge<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        let mut map = self.as_map().clone();
        for pairs in iterables {
            map.extend(pairs);
        }
        Self::from_map(map)
    }

    /// Swaps keys and values. Values become their text form; when two
    /// values share a text form, the later pair wins.
    fn flip(&self) -> Map<String, Self::Key>
    where
        Self::Value: ToString,
    {
        self.iter()
            .map(|(key, value)| (value.to_string(), key.clone()))
            .collect()
    }

    /// Extracts a field from every value, keeping the keys. Pairs whose
    /// value lacks the field are skipped.
    fn column_with<U, F>(&self, mut extract: F) -> Map<Self::Key, U>
    where
        F: FnMut(&Self::Value) -> Option<U>,
    {
        Map::from_entries(
            self.iter()
                .filter_map(|(key, value)| Some((key.clone(), extract(value)?)))
                .collect(),
        )
    }

    /// Re-keys every value by one of its fields. Values lacking the field
    /// are skipped; on duplicate keys the later value wins.
    fn index_by_with<K2, F>(&self, mut key: F) -> Self::Rekeyed<K2>
    where
        K2: MapKey,
        F: FnMut(&Self::Value) -> Option<K2>,
    {
        <Self::Rekeyed<K2> as Dictionary>::from_map(
            self.iter()
                .filter_map(|(_, value)| Some((key(value)?, value.clone())))
                .collect(),
        )
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// Returns the pairs that every iterable holds with an equal value
    /// under the same key.
    fn intersect<I>(&self, iterables: I) -> Self
    where
        Self::Value: PartialEq,
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        self.intersect_using(compare_equality, iterables)
    }

    /// Returns the pairs that every iterable holds under the same key with
    /// a value `comparator` reports as equal.
    fn intersect_using<I, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, Self::Value)>,
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, value| {
            others.iter().all(|other| {
                other
                    .lookup(key)
                    .is_some_and(|candidate| comparator(value, candidate).is_eq())
            })
        })
    }

    /// Returns the pairs whose key is present in every iterable.
    fn intersect_keys<I, W>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, W)>,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, _| others.iter().all(|other| other.position(key).is_some()))
    }

    /// Returns the pairs whose key `comparator` finds among the keys of
    /// every iterable.
    fn intersect_keys_using<I, W, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, W)>,
        F: FnMut(&Self::Key, &Self::Key) -> Ordering,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, _| {
            others.iter().all(|other| {
                other
                    .entries()
                    .iter()
                    .any(|(candidate, _)| comparator(key, candidate).is_eq())
            })
        })
    }

    /// Returns the pairs that no iterable holds with an equal value under
    /// the same key.
    fn diff<I>(&self, iterables: I) -> Self
    where
        Self::Value: PartialEq,
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        self.diff_using(compare_equality, iterables)
    }

    /// Returns the pairs that no iterable holds under the same key with a
    /// value `comparator` reports as equal.
    fn diff_using<I, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, Self::Value)>,
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, value| {
            !others.iter().any(|other| {
                other
                    .lookup(key)
                    .is_some_and(|candidate| comparator(value, candidate).is_eq())
            })
        })
    }

    /// Returns the pairs whose key is absent from every iterable.
    fn diff_keys<I, W>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, W)>,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, _| !others.iter().any(|other| other.position(key).is_some()))
    }

    /// Returns the pairs whose key `comparator` finds among the keys of no
    /// iterable.
    fn diff_keys_using<I, W, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = (Self::Key, W)>,
        F: FnMut(&Self::Key, &Self::Key) -> Ordering,
    {
        let others = iterable::to_arrays(iterables);
        if self.is_empty() || others.is_empty() {
            return from_pairs(Vec::new());
        }
        self.filter(|key, _| {
            !others.iter().any(|other| {
                other
                    .entries()
                    .iter()
                    .any(|(candidate, _)| comparator(key, candidate).is_eq())
            })
        })
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Returns the pairs ordered by value under `mode`, descending when
    /// `reverse` is set. Equal values keep their relative order.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    /// use kuria_collections::scalar::SortMode;
    ///
    /// let map = Map::from_iterable([("a", "img12"), ("b", "img10"), ("c", "img2")]);
    /// let sorted = map.sort(SortMode::Natural, false);
    /// assert_eq!(sorted.keys().to_vec(), vec!["c", "b", "a"]);
    /// ```
    fn sort(&self, mode: SortMode, reverse: bool) -> Self
    where
        Self::Value: ScalarValue,
    {
        if reverse {
            self.sort_by(|left, right| right.compare(left, mode))
        } else {
            self.sort_by(|left, right| left.compare(right, mode))
        }
    }

    /// Returns the pairs ordered by value with `comparator`. Stable.
    fn sort_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        let mut pairs = self.to_pairs();
        pairs.sort_by(|(_, left), (_, right)| comparator(left, right));
        from_pairs(pairs)
    }

    /// Returns the pairs ordered by key under `mode`, descending when
    /// `reverse` is set.
    fn sort_keys(&self, mode: SortMode, reverse: bool) -> Self
    where
        Self::Key: ScalarValue,
    {
        if reverse {
            self.sort_keys_by(|left, right| right.compare(left, mode))
        } else {
            self.sort_keys_by(|left, right| left.compare(right, mode))
        }
    }

    /// Returns the pairs ordered by key with `comparator`. Stable.
    fn sort_keys_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&Self::Key, &Self::Key) -> Ordering,
    {
        let mut pairs = self.to_pairs();
        pairs.sort_by(|(left, _), (right, _)| comparator(left, right));
        from_pairs(pairs)
    }

    // =========================================================================
    // Grouping and re-keying
    // =========================================================================

    /// Partitions the pairs by the key `grouper` computes. Groups appear in
    /// the order their key was first seen and keep the original pair order.
    fn group<G, F>(&self, mut grouper: F) -> Map<G, Self>
    where
        G: MapKey,
        F: FnMut(&Self::Key, &Self::Value) -> G,
    {
        let mut groups: Map<G, Map<Self::Key, Self::Value>> = Map::new();
        for (key, value) in self.iter() {
            groups
                .get_or_insert_with(grouper(key, value), Map::new)
                .upsert(key.clone(), value.clone());
        }
        groups
            .into_iter()
            .map(|(group, pairs)| (group, Self::from_map(pairs)))
            .collect()
    }

    /// Re-keys every pair with what `mapper` computes. On collisions the
    /// later pair wins.
    fn remap<K2, F>(&self, mut mapper: F) -> Self::Rekeyed<K2>
    where
        K2: MapKey,
        F: FnMut(&Self::Key, &Self::Value) -> K2,
    {
        <Self::Rekeyed<K2> as Dictionary>::from_map(
            self.iter()
                .map(|(key, value)| (mapper(key, value), value.clone()))
                .collect(),
        )
    }

    /// Flat-maps the pairs into new pairs. Later pairs overwrite earlier
    /// ones with the same key.
    fn rebuild<K2, V2, I, F>(&self, mut builder: F) -> Map<K2, V2>
    where
        K2: MapKey,
        I: IntoIterator<Item = (K2, V2)>,
        F: FnMut(&Self::Key, &Self::Value) -> I,
    {
        self.iter()
            .flat_map(|(key, value)| builder(key, value))
            .collect()
    }
}

/// Builds a map of type `D` from pairs with unique keys.
fn from_pairs<D: Dictionary>(pairs: Vec<(D::Key, D::Value)>) -> D {
    D::from_map(Map::from_entries(pairs))
}

fn compare_equality<V: PartialEq>(left: &V, right: &V) -> Ordering {
    if left == right {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}

/// Rebuilds `map` with `pairs` spliced in next to `target`. Keys already in
/// the map keep their first position and take the last value written.
fn insert_relative<K, V, I>(map: &mut Map<K, V>, target: &K, pairs: I, after: bool)
where
    K: MapKey,
    I: IntoIterator<Item = (K, V)>,
{
    let mut pending = Some(pairs);
    let entries = std::mem::take(map).into_entries();
    let mut rebuilt = Map::with_capacity(entries.len());
    for (key, value) in entries {
        let at_target = key == *target;
        if at_target && !after {
            rebuilt.extend(pending.take().into_iter().flatten());
        }
        rebuilt.upsert(key, value);
        if at_target && after {
            rebuilt.extend(pending.take().into_iter().flatten());
        }
    }
    *map = rebuilt;
}
