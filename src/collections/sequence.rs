//! The `Sequence` trait: every operation shared by the list types.
//!
//! A list type only has to say how it wraps a [`Collection`]; all other
//! operations are provided. Transformations return `Self`, so a
//! [`ScalarList`](super::ScalarList) stays a `ScalarList` through `filter`,
//! `slice`, `sort_by` and friends, and `map`/`to_map` produce the map type
//! that matches the list type (see [`Sequence::Keyed`]).
//!
//! # Positions
//!
//! `get`, `set`, `has` and `remove` take `usize` positions. `insert`,
//! `splice`, `slice` and `pad` take signed offsets where negative values
//! count from the end.

use std::cmp::Ordering;

use rand::Rng;

use super::collection::resolve_span;
use super::random;
use super::{Collection, Dictionary, Map, MapKey, Structure};
use crate::error::CollectionError;
use crate::iterable;
use crate::maybe::Maybe;

/// Operations shared by [`Collection`] and the specialized lists.
pub trait Sequence: Structure + Sized {
    /// The element type.
    type Item: Clone;

    /// The map type produced by [`map`](Self::map), [`to_map`](Self::to_map)
    /// and [`index_by_with`](Self::index_by_with).
    type Keyed<K: MapKey>: Dictionary<Key = K, Value = Self::Item>;

    /// Wraps a plain collection.
    fn from_collection(collection: Collection<Self::Item>) -> Self;

    /// Borrows the underlying collection.
    fn as_collection(&self) -> &Collection<Self::Item>;

    /// Mutably borrows the underlying collection.
    fn as_collection_mut(&mut self) -> &mut Collection<Self::Item>;

    /// Unwraps the underlying collection.
    fn into_collection(self) -> Collection<Self::Item>;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a list from any iterable.
    fn from_iterable<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Self::from_collection(iterable::to_list(values).into())
    }

    /// Creates a list from the given values.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let list = Collection::collect(["a", "b"]);
    /// assert_eq!(list.len(), 2);
    /// ```
    fn collect<const N: usize>(values: [Self::Item; N]) -> Self {
        Self::from_collection(Vec::from(values).into())
    }

    /// Reinterprets the elements as another list type with the same
    /// element type.
    fn into_kind<L>(self) -> L
    where
        L: Sequence<Item = Self::Item>,
    {
        L::from_collection(self.into_collection())
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// Returns `true` if `index` points to an element.
    #[inline]
    fn has(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Returns `true` if the list contains `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.as_collection().as_slice().contains(value)
    }

    /// Returns the position of the first element equal to `value`.
    fn find(&self, value: &Self::Item) -> Maybe<usize>
    where
        Self::Item: PartialEq,
    {
        self.find_using(|candidate| candidate == value)
    }

    /// Returns the position of the first element matching `predicate`.
    fn find_using<F>(&self, mut predicate: F) -> Maybe<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_option(self.iter().position(|value| predicate(value)))
    }

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Maybe<&Self::Item> {
        Maybe::from_option(self.as_collection().as_slice().get(index))
    }

    /// Returns the first element.
    fn first(&self) -> Maybe<&Self::Item> {
        Maybe::from_option(self.as_collection().as_slice().first())
    }

    /// Returns the last element.
    fn last(&self) -> Maybe<&Self::Item> {
        Maybe::from_option(self.as_collection().as_slice().last())
    }

    /// Iterates over the elements in order.
    #[inline]
    fn iter(&self) -> std::slice::Iter<'_, Self::Item> {
        self.as_collection().as_slice().iter()
    }

    /// Copies the elements into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.as_collection().as_slice().to_vec()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replaces the element at `index`, or appends when `index` equals the
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] for any other index.
    fn try_set(&mut self, index: usize, value: Self::Item) -> Result<(), CollectionError> {
        let values = self.as_collection_mut().as_mut_vec();
        let len = values.len();
        match index.cmp(&len) {
            Ordering::Less => values[index] = value,
            Ordering::Equal => values.push(value),
            Ordering::Greater => {
                let error = CollectionError::OutOfRange { index, len };
                tracing::debug!(%error, "rejected list write");
                return Err(error);
            }
        }
        Ok(())
    }

    /// Replaces the element at `index`, or appends when `index` equals the
    /// length.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    #[track_caller]
    fn set(&mut self, index: usize, value: Self::Item) {
        if let Err(error) = self.try_set(index, value) {
            panic!("{error}");
        }
    }

    /// Replaces all elements.
    fn set_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        *self.as_collection_mut().as_mut_vec() = iterable::to_list(values);
    }

    /// Removes the elements at the given positions. Positions past the end
    /// are ignored; the remaining elements close the gaps.
    fn remove(&mut self, indexes: &[usize]) {
        let values = self.as_collection_mut().as_mut_vec();
        match indexes {
            [] => {}
            [index] => {
                if *index < values.len() {
                    values.remove(*index);
                }
            }
            _ => {
                let mut position = 0;
                values.retain(|_| {
                    let keep = !indexes.contains(&position);
                    position += 1;
                    keep
                });
            }
        }
    }

    /// Removes all elements.
    fn clear(&mut self) {
        self.as_collection_mut().as_mut_vec().clear();
    }

    /// Appends a value.
    fn push(&mut self, value: Self::Item) {
        self.as_collection_mut().as_mut_vec().push(value);
    }

    /// Appends several values, keeping their order.
    fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.add(values);
    }

    /// Removes and returns the last element.
    fn pop(&mut self) -> Maybe<Self::Item> {
        Maybe::from_option(self.as_collection_mut().as_mut_vec().pop())
    }

    /// Removes and returns the first element.
    fn shift(&mut self) -> Maybe<Self::Item> {
        let values = self.as_collection_mut().as_mut_vec();
        if values.is_empty() {
            Maybe::None
        } else {
            Maybe::Some(values.remove(0))
        }
    }

    /// Prepends a value.
    fn unshift(&mut self, value: Self::Item) {
        self.as_collection_mut().as_mut_vec().insert(0, value);
    }

    /// Prepends several values, keeping their order.
    fn unshift_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        drop(self.as_collection_mut().as_mut_vec().splice(0..0, values));
    }

    /// Appends every value of an iterable.
    fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.as_collection_mut().as_mut_vec().extend(values);
    }

    /// Inserts values before the element at `index`. A negative index
    /// counts from the end.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let mut list = Collection::collect([1, 2, 3]);
    /// list.insert(-1, [7, 8]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 7, 8, 3]);
    /// ```
    fn insert<I>(&mut self, index: isize, values: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let span = resolve_span(self.len(), index, Some(0));
        drop(self.as_collection_mut().as_mut_vec().splice(span, values));
    }

    /// Removes `length` elements starting at `index` (to the end when
    /// `length` is `None`) and puts `replacement` in their place. Negative
    /// values are relative to the end.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let mut list = Collection::collect([1, 2, 3, 4, 5]);
    /// list.splice(-2, None, []);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    fn splice<I>(&mut self, index: isize, length: Option<isize>, replacement: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let span = resolve_span(self.len(), index, length);
        drop(self.as_collection_mut().as_mut_vec().splice(span, replacement));
    }

    /// Grows the list to `|length|` elements with copies of `value`,
    /// appending when `length` is positive and prepending when it is
    /// negative. Longer lists are left alone.
    fn pad(&mut self, length: isize, value: Self::Item) {
        let target = length.unsigned_abs();
        let values = self.as_collection_mut().as_mut_vec();
        let missing = target.saturating_sub(values.len());
        if missing == 0 {
            return;
        }
        let padding = std::iter::repeat_n(value, missing);
        if length > 0 {
            values.extend(padding);
        } else {
            drop(values.splice(0..0, padding));
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Folds the elements from the left.
    fn reduce<A, F>(&self, reducer: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.iter().fold(initial, reducer)
    }

    /// Returns the elements selected by `index` and `length`.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let list = Collection::collect([1, 2, 3, 4, 5]);
    /// assert_eq!(list.slice(-3, Some(2)).to_vec(), vec![3, 4]);
    /// assert_eq!(list.slice(1, Some(-1)).to_vec(), vec![2, 3, 4]);
    /// ```
    fn slice(&self, index: isize, length: Option<isize>) -> Self {
        let span = resolve_span(self.len(), index, length);
        Self::from_iterable(self.as_collection().as_slice()[span].iter().cloned())
    }

    /// Splits the list into lists of `size` elements; the last one may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[track_caller]
    fn chunk(&self, size: usize) -> Collection<Self> {
        assert!(size > 0, "Chunk size must be greater than zero");
        self.as_collection()
            .as_slice()
            .chunks(size)
            .map(|chunk| Self::from_iterable(chunk.iter().cloned()))
            .collect()
    }

    /// Splits the list into `number` lists of roughly equal size.
    ///
    /// Returns an empty list when the receiver is empty or `number` is
    /// zero.
    fn split(&self, number: usize) -> Collection<Self> {
        if number == 0 || self.is_empty() {
            return Collection::new();
        }
        self.chunk(self.len().div_ceil(number))
    }

    /// Returns the elements in reverse order.
    fn reverse(&self) -> Self {
        Self::from_iterable(self.iter().rev().cloned())
    }

    /// Returns the elements in a random order.
    fn shuffle(&self) -> Self {
        self.shuffle_with(&mut random::default_rng())
    }

    /// Returns the elements in an order drawn from `rng`.
    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_iterable(random::shuffled(self.to_vec(), rng))
    }

    /// Returns `count` distinct elements picked at random, in their
    /// original relative order.
    ///
    /// When `count` reaches the length, the whole list is shuffled
    /// instead. A zero `count` gives an empty list.
    fn random(&self, count: usize) -> Self {
        self.random_with(count, &mut random::default_rng())
    }

    /// Like [`random`](Self::random), drawing from `rng`.
    fn random_with<R>(&self, count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let len = self.len();
        if count == 0 || len == 0 {
            return Self::from_collection(Collection::new());
        }
        if count >= len {
            return self.shuffle_with(rng);
        }
        let values = self.as_collection().as_slice();
        Self::from_iterable(
            random::ordered_sample(len, count, rng)
                .into_iter()
                .map(|position| values[position].clone()),
        )
    }

    /// Returns the elements matching `predicate`.
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Self::from_iterable(self.iter().filter(|value| predicate(value)).cloned())
    }

    /// Maps every element through `mapper`.
    fn apply<U, F>(&self, mapper: F) -> Collection<U>
    where
        F: FnMut(&Self::Item) -> U,
    {
        self.iter().map(mapper).collect()
    }

    /// Calls `callback` on every element.
    fn walk<F>(&self, callback: F)
    where
        F: FnMut(&Self::Item),
    {
        self.iter().for_each(callback);
    }

    /// Returns the receiver's elements followed by those of every iterable.
    fn merge<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = Self::Item>,
    {
        Self::from_iterable(
            self.iter()
                .cloned()
                .chain(iterables.into_iter().flatten()),
        )
    }

    /// Returns the elements that `comparator` finds in every iterable.
    ///
    /// Empty when the receiver or `iterables` is empty.
    fn intersect_using<I, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let others = iterable::to_lists(iterables);
        if self.is_empty() || others.is_empty() {
            return Self::from_collection(Collection::new());
        }
        self.filter(|value| {
            others.iter().all(|other| {
                other
                    .iter()
                    .any(|candidate| comparator(value, candidate).is_eq())
            })
        })
    }

    /// Returns the elements that `comparator` finds in none of the
    /// iterables.
    ///
    /// Empty when the receiver or `iterables` is empty.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let list = Collection::collect([1, 2, 3]);
    /// let rest = list.diff_using(|a, b| a.cmp(b), [vec![2]]);
    /// assert_eq!(rest.to_vec(), vec![1, 3]);
    /// ```
    fn diff_using<I, F>(&self, mut comparator: F, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let others = iterable::to_lists(iterables);
        if self.is_empty() || others.is_empty() {
            return Self::from_collection(Collection::new());
        }
        self.filter(|value| {
            !others.iter().any(|other| {
                other
                    .iter()
                    .any(|candidate| comparator(value, candidate).is_eq())
            })
        })
    }

    /// Returns the elements sorted by `comparator`. The sort is stable.
    fn sort_by<F>(&self, comparator: F) -> Self
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut values = self.to_vec();
        values.sort_by(comparator);
        Self::from_iterable(values)
    }

    // =========================================================================
    // Grouping and mapping
    // =========================================================================

    /// Partitions the elements by the key `grouper` computes from the
    /// position and the element. Groups appear in the order their key was
    /// first seen; each group keeps the original order.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// let list = Collection::collect([1, 2, 3, 4, 5]);
    /// let groups = list.group(|_, value| value % 2 == 0);
    /// assert_eq!(groups.keys().to_vec(), vec![false, true]);
    /// assert_eq!(groups[&false].to_vec(), vec![1, 3, 5]);
    /// ```
    fn group<G, F>(&self, mut grouper: F) -> Map<G, Self>
    where
        G: MapKey,
        F: FnMut(usize, &Self::Item) -> G,
    {
        let mut groups: Map<G, Vec<Self::Item>> = Map::new();
        for (index, value) in self.iter().enumerate() {
            groups
                .get_or_insert_with(grouper(index, value), Vec::new)
                .push(value.clone());
        }
        groups
            .into_iter()
            .map(|(key, values)| (key, Self::from_iterable(values)))
            .collect()
    }

    /// Keys every element by what `mapper` computes from its position and
    /// value. On duplicate keys the last element wins.
    fn map<K, F>(&self, mut mapper: F) -> Self::Keyed<K>
    where
        K: MapKey,
        F: FnMut(usize, &Self::Item) -> K,
    {
        <Self::Keyed<K> as Dictionary>::from_map(
            self.iter()
                .enumerate()
                .map(|(index, value)| (mapper(index, value), value.clone()))
                .collect(),
        )
    }

    /// Flat-maps the elements into key/value pairs. Later pairs overwrite
    /// earlier ones with the same key.
    fn build_map<K, V, I, F>(&self, mut builder: F) -> Map<K, V>
    where
        K: MapKey,
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(usize, &Self::Item) -> I,
    {
        self.iter()
            .enumerate()
            .flat_map(|(index, value)| builder(index, value))
            .collect()
    }

    /// Keys every element by its position.
    fn to_map(&self) -> Self::Keyed<usize> {
        <Self::Keyed<usize> as Dictionary>::from_map(self.iter().cloned().enumerate().collect())
    }

    // =========================================================================
    // Field extraction
    // =========================================================================

    /// Extracts a field from every element. Elements without the field
    /// are skipped.
    fn column_with<U, F>(&self, extract: F) -> Collection<U>
    where
        F: FnMut(&Self::Item) -> Option<U>,
    {
        self.iter().filter_map(extract).collect()
    }

    /// Builds a map from two fields of every element. Elements missing
    /// either field are skipped; later elements win on duplicate keys.
    fn map_column_with<K, U, FK, FV>(&self, mut key: FK, mut value: FV) -> Map<K, U>
    where
        K: MapKey,
        FK: FnMut(&Self::Item) -> Option<K>,
        FV: FnMut(&Self::Item) -> Option<U>,
    {
        self.iter()
            .filter_map(|element| Some((key(element)?, value(element)?)))
            .collect()
    }

    /// Keys every element by one of its fields. Elements without the field
    /// are skipped; later elements win on duplicate keys.
    fn index_by_with<K, F>(&self, mut key: F) -> Self::Keyed<K>
    where
        K: MapKey,
        F: FnMut(&Self::Item) -> Option<K>,
    {
        <Self::Keyed<K> as Dictionary>::from_map(
            self.iter()
                .filter_map(|element| Some((key(element)?, element.clone())))
                .collect(),
        )
    }
}
