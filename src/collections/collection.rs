//! The general-purpose ordered list.
//!
//! [`Collection`] keeps its elements at the dense positions `0..len`.
//! Removing an element shifts the following ones down, so there are never
//! gaps. Every list operation comes from the [`Sequence`] trait; this file
//! holds the storage, the conversions to the specialized lists and the
//! standard trait implementations.

use std::fmt;
use std::ops::{Index, Range};

use super::{ArrayList, Map, MapKey, ObjectList, ReferenceCounter, ScalarList, Sequence, Structure};
use crate::scalar::ScalarValue;

/// An ordered, integer-indexed list that may contain duplicates.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let mut list = Collection::collect([1, 2, 3, 4, 5]);
/// list.splice(1, Some(2), [9]);
/// assert_eq!(list.to_vec(), vec![1, 9, 4, 5]);
///
/// let chunks = list.chunk(3);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].to_vec(), vec![5]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<T> {
    values: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the list and returns its elements.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    #[inline]
    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<T> {
        &mut self.values
    }

    // =========================================================================
    // Narrowing
    // =========================================================================

    /// Converts the elements into another type, failing on the first
    /// element that does not convert.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    /// use kuria_collections::scalar::Scalar;
    ///
    /// let mixed = Collection::collect([Scalar::Int(1), Scalar::Int(2)]);
    /// let numbers: Collection<i64> = mixed.try_cast().unwrap();
    /// assert_eq!(numbers.to_vec(), vec![1, 2]);
    ///
    /// let mixed = Collection::collect([Scalar::Int(1), Scalar::from("two")]);
    /// assert!(mixed.try_cast::<i64>().is_err());
    /// ```
    pub fn try_cast<U>(self) -> Result<Collection<U>, U::Error>
    where
        U: TryFrom<T>,
    {
        self.values.into_iter().map(U::try_from).collect()
    }
}

impl<T: ScalarValue> Collection<T> {
    /// Reinterprets the list as a [`ScalarList`].
    #[inline]
    #[must_use]
    pub fn into_scalars(self) -> ScalarList<T> {
        ScalarList::from_collection(self)
    }
}

impl<T> Collection<ReferenceCounter<T>> {
    /// Reinterprets a list of shared handles as an [`ObjectList`].
    #[inline]
    #[must_use]
    pub fn into_objects(self) -> ObjectList<T> {
        ObjectList::from_collection(self)
    }
}

impl<F: MapKey, V: Clone> Collection<Map<F, V>> {
    /// Reinterprets a list of records as an [`ArrayList`].
    #[inline]
    #[must_use]
    pub fn into_arrays(self) -> ArrayList<F, V> {
        ArrayList::from_collection(self)
    }
}

impl<T> Structure for Collection<T> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<T: Clone> Sequence for Collection<T> {
    type Item = T;
    type Keyed<K: MapKey> = Map<K, T>;

    #[inline]
    fn from_collection(collection: Collection<T>) -> Self {
        collection
    }

    #[inline]
    fn as_collection(&self) -> &Collection<T> {
        self
    }

    #[inline]
    fn as_collection_mut(&mut self) -> &mut Collection<T> {
        self
    }

    #[inline]
    fn into_collection(self) -> Collection<T> {
        self
    }
}

/// Resolves an offset/length pair the way slicing does on this library's
/// lists: a negative `index` counts from the end, a negative `length`
/// stops that many elements before the end, `None` runs to the end.
/// The result is clamped to `0..len`.
pub(crate) fn resolve_span(len: usize, index: isize, length: Option<isize>) -> Range<usize> {
    let start = if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    };
    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_sub(length.unsigned_abs()).max(start),
        Some(length) => start.saturating_add(length.unsigned_abs()).min(len),
    };
    start..end
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.values).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.values
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}
