//! Lists and maps of scalar values.
//!
//! [`ScalarList`] adds the operations that only make sense for numbers and
//! text: arithmetic folds, joining, and comparisons by text form.
//! [`ScalarMap`] carries no extra operations beyond [`Dictionary`]; its
//! value list is a `ScalarList`.

use std::fmt;

use super::{Collection, Dictionary, Map, MapKey, Sequence, Structure};
use crate::scalar::{Number, ScalarValue, SortMode};

/// A list of scalar values.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let prices = Collection::collect([3, 4, 5]).into_scalars();
/// assert_eq!(prices.sum(), Number::Int(12));
/// assert_eq!(prices.implode(", "), "3, 4, 5");
///
/// let words = ScalarList::explode("b,a,b", ",");
/// assert_eq!(words.unique().to_vec(), vec!["b", "a"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct ScalarList<T> {
    values: Collection<T>,
}

impl ScalarList<String> {
    /// Splits `text` on every occurrence of `delimiter`.
    ///
    /// # Panics
    ///
    /// Panics if `delimiter` is empty.
    #[track_caller]
    pub fn explode(text: &str, delimiter: &str) -> Self {
        Self::explode_limit(text, delimiter, isize::MAX)
    }

    /// Splits `text` on `delimiter` with a limit on the pieces.
    ///
    /// A positive `limit` caps the number of pieces, the last one holding
    /// the rest of the text. A negative `limit` drops that many pieces from
    /// the end. Zero counts as one.
    ///
    /// ```rust
    /// use kuria_collections::prelude::*;
    ///
    /// assert_eq!(ScalarList::explode_limit("a-b-c", "-", 2).to_vec(), vec!["a", "b-c"]);
    /// assert_eq!(ScalarList::explode_limit("a-b-c", "-", -1).to_vec(), vec!["a", "b"]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `delimiter` is empty.
    #[track_caller]
    pub fn explode_limit(text: &str, delimiter: &str, limit: isize) -> Self {
        assert!(!delimiter.is_empty(), "Delimiter must not be empty");
        let pieces: Vec<&str> = match limit {
            0 | 1 => vec![text],
            limit if limit > 0 => text.splitn(limit.unsigned_abs(), delimiter).collect(),
            limit => {
                let mut pieces: Vec<&str> = text.split(delimiter).collect();
                pieces.truncate(pieces.len().saturating_sub(limit.unsigned_abs()));
                pieces
            }
        };
        Self::from_iterable(pieces.into_iter().map(str::to_owned))
    }
}

impl<T: ScalarValue> ScalarList<T> {
    /// Adds up the numeric forms of the elements. An empty list sums to
    /// zero.
    pub fn sum(&self) -> Number {
        self.iter()
            .fold(Number::Int(0), |total, value| total + value.to_number())
    }

    /// Multiplies the numeric forms of the elements. An empty list gives
    /// one.
    pub fn product(&self) -> Number {
        self.iter()
            .fold(Number::Int(1), |total, value| total * value.to_number())
    }

    /// Joins the text forms of the elements with `delimiter`.
    pub fn implode(&self, delimiter: &str) -> String {
        let mut joined = String::new();
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                joined.push_str(delimiter);
            }
            joined.push_str(&value.to_text());
        }
        joined
    }

    /// Drops elements that compare equal to an earlier one.
    pub fn unique(&self) -> Self {
        let mut kept: Vec<T> = Vec::with_capacity(self.len());
        for value in self.iter() {
            if !kept
                .iter()
                .any(|seen| seen.compare_regular(value).is_eq())
            {
                kept.push(value.clone());
            }
        }
        Self::from_iterable(kept)
    }

    /// Returns the elements whose text form occurs in every iterable.
    pub fn intersect<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        self.intersect_using(compare_text, iterables)
    }

    /// Returns the elements whose text form occurs in none of the
    /// iterables.
    pub fn diff<I>(&self, iterables: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        self.diff_using(compare_text, iterables)
    }

    /// Returns the elements ordered under `mode`, descending when `reverse`
    /// is set. Equal elements keep their relative order.
    pub fn sort(&self, mode: SortMode, reverse: bool) -> Self {
        if reverse {
            self.sort_by(|left, right| right.compare(left, mode))
        } else {
            self.sort_by(|left, right| left.compare(right, mode))
        }
    }
}

fn compare_text<T: ScalarValue>(left: &T, right: &T) -> std::cmp::Ordering {
    left.to_text().cmp(&right.to_text())
}

impl<T> Structure for ScalarList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<T: ScalarValue> Sequence for ScalarList<T> {
    type Item = T;
    type Keyed<K: MapKey> = ScalarMap<K, T>;

    fn from_collection(values: Collection<T>) -> Self {
        Self { values }
    }

    fn as_collection(&self) -> &Collection<T> {
        &self.values
    }

    fn as_collection_mut(&mut self) -> &mut Collection<T> {
        &mut self.values
    }

    fn into_collection(self) -> Collection<T> {
        self.values
    }
}

impl<T> Default for ScalarList<T> {
    fn default() -> Self {
        Self {
            values: Collection::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ScalarList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ScalarList").field(&self.values).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ScalarList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.values, formatter)
    }
}

impl<T: ScalarValue> FromIterator<T> for ScalarList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<T> IntoIterator for ScalarList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// =============================================================================
// ScalarMap
// =============================================================================

/// A map whose values are scalars.
///
/// ```rust
/// use kuria_collections::prelude::*;
///
/// let map: ScalarMap<&str, i32> = Map::from_iterable([("a", 1), ("b", 1)]).into_scalars();
/// let flipped = map.flip();
/// assert_eq!(flipped.to_pairs(), vec![("1".to_owned(), "b")]);
/// assert_eq!(map.values().sum(), Number::Int(2));
/// ```
#[derive(Clone, PartialEq)]
pub struct ScalarMap<K, V> {
    pairs: Map<K, V>,
}

impl<K: MapKey, V> Structure for ScalarMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K: MapKey, V: ScalarValue> Dictionary for ScalarMap<K, V> {
    type Key = K;
    type Value = V;
    type Values = ScalarList<V>;
    type Rekeyed<K2: MapKey> = ScalarMap<K2, V>;

    fn from_map(pairs: Map<K, V>) -> Self {
        Self { pairs }
    }

    fn as_map(&self) -> &Map<K, V> {
        &self.pairs
    }

    fn as_map_mut(&mut self) -> &mut Map<K, V> {
        &mut self.pairs
    }

    fn into_map(self) -> Map<K, V> {
        self.pairs
    }
}

impl<K: MapKey, V> Default for ScalarMap<K, V> {
    fn default() -> Self {
        Self { pairs: Map::new() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ScalarMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ScalarMap").field(&self.pairs).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ScalarMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pairs, formatter)
    }
}

impl<K: MapKey, V: ScalarValue> FromIterator<(K, V)> for ScalarMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

impl<K, V> IntoIterator for ScalarMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a,b,c", isize::MAX, vec!["a", "b", "c"])]
    #[case("a,b,c", 0, vec!["a,b,c"])]
    #[case("a,b,c", 2, vec!["a", "b,c"])]
    #[case("a,b,c", -2, vec!["a"])]
    #[case("a,b,c", -5, vec![])]
    #[case("", isize::MAX, vec![""])]
    fn test_explode_limit(#[case] text: &str, #[case] limit: isize, #[case] expected: Vec<&str>) {
        assert_eq!(ScalarList::explode_limit(text, ",", limit).to_vec(), expected);
    }

    #[rstest]
    #[should_panic(expected = "Delimiter must not be empty")]
    fn test_explode_empty_delimiter_panics() {
        let _ = ScalarList::explode("abc", "");
    }

    #[rstest]
    fn test_sum_and_product_promote_to_float() {
        let list = ScalarList::from_iterable([1.5, 2.0]);
        assert_eq!(list.sum(), Number::Float(3.5));
        assert_eq!(list.product(), Number::Float(3.0));
        assert_eq!(ScalarList::<i32>::default().product(), Number::Int(1));
    }

    #[rstest]
    fn test_intersect_and_diff_by_text_form() {
        let list = ScalarList::from_iterable([1, 2, 3, 4]);
        assert_eq!(list.intersect([vec![2, 4, 6]]).to_vec(), vec![2, 4]);
        assert_eq!(list.diff([vec![2], vec![3]]).to_vec(), vec![1, 4]);
    }

    #[rstest]
    fn test_map_produces_scalar_map() {
        let list = ScalarList::from_iterable(["x", "y"]);
        let map: ScalarMap<usize, &str> = list.to_map();
        assert_eq!(map.values().implode(""), "xy");
    }
}
