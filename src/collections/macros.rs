//! Literal syntax for lists and maps.

/// Creates a [`Collection`](crate::collections::Collection) from a list of
/// values.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::collection;
/// use kuria_collections::prelude::*;
///
/// let empty: Collection<i32> = collection![];
/// assert!(empty.is_empty());
///
/// let list = collection![1, 2, 3];
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collections::Collection::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::Collection::from(::std::vec![$($value),+])
    };
}

/// Creates a [`Map`](crate::collections::Map) from `key => value` pairs.
/// A repeated key keeps its first position and its last value.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::map;
/// use kuria_collections::prelude::*;
///
/// let empty: Map<&str, i32> = map! {};
/// assert!(empty.is_empty());
///
/// let ages = map! { "ada" => 36, "alan" => 41, "ada" => 37 };
/// assert_eq!(ages.to_pairs(), vec![("ada", 37), ("alan", 41)]);
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::collections::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::collections::Map<_, _> as ::std::iter::FromIterator<_>>::from_iter([
            $(($key, $value)),+
        ])
    };
}
