//! Collections: ordered lists and insertion-ordered maps.
//!
//! This module provides two families of containers:
//!
//! - Lists, implementing [`Sequence`]: [`Collection`] and the specialized
//!   [`ScalarList`], [`ObjectList`] and [`ArrayList`].
//! - Maps, implementing [`Dictionary`]: [`Map`] and the specialized
//!   [`ScalarMap`], [`ObjectMap`] and [`ArrayMap`].
//!
//! Every container owns its storage. Mutating operations (`set`, `push`,
//! `remove`, ...) work in place; transformations (`filter`, `slice`,
//! `sort_by`, ...) return a new container of the receiver's own type and
//! leave the receiver untouched.
//!
//! # Examples
//!
//! ## `Collection`
//!
//! ```rust
//! use kuria_collections::prelude::*;
//!
//! let mut numbers = Collection::collect([1, 2, 3, 4, 5]);
//! numbers.remove(&[1]);
//! assert_eq!(numbers.to_vec(), vec![1, 3, 4, 5]);
//!
//! let odd = numbers.filter(|number| number % 2 == 1);
//! assert_eq!(odd.to_vec(), vec![1, 3, 5]);
//! assert_eq!(numbers.len(), 4); // receiver unchanged
//! ```
//!
//! ## `Map`
//!
//! ```rust
//! use kuria_collections::prelude::*;
//!
//! let mut stock: Map<&str, u32> = Map::from_iterable([("apples", 3), ("pears", 0)]);
//! stock.set("apples", 5); // keeps its position
//! stock.set("plums", 2);
//!
//! assert_eq!(stock.keys().to_vec(), vec!["apples", "pears", "plums"]);
//! assert_eq!(stock.get(&"apples").copied().unwrap(), 5);
//! ```
//!
//! # Randomness
//!
//! Randomized operations come in two forms: `shuffle_with(&mut rng)` takes
//! any [`rand::Rng`], while `shuffle()` draws from the thread-local
//! generator.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Shared handle for the elements of [`ObjectList`] and [`ObjectMap`].
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Shared handle for the elements of [`ObjectList`] and [`ObjectMap`].
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Key Index Hasher
// =============================================================================

#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::hash::RandomState;

mod array;
mod collection;
mod dictionary;
mod macros;
mod map;
mod object;
pub(crate) mod random;
mod scalar;
mod sequence;

pub use array::{ArrayList, ArrayMap};
pub use collection::Collection;
pub use dictionary::Dictionary;
pub use map::{Map, MapIter, MapKey};
pub use object::{ObjectList, ObjectMap};
pub use scalar::{ScalarList, ScalarMap};
pub use sequence::Sequence;

/// Common behaviour of every list and map.
pub trait Structure {
    /// Returns the number of elements or pairs.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements or pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ObjectList<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ObjectList<i32>: Send, Sync);
