//! # kuria-collections
//!
//! Generic collections with ordered maps, specialized lists and algebraic
//! wrapper types for Rust.
//!
//! ## Overview
//!
//! - **Lists**: [`Collection`](collections::Collection), a dense ordered
//!   list, and its specialized forms for scalars, shared objects and
//!   records. Shared operations live on the [`Sequence`](collections::Sequence)
//!   trait.
//! - **Maps**: [`Map`](collections::Map), an insertion-ordered map, and the
//!   matching specialized maps. Shared operations live on the
//!   [`Dictionary`](collections::Dictionary) trait.
//! - **Wrappers**: [`Maybe`] for optional values and [`Result`] for
//!   success/error values with a causal error chain.
//! - **Conversions**: the [`iterable`] helpers turn arbitrary iterables into
//!   lists and maps.
//!
//! Containers mutate in place through their CRUD operations and return new
//! instances from their transformations, leaving the receiver unchanged.
//!
//! ## Feature Flags
//!
//! - `arc`: object lists and maps hold `Arc` handles instead of `Rc`
//! - `fxhash`: the map key index hashes with `rustc-hash`
//! - `ahash`: the map key index hashes with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kuria_collections::prelude::*;
//!
//! let scores = Map::from_iterable([("ada", 90), ("bob", 72), ("cy", 90)]);
//!
//! let by_score = scores.group(|_, score| *score);
//! assert_eq!(by_score.keys().to_vec(), vec![90, 72]);
//!
//! let best = scores
//!     .find(&90)
//!     .and_then_some(|name| name.to_uppercase())
//!     .unwrap();
//! assert_eq!(best, "ADA");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, their traits and [`Maybe`]. The crate's
/// [`Result`] is left out so that it does not shadow the standard one;
/// import it by path.
///
/// # Usage
///
/// ```rust
/// use kuria_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::error::CollectionError;
    pub use crate::maybe::Maybe;
    pub use crate::scalar::{Number, Scalar, ScalarValue, SortMode};
    pub use crate::{collection, map};
}

pub mod collections;
pub mod error;
pub mod iterable;
pub mod maybe;
pub mod result;
pub mod scalar;

pub use error::CollectionError;
pub use maybe::Maybe;
pub use result::{Failure, Result, UnhandledError};
