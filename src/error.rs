//! Error types for contract violations on collections.
//!
//! The panicking operations ([`Collection::set`], [`Map::combine`]) report
//! these errors through their `Display` text. The `try_*` counterparts
//! return them instead.
//!
//! [`Collection::set`]: crate::collections::Sequence::set
//! [`Map::combine`]: crate::collections::Dictionary::combine

use thiserror::Error;

/// Represents errors raised by collection operations whose arguments break
/// the operation's contract.
///
/// # Examples
///
/// ```rust
/// use kuria_collections::CollectionError;
///
/// let error = CollectionError::OutOfRange { index: 7, len: 3 };
/// assert_eq!(error.to_string(), "Index 7 is out of bounds (0 - 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The index neither points to an existing element nor to the end of
    /// the list.
    #[error("Index {index} is out of bounds (0 - {len})")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A key list and a value list could not be combined.
    #[error("Cannot combine {keys} keys with {values} values")]
    LengthMismatch {
        /// Number of keys.
        keys: usize,
        /// Number of values.
        values: usize,
    },
}
