//! Maybe type - an optional value.
//!
//! This module provides [`Maybe<T>`], which is either `Some(T)` or `None`.
//! Lookup-style operations on collections (`get`, `find`, `pop`, ...) return
//! a `Maybe`, and the combinators below let calling code decide how to
//! continue when a value is missing.
//!
//! Combinators that accept "a value or a `Maybe`" come in pairs: the plain
//! form takes a `Maybe`, the `_some` form takes a bare value and wraps it.
//!
//! # Examples
//!
//! ```rust
//! use kuria_collections::Maybe;
//!
//! let greeting = Maybe::Some("hello")
//!     .and_then_some(|text| text.len())
//!     .or_some(0);
//! assert_eq!(greeting.unwrap(), 5);
//!
//! let missing: Maybe<&str> = Maybe::None;
//! assert_eq!(missing.and_then_some(|text| text.len()).into_option(), None);
//! ```

use std::fmt;

/// An optional value: either `Some(T)` or `None`.
///
/// Combinators never change the variant of an existing instance; they
/// return a new `Maybe` or the receiver itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` from an `Option`.
    ///
    /// ```rust
    /// use kuria_collections::Maybe;
    ///
    /// assert!(Maybe::from_option(Some(1)).is_some());
    /// assert!(Maybe::<i32>::from_option(None).is_none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Variant checks
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Chaining on Some
    // =========================================================================

    /// Returns `other` if this is `Some`, otherwise `None`.
    ///
    /// ```rust
    /// use kuria_collections::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).and(Maybe::Some("x")), Maybe::Some("x"));
    /// assert_eq!(Maybe::<i32>::None.and(Maybe::Some("x")), Maybe::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns `Some(value)` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and_some<U>(self, value: U) -> Maybe<U> {
        self.and(Maybe::Some(value))
    }

    /// Calls `callback` with the value if this is `Some` and returns its
    /// result. The callback is not invoked on `None`.
    ///
    /// ```rust
    /// use kuria_collections::Maybe;
    ///
    /// let half = |number: i32| {
    ///     if number % 2 == 0 { Maybe::Some(number / 2) } else { Maybe::None }
    /// };
    /// assert_eq!(Maybe::Some(8).and_then(half), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).and_then(half), Maybe::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, callback: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => callback(value),
            Self::None => Maybe::None,
        }
    }

    /// Like [`and_then`](Self::and_then), but wraps the callback's bare
    /// result in `Some`.
    #[inline]
    pub fn and_then_some<U, F>(self, callback: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Maybe::Some(callback(value)))
    }

    /// Calls `callback` with a reference to the value if this is `Some`.
    /// Always returns `self`.
    #[inline]
    pub fn and_do<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            callback(value);
        }
        self
    }

    // =========================================================================
    // Chaining on None
    // =========================================================================

    /// Returns `self` if this is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if this is `Some`, otherwise `Some(value)`.
    #[inline]
    pub fn or_some(self, value: T) -> Self {
        self.or(Self::Some(value))
    }

    /// Returns `self` if this is `Some`, otherwise the result of `callback`.
    #[inline]
    pub fn or_else<F>(self, callback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => callback(),
        }
    }

    /// Like [`or_else`](Self::or_else), but wraps the callback's bare result
    /// in `Some`.
    #[inline]
    pub fn or_else_some<F>(self, callback: F) -> Self
    where
        F: FnOnce() -> T,
    {
        self.or_else(|| Self::Some(callback()))
    }

    /// Calls `callback` if this is `None`. Always returns `self`.
    #[inline]
    pub fn or_do<F>(self, callback: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            callback();
        }
        self
    }

    /// Calls `callback` with a reference to `self`, whatever the variant.
    ///
    /// ```rust
    /// use kuria_collections::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let maybe = Maybe::Some(3).tap(|current| seen.push(current.is_some()));
    /// assert_eq!(maybe, Maybe::Some(3));
    /// assert_eq!(seen, vec![true]);
    /// ```
    #[inline]
    pub fn tap<F>(self, callback: F) -> Self
    where
        F: FnOnce(&Self),
    {
        callback(&self);
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `There is no value` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("There is no value"),
        }
    }

    /// Converts into an `Option`, mapping `None` to the absent sentinel.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the borrowed value.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.and_then_some(T::clone)
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the borrowed value.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.and_then_some(|value| *value)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
