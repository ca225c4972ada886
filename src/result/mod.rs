//! Result type - a success value or an error with a causal chain.
//!
//! This module provides [`Result<V, E>`], which is either `Ok(V)` or
//! `Error(Failure<E>)`. Unlike `std::result::Result`, the error side keeps
//! track of the failure that caused it: whenever a recovery combinator
//! ([`or`](Result::or), [`or_else`](Result::or_else), [`catch`](Result::catch),
//! [`handle`](Result::handle)) produces a new error, the new failure links
//! back to the one it replaced.
//!
//! # Examples
//!
//! ```rust
//! use kuria_collections::result::Result;
//!
//! #[derive(Debug, PartialEq)]
//! enum LoadError {
//!     Missing,
//!     Corrupt,
//! }
//!
//! let loaded: Result<i32, LoadError> = Result::error(LoadError::Missing)
//!     .or_else(|_| Result::error(LoadError::Corrupt));
//!
//! assert_eq!(loaded.error_value().unwrap(), LoadError::Corrupt);
//!
//! let recovered = Result::<i32, LoadError>::error(LoadError::Missing)
//!     .catch(|error| matches!(error, LoadError::Missing), |_| Result::ok(0));
//! assert_eq!(recovered.unwrap(), 0);
//! ```

mod failure;

use std::error::Error as StdError;
use std::fmt;

pub use failure::{Failure, UnhandledError};

use crate::maybe::Maybe;

/// A success value or an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Result<V, E> {
    /// The success variant.
    Ok(V),
    /// The error variant, with its causal chain.
    Error(Failure<E>),
}

impl<V, E> Result<V, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success result.
    #[inline]
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Creates an error result without a predecessor.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self::Error(Failure::new(error))
    }

    // =========================================================================
    // Variant checks
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    // =========================================================================
    // Chaining on Ok
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Error(failure) => Result::Error(failure),
        }
    }

    /// Calls `callback` with the value if this is `Ok` and returns its
    /// result. The callback is not invoked on an error.
    #[inline]
    pub fn and_then<U, F>(self, callback: F) -> Result<U, E>
    where
        F: FnOnce(V) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => callback(value),
            Self::Error(failure) => Result::Error(failure),
        }
    }

    /// Calls `callback` with a reference to the value if this is `Ok`.
    /// Always returns `self`.
    #[inline]
    pub fn and_do<F>(self, callback: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Ok(value) = &self {
            callback(value);
        }
        self
    }

    // =========================================================================
    // Recovery on Error
    // =========================================================================

    /// Returns `self` if this is `Ok`, otherwise `other`.
    ///
    /// If `other` is an error without a predecessor, this error becomes its
    /// predecessor.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Ok(_) => self,
            Self::Error(failure) => propagate(failure, other),
        }
    }

    /// Returns `self` if this is `Ok`, otherwise the result of calling
    /// `callback` with the error.
    ///
    /// If the callback produces an error without a predecessor, this error
    /// becomes its predecessor.
    ///
    /// ```rust
    /// use kuria_collections::result::Result;
    ///
    /// let first: Result<(), &str> = Result::error("a");
    /// let second = first.or_else(|_| Result::error("b"));
    /// assert_eq!(second.previous().map(|failure| *failure.error()), Some("a"));
    /// ```
    pub fn or_else<F>(self, callback: F) -> Self
    where
        F: FnOnce(&E) -> Self,
    {
        match self {
            Self::Ok(_) => self,
            Self::Error(failure) => {
                let next = callback(failure.error());
                propagate(failure, next)
            }
        }
    }

    /// Calls `callback` with a reference to the error if this is an error.
    /// Always returns `self`.
    #[inline]
    pub fn or_do<F>(self, callback: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Error(failure) = &self {
            callback(failure.error());
        }
        self
    }

    /// Handles errors of a given kind.
    ///
    /// If this is an error accepted by `matches`, returns the result of
    /// `handler` (propagated like [`or_else`](Self::or_else)). Otherwise,
    /// including on `Ok`, returns `self` without invoking the handler.
    pub fn catch<M, H>(self, matches: M, handler: H) -> Self
    where
        M: FnOnce(&E) -> bool,
        H: FnOnce(&E) -> Self,
    {
        match self {
            Self::Error(failure) => {
                if matches(failure.error()) {
                    let next = handler(failure.error());
                    propagate(failure, next)
                } else {
                    Self::Error(failure)
                }
            }
            ok @ Self::Ok(_) => ok,
        }
    }

    /// Handles one specific error value.
    ///
    /// Same as [`catch`](Self::catch) with an equality match.
    pub fn handle<H>(self, error: &E, handler: H) -> Self
    where
        E: PartialEq,
        H: FnOnce(&E) -> Self,
    {
        self.catch(|candidate| candidate == error, handler)
    }

    /// Calls `callback` with a reference to `self`, whatever the variant.
    #[inline]
    pub fn tap<F>(self, callback: F) -> Self
    where
        F: FnOnce(&Self),
    {
        callback(&self);
        self
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Returns the success value, discarding any error.
    #[inline]
    pub fn value(self) -> Maybe<V> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Error(_) => Maybe::None,
        }
    }

    /// Returns the error value, discarding any success value.
    #[inline]
    pub fn error_value(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Error(failure) => Maybe::Some(failure.into_error()),
        }
    }

    /// Returns the failure if this is an error.
    #[inline]
    pub const fn failure(&self) -> Option<&Failure<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    /// Returns the failure this error replaced, if any.
    #[inline]
    pub fn previous(&self) -> Option<&Failure<E>> {
        self.failure().and_then(Failure::previous)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, or an [`UnhandledError`] carrying
    /// `message`.
    pub fn try_expect(self, message: &str) -> std::result::Result<V, UnhandledError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => Err(UnhandledError::new(message.to_owned(), failure)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an error.
    #[track_caller]
    pub fn expect(self, message: &str) -> V {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(unhandled) => panic!("{unhandled}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `There is no error` if this is `Ok`.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => panic!("There is no error"),
            Self::Error(failure) => failure.into_error(),
        }
    }

    /// Converts into a standard result, dropping the causal chain.
    pub fn into_std(self) -> std::result::Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => Err(failure.into_error()),
        }
    }
}

impl<V, E: fmt::Debug> Result<V, E> {
    /// Returns the success value, or an [`UnhandledError`] whose message is
    /// derived from the error.
    pub fn try_unwrap(self) -> std::result::Result<V, UnhandledError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => {
                let message = failure::describe(failure.error());
                Err(UnhandledError::new(message, failure))
            }
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is an error. The message is the error's variant or
    /// type name without its fields, or its text for strings and scalars.
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(unhandled) => panic!("{unhandled}"),
        }
    }
}

impl<V> Result<V, Box<dyn StdError + Send + Sync>> {
    /// Handles boxed errors whose concrete type is `K`.
    ///
    /// ```rust
    /// use std::fmt;
    /// use kuria_collections::result::Result;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    ///
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         formatter.write_str("timed out")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Timeout {}
    ///
    /// let result: Result<u8, Box<dyn std::error::Error + Send + Sync>> =
    ///     Result::error(Box::new(Timeout));
    /// let retried = result.catch_type(|_: &Timeout| Result::ok(1));
    /// assert_eq!(retried.unwrap(), 1);
    /// ```
    pub fn catch_type<K, H>(self, handler: H) -> Self
    where
        K: StdError + 'static,
        H: FnOnce(&K) -> Self,
    {
        match self {
            Self::Error(failure) => match failure.error().downcast_ref::<K>() {
                Some(error) => {
                    let next = handler(error);
                    propagate(failure, next)
                }
                None => Self::Error(failure),
            },
            ok @ Self::Ok(_) => ok,
        }
    }
}

/// Records `failure` as the predecessor of `next` when `next` is an error
/// without one.
fn propagate<V, E>(failure: Failure<E>, next: Result<V, E>) -> Result<V, E> {
    match next {
        Result::Error(mut replacement) => {
            replacement.link(failure);
            Result::Error(replacement)
        }
        ok @ Result::Ok(_) => ok,
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Result<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Error(failure) => write!(formatter, "Error({})", failure.error()),
        }
    }
}

impl<V, E> From<std::result::Result<V, E>> for Result<V, E> {
    fn from(value: std::result::Result<V, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::error(error),
        }
    }
}

impl<V, E> From<Failure<E>> for Result<V, E> {
    fn from(failure: Failure<E>) -> Self {
        Self::Error(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_or_on_ok_keeps_value() {
        let result: Result<i32, &str> = Result::ok(1);
        assert_eq!(result.or(Result::error("unused")).unwrap(), 1);
    }

    #[rstest]
    fn test_or_links_previous() {
        let result: Result<i32, &str> = Result::error("first");
        let next = result.or(Result::error("second"));
        assert_eq!(next.previous().map(|failure| *failure.error()), Some("first"));
    }

    #[rstest]
    fn test_catch_skips_non_matching_errors() {
        let mut invoked = false;
        let result: Result<i32, i32> = Result::error(5);
        let result = result.catch(
            |error| *error > 10,
            |_| {
                invoked = true;
                Result::ok(0)
            },
        );
        assert!(!invoked);
        assert_eq!(result.unwrap_error(), 5);
    }

    #[rstest]
    fn test_try_expect_carries_failure() {
        let result: Result<i32, &str> = Result::error("broken");
        let unhandled = result.try_expect("needed a value").unwrap_err();
        assert_eq!(unhandled.message(), "needed a value");
        assert_eq!(unhandled.failure().error(), &"broken");
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Result::<i32, &str>::ok(4).to_string(), "Ok(4)");
        assert_eq!(Result::<i32, &str>::error("lost").to_string(), "Error(lost)");
    }

    #[rstest]
    #[should_panic(expected = "There is no error")]
    fn test_unwrap_error_on_ok_panics() {
        Result::<i32, &str>::ok(1).unwrap_error();
    }
}
