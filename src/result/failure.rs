//! The error side of [`Result`](super::Result) and its causal chain.

use std::fmt;

use thiserror::Error;

/// An error value together with the failure that caused it.
///
/// When a recovery callback on an error result produces another error, the
/// new failure records the old one as its `previous` link. The link is set
/// once and never overwritten, so walking [`chain`](Self::chain) always ends
/// at the root cause.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Failure<E> {
    error: E,
    previous: Option<Box<Failure<E>>>,
}

impl<E> Failure<E> {
    /// Creates a failure without a predecessor.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self {
            error,
            previous: None,
        }
    }

    /// Creates a failure caused by `previous`.
    #[inline]
    pub fn caused_by(error: E, previous: Self) -> Self {
        Self {
            error,
            previous: Some(Box::new(previous)),
        }
    }

    /// Returns the error value.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the failure and returns the error value.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Returns the failure that caused this one, if any.
    #[inline]
    pub fn previous(&self) -> Option<&Self> {
        self.previous.as_deref()
    }

    /// Iterates over this failure and all of its predecessors, most recent
    /// first.
    ///
    /// ```rust
    /// use kuria_collections::result::Failure;
    ///
    /// let root = Failure::new("disk full");
    /// let outer = Failure::caused_by("save failed", root);
    /// let errors: Vec<_> = outer.chain().map(|failure| *failure.error()).collect();
    /// assert_eq!(errors, vec!["save failed", "disk full"]);
    /// ```
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |failure| failure.previous())
    }

    /// Links `previous` unless a predecessor is already recorded.
    pub(crate) fn link(&mut self, previous: Self) {
        if self.previous.is_none() {
            tracing::trace!(depth = previous.chain().count(), "linking error to its cause");
            self.previous = Some(Box::new(previous));
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Failure");
        debug.field("error", &self.error);
        if let Some(previous) = &self.previous {
            debug.field("previous", previous);
        }
        debug.finish()
    }
}

/// Raised when an error result is unwrapped without being handled.
///
/// Carries a human-readable message and the unhandled [`Failure`],
/// including its chain of predecessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnhandledError<E> {
    message: String,
    failure: Failure<E>,
}

impl<E> UnhandledError<E> {
    pub(crate) const fn new(message: String, failure: Failure<E>) -> Self {
        Self { message, failure }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the unhandled failure.
    pub const fn failure(&self) -> &Failure<E> {
        &self.failure
    }

    /// Consumes the error and returns the unhandled failure.
    pub fn into_failure(self) -> Failure<E> {
        self.failure
    }
}

/// Derives a message from an error value: the variant or type name for
/// enums and structs, the plain text for strings and scalars.
pub(crate) fn describe<E: fmt::Debug>(error: &E) -> String {
    let rendered = format!("{error:?}");
    for quote in ['"', '\''] {
        if let Some(inner) = rendered
            .strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
        {
            return inner.to_owned();
        }
    }
    if !rendered.starts_with(|first: char| first.is_alphabetic() || first == '_') {
        return rendered;
    }
    let name_end = rendered
        .find(|character: char| !(character.is_alphanumeric() || character == '_'))
        .unwrap_or(rendered.len());
    rendered[..name_end].to_owned()
}
