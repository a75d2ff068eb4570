//! # Maybe Module
//!
//! The optional-value container: a value that is either `Present` or `Absent`,
//! with operations that compose over it without explicit null checks.
//!
//! ## Design Principles
//!
//! - **Closed**: exactly two variants, every operation matches both
//! - **Persistent**: transformations consume the receiver and return a new container
//! - **Transparent**: callback panics and errors reach the caller untouched
//!
//! ## Example
//!
//! ```rust
//! use maybe_container::{classify, Maybe};
//!
//! let doubled = classify(Some(21)).map(|n| n * 2);
//! assert_eq!(doubled, Maybe::Present(42));
//! assert_eq!(doubled.get_or_else(0), 42);
//! ```

use crate::null_like::NullLike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised when a caller demands a value out of a container.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MaybeError {
    /// The container holds no value
    #[error("value is absent")]
    Absent,
}

/// An optional value.
///
/// `Present` owns exactly one value for its whole lifetime; `Absent` owns
/// nothing. A `Present` may wrap a falsy value (`0`, `""`, `false`) or even a
/// null-like one: only the factories in the `classify` module inspect
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A container holding one value
    Present(T),
    /// A container holding nothing
    Absent,
}

pub use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    /// Creates a `Present` container.
    pub fn present(value: T) -> Self {
        Present(value)
    }

    /// Creates an `Absent` container.
    pub fn absent() -> Self {
        Absent
    }

    /// Returns `true` for `Absent`, `false` for `Present`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Absent)
    }

    /// Returns `true` for `Present`.
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Applies `f` to the value and wraps the result.
    ///
    /// On `Absent`, `f` is never called.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Applies `f` to the value and returns its container as-is.
    ///
    /// Unlike [`Maybe::map`] the result is not re-wrapped, so steps that may
    /// themselves come up empty chain directly:
    ///
    /// ```rust
    /// use maybe_container::{classify, Maybe};
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent };
    /// assert_eq!(classify(Some(8)).flat_map(halve).flat_map(halve), Maybe::Present(2));
    /// assert!(classify(Some(6)).flat_map(halve).flat_map(halve).is_empty());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Calls `f` with a reference to the value, if any.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Present(value) = self {
            f(value);
        }
    }

    /// Like [`Maybe::map`], for callbacks that can fail.
    ///
    /// The callback's error is returned unchanged.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Present(value) => f(value).map(Present),
            Absent => Ok(Absent),
        }
    }

    /// Like [`Maybe::flat_map`], for callbacks that can fail.
    pub fn try_flat_map<U, E, F>(self, f: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Result<Maybe<U>, E>,
    {
        match self {
            Present(value) => f(value),
            Absent => Ok(Absent),
        }
    }

    /// Like [`Maybe::for_each`], for callbacks that can fail.
    pub fn try_for_each<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match self {
            Present(value) => f(value),
            Absent => Ok(()),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Converts into the standard `Option`, `Absent` becoming `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    /// Returns the value, or `default` when `Absent`.
    ///
    /// Unlike [`Maybe::get_or_else`] the stored value is returned as-is,
    /// so this works for any `T`, including types with no null marker:
    ///
    /// ```rust
    /// use maybe_container::Maybe;
    /// use std::time::Duration;
    ///
    /// assert_eq!(Maybe::Present(None::<u8>).unwrap_or(Some(1)), None);
    /// assert_eq!(Maybe::Absent.unwrap_or(Duration::ZERO), Duration::ZERO);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// Takes the value out, or fails with [`MaybeError::Absent`].
    pub fn into_result(self) -> Result<T, MaybeError> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(MaybeError::Absent),
        }
    }
}

impl<T: NullLike> Maybe<T> {
    /// Returns the value, or `default` when there is none.
    ///
    /// A `Present` whose stored value is itself null-like also yields
    /// `default`, so `Present(None).get_or_else(Some(1))` is `Some(1)`.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Present(value) if !value.is_null_like() => value,
            Present(_) | Absent => default,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

// Encoded exactly like `Option<T>`: `Absent` is JSON `null`.
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Present(value) => serializer.serialize_some(value),
            Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
