//! Factories that turn raw values into [`Maybe`] containers.
//!
//! Languages with two absence markers ("no value" and "undefined") collapse
//! both onto `None` before calling [`classify`]. Values that carry their own
//! null marker, like `serde_json::Value`, go through [`classify_value`].

use crate::maybe::{Absent, Maybe, Present};
use crate::null_like::NullLike;

/// Classifies a possibly-missing value.
///
/// `None` becomes `Absent`; anything else becomes `Present`, including falsy
/// values such as `0`, `""` or `false`.
///
/// ```rust
/// use maybe_container::{classify, Maybe};
///
/// assert_eq!(classify(Some(0)), Maybe::Present(0));
/// assert!(classify::<i32>(None).is_empty());
/// ```
pub fn classify<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(value) => Present(value),
        None => Absent,
    }
}

/// Classifies a value by its own null marker.
///
/// ```rust
/// use maybe_container::classify_value;
/// use serde_json::json;
///
/// assert!(classify_value(json!(null)).is_empty());
/// assert!(!classify_value(json!(false)).is_empty());
/// ```
pub fn classify_value<T: NullLike>(value: T) -> Maybe<T> {
    if value.is_null_like() {
        Absent
    } else {
        Present(value)
    }
}
