//! Null-likeness of stored values.
//!
//! Rust has one absence marker (`None`), but values coming from dynamic
//! sources carry their own: JSON `null`, or `null` and `undefined` on the JS
//! side. [`NullLike`] lets [`crate::Maybe::get_or_else`] and
//! [`crate::classify_value`] recognise all of them.
//!
//! Falsy values are not null-like: `0`, `""`, `false` and empty collections
//! are ordinary present values.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};
use wasm_bindgen::JsValue;

/// A value that may stand for "no value".
///
/// Implement it for your own types to use them with
/// [`crate::Maybe::get_or_else`]:
///
/// ```rust
/// use maybe_container::{Maybe, NullLike};
///
/// #[derive(Debug, PartialEq)]
/// struct UserId(u32);
///
/// impl NullLike for UserId {
///     fn is_null_like(&self) -> bool {
///         false
///     }
/// }
///
/// assert_eq!(Maybe::Absent.get_or_else(UserId(0)), UserId(0));
/// ```
///
/// For a foreign type you cannot implement it for, use
/// [`crate::Maybe::unwrap_or`], which skips the null check.
pub trait NullLike {
    /// Returns `true` if this value represents the absence of a value.
    fn is_null_like(&self) -> bool;
}

/// Implements `NullLike` as "never null-like" for plain value types.
macro_rules! never_null_like {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NullLike for $ty {
                #[inline]
                fn is_null_like(&self) -> bool {
                    false
                }
            }
        )*
    };
}

/// Same, for generic containers; the bracket lists the type parameters.
macro_rules! never_null_like_generic {
    ($([$($param:ident),*] $ty:ty),* $(,)?) => {
        $(
            impl<$($param),*> NullLike for $ty {
                #[inline]
                fn is_null_like(&self) -> bool {
                    false
                }
            }
        )*
    };
}

/// Tuples hold values, never stand for a missing one.
macro_rules! never_null_like_tuple {
    ($(($($param:ident),+)),* $(,)?) => {
        never_null_like_generic!($([$($param),+] ($($param,)+)),*);
    };
}

never_null_like!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, str, OsString, OsStr, PathBuf, Path, Duration, Instant, SystemTime, IpAddr,
    SocketAddr,
);

never_null_like_generic!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T] [T],
);

never_null_like_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

impl<T, const N: usize> NullLike for [T; N] {
    fn is_null_like(&self) -> bool {
        false
    }
}

impl<T> NullLike for Option<T> {
    fn is_null_like(&self) -> bool {
        self.is_none()
    }
}

impl<T: NullLike + ?Sized> NullLike for Box<T> {
    fn is_null_like(&self) -> bool {
        (**self).is_null_like()
    }
}

impl<T: NullLike + ?Sized> NullLike for Rc<T> {
    fn is_null_like(&self) -> bool {
        (**self).is_null_like()
    }
}

impl<T: NullLike + ?Sized> NullLike for Arc<T> {
    fn is_null_like(&self) -> bool {
        (**self).is_null_like()
    }
}

impl<T: NullLike + ?Sized> NullLike for &T {
    fn is_null_like(&self) -> bool {
        (**self).is_null_like()
    }
}

impl<T: NullLike + ToOwned + ?Sized> NullLike for Cow<'_, T> {
    fn is_null_like(&self) -> bool {
        (**self).is_null_like()
    }
}

impl NullLike for serde_json::Value {
    fn is_null_like(&self) -> bool {
        self.is_null()
    }
}

// `value == null` in JS holds for both `null` and `undefined`.
impl NullLike for JsValue {
    fn is_null_like(&self) -> bool {
        self.loose_eq(&JsValue::NULL)
    }
}
