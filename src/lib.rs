//! # Maybe Container
//!
//! An optional value, `Present` or `Absent`, with `map`, `flat_map`,
//! `get_or_else` and `for_each` so lookups that may come up empty compose
//! without explicit null checks.
//!
//! ```rust
//! use maybe_container::{classify, Maybe};
//! use serde_json::{json, Value};
//!
//! fn find_user(id: u32) -> Maybe<Value> {
//!     classify((id == 1).then(|| json!({ "name": "John" })))
//! }
//!
//! let name = classify(Some(1))
//!     .flat_map(find_user)
//!     .map(|user| user["name"].clone())
//!     .get_or_else(json!("anonymous"));
//! assert_eq!(name, json!("John"));
//! ```

pub mod maybe;
pub mod null_like;
pub mod classify;
pub mod web;


pub use maybe::*;
pub use null_like::*;
pub use classify::*;
