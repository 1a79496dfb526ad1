//! Serde helper for partial-update request bodies.
//!
//! A plain `Option<T>` cannot tell an absent field from an explicit `null`.
//! Fields declared as `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "nullable")]` decode as:
//!
//! | JSON              | Rust             |
//! |-------------------|------------------|
//! | field absent      | `None`           |
//! | `"field": null`   | `Some(None)`     |
//! | `"field": value`  | `Some(Some(v))`  |

use serde::{Deserialize, Deserializer};

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
