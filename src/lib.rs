// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Insertion ordered hash tables
//!
//! This crate provides a small family of bucketed hash tables built on
//! one shared bucket store:
//!
//! | Type | Keys | Iteration order |
//! | --- | --- | --- |
//! | [`ArrayHashMap`][ArrayHashMap] | any `Hash + Eq` | insertion |
//! | [`ArrayHashSet`][ArrayHashSet] | any `Hash + Eq` | insertion |
//! | [`DefaultHashMap`][DefaultHashMap] | any `Hash + Eq` | bucket |
//! | [`IntHashMap`][IntHashMap] | `i32` | bucket |
//!
//! ## Ordering and positions
//!
//! [`ArrayHashMap`][ArrayHashMap] keeps an order log next to its
//! buckets, recording its entries in the order their keys were first
//! inserted. That makes the i-th entry an O(1) lookup, and gives the
//! map three list shaped views:
//! [`entry_list`][ArrayHashMap::entry_list],
//! [`key_list`][ArrayHashMap::key_list] and
//! [`value_list`][ArrayHashMap::value_list]. Replacing a value never
//! moves its entry; removing one shifts every later entry down by one.
//!
//! When the map grows, entries are re-linked into the new buckets by
//! walking the order log, and the log itself is left alone, so
//! positions are stable across resizes.
//!
//! ## Fail-fast cursors
//!
//! The ordinary iterators borrow the map, so the compiler already
//! rules out modifying a map while iterating over it. A
//! [`ListCursor`][ListCursor] is for the cases where that's too
//! strict: it holds no borrow, and instead compares the map's
//! modification count on every step, failing with
//! [`Error::ConcurrentModification`][Error::ConcurrentModification] if
//! something other than the cursor changed the map's structure.
//!
//! ## Absent keys
//!
//! There's no special null key. Use `Option<K>` as the key type and
//! `None` is an ordinary key, which the [`Display`][std::fmt::Display]
//! output renders as `null`:
//!
//! ```
//! # use ordhash::ArrayHashMap;
//! let mut map = ArrayHashMap::new();
//! map.insert(None, Some("111"));
//! map.insert(Some("aaa"), None);
//! assert_eq!("{null=111, aaa=null}", map.to_string());
//! assert_eq!(Ok((None, Some("111"))), map.remove_index(0));
//! ```
//!
//! ## Sizing
//!
//! Every table starts with a power of two number of buckets and
//! doubles whenever an insertion pushes its size past
//! `capacity * load_factor`. The defaults are 16 buckets and a load
//! factor of 0.75; see [`TableConfig`][TableConfig] to change them.
//!
//! Table growth is logged at `debug` level through [`tracing`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! | ------- | ----------- |
//! | [`proptest`](https://crates.io/crates/proptest) | Strategies for all these collection types under the `proptest` namespace |
//! | [`quickcheck`](https://crates.io/crates/quickcheck) | [`quickcheck::Arbitrary`](https://docs.rs/quickcheck/latest/quickcheck/trait.Arbitrary.html) implementations |
//! | [`rayon`](https://crates.io/crates/rayon) | parallel iterator implementations for [`ArrayHashMap`][ArrayHashMap] and [`ArrayHashSet`][ArrayHashSet] |
//! | [`serde`](https://crates.io/crates/serde) | [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) implementations |
//! | [`bincode`](https://crates.io/crates/bincode) | [`Encode`](https://docs.rs/bincode/latest/bincode/enc/trait.Encode.html) and [`Decode`](https://docs.rs/bincode/latest/bincode/de/trait.Decode.html) implementations |
//! | [`arbitrary`](https://crates.io/crates/arbitrary/) | [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html) implementations |
//! | `debug` | `assert_invariants` on [`ArrayHashMap`][ArrayHashMap] |

#![forbid(rust_2018_idioms)]
#![deny(unsafe_code, nonstandard_style)]
#![warn(unreachable_pub)]

#[macro_use]
mod hash;
mod nodes;
mod render;

pub mod config;
pub mod error;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

#[cfg(any(test, feature = "serde"))]
#[doc(hidden)]
pub mod ser;

#[cfg(any(test, feature = "bincode"))]
#[doc(hidden)]
pub mod bincode;

#[cfg(feature = "arbitrary")]
#[doc(hidden)]
pub mod arbitrary;

#[cfg(feature = "quickcheck")]
#[doc(hidden)]
pub mod quickcheck;

#[cfg(any(test, feature = "rayon"))]
pub mod rayon;

pub mod arrayhashmap {
    //! An insertion ordered map, and its list views.
    pub use crate::hash::list::*;
    pub use crate::hash::map::*;
}

pub mod arrayhashset {
    //! An insertion ordered set.
    pub use crate::hash::set::*;
}

pub mod defaulthashmap {
    //! A plain bucketed hash map.
    pub use crate::hash::default::*;
}

pub mod inthashmap {
    //! A hash map keyed by `i32`.
    pub use crate::hash::int::*;
}

pub use crate::arrayhashmap::{ArrayHashMap, EntryList, KeyList, ListCursor, ListView, ValueList};
pub use crate::arrayhashset::ArrayHashSet;
pub use crate::config::TableConfig;
pub use crate::defaulthashmap::DefaultHashMap;
pub use crate::error::{Error, Result};
pub use crate::inthashmap::IntHashMap;
pub use crate::render::Render;

#[cfg(test)]
mod test;
