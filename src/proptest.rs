// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Proptest strategies.
//!
//! These are only available when using the `proptest` feature flag.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use ::proptest::collection::vec;
use ::proptest::strategy::{BoxedStrategy, Strategy, ValueTree};

use crate::{ArrayHashMap, ArrayHashSet, IntHashMap};

/// A strategy for an [`ArrayHashMap`] of a given size.
///
/// # Examples
///
/// ```rust,no_run
/// # use ::proptest::proptest;
/// proptest! {
///     #[test]
///     fn proptest_works(ref m in ordhash::proptest::array_hash_map(0..9999, ".*", 10..100)) {
///         assert!(m.len() < 100);
///         assert!(m.len() >= 10);
///     }
/// }
/// ```
pub fn array_hash_map<K: Strategy + 'static, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<ArrayHashMap<<K::Tree as ValueTree>::Value, <V::Tree as ValueTree>::Value>>
where
    <K::Tree as ValueTree>::Value: Hash + Eq + Clone + Debug,
    <V::Tree as ValueTree>::Value: Clone + Debug,
{
    vec((key, value), size.clone())
        .prop_map(ArrayHashMap::from)
        .prop_filter("ArrayHashMap minimum size".to_owned(), move |m| {
            m.len() >= size.start
        })
        .boxed()
}

/// A strategy for an [`ArrayHashSet`] of a given size.
///
/// # Examples
///
/// ```rust,no_run
/// # use ::proptest::proptest;
/// proptest! {
///     #[test]
///     fn proptest_works(ref s in ordhash::proptest::array_hash_set(".*", 10..100)) {
///         assert!(s.len() < 100);
///         assert!(s.len() >= 10);
///     }
/// }
/// ```
pub fn array_hash_set<A: Strategy + 'static>(
    element: A,
    size: Range<usize>,
) -> BoxedStrategy<ArrayHashSet<<A::Tree as ValueTree>::Value>>
where
    <A::Tree as ValueTree>::Value: Hash + Eq + Clone + Debug,
{
    vec(element, size.clone())
        .prop_map(ArrayHashSet::from)
        .prop_filter("ArrayHashSet minimum size".to_owned(), move |s| {
            s.len() >= size.start
        })
        .boxed()
}

/// A strategy for an [`IntHashMap`] of a given size.
pub fn int_hash_map<K, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<IntHashMap<<V::Tree as ValueTree>::Value>>
where
    K: Strategy<Value = i32> + 'static,
    <V::Tree as ValueTree>::Value: Clone + Debug,
{
    vec((key, value), size.clone())
        .prop_map(|pairs| pairs.into_iter().collect::<IntHashMap<_>>())
        .prop_filter("IntHashMap minimum size".to_owned(), move |m| {
            m.len() >= size.start
        })
        .boxed()
}
