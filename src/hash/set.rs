// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An insertion ordered set.
//!
//! A set backed by an [`ArrayHashMap`][crate::ArrayHashMap] with unit
//! values. Iteration and index based access follow the order in which
//! values were first inserted, and membership tests are amortised O(1).

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::config::TableConfig;
use crate::error::Result;
use crate::hash::map::{self, ArrayHashMap};
use crate::render::{render_items, Render};

/// Construct an insertion ordered set from a sequence of values.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate ordhash;
/// # use ordhash::ArrayHashSet;
/// # fn main() {
/// assert_eq!(
///   arrayhashset![1, 2, 3],
///   ArrayHashSet::<_>::from(vec![1, 2, 3])
/// );
/// # }
/// ```
#[macro_export]
macro_rules! arrayhashset {
    () => { $crate::arrayhashset::ArrayHashSet::new() };

    ( $($x:expr),* ) => {{
        let mut l = $crate::arrayhashset::ArrayHashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};

    ( $($x:expr ,)* ) => {{
        let mut l = $crate::arrayhashset::ArrayHashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};
}

/// An insertion ordered hash set.
pub struct ArrayHashSet<A, S = RandomState> {
    map: ArrayHashMap<A, (), S>,
}

impl<A> ArrayHashSet<A, RandomState> {
    /// Construct an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        ArrayHashSet {
            map: ArrayHashMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayHashSet {
            map: ArrayHashMap::with_capacity(capacity),
        }
    }

    /// Construct an empty set with the given sizing.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Result<Self> {
        ArrayHashMap::with_capacity_and_load_factor(capacity, load_factor)
            .map(|map| ArrayHashSet { map })
    }

    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        ArrayHashSet {
            map: ArrayHashMap::with_config(config),
        }
    }
}

impl<A, S> ArrayHashSet<A, S> {
    /// Construct an empty set using the provided hasher.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        ArrayHashSet {
            map: ArrayHashMap::with_hasher(hasher),
        }
    }

    /// Test whether a set is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the size of a set.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    #[inline]
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.map.threshold()
    }

    /// Get the value at a position in insertion order.
    ///
    /// Time: O(1)
    pub fn get_index(&self, index: usize) -> Result<&A> {
        self.map.key_at(index)
    }

    /// Remove the value at a position, shifting every later value
    /// down by one.
    ///
    /// Time: O(n)
    pub fn remove_index(&mut self, index: usize) -> Result<A> {
        self.map.remove_index(index).map(|(value, _)| value)
    }

    #[cfg(any(test, feature = "rayon"))]
    pub(crate) fn map_ref(&self) -> &ArrayHashMap<A, (), S> {
        &self.map
    }

    /// Discard all elements from the set.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Get an iterator over the values in a set, in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            it: self.map.keys(),
        }
    }
}

impl<A, S> ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
    /// Test if a value is part of a set.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn contains<BA>(&self, a: &BA) -> bool
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.map.contains_key(a)
    }

    /// Find the insertion position of a value.
    #[must_use]
    pub fn index_of<BA>(&self, a: &BA) -> Option<usize>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.map.get_index_of(a)
    }

    /// Insert a value into a set.
    ///
    /// Returns `true` if the value wasn't already present. A value that
    /// was present keeps its position.
    ///
    /// Time: O(1) amortised
    ///
    /// # Examples
    ///
    /// ```
    /// # use ordhash::ArrayHashSet;
    /// let mut set = ArrayHashSet::new();
    /// assert!(set.insert("b"));
    /// assert!(set.insert("a"));
    /// assert!(!set.insert("b"));
    /// assert_eq!(vec![&"b", &"a"], set.iter().collect::<Vec<_>>());
    /// ```
    pub fn insert(&mut self, a: A) -> bool {
        self.map.insert(a, ()).is_none()
    }

    /// Remove a value from a set, returning whether it was present.
    pub fn remove<BA>(&mut self, a: &BA) -> bool
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.map.remove(a).is_some()
    }

    /// Keep only the values for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&A) -> bool,
    {
        self.map.retain(|a, _| f(a))
    }
}

// Core traits

impl<A, S> Clone for ArrayHashSet<A, S>
where
    A: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        ArrayHashSet {
            map: self.map.clone(),
        }
    }
}

impl<A, S1, S2> PartialEq<ArrayHashSet<A, S2>> for ArrayHashSet<A, S1>
where
    A: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ArrayHashSet<A, S2>) -> bool {
        self.map == other.map
    }
}

impl<A, S> Eq for ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
}

impl<A: Hash, S> Hash for ArrayHashSet<A, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state)
    }
}

impl<A, S> Default for ArrayHashSet<A, S>
where
    S: Default,
{
    fn default() -> Self {
        ArrayHashSet {
            map: ArrayHashMap::default(),
        }
    }
}

impl<A, S> Extend<A> for ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.map.insert_all(iter.into_iter().map(|a| (a, ())))
    }
}

impl<A: Debug, S> Debug for ArrayHashSet<A, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<A: Render, S> Display for ArrayHashSet<A, S> {
    /// Render as `[a, b]` in insertion order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_items(f, self.iter())
    }
}

// Iterators

/// An iterator over the elements of a set, in insertion order.
pub struct Iter<'a, A> {
    it: map::Keys<'a, A, ()>,
}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            it: self.it.clone(),
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back()
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

/// A consuming iterator over the elements of a set, in insertion order.
pub struct ConsumingIter<A> {
    it: map::ConsumingIter<A, ()>,
}

impl<A> Iterator for ConsumingIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(a, _)| a)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<A> DoubleEndedIterator for ConsumingIter<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|(a, _)| a)
    }
}

impl<A> ExactSizeIterator for ConsumingIter<A> {}

impl<A> FusedIterator for ConsumingIter<A> {}

impl<'a, A, S> IntoIterator for &'a ArrayHashSet<A, S> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, S> IntoIterator for ArrayHashSet<A, S> {
    type Item = A;
    type IntoIter = ConsumingIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            it: self.map.into_iter(),
        }
    }
}

// Conversions

impl<A, S> FromIterator<A> for ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = A>,
    {
        ArrayHashSet {
            map: i.into_iter().map(|a| (a, ())).collect(),
        }
    }
}

impl<A, S> From<Vec<A>> for ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(vec: Vec<A>) -> Self {
        vec.into_iter().collect()
    }
}

impl<A, S, const N: usize> From<[A; N]> for ArrayHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(arr: [A; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, A, S> From<&'a [A]> for ArrayHashSet<A, S>
where
    A: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(slice: &'a [A]) -> Self {
        slice.iter().cloned().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::test::LolHasher;
    use ::proptest::{collection, num::i16, proptest};
    use static_assertions::assert_impl_all;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::BuildHasherDefault;

    assert_impl_all!(ArrayHashSet<i32>: Send, Sync, Clone, Default);

    fn hash_of<A: Hash>(value: &A) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn insert_and_remove() {
        let mut set = arrayhashset!["c", "a", "b"];
        assert!(!set.insert("a"));
        assert_eq!(3, set.len());
        assert!(set.contains("b"));
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(set.insert("a"));
        assert_eq!(vec!["c", "b", "a"], set.iter().cloned().collect::<Vec<_>>());
        assert_eq!(Some(2), set.index_of("a"));
    }

    #[test]
    fn index_access() {
        let mut set: ArrayHashSet<Option<i32>> = vec![Some(3), None, Some(1)].into();
        assert_eq!(Ok(&None), set.get_index(1));
        assert_eq!(Err(Error::out_of_bounds(3, 3)), set.get_index(3));
        assert_eq!(Ok(Some(3)), set.remove_index(0));
        assert_eq!(Ok(&None), set.get_index(0));
        assert_eq!("[null, 1]", set.to_string());
        set.clear();
        assert!(set.is_empty());
        assert_eq!("[]", set.to_string());
    }

    #[test]
    fn equality_ignores_order() {
        let left = arrayhashset![1, 2, 3];
        let right = arrayhashset![3, 1, 2];
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(left, arrayhashset![1, 2]);
        let colliding: ArrayHashSet<i32, BuildHasherDefault<LolHasher>> =
            vec![2, 3, 1].into_iter().collect();
        assert_eq!(left, colliding);
    }

    #[test]
    fn retain_and_extend() {
        let mut set: ArrayHashSet<i32> = (0..10).collect();
        set.retain(|a| a % 2 == 1);
        set.extend(vec![0, 1, 20]);
        assert_eq!(
            vec![1, 3, 5, 7, 9, 0, 20],
            set.into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn debug_output() {
        let set = arrayhashset!["x", "y"];
        assert_eq!(r#"{"x", "y"}"#, format!("{:?}", set));
    }

    proptest! {
        #[test]
        fn insertion_order(ref values in collection::vec(i16::ANY, 0..500)) {
            let mut set = ArrayHashSet::new();
            let mut expected = Vec::new();
            for value in values {
                if set.insert(*value) {
                    expected.push(*value);
                }
            }
            assert_eq!(expected.len(), set.len());
            assert_eq!(expected, set.iter().cloned().collect::<Vec<_>>());
            for (index, value) in expected.iter().enumerate() {
                assert_eq!(Ok(value), set.get_index(index));
            }
        }
    }
}
