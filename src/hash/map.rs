// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An insertion ordered map.
//!
//! A hash map which remembers the order its keys were first inserted
//! in, and lets you address its entries by that position.
//!
//! Lookups by key are amortised O(1), just like any bucketed hash
//! table. Alongside the buckets the map keeps an order log: a dense
//! array of its entries in insertion order. Reading the i-th entry is
//! O(1); removing any entry is O(n) because everything after it in the
//! log shifts down by one.
//!
//! Replacing the value of an existing key doesn't move it. Removing a
//! key and inserting it again puts it at the end.
//!
//! Keys may be `Option`s, in which case `None` is a perfectly good key
//! and behaves like any other.

use std::borrow::Borrow;
use std::collections::hash_map::{DefaultHasher, RandomState};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{Index, IndexMut};
use std::slice::Iter as SliceIter;
use std::vec::IntoIter as VecIntoIter;

use crate::config::TableConfig;
#[cfg(any(test, feature = "debug"))]
use crate::config::MAXIMUM_CAPACITY;
use crate::error::Result;
use crate::hash::list::{EntryList, KeyList, ValueList};
use crate::nodes::bucket::{hash_key, Entry, EntryId, Store};
use crate::nodes::order::OrderLog;
use crate::render::{render_pairs, Render};

/// Construct an insertion ordered map from a sequence of key/value pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate ordhash;
/// # use ordhash::ArrayHashMap;
/// # fn main() {
/// let map = arrayhashmap!{
///   1 => 11,
///   2 => 22,
///   3 => 33
/// };
/// assert_eq!(map, ArrayHashMap::<_, _>::from(vec![(1, 11), (2, 22), (3, 33)]));
/// assert_eq!(vec![&1, &2, &3], map.keys().collect::<Vec<_>>());
/// # }
/// ```
#[macro_export]
macro_rules! arrayhashmap {
    () => { $crate::arrayhashmap::ArrayHashMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::arrayhashmap::ArrayHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::arrayhashmap::ArrayHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};
}

/// An insertion ordered hash map.
///
/// Iteration, the list views ([`entry_list`][ArrayHashMap::entry_list],
/// [`key_list`][ArrayHashMap::key_list],
/// [`value_list`][ArrayHashMap::value_list]) and the index based
/// accessors all follow the order in which keys were first inserted.
///
/// Two maps are equal when they hold the same pairs, whatever order
/// they were inserted in, and such maps also hash the same.
pub struct ArrayHashMap<K, V, S = RandomState> {
    store: Store<K, V>,
    order: OrderLog,
    version: u64,
    hasher: S,
}

impl<K, V> ArrayHashMap<K, V, RandomState> {
    /// Construct an empty map with 16 buckets and a load factor of 0.75.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config_and_hasher(TableConfig::default(), RandomState::new())
    }

    /// Construct an empty map with room for `capacity` buckets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config_and_hasher(TableConfig::with_capacity(capacity), RandomState::new())
    }

    /// Construct an empty map with the given sizing.
    ///
    /// Fails if the load factor isn't a positive, finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ordhash::ArrayHashMap;
    /// let map = ArrayHashMap::<i32, i32>::with_capacity_and_load_factor(16, 2.0).unwrap();
    /// assert_eq!(16, map.capacity());
    /// assert_eq!(32, map.threshold());
    ///
    /// assert!(ArrayHashMap::<i32, i32>::with_capacity_and_load_factor(16, 0.0).is_err());
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Result<Self> {
        TableConfig::new(capacity, load_factor).map(Self::with_config)
    }

    /// Construct an empty map from a validated [`TableConfig`].
    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> ArrayHashMap<K, V, S> {
    /// Construct an empty map using the provided hasher.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config_and_hasher(TableConfig::default(), hasher)
    }

    #[must_use]
    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Self {
        ArrayHashMap {
            store: Store::new(&config),
            order: OrderLog::with_capacity(config.threshold()),
            version: 0,
            hasher,
        }
    }

    /// Test whether the map is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of entries in the map.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// The current number of buckets. Always a power of two.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The size above which the next insertion doubles the capacity.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.store.threshold()
    }

    #[inline]
    #[must_use]
    pub fn load_factor(&self) -> f32 {
        self.store.load_factor()
    }

    /// Get a reference to the map's [`BuildHasher`][BuildHasher].
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// The structural modification count. Bumped by every insertion of
    /// a new key, every removal and every clear.
    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Get the key/value pair at a position in insertion order.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate ordhash;
    /// let map = arrayhashmap!{"a" => 1, "b" => 2};
    /// assert_eq!(Ok((&"b", &2)), map.get_index(1));
    /// assert!(map.get_index(2).is_err());
    /// ```
    pub fn get_index(&self, index: usize) -> Result<(&K, &V)> {
        let id = self.order.get(index)?;
        Ok(self.store.entry(id).pair())
    }

    /// Get the key/value pair at a position, with a mutable value.
    pub fn get_index_mut(&mut self, index: usize) -> Result<(&K, &mut V)> {
        let id = self.order.get(index)?;
        Ok(self.store.entry_mut(id).pair_mut())
    }

    /// Get the key at a position in insertion order.
    pub fn key_at(&self, index: usize) -> Result<&K> {
        self.get_index(index).map(|(key, _)| key)
    }

    /// Get the value at a position in insertion order.
    pub fn value_at(&self, index: usize) -> Result<&V> {
        self.get_index(index).map(|(_, value)| value)
    }

    /// Remove the entry at a position, shifting every later entry down
    /// by one.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate ordhash;
    /// let mut map = arrayhashmap!{"a" => 1, "b" => 2, "c" => 3};
    /// assert_eq!(Ok(("a", 1)), map.remove_index(0));
    /// assert_eq!(Ok(&"b"), map.key_at(0));
    /// assert_eq!(2, map.len());
    /// ```
    pub fn remove_index(&mut self, index: usize) -> Result<(K, V)> {
        let id = self.order.remove_at(index)?;
        self.bump();
        Ok(self.store.unlink(id).into_pair())
    }

    /// Discard all entries.
    ///
    /// The bucket array keeps its current capacity.
    ///
    /// Time: O(n)
    pub fn clear(&mut self) {
        self.store.clear();
        self.order.clear();
        self.bump();
    }

    /// Get an iterator over the key/value pairs, in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            store: &self.store,
            ids: self.order.iter(),
        }
    }

    /// Get a mutable iterator over the values, in insertion order.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let ArrayHashMap { store, order, .. } = self;
        IterMut {
            slots: store.slots_mut(),
            ids: order.iter(),
        }
    }

    /// Get an iterator over the keys, in insertion order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { it: self.iter() }
    }

    /// Get an iterator over the values, in insertion order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { it: self.iter() }
    }

    /// Get a mutable iterator over the values, in insertion order.
    #[must_use]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            it: self.iter_mut(),
        }
    }

    /// A live list of the map's entries.
    ///
    /// Removing through the list removes from the map. Positional
    /// replacement isn't supported. Use
    /// [`cursor`][crate::ListView::cursor] on any of the views for a
    /// fail-fast bidirectional walk.
    pub fn entry_list(&mut self) -> EntryList<'_, K, V, S> {
        EntryList::new(self)
    }

    /// A live list of the map's keys.
    ///
    /// Removing through the list removes from the map. Positional
    /// replacement isn't supported.
    pub fn key_list(&mut self) -> KeyList<'_, K, V, S> {
        KeyList::new(self)
    }

    /// A live list of the map's values.
    ///
    /// Removing through the list removes from the map, and
    /// [`set`][crate::ListView::set] replaces a value in place.
    pub fn value_list(&mut self) -> ValueList<'_, K, V, S> {
        ValueList::new(self)
    }
}

impl<K, V, S> ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn find<BK>(&self, key: &BK) -> Option<EntryId>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.store.find(hash_key(&self.hasher, key), key)
    }

    fn grow(&mut self) {
        if let Some(capacity) = self.store.wants_growth() {
            self.store.relink(capacity, self.order.iter().copied());
        }
    }

    /// Check that the buckets and the order log agree with each other.
    #[cfg(any(test, feature = "debug"))]
    pub fn assert_invariants(&self) {
        assert_eq!(self.order.len(), self.store.len());
        assert!(self.capacity().is_power_of_two());
        assert!(
            self.len() <= self.threshold()
                || self.load_factor() < 0.5
                || self.capacity() == MAXIMUM_CAPACITY
        );
        for id in self.order.iter() {
            let entry = self.store.entry(*id);
            assert_eq!(Some(*id), self.find(&entry.key));
        }
    }

    /// Grow the bucket array once, up front, so that `additional` more
    /// entries fit without further resizing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ordhash::ArrayHashMap;
    /// let mut map: ArrayHashMap<i32, i32> = (0..12).map(|i| (i, i)).collect();
    /// map.reserve(11);
    /// let capacity = map.capacity();
    /// map.extend((12..23).map(|i| (i, i)));
    /// assert_eq!(capacity, map.capacity());
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let len = self.len().saturating_add(additional);
        if let Some(capacity) = self.store.wants_room(len) {
            self.store.relink(capacity, self.order.iter().copied());
        }
    }

    /// Get the value for a key.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate ordhash;
    /// let map = arrayhashmap!{Some("a") => 1, None => 2};
    /// assert_eq!(Some(&1), map.get(&Some("a")));
    /// assert_eq!(Some(&2), map.get(&None));
    /// assert_eq!(None, map.get(&Some("b")));
    /// ```
    #[must_use]
    pub fn get<BK>(&self, key: &BK) -> Option<&V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.find(key).map(|id| &self.store.entry(id).value)
    }

    #[must_use]
    pub fn get_key_value<BK>(&self, key: &BK) -> Option<(&K, &V)>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.find(key).map(|id| self.store.entry(id).pair())
    }

    #[must_use]
    pub fn get_mut<BK>(&mut self, key: &BK) -> Option<&mut V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        let id = self.find(key)?;
        Some(&mut self.store.entry_mut(id).value)
    }

    /// Find the insertion position of a key.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn get_index_of<BK>(&self, key: &BK) -> Option<usize>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.find(key).and_then(|id| self.order.position(id))
    }

    /// Test for the presence of a key.
    #[inline]
    #[must_use]
    pub fn contains_key<BK>(&self, key: &BK) -> bool
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.find(key).is_some()
    }

    /// Test whether any key maps to the given value.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|candidate| candidate == value)
    }

    /// Insert a key/value mapping, returning the previous value for the
    /// key if there was one.
    ///
    /// A new key goes at the end of the insertion order. An existing
    /// key keeps its position and only has its value replaced.
    ///
    /// Time: O(1) amortised
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate ordhash;
    /// # use ordhash::ArrayHashMap;
    /// let mut map = ArrayHashMap::new();
    /// assert_eq!(None, map.insert("a", 1));
    /// assert_eq!(None, map.insert("b", 2));
    /// assert_eq!(Some(1), map.insert("a", 3));
    /// assert_eq!(vec![(&"a", &3), (&"b", &2)], map.iter().collect::<Vec<_>>());
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&self.hasher, &key);
        if let Some(id) = self.store.find(hash, &key) {
            return Some(std::mem::replace(&mut self.store.entry_mut(id).value, value));
        }
        let id = self.store.push(hash, key, value);
        self.order.append(id);
        self.bump();
        self.grow();
        None
    }

    /// Insert every pair from an iterator, growing the table at most
    /// once beforehand.
    pub fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        if let Some(capacity) = self.store.wants_reserve(pairs.size_hint().0) {
            self.store.relink(capacity, self.order.iter().copied());
        }
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Remove a key, returning its value if it was present.
    ///
    /// Time: O(n)
    pub fn remove<BK>(&mut self, key: &BK) -> Option<V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove a key, returning the stored key and value if it was present.
    pub fn remove_entry<BK>(&mut self, key: &BK) -> Option<(K, V)>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        let id = self.find(key)?;
        let removed = self.order.remove_id(id);
        debug_assert!(removed.is_some(), "entry missing from order log");
        self.bump();
        Some(self.store.unlink(id).into_pair())
    }

    /// Keep only the entries for which the predicate returns true.
    /// Survivors keep their relative order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut doomed = Vec::new();
        for id in self.order.iter() {
            let (key, value) = self.store.entry_mut(*id).pair_mut();
            if !f(key, value) {
                doomed.push(*id);
            }
        }
        if doomed.is_empty() {
            return;
        }
        let mut cursor = 0;
        self.order.retain(|id| {
            let keep = doomed.get(cursor) != Some(id);
            if !keep {
                cursor += 1;
            }
            keep
        });
        for id in doomed {
            self.store.unlink(id);
        }
        self.bump();
    }
}

// Core traits

impl<K, V, S> Clone for ArrayHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Clone a map.
    ///
    /// The clone has its own buckets and order log, and shares nothing
    /// with the original afterwards.
    ///
    /// Time: O(n)
    fn clone(&self) -> Self {
        ArrayHashMap {
            store: self.store.clone(),
            order: self.order.clone(),
            version: 0,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S1, S2> PartialEq<ArrayHashMap<K, V, S2>> for ArrayHashMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ArrayHashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Hash for ArrayHashMap<K, V, S>
where
    K: Hash,
    V: Hash,
{
    /// Hash the contents, independently of insertion order.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        state.write_u64(unordered_hash(self.iter()));
    }
}

pub(crate) fn unordered_hash<'a, K, V, I>(pairs: I) -> u64
where
    K: Hash + 'a,
    V: Hash + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    pairs.into_iter().fold(0u64, |sum, (key, value)| {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        value.hash(&mut hasher);
        sum.wrapping_add(hasher.finish())
    })
}

impl<K, V, S> Default for ArrayHashMap<K, V, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.insert_all(iter)
    }
}

impl<BK, K, V, S> Index<&BK> for ArrayHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &BK) -> &Self::Output {
        match self.get(key) {
            None => panic!("ArrayHashMap::index: invalid key"),
            Some(value) => value,
        }
    }
}

impl<BK, K, V, S> IndexMut<&BK> for ArrayHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    fn index_mut(&mut self, key: &BK) -> &mut Self::Output {
        match self.get_mut(key) {
            None => panic!("ArrayHashMap::index_mut: invalid key"),
            Some(value) => value,
        }
    }
}

impl<K, V, S> Debug for ArrayHashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Display for ArrayHashMap<K, V, S>
where
    K: Render,
    V: Render,
{
    /// Render as `{k1=v1, k2=v2}` in insertion order, with `None`
    /// written as `null`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_pairs(f, self.iter())
    }
}

// Iterators

/// An iterator over the entries of a map, in insertion order.
pub struct Iter<'a, K, V> {
    store: &'a Store<K, V>,
    ids: SliceIter<'a, EntryId>,
}

// We impl Clone instead of deriving it, because we want Clone even if K and V aren't.
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            ids: self.ids.clone(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Split into the first `index` entries and the rest.
    #[cfg(any(test, feature = "rayon"))]
    pub(crate) fn split_at(self, index: usize) -> (Self, Self) {
        let (left, right) = self.ids.as_slice().split_at(index);
        (
            Iter {
                store: self.store,
                ids: left.iter(),
            },
            Iter {
                store: self.store,
                ids: right.iter(),
            },
        )
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.ids.next().map(|id| store.entry(*id).pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.ids.next_back().map(|id| store.entry(*id).pair())
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// A mutable iterator over the entries of a map, in insertion order.
pub struct IterMut<'a, K, V> {
    slots: Vec<Option<&'a mut Entry<K, V>>>,
    ids: SliceIter<'a, EntryId>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.slots[id.slot()].take().map(Entry::pair_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.next_back()?;
        self.slots[id.slot()].take().map(Entry::pair_mut)
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// A consuming iterator over the entries of a map, in insertion order.
pub struct ConsumingIter<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    ids: VecIntoIter<EntryId>,
}

impl<K, V> Iterator for ConsumingIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.slots[id.slot()].take().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ConsumingIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.next_back()?;
        self.slots[id.slot()].take().map(Entry::into_pair)
    }
}

impl<K, V> ExactSizeIterator for ConsumingIter<K, V> {}

impl<K, V> FusedIterator for ConsumingIter<K, V> {}

/// An iterator over the keys of a map, in insertion order.
pub struct Keys<'a, K, V> {
    it: Iter<'a, K, V>,
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys {
            it: self.it.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|(key, _)| key)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// An iterator over the values of a map, in insertion order.
pub struct Values<'a, K, V> {
    it: Iter<'a, K, V>,
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values {
            it: self.it.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// A mutable iterator over the values of a map, in insertion order.
pub struct ValuesMut<'a, K, V> {
    it: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ArrayHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ArrayHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for ArrayHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = ConsumingIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            slots: self.store.into_slots(),
            ids: self.order.into_vec().into_iter(),
        }
    }
}

// Conversions

impl<K, V, S> FromIterator<(K, V)> for ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let i = i.into_iter();
        let (len, _) = i.size_hint();
        let mut map = Self::with_config_and_hasher(TableConfig::for_len(len), S::default());
        for (key, value) in i {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, S> From<Vec<(K, V)>> for ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(m: Vec<(K, V)>) -> Self {
        m.into_iter().collect()
    }
}

impl<K, V, S, const N: usize> From<[(K, V); N]> for ArrayHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V, S> From<&'a [(K, V)]> for ArrayHashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn from(m: &'a [(K, V)]) -> Self {
        m.iter().cloned().collect()
    }
}

// Tests
