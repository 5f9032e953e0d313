// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A plain bucketed hash map.
//!
//! The same bucket store as [`ArrayHashMap`][crate::ArrayHashMap], with
//! no order log. Iteration follows the bucket array, so the order is
//! determined by the hasher and the table's capacity, and changes when
//! the table grows.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::config::TableConfig;
use crate::error::Result;
use crate::hash::map::unordered_hash;
use crate::nodes::bucket::{hash_key, Entry, EntryId, Ids, Store};
use crate::render::{render_pairs, Render};

/// A hash map without any ordering guarantees.
pub struct DefaultHashMap<K, V, S = RandomState> {
    store: Store<K, V>,
    hasher: S,
}

impl<K, V> DefaultHashMap<K, V, RandomState> {
    /// Construct an empty map with 16 buckets and a load factor of 0.75.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config_and_hasher(TableConfig::default(), RandomState::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config_and_hasher(TableConfig::with_capacity(capacity), RandomState::new())
    }

    /// Construct an empty map with the given sizing.
    ///
    /// Fails if the load factor isn't a positive, finite number.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Result<Self> {
        TableConfig::new(capacity, load_factor).map(Self::with_config)
    }

    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> DefaultHashMap<K, V, S> {
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config_and_hasher(TableConfig::default(), hasher)
    }

    #[must_use]
    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Self {
        DefaultHashMap {
            store: Store::new(&config),
            hasher,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

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

    /// Discard all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// Get an iterator over the key/value pairs, in bucket order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            store: &self.store,
            ids: self.store.ids(),
        }
    }

    /// Get an iterator over the keys, in bucket order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Get an iterator over the values, in bucket order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, S> DefaultHashMap<K, V, S>
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

    #[must_use]
    pub fn get<BK>(&self, key: &BK) -> Option<&V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.find(key).map(|id| &self.store.entry(id).value)
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
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&self.hasher, &key);
        if let Some(id) = self.store.find(hash, &key) {
            return Some(std::mem::replace(&mut self.store.entry_mut(id).value, value));
        }
        self.store.push(hash, key, value);
        if let Some(capacity) = self.store.wants_growth() {
            self.store.resize(capacity);
        }
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
            self.store.resize(capacity);
        }
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    pub fn remove<BK>(&mut self, key: &BK) -> Option<V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        let id = self.find(key)?;
        Some(self.store.unlink(id).value)
    }
}

impl<K, V, S> Clone for DefaultHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        DefaultHashMap {
            store: self.store.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S1, S2> PartialEq<DefaultHashMap<K, V, S2>> for DefaultHashMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &DefaultHashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for DefaultHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: Hash, V: Hash, S> Hash for DefaultHashMap<K, V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        state.write_u64(unordered_hash(self.iter()));
    }
}

impl<K, V, S: Default> Default for DefaultHashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for DefaultHashMap<K, V, S>
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

impl<K, V, S> FromIterator<(K, V)> for DefaultHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let i = i.into_iter();
        let config = TableConfig::for_len(i.size_hint().0);
        let mut map = Self::with_config_and_hasher(config, S::default());
        for (key, value) in i {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, S> From<Vec<(K, V)>> for DefaultHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(m: Vec<(K, V)>) -> Self {
        m.into_iter().collect()
    }
}

impl<K: Debug, V: Debug, S> Debug for DefaultHashMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Render, V: Render, S> Display for DefaultHashMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_pairs(f, self.iter())
    }
}

/// An iterator over the entries of a map, in bucket order.
pub struct Iter<'a, K, V> {
    store: &'a Store<K, V>,
    ids: Ids<'a, K, V>,
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            ids: self.ids.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.ids.next().map(|id| store.entry(id).pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a DefaultHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A consuming iterator over the entries of a map, in bucket order.
pub struct ConsumingIter<K, V> {
    entries: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for ConsumingIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ConsumingIter<K, V> {}

impl<K, V> FusedIterator for ConsumingIter<K, V> {}

impl<K, V, S> IntoIterator for DefaultHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = ConsumingIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let entries: Vec<Entry<K, V>> = self.store.into_entries().collect();
        ConsumingIter {
            entries: entries.into_iter(),
        }
    }
}
