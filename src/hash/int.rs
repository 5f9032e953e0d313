// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A hash map keyed by `i32`.
//!
//! Keys are stored unboxed and hashed by identity, so there's no
//! [`BuildHasher`][std::hash::BuildHasher] involved at all. The map
//! keeps no order log: [`keys`][IntHashMap::keys] and
//! [`iter`][IntHashMap::iter] walk the bucket array, and the order you
//! get out has nothing to do with the order keys went in.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{FromIterator, FusedIterator};

use crate::config::TableConfig;
use crate::error::Result;
use crate::nodes::bucket::{HashBits, Ids, Store};
use crate::render::{render_pairs, Render};

#[inline]
fn int_hash(key: i32) -> HashBits {
    HashBits::from(key as u32 & 0x7FFF_FFFF)
}

/// A hash map with `i32` keys.
#[derive(Clone)]
pub struct IntHashMap<V> {
    store: Store<i32, V>,
}

impl<V> IntHashMap<V> {
    /// Construct an empty map with 16 buckets and a load factor of 0.75.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TableConfig::with_capacity(capacity))
    }

    /// Construct an empty map with the given sizing.
    ///
    /// Fails if the load factor isn't a positive, finite number.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Result<Self> {
        TableConfig::new(capacity, load_factor).map(Self::with_config)
    }

    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        IntHashMap {
            store: Store::new(&config),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
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

    #[must_use]
    pub fn contains_key(&self, key: i32) -> bool {
        self.store.find(int_hash(key), &key).is_some()
    }

    /// Time: O(n)
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    #[must_use]
    pub fn get(&self, key: i32) -> Option<&V> {
        let id = self.store.find(int_hash(key), &key)?;
        Some(&self.store.entry(id).value)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: i32) -> Option<&mut V> {
        let id = self.store.find(int_hash(key), &key)?;
        Some(&mut self.store.entry_mut(id).value)
    }

    /// Insert a key/value mapping, returning the previous value for the
    /// key if there was one.
    pub fn insert(&mut self, key: i32, value: V) -> Option<V> {
        let hash = int_hash(key);
        if let Some(id) = self.store.find(hash, &key) {
            return Some(std::mem::replace(&mut self.store.entry_mut(id).value, value));
        }
        self.store.push(hash, key, value);
        if let Some(capacity) = self.store.wants_growth() {
            self.store.resize(capacity);
        }
        None
    }

    pub fn remove(&mut self, key: i32) -> Option<V> {
        let id = self.store.find(int_hash(key), &key)?;
        Some(self.store.unlink(id).value)
    }

    /// Discard all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// A snapshot of the keys, in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ordhash::IntHashMap;
    /// let mut map = IntHashMap::new();
    /// for key in (0..10).rev() {
    ///     map.insert(key, ());
    /// }
    /// let mut keys = map.keys();
    /// keys.sort_unstable();
    /// assert_eq!((0..10).collect::<Vec<_>>(), keys);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<i32> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Get an iterator over the entries, in bucket order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            store: &self.store,
            ids: self.store.ids(),
        }
    }
}

impl<V> Default for IntHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for IntHashMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq> Eq for IntHashMap<V> {}

impl<V> Extend<(i32, V)> for IntHashMap<V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (i32, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i32, V)> for IntHashMap<V> {
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = (i32, V)>,
    {
        let i = i.into_iter();
        let mut map = Self::with_config(TableConfig::for_len(i.size_hint().0));
        map.extend(i);
        map
    }
}

impl<V: Debug> Debug for IntHashMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Render> Display for IntHashMap<V> {
    /// Render as `{k1=v1, k2=v2}` in bucket order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_pairs(f, self.store.ids().map(|id| self.store.entry(id).pair()))
    }
}

/// An iterator over the entries of an [`IntHashMap`], in bucket order.
pub struct Iter<'a, V> {
    store: &'a Store<i32, V>,
    ids: Ids<'a, i32, V>,
}

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            ids: self.ids.clone(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.ids.next().map(|id| {
            let entry = store.entry(id);
            (entry.key, &entry.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> FusedIterator for Iter<'a, V> {}
