// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::config::{threshold_for, TableConfig, MAXIMUM_CAPACITY};

pub(crate) type HashBits = u64;

pub(crate) fn hash_key<K: Hash + ?Sized, S: BuildHasher>(bh: &S, key: &K) -> HashBits {
    bh.hash_one(key)
}

#[inline]
fn index_for(hash: HashBits, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (hash as usize) & (capacity - 1)
}

/// A stable handle to an entry slot. Stays valid until the entry is
/// unlinked, regardless of how often the bucket array is resized.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct EntryId(usize);

impl EntryId {
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    hash: HashBits,
    next: Option<EntryId>,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }
}

/// A bucket array of singly linked chains.
///
/// Entries live in a slab; chains and anything layered on top (like
/// the insertion order log) refer to them by [`EntryId`]. The store
/// knows nothing about hashers: callers hand it precomputed hashes.
///
/// Growth is left to the caller, because only the caller knows which
/// traversal order to re-link entries in.
#[derive(Clone)]
pub(crate) struct Store<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
    buckets: Vec<Option<EntryId>>,
    len: usize,
    threshold: usize,
    load_factor: f32,
}

impl<K, V> Store<K, V> {
    pub(crate) fn new(config: &TableConfig) -> Self {
        Store {
            slots: Vec::new(),
            free: Vec::new(),
            buckets: vec![None; config.capacity()],
            len: 0,
            threshold: config.threshold(),
            load_factor: config.load_factor(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub(crate) fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub(crate) fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// The capacity the table should grow to, if the last insertion
    /// pushed it over its threshold. Each such insertion doubles the
    /// table once, so a load factor below 0.5 can leave it above its
    /// threshold until later insertions catch up.
    pub(crate) fn wants_growth(&self) -> Option<usize> {
        let capacity = self.capacity();
        (self.len > self.threshold && capacity < MAXIMUM_CAPACITY)
            .then_some(capacity << 1)
    }

    /// The smallest capacity whose threshold holds `len` entries, if
    /// that's more than the table has now.
    pub(crate) fn wants_room(&self, len: usize) -> Option<usize> {
        let mut capacity = self.capacity();
        while len > threshold_for(capacity, self.load_factor) && capacity < MAXIMUM_CAPACITY {
            capacity <<= 1;
        }
        (capacity != self.capacity()).then_some(capacity)
    }

    /// The capacity a batch of `count` insertions should start from.
    /// Only batches at least as large as the threshold pre-grow, to a
    /// power of two of at least `count / load_factor + 1`.
    pub(crate) fn wants_reserve(&self, count: usize) -> Option<usize> {
        if count < self.threshold {
            return None;
        }
        let wanted = ((count as f32 / self.load_factor) as usize + 1).min(MAXIMUM_CAPACITY);
        let mut capacity = self.capacity();
        while capacity < wanted {
            capacity <<= 1;
        }
        (capacity != self.capacity()).then_some(capacity)
    }

    #[inline]
    pub(crate) fn entry(&self, id: EntryId) -> &Entry<K, V> {
        match &self.slots[id.0] {
            Some(entry) => entry,
            None => panic!("nodes::bucket::Store::entry: dangling entry id"),
        }
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, id: EntryId) -> &mut Entry<K, V> {
        match &mut self.slots[id.0] {
            Some(entry) => entry,
            None => panic!("nodes::bucket::Store::entry_mut: dangling entry id"),
        }
    }

    pub(crate) fn find<Q>(&self, hash: HashBits, key: &Q) -> Option<EntryId>
    where
        Q: Eq + ?Sized,
        K: Borrow<Q>,
    {
        let mut cursor = self.buckets[index_for(hash, self.capacity())];
        while let Some(id) = cursor {
            let entry = self.entry(id);
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(id);
            }
            cursor = entry.next;
        }
        None
    }

    /// Link a new entry at the head of its chain. The caller has
    /// already checked that the key isn't present.
    pub(crate) fn push(&mut self, hash: HashBits, key: K, value: V) -> EntryId {
        let index = index_for(hash, self.capacity());
        let entry = Entry {
            key,
            value,
            hash,
            next: self.buckets[index],
        };
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                EntryId(slot)
            }
            None => {
                self.slots.push(Some(entry));
                EntryId(self.slots.len() - 1)
            }
        };
        self.buckets[index] = Some(id);
        self.len += 1;
        id
    }

    /// Splice an entry out of its chain and release its slot.
    pub(crate) fn unlink(&mut self, id: EntryId) -> Entry<K, V> {
        let (hash, next) = {
            let entry = self.entry(id);
            (entry.hash, entry.next)
        };
        let index = index_for(hash, self.capacity());
        if self.buckets[index] == Some(id) {
            self.buckets[index] = next;
        } else {
            let mut cursor = self.buckets[index];
            while let Some(prev) = cursor {
                let prev_entry = self.entry_mut(prev);
                if prev_entry.next == Some(id) {
                    prev_entry.next = next;
                    break;
                }
                cursor = prev_entry.next;
            }
        }
        let entry = match self.slots[id.0].take() {
            Some(entry) => entry,
            None => panic!("nodes::bucket::Store::unlink: dangling entry id"),
        };
        self.free.push(id.0);
        self.len -= 1;
        entry
    }

    /// Rebuild the chains for a new bucket array, linking entries in
    /// the order given.
    pub(crate) fn relink<I>(&mut self, new_capacity: usize, ids: I)
    where
        I: IntoIterator<Item = EntryId>,
    {
        debug_assert!(new_capacity.is_power_of_two());
        let old_capacity = self.capacity();
        let mut buckets = vec![None; new_capacity];
        for id in ids {
            let entry = self.entry_mut(id);
            let index = index_for(entry.hash, new_capacity);
            entry.next = buckets[index];
            buckets[index] = Some(id);
        }
        self.buckets = buckets;
        self.threshold = threshold_for(new_capacity, self.load_factor);
        debug!(
            old_capacity,
            new_capacity,
            threshold = self.threshold,
            len = self.len,
            "resized hash table"
        );
    }

    /// Rebuild the chains by walking the current bucket array.
    pub(crate) fn resize(&mut self, new_capacity: usize) {
        let ids: Vec<EntryId> = self.ids().collect();
        self.relink(new_capacity, ids);
    }

    pub(crate) fn clear(&mut self) {
        trace!(len = self.len, capacity = self.capacity(), "clearing hash table");
        self.slots.clear();
        self.free.clear();
        self.buckets.iter_mut().for_each(|head| *head = None);
        self.len = 0;
    }

    /// Every live entry id in bucket order.
    pub(crate) fn ids(&self) -> Ids<'_, K, V> {
        Ids {
            store: self,
            bucket: 0,
            next: None,
            remaining: self.len,
        }
    }

    /// Mutable references to every slot, indexed by slot number.
    pub(crate) fn slots_mut(&mut self) -> Vec<Option<&mut Entry<K, V>>> {
        self.slots.iter_mut().map(Option::as_mut).collect()
    }

    /// Give up the slab, for consuming iteration.
    pub(crate) fn into_slots(mut self) -> Vec<Option<Entry<K, V>>> {
        mem::take(&mut self.slots)
    }

    /// Consume the store, yielding entries in bucket order.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = Entry<K, V>> {
        let ids: Vec<EntryId> = self.ids().collect();
        let mut slots = self.into_slots();
        ids.into_iter().filter_map(move |id| slots[id.0].take())
    }

    #[cfg(test)]
    pub(crate) fn chain_len(&self, bucket: usize) -> usize {
        let mut count = 0;
        let mut cursor = self.buckets[bucket];
        while let Some(id) = cursor {
            count += 1;
            cursor = self.entry(id).next;
        }
        count
    }
}

/// Walks the bucket array, yielding the ids of each chain in turn.
pub(crate) struct Ids<'a, K, V> {
    store: &'a Store<K, V>,
    bucket: usize,
    next: Option<EntryId>,
    remaining: usize,
}

impl<'a, K, V> Clone for Ids<'a, K, V> {
    fn clone(&self) -> Self {
        Ids {
            store: self.store,
            bucket: self.bucket,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Ids<'a, K, V> {
    type Item = EntryId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next.is_none() {
            if self.bucket >= self.store.buckets.len() {
                return None;
            }
            self.next = self.store.buckets[self.bucket];
            self.bucket += 1;
        }
        let id = self.next?;
        self.next = self.store.entry(id).next;
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Ids<'a, K, V> {}

impl<'a, K, V> FusedIterator for Ids<'a, K, V> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::LolHasher;
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasherDefault;

    fn new_store(capacity: usize, load_factor: f32) -> Store<u32, u32> {
        Store::new(&TableConfig::new(capacity, load_factor).unwrap())
    }

    #[test]
    fn push_find_unlink() {
        let hasher = RandomState::new();
        let mut store = new_store(4, 0.75);
        let mut ids = Vec::new();
        for i in 0..3u32 {
            let hash = hash_key(&hasher, &i);
            assert_eq!(None, store.find(hash, &i));
            ids.push(store.push(hash, i, i * 10));
        }
        assert_eq!(3, store.len());
        for i in 0..3u32 {
            let id = store.find(hash_key(&hasher, &i), &i).unwrap();
            assert_eq!(i * 10, store.entry(id).value);
        }
        let removed = store.unlink(ids[1]);
        assert_eq!((1, 10), removed.into_pair());
        assert_eq!(None, store.find(hash_key(&hasher, &1u32), &1));
        assert_eq!(2, store.len());

        // The freed slot gets reused.
        let id = store.push(hash_key(&hasher, &7u32), 7, 70);
        assert_eq!(ids[1], id);
    }

    #[test]
    fn colliding_chains() {
        let hasher = BuildHasherDefault::<LolHasher>::default();
        let mut store = new_store(1, 100.0);
        let ids: Vec<_> = (0..20u32)
            .map(|i| store.push(hash_key(&hasher, &i), i, i))
            .collect();
        assert_eq!(20, store.chain_len(0));
        // Unlink from the middle, the head and the tail of the chain.
        for &index in &[10, 19, 0] {
            let entry = store.unlink(ids[index]);
            assert_eq!(index as u32, entry.key);
        }
        assert_eq!(17, store.chain_len(0));
        for i in (1..19u32).filter(|i| *i != 10) {
            assert!(store.find(hash_key(&hasher, &i), &i).is_some());
        }
    }

    #[test]
    fn growth_policy() {
        let mut store = new_store(0, 0.75);
        assert_eq!((1, 0), (store.capacity(), store.threshold()));
        store.push(0, 0, 0);
        assert_eq!(Some(2), store.wants_growth());
        store.resize(2);
        assert_eq!((2, 1), (store.capacity(), store.threshold()));
        assert_eq!(None, store.wants_growth());

        // A tiny load factor still only doubles once per insertion.
        let mut store = new_store(1, 1e-6);
        store.push(0, 0, 0);
        assert_eq!(Some(2), store.wants_growth());
        store.resize(2);
        assert_eq!(Some(4), store.wants_growth());
    }

    #[test]
    fn resize_keeps_entries() {
        let hasher = RandomState::new();
        let mut store = new_store(2, 0.75);
        for i in 0..100u32 {
            store.push(hash_key(&hasher, &i), i, i);
            if let Some(capacity) = store.wants_growth() {
                store.resize(capacity);
            }
            assert!(store.len() <= store.threshold());
        }
        assert_eq!(256, store.capacity());
        assert_eq!(100, store.ids().count());
        for i in 0..100u32 {
            assert!(store.find(hash_key(&hasher, &i), &i).is_some());
        }
    }

    #[test]
    fn reserve() {
        let store = new_store(16, 0.75);
        assert_eq!(None, store.wants_reserve(3));
        assert_eq!(Some(256), store.wants_reserve(100));
    }

    #[test]
    fn room_counts_from_len() {
        let mut store = new_store(16, 0.75);
        assert_eq!(None, store.wants_room(12));
        for i in 0..12u32 {
            store.push(u64::from(i), i, i);
        }
        assert_eq!(Some(32), store.wants_room(23));
        assert_eq!(Some(64), store.wants_room(25));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut store = new_store(4, 0.75);
        store.push(1, 1, 1);
        store.resize(8);
        store.clear();
        assert_eq!(0, store.len());
        assert_eq!(8, store.capacity());
        assert_eq!(0, store.ids().count());
    }
}
