// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Index addressable views of an [`ArrayHashMap`][ArrayHashMap].
//!
//! A view mutably borrows its map, and reads straight through to the
//! map's order log on every access, so it always reflects the map's
//! current state. Removing through a view removes from the map.
//!
//! Views are walked either with their ordinary borrowing iterators, or
//! with a [`ListCursor`], which doesn't hold a borrow at all and
//! instead checks on every step that the map hasn't been structurally
//! modified behind its back.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::mem;

use crate::error::{Error, Result};
use crate::hash::map::{ArrayHashMap, Iter, Keys, Values};

/// A list shaped view of a map.
///
/// Positions are insertion order positions, so `get(0)` is always the
/// oldest entry still in the map.
pub trait ListView {
    /// What [`get`][ListView::get] lends out.
    type Item<'b>
    where
        Self: 'b;

    /// What [`remove`][ListView::remove] hands back, and what
    /// [`set`][ListView::set] takes.
    type Owned;

    /// The number of elements, always the map's current size.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at a position.
    fn get(&self, index: usize) -> Result<Self::Item<'_>>;

    /// Remove the map entry at a position.
    fn remove(&mut self, index: usize) -> Result<Self::Owned>;

    /// Replace the element at a position, returning the old one.
    ///
    /// Only the value list supports this. Everything else fails with
    /// [`Error::Unsupported`] and leaves the map alone.
    fn set(&mut self, index: usize, item: Self::Owned) -> Result<Self::Owned> {
        let _ = (index, item);
        Err(Error::Unsupported("set"))
    }

    /// The structural modification count of the underlying map.
    fn version(&self) -> u64;

    /// Get a cursor positioned before the first element.
    fn cursor(&self) -> ListCursor {
        ListCursor::new(0, self.version())
    }

    /// Get a cursor positioned before the element at `index`. `index`
    /// may equal `len()`, which leaves the cursor at the end.
    fn cursor_at(&self, index: usize) -> Result<ListCursor> {
        if index > self.len() {
            return Err(Error::out_of_bounds(index, self.len()));
        }
        Ok(ListCursor::new(index, self.version()))
    }
}

/// The map's entries as a list of key/value pairs.
pub struct EntryList<'a, K, V, S = RandomState> {
    map: &'a mut ArrayHashMap<K, V, S>,
}

/// The map's keys as a list.
pub struct KeyList<'a, K, V, S = RandomState> {
    map: &'a mut ArrayHashMap<K, V, S>,
}

/// The map's values as a list.
///
/// This is the only view which supports [`set`][ListView::set]:
/// replacing a value leaves its entry where it is.
pub struct ValueList<'a, K, V, S = RandomState> {
    map: &'a mut ArrayHashMap<K, V, S>,
}

impl<'a, K, V, S> ListView for EntryList<'a, K, V, S> {
    type Item<'b>
        = (&'b K, &'b V)
    where
        Self: 'b;
    type Owned = (K, V);

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn get(&self, index: usize) -> Result<Self::Item<'_>> {
        self.map.get_index(index)
    }

    fn remove(&mut self, index: usize) -> Result<Self::Owned> {
        self.map.remove_index(index)
    }

    fn version(&self) -> u64 {
        self.map.version()
    }
}

impl<'a, K, V, S> ListView for KeyList<'a, K, V, S> {
    type Item<'b>
        = &'b K
    where
        Self: 'b;
    type Owned = K;

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn get(&self, index: usize) -> Result<Self::Item<'_>> {
        self.map.key_at(index)
    }

    fn remove(&mut self, index: usize) -> Result<Self::Owned> {
        self.map.remove_index(index).map(|(key, _)| key)
    }

    fn version(&self) -> u64 {
        self.map.version()
    }
}

impl<'a, K, V, S> ListView for ValueList<'a, K, V, S> {
    type Item<'b>
        = &'b V
    where
        Self: 'b;
    type Owned = V;

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn get(&self, index: usize) -> Result<Self::Item<'_>> {
        self.map.value_at(index)
    }

    fn remove(&mut self, index: usize) -> Result<Self::Owned> {
        self.map.remove_index(index).map(|(_, value)| value)
    }

    fn set(&mut self, index: usize, item: V) -> Result<V> {
        let (_, value) = self.map.get_index_mut(index)?;
        Ok(mem::replace(value, item))
    }

    fn version(&self) -> u64 {
        self.map.version()
    }
}

impl<'a, K, V, S> EntryList<'a, K, V, S> {
    pub(crate) fn new(map: &'a mut ArrayHashMap<K, V, S>) -> Self {
        EntryList { map }
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }
}

impl<'a, K, V, S> EntryList<'a, K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    /// Find the position of an entry. Both the key and the value must
    /// match.
    #[must_use]
    pub fn index_of(&self, key: &K, value: &V) -> Option<usize> {
        match self.map.get(key) {
            Some(stored) if stored == value => self.map.get_index_of(key),
            _ => None,
        }
    }

    /// Keys are unique, so this is the same as
    /// [`index_of`][EntryList::index_of].
    #[must_use]
    pub fn last_index_of(&self, key: &K, value: &V) -> Option<usize> {
        self.index_of(key, value)
    }

    #[must_use]
    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.map.get(key) == Some(value)
    }

    /// Remove an entry if both its key and value match.
    pub fn remove_item(&mut self, key: &K, value: &V) -> bool {
        if !self.contains(key, value) {
            return false;
        }
        self.map.remove(key).is_some()
    }
}

impl<'a, K, V, S> KeyList<'a, K, V, S> {
    pub(crate) fn new(map: &'a mut ArrayHashMap<K, V, S>) -> Self {
        KeyList { map }
    }

    #[must_use]
    pub fn iter(&self) -> Keys<'_, K, V> {
        self.map.keys()
    }
}

impl<'a, K, V, S> KeyList<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[must_use]
    pub fn index_of<BK>(&self, key: &BK) -> Option<usize>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.map.get_index_of(key)
    }

    /// Keys are unique, so this is the same as
    /// [`index_of`][KeyList::index_of].
    #[must_use]
    pub fn last_index_of<BK>(&self, key: &BK) -> Option<usize>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.map.get_index_of(key)
    }

    #[must_use]
    pub fn contains<BK>(&self, key: &BK) -> bool
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.map.contains_key(key)
    }

    /// Remove the entry for a key, if there is one.
    pub fn remove_item<BK>(&mut self, key: &BK) -> bool
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.map.remove(key).is_some()
    }
}

impl<'a, K, V, S> ValueList<'a, K, V, S> {
    pub(crate) fn new(map: &'a mut ArrayHashMap<K, V, S>) -> Self {
        ValueList { map }
    }

    #[must_use]
    pub fn iter(&self) -> Values<'_, K, V> {
        self.map.values()
    }
}

impl<'a, K, V, S> ValueList<'a, K, V, S>
where
    V: PartialEq,
{
    /// Find the first position holding a value.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.map.values().position(|candidate| candidate == value)
    }

    /// Find the last position holding a value.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn last_index_of(&self, value: &V) -> Option<usize> {
        self.map.values().rposition(|candidate| candidate == value)
    }

    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first entry holding a value.
    pub fn remove_item(&mut self, value: &V) -> bool {
        match self.index_of(value) {
            Some(index) => self.map.remove_index(index).is_ok(),
            None => false,
        }
    }
}

/// A fail-fast, bidirectional position in a [`ListView`].
///
/// A cursor sits between two elements. [`next`][ListCursor::next] and
/// [`previous`][ListCursor::previous] step over an element and return
/// it; [`remove`][ListCursor::remove] and
/// [`set`][ListCursor::set] then act on the element last stepped over.
///
/// The cursor remembers the map's modification count when it was made.
/// If the map is changed structurally by anything other than this
/// cursor's own [`remove`][ListCursor::remove], the next step fails
/// with [`Error::ConcurrentModification`]. Replacing values doesn't
/// count as a structural change.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate ordhash;
/// # use ordhash::{Error, ListView};
/// let mut map = arrayhashmap!{"a" => 1, "b" => 2, "c" => 3};
///
/// let mut keys = map.key_list();
/// let mut cursor = keys.cursor();
/// assert_eq!(Ok(&"a"), cursor.next(&keys));
/// assert_eq!(Ok("a"), cursor.remove(&mut keys));
/// assert_eq!(Ok(&"b"), cursor.next(&keys));
///
/// map.insert("d", 4);
/// let keys = map.key_list();
/// assert!(matches!(cursor.next(&keys), Err(Error::ConcurrentModification { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListCursor {
    cursor: usize,
    last: Option<usize>,
    expected: u64,
}

impl ListCursor {
    pub(crate) fn new(cursor: usize, expected: u64) -> Self {
        ListCursor {
            cursor,
            last: None,
            expected,
        }
    }

    fn check<L: ListView + ?Sized>(&self, list: &L) -> Result<()> {
        let actual = list.version();
        if actual == self.expected {
            Ok(())
        } else {
            Err(Error::ConcurrentModification {
                expected: self.expected,
                actual,
            })
        }
    }

    #[must_use]
    pub fn has_next<L: ListView + ?Sized>(&self, list: &L) -> bool {
        self.cursor < list.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// The position [`next`][ListCursor::next] would return.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// The position [`previous`][ListCursor::previous] would return,
    /// or `None` at the start.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Step forwards over an element and return it.
    pub fn next<'l, L: ListView + ?Sized>(&mut self, list: &'l L) -> Result<L::Item<'l>> {
        self.check(list)?;
        if self.cursor >= list.len() {
            return Err(Error::NoSuchElement);
        }
        let item = list.get(self.cursor)?;
        self.last = Some(self.cursor);
        self.cursor += 1;
        Ok(item)
    }

    /// Step backwards over an element and return it.
    pub fn previous<'l, L: ListView + ?Sized>(&mut self, list: &'l L) -> Result<L::Item<'l>> {
        self.check(list)?;
        let index = self.cursor.checked_sub(1).ok_or(Error::NoSuchElement)?;
        let item = list.get(index)?;
        self.cursor = index;
        self.last = Some(index);
        Ok(item)
    }

    /// Remove the element last returned by [`next`][ListCursor::next]
    /// or [`previous`][ListCursor::previous].
    ///
    /// The cursor adopts the map's new modification count, so it can
    /// keep going afterwards.
    pub fn remove<L: ListView + ?Sized>(&mut self, list: &mut L) -> Result<L::Owned> {
        let last = self.last.ok_or(Error::IllegalState("remove"))?;
        self.check(list)?;
        let removed = list.remove(last)?;
        if last < self.cursor {
            self.cursor -= 1;
        }
        self.last = None;
        self.expected = list.version();
        Ok(removed)
    }

    /// Replace the element last returned by [`next`][ListCursor::next]
    /// or [`previous`][ListCursor::previous].
    pub fn set<L: ListView + ?Sized>(&mut self, list: &mut L, item: L::Owned) -> Result<L::Owned> {
        let last = self.last.ok_or(Error::IllegalState("set"))?;
        self.check(list)?;
        list.set(last, item)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ::proptest::{collection, num::i16, proptest};
    use pretty_assertions::assert_eq;

    fn letters() -> ArrayHashMap<&'static str, &'static str> {
        arrayhashmap! {"aaa" => "111", "bbb" => "222", "ccc" => "333"}
    }

    fn nullable() -> ArrayHashMap<Option<&'static str>, Option<&'static str>> {
        let mut map = ArrayHashMap::new();
        map.insert(None, Some("111"));
        map.insert(Some("aaa"), None);
        map
    }

    #[test]
    fn entry_list() {
        let mut map = letters();
        let mut entries = map.entry_list();
        assert_eq!(3, entries.len());
        assert_eq!(Ok((&"bbb", &"222")), entries.get(1));
        assert_eq!(Some(1), entries.index_of(&"bbb", &"222"));
        assert_eq!(None, entries.index_of(&"bbb", &"333"));
        assert_eq!(Some(2), entries.last_index_of(&"ccc", &"333"));
        assert!(entries.contains(&"aaa", &"111"));
        assert!(!entries.remove_item(&"aaa", &"222"));
        assert_eq!(
            Err(Error::Unsupported("set")),
            entries.set(0, ("zzz", "999"))
        );
        assert_eq!(Ok(("aaa", "111")), entries.remove(0));
        assert!(entries.remove_item(&"ccc", &"333"));
        assert_eq!(1, entries.len());
        assert_eq!(vec![(&"bbb", &"222")], entries.iter().collect::<Vec<_>>());
        assert_eq!(1, map.len());
        assert_eq!(Some(&"222"), map.get("bbb"));
    }

    #[test]
    fn key_list() {
        let mut map = nullable();
        let mut keys = map.key_list();
        assert_eq!(Ok(&None), keys.get(0));
        assert_eq!(Ok(&Some("aaa")), keys.get(1));
        assert_eq!(Some(0), keys.index_of(&None));
        assert_eq!(Some(1), keys.last_index_of(&Some("aaa")));
        assert!(keys.contains(&None));
        assert_eq!(Err(Error::Unsupported("set")), keys.set(0, Some("x")));
        assert_eq!(Err(Error::out_of_bounds(2, 2)), keys.get(2));
        assert_eq!(Err(Error::out_of_bounds(2, 2)), keys.remove(2));
        assert_eq!(Ok(None), keys.remove(0));
        assert!(!keys.remove_item(&None));
        assert_eq!(vec![&Some("aaa")], keys.iter().collect::<Vec<_>>());
        assert!(!map.contains_key(&None));
    }

    #[test]
    fn value_list() {
        let mut map = letters();
        map.insert("ddd", "111");
        let mut values = map.value_list();
        assert_eq!(Some(0), values.index_of(&"111"));
        assert_eq!(Some(3), values.last_index_of(&"111"));
        assert_eq!(None, values.index_of(&"999"));
        assert_eq!(Ok("222"), values.set(1, "999"));
        assert_eq!(Ok(&"999"), values.get(1));
        assert_eq!(Err(Error::out_of_bounds(4, 4)), values.set(4, "x"));
        assert!(values.remove_item(&"111"));
        assert_eq!(vec![&"999", &"333", &"111"], values.iter().collect::<Vec<_>>());
        assert_eq!(
            vec!["bbb", "ccc", "ddd"],
            map.keys().cloned().collect::<Vec<_>>()
        );
        assert_eq!(Some(&"999"), map.get("bbb"));
    }

    #[test]
    fn value_list_with_nulls() {
        let mut map = nullable();
        let values = map.value_list();
        assert_eq!(Ok(&Some("111")), values.get(0));
        assert_eq!(Ok(&None), values.get(1));
        assert_eq!(Some(1), values.index_of(&None));
        assert!(values.contains(&Some("111")));
    }

    #[test]
    fn cursor_walks_both_ways() {
        let mut map = letters();
        let keys = map.key_list();
        let mut cursor = keys.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(None, cursor.previous_index());
        assert_eq!(Err(Error::NoSuchElement), cursor.previous(&keys));
        let mut seen = Vec::new();
        while cursor.has_next(&keys) {
            seen.push(*cursor.next(&keys).unwrap());
        }
        assert_eq!(vec!["aaa", "bbb", "ccc"], seen);
        assert_eq!(Err(Error::NoSuchElement), cursor.next(&keys));
        assert_eq!(3, cursor.next_index());
        assert_eq!(Some(2), cursor.previous_index());
        assert_eq!(Ok(&"ccc"), cursor.previous(&keys));
        assert_eq!(Ok(&"bbb"), cursor.previous(&keys));
        assert_eq!(1, cursor.next_index());

        let mut cursor = keys.cursor_at(3).unwrap();
        assert!(!cursor.has_next(&keys));
        assert_eq!(Ok(&"ccc"), cursor.previous(&keys));
        assert_eq!(Err(Error::out_of_bounds(4, 3)), keys.cursor_at(4));
    }

    #[test]
    fn cursor_fails_fast() {
        let mut map = letters();
        let mut cursor = map.entry_list().cursor();
        {
            let entries = map.entry_list();
            assert_eq!(Ok((&"aaa", &"111")), cursor.next(&entries));
        }
        map.insert("ddd", "444");
        let entries = map.entry_list();
        assert_eq!(
            Err(Error::ConcurrentModification {
                expected: 3,
                actual: 4
            }),
            cursor.next(&entries)
        );
        assert!(cursor.previous(&entries).is_err());

        let mut cursor = entries.cursor();
        map.remove("ddd");
        let mut entries = map.entry_list();
        assert!(matches!(
            cursor.next(&entries),
            Err(Error::ConcurrentModification { .. })
        ));
        assert!(matches!(
            cursor.remove(&mut entries),
            Err(Error::IllegalState(_))
        ));
        assert_eq!(3, entries.len());
    }

    #[test]
    fn cursor_survives_value_replacement() {
        let mut map = letters();
        let mut cursor = map.value_list().cursor();
        map.insert("bbb", "replaced");
        let values = map.value_list();
        assert_eq!(Ok(&"111"), cursor.next(&values));
        assert_eq!(Ok(&"replaced"), cursor.next(&values));
    }

    #[test]
    fn cursor_remove() {
        let mut map: ArrayHashMap<i32, i32> = (0..10).map(|i| (i, i * 10)).collect();
        let mut keys = map.key_list();
        let mut cursor = keys.cursor();
        assert_eq!(Err(Error::IllegalState("remove")), cursor.remove(&mut keys));
        while cursor.has_next(&keys) {
            let key = *cursor.next(&keys).unwrap();
            if key % 2 == 0 {
                assert_eq!(Ok(key), cursor.remove(&mut keys));
                assert_eq!(Err(Error::IllegalState("remove")), cursor.remove(&mut keys));
            }
        }
        assert_eq!(5, keys.len());
        assert_eq!(Ok(&9), cursor.previous(&keys));
        assert_eq!(Ok(9), cursor.remove(&mut keys));
        assert_eq!(4, cursor.next_index());
        assert_eq!(Ok(&7), cursor.previous(&keys));
        assert_eq!(vec![1, 3, 5, 7], map.keys().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn cursor_set() {
        let mut map = letters();
        let mut values = map.value_list();
        let mut cursor = values.cursor();
        assert_eq!(Err(Error::IllegalState("set")), cursor.set(&mut values, "x"));
        cursor.next(&values).unwrap();
        cursor.next(&values).unwrap();
        assert_eq!(Ok("222"), cursor.set(&mut values, "x"));
        assert_eq!(Ok(&"333"), cursor.next(&values));

        let mut keys = map.key_list();
        let mut cursor = keys.cursor();
        cursor.next(&keys).unwrap();
        assert_eq!(Err(Error::Unsupported("set")), cursor.set(&mut keys, "zzz"));
        assert_eq!(vec!["111", "x", "333"], map.values().cloned().collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn views_follow_insertion_order(ref keys in collection::vec(i16::ANY, 0..200)) {
            let mut map = ArrayHashMap::new();
            let mut expected = Vec::new();
            for key in keys {
                if map.insert(*key, i32::from(*key) + 1).is_none() {
                    expected.push(*key);
                }
            }
            let entries = map.entry_list();
            for (index, key) in expected.iter().enumerate() {
                assert_eq!(Ok((key, &(i32::from(*key) + 1))), entries.get(index));
            }
            let keys = map.key_list();
            let mut cursor = keys.cursor();
            for key in &expected {
                assert_eq!(Ok(key), cursor.next(&keys));
            }
            assert!(!cursor.has_next(&keys));
        }
    }
}
