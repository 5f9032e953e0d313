// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::slice::Iter as SliceIter;

use crate::error::{check_index, Result};
use crate::nodes::bucket::EntryId;

/// Live entries in insertion order.
///
/// Position `i` holds the i-th inserted entry that's still present.
/// Removal shifts everything after it down by one, so indices are
/// always dense. The log doesn't care how the bucket array is laid
/// out and is never touched by a resize.
#[derive(Clone, Debug, Default)]
pub(crate) struct OrderLog {
    ids: Vec<EntryId>,
}

impl OrderLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        OrderLog {
            ids: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub(crate) fn append(&mut self, id: EntryId) {
        self.ids.push(id);
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Result<EntryId> {
        check_index(index, self.ids.len())?;
        Ok(self.ids[index])
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<EntryId> {
        check_index(index, self.ids.len())?;
        Ok(self.ids.remove(index))
    }

    pub(crate) fn position(&self, id: EntryId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Remove an entry by identity, returning where it was.
    pub(crate) fn remove_id(&mut self, id: EntryId) -> Option<usize> {
        let index = self.position(id)?;
        self.ids.remove(index);
        Some(index)
    }

    pub(crate) fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&EntryId) -> bool,
    {
        self.ids.retain(f);
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[EntryId] {
        &self.ids
    }

    pub(crate) fn iter(&self) -> SliceIter<'_, EntryId> {
        self.ids.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<EntryId> {
        self.ids
    }
}
