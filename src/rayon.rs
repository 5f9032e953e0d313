// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parallel iterators.
//!
//! These are only available when using the `rayon` feature flag.
//!
//! The iterators are indexed, and split along the order log, so
//! collecting one into a `Vec` gives the entries in insertion order.

use ::rayon::iter::plumbing::{bridge, Consumer, Producer, ProducerCallback, UnindexedConsumer};
use ::rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::hash::map::{ArrayHashMap, Iter};
use crate::hash::set::ArrayHashSet;

impl<'a, K, V, S> IntoParallelRefIterator<'a> for ArrayHashMap<K, V, S>
where
    K: Send + Sync + 'a,
    V: Send + Sync + 'a,
    S: Sync,
{
    type Item = (&'a K, &'a V);
    type Iter = ParIter<'a, K, V>;

    fn par_iter(&'a self) -> Self::Iter {
        ParIter { iter: self.iter() }
    }
}

impl<'a, A, S> IntoParallelRefIterator<'a> for ArrayHashSet<A, S>
where
    A: Send + Sync + 'a,
    S: Sync,
{
    type Item = &'a A;
    type Iter = ::rayon::iter::Map<ParIter<'a, A, ()>, fn((&'a A, &'a ())) -> &'a A>;

    fn par_iter(&'a self) -> Self::Iter {
        let first: fn((&'a A, &'a ())) -> &'a A = |(a, _)| a;
        ParIter {
            iter: self.map_ref().iter(),
        }
        .map(first)
    }
}

/// A parallel iterator for [`ArrayHashMap`].
pub struct ParIter<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> ParallelIterator for ParIter<'a, K, V>
where
    K: Send + Sync + 'a,
    V: Send + Sync + 'a,
{
    type Item = (&'a K, &'a V);

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn opt_len(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

impl<'a, K, V> IndexedParallelIterator for ParIter<'a, K, V>
where
    K: Send + Sync + 'a,
    V: Send + Sync + 'a,
{
    fn drive<C>(self, consumer: C) -> C::Result
    where
        C: Consumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn len(&self) -> usize {
        self.iter.len()
    }

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<Self::Item>,
    {
        callback.callback(EntryProducer { iter: self.iter })
    }
}

struct EntryProducer<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Producer for EntryProducer<'a, K, V>
where
    K: Send + Sync + 'a,
    V: Send + Sync + 'a,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter
    }

    fn split_at(self, index: usize) -> (Self, Self) {
        let (left, right) = self.iter.split_at(index);
        (EntryProducer { iter: left }, EntryProducer { iter: right })
    }
}

#[cfg(test)]
mod test {
    use crate::proptest::{array_hash_map, array_hash_set};
    use ::proptest::num::i32;
    use ::proptest::proptest;
    use ::rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

    proptest! {
        #[test]
        fn par_iter(ref input in array_hash_map(i32::ANY, i32::ANY, 0..10000)) {
            assert_eq!(input.values().max(), input.par_iter().map(|(_, v)| v).max());
            assert_eq!(input.len(), input.par_iter().len());
        }

        #[test]
        fn par_iter_keeps_order(ref input in array_hash_map(i32::ANY, i32::ANY, 0..10000)) {
            let collected: Vec<_> = input.par_iter().collect();
            assert_eq!(input.iter().collect::<Vec<_>>(), collected);
        }

        #[test]
        fn par_iter_set(ref input in array_hash_set(i32::ANY, 0..10000)) {
            let collected: Vec<_> = input.par_iter().cloned().collect();
            assert_eq!(input.iter().cloned().collect::<Vec<_>>(), collected);
        }
    }
}
