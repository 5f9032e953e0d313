// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{ArrayHashMap, ArrayHashSet, DefaultHashMap, IntHashMap};
use ::quickcheck::{Arbitrary, Gen};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

impl<K, V, S> Arbitrary for ArrayHashMap<K, V, S>
where
    K: Hash + Eq + Arbitrary + Sync,
    V: Arbitrary + Sync,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        ArrayHashMap::from(Vec::<(K, V)>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let pairs: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Box::new(pairs.shrink().map(ArrayHashMap::from))
    }
}

impl<A, S> Arbitrary for ArrayHashSet<A, S>
where
    A: Hash + Eq + Arbitrary + Sync,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        ArrayHashSet::from_iter(Vec::<A>::arbitrary(g))
    }
}

impl<K, V, S> Arbitrary for DefaultHashMap<K, V, S>
where
    K: Hash + Eq + Arbitrary + Sync,
    V: Arbitrary + Sync,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        DefaultHashMap::from(Vec::<(K, V)>::arbitrary(g))
    }
}

impl<V: Arbitrary + Sync> Arbitrary for IntHashMap<V> {
    fn arbitrary(g: &mut Gen) -> Self {
        IntHashMap::from_iter(Vec::<(i32, V)>::arbitrary(g))
    }
}
