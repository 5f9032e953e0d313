use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use ordhash::{ArrayHashMap, DefaultHashMap, IntHashMap};
use std::borrow::Borrow;
use std::collections::HashMap as StdHashMap;
use std::hash::Hash;
use std::hint::black_box;
use std::iter::FromIterator;

mod utils;
use utils::*;

// Trait to abstract over different map implementations
trait BenchMap<K, V>: Clone + FromIterator<(K, V)>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn new() -> Self;
    fn insert(&mut self, k: K, v: V) -> Option<V>;
    fn remove(&mut self, k: &K) -> Option<V>;
    fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V> BenchMap<K, V> for ArrayHashMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    type Iter<'a>
        = ordhash::arrayhashmap::Iter<'a, K, V>
    where
        K: 'a,
        V: 'a;

    fn new() -> Self {
        ArrayHashMap::new()
    }

    fn insert(&mut self, k: K, v: V) -> Option<V> {
        self.insert(k, v)
    }

    fn remove(&mut self, k: &K) -> Option<V> {
        self.remove(k)
    }

    fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(k)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> BenchMap<K, V> for DefaultHashMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    type Iter<'a>
        = ordhash::defaulthashmap::Iter<'a, K, V>
    where
        K: 'a,
        V: 'a;

    fn new() -> Self {
        DefaultHashMap::new()
    }

    fn insert(&mut self, k: K, v: V) -> Option<V> {
        self.insert(k, v)
    }

    fn remove(&mut self, k: &K) -> Option<V> {
        self.remove(k)
    }

    fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(k)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> BenchMap<K, V> for StdHashMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    type Iter<'a>
        = std::collections::hash_map::Iter<'a, K, V>
    where
        K: 'a,
        V: 'a;

    fn new() -> Self {
        StdHashMap::new()
    }

    fn insert(&mut self, k: K, v: V) -> Option<V> {
        self.insert(k, v)
    }

    fn remove(&mut self, k: &K) -> Option<V> {
        self.remove(k)
    }

    fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(k)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

// Generic benchmark functions
fn bench_lookup<M, K, V>(b: &mut Bencher<'_>, size: usize)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let keys = K::generate(size);
    let values = V::generate(size);
    let order = reorder(&keys);
    let m: M = keys.into_iter().zip(values).collect();
    b.iter(|| {
        for k in &order {
            black_box(m.get(k));
        }
    })
}

fn bench_lookup_ne<M, K, V>(b: &mut Bencher<'_>, size: usize)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let keys = K::generate(size * 2);
    let values = V::generate(size);
    let order = reorder(&keys[size..]);
    let m: M = keys.into_iter().zip(values).collect();
    b.iter(|| {
        for k in &order {
            black_box(m.get(k));
        }
    })
}

fn bench_insert_mut<M, K, V>(b: &mut Bencher<'_>, size: usize)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let keys = K::generate(size);
    let values = V::generate(size);
    b.iter(|| {
        let mut m = M::new();
        for (k, v) in keys.clone().into_iter().zip(values.clone()) {
            m.insert(k, v);
        }
        m
    })
}

fn bench_remove_mut<M, K, V>(b: &mut Bencher<'_>, size: usize)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let keys = K::generate(size);
    let values = V::generate(size);
    let order = reorder(&keys);
    let map: M = keys.into_iter().zip(values).collect();
    b.iter(|| {
        let mut m = map.clone();
        for k in &order {
            m.remove(k);
        }
        m
    })
}

fn bench_iter<M, K, V>(b: &mut Bencher<'_>, size: usize)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let keys = K::generate(size);
    let values = V::generate(size);
    let m: M = keys.into_iter().zip(values).collect();
    b.iter(|| {
        for p in m.iter() {
            black_box(p);
        }
    })
}

// Positional access only makes sense for the ordered map.
fn bench_get_index(b: &mut Bencher<'_>, size: usize) {
    let keys = i64::generate(size);
    let m: ArrayHashMap<i64, i64> = keys.iter().map(|k| (*k, *k)).collect();
    let order = reorder(&(0..size).collect::<Vec<_>>());
    b.iter(|| {
        for index in &order {
            let _ = black_box(m.get_index(*index));
        }
    })
}

fn bench_remove_index_front(b: &mut Bencher<'_>, size: usize) {
    let keys = i64::generate(size);
    let map: ArrayHashMap<i64, i64> = keys.iter().map(|k| (*k, *k)).collect();
    b.iter(|| {
        let mut m = map.clone();
        while m.remove_index(0).is_ok() {}
        m
    })
}

fn bench_int_insert(b: &mut Bencher<'_>, size: usize) {
    let keys = reorder(&sequential(size));
    b.iter(|| {
        let mut m = IntHashMap::new();
        for k in &keys {
            m.insert(*k, *k);
        }
        m
    })
}

fn bench_arrayhashmap(c: &mut Criterion) {
    bench_group::<ArrayHashMap<i64, i64>, i64, i64>(c, "arrayhashmap_i64");
    bench_group::<ArrayHashMap<String, String>, String, String>(c, "arrayhashmap_str");

    let mut group = c.benchmark_group("arrayhashmap_positional");
    for size in &[100, 1000, 10000] {
        group.bench_function(format!("get_index_{}", size), |b| {
            bench_get_index(b, *size)
        });
        group.bench_function(format!("remove_index_front_{}", size), |b| {
            bench_remove_index_front(b, *size)
        });
    }
    group.finish();
}

fn bench_defaulthashmap(c: &mut Criterion) {
    bench_group::<DefaultHashMap<i64, i64>, i64, i64>(c, "defaulthashmap_i64");
    bench_group::<DefaultHashMap<String, String>, String, String>(c, "defaulthashmap_str");
}

fn bench_inthashmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("inthashmap");
    for size in &[100, 1000, 10000, 100000] {
        group.bench_function(format!("insert_mut_{}", size), |b| {
            bench_int_insert(b, *size)
        });
    }
    group.finish();
}

fn bench_stdhashmap(c: &mut Criterion) {
    bench_group::<StdHashMap<i64, i64>, i64, i64>(c, "stdhashmap_i64");
    bench_group::<StdHashMap<String, String>, String, String>(c, "stdhashmap_str");
}

// Helper function to run all benchmarks for a specific map/key/value type
fn bench_group<M, K, V>(c: &mut Criterion, group_name: &str)
where
    M: BenchMap<K, V>,
    K: TestData,
    V: TestData,
{
    let mut group = c.benchmark_group(group_name);

    for size in &[100, 1000, 10000, 100000] {
        group.bench_function(format!("lookup_{}", size), |b| {
            bench_lookup::<M, K, V>(b, *size)
        });
    }

    for size in &[10000, 100000] {
        group.bench_function(format!("lookup_ne_{}", size), |b| {
            bench_lookup_ne::<M, K, V>(b, *size)
        });
    }

    for size in &[100, 1000, 10000, 100000] {
        group.bench_function(format!("insert_mut_{}", size), |b| {
            bench_insert_mut::<M, K, V>(b, *size)
        });
    }

    for size in &[100, 1000, 10000] {
        group.bench_function(format!("remove_mut_{}", size), |b| {
            bench_remove_mut::<M, K, V>(b, *size)
        });
    }

    for size in &[1000, 10000] {
        group.bench_function(format!("iter_{}", size), |b| {
            bench_iter::<M, K, V>(b, *size)
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_arrayhashmap,
    bench_defaulthashmap,
    bench_inthashmap,
    bench_stdhashmap
);
criterion_main!(benches);
