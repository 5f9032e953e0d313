#![no_main]

use std::collections::HashMap as NatMap;
use std::fmt::Debug;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordhash::ArrayHashMap;

#[derive(Arbitrary, Debug)]
enum Action<K, V> {
    Insert(K, V),
    Remove(K),
    RemoveIndex(usize),
    Retain(K),
    Clear,
}

fuzz_target!(|actions: Vec<Action<u8, u32>>| {
    let mut map = ArrayHashMap::new();
    let mut nat = NatMap::new();
    // Keys in the order they were first inserted.
    let mut order: Vec<u8> = Vec::new();
    for action in actions {
        match action {
            Action::Insert(key, value) => {
                if nat.insert(key, value).is_none() {
                    order.push(key);
                }
                map.insert(key, value);
            }
            Action::Remove(key) => {
                assert_eq!(nat.remove(&key), map.remove(&key));
                order.retain(|k| *k != key);
            }
            Action::RemoveIndex(index) => {
                if index < order.len() {
                    let key = order.remove(index);
                    let value = nat.remove(&key);
                    assert_eq!(Ok((key, value.unwrap())), map.remove_index(index));
                } else {
                    assert!(map.remove_index(index).is_err());
                }
            }
            Action::Retain(pivot) => {
                nat.retain(|k, _| *k < pivot);
                order.retain(|k| *k < pivot);
                map.retain(|k, _| *k < pivot);
            }
            Action::Clear => {
                nat.clear();
                order.clear();
                map.clear();
            }
        }
        assert_eq!(nat.len(), map.len());
        map.assert_invariants();
    }
    assert!(map.keys().eq(order.iter()));
    for (index, key) in order.iter().enumerate() {
        assert_eq!(Some(index), map.get_index_of(key));
        assert_eq!(nat.get(key), map.get(key));
    }
    assert_eq!(map.iter().count(), nat.len());
    assert_eq!(map.into_iter().count(), nat.len());
});
