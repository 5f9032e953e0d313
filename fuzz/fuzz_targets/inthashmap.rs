#![no_main]

use std::collections::HashMap as NatMap;
use std::fmt::Debug;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordhash::IntHashMap;

#[derive(Arbitrary, Debug)]
enum Action<V> {
    Insert(i32, V),
    Remove(i32),
}

fuzz_target!(|actions: Vec<Action<u32>>| {
    let mut map = IntHashMap::new();
    let mut nat = NatMap::new();
    for action in actions {
        match action {
            Action::Insert(key, value) => {
                assert_eq!(nat.insert(key, value), map.insert(key, value));
            }
            Action::Remove(key) => {
                assert_eq!(nat.remove(&key), map.remove(key));
            }
        }
        assert_eq!(nat.len(), map.len());
    }
    let mut keys = map.keys();
    keys.sort_unstable();
    let mut expected: Vec<i32> = nat.keys().copied().collect();
    expected.sort_unstable();
    assert_eq!(expected, keys);
    for (key, value) in map.iter() {
        assert_eq!(nat.get(&key), Some(value));
    }
});
