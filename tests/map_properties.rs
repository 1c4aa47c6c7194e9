//! Property-based tests for `HashMap`.
//!
//! Every property runs an arbitrary operation sequence against both the
//! chained map and `std::collections::HashMap` and compares the outcome.

use std::collections::HashMap as StdHashMap;
use std::collections::HashSet as StdHashSet;
use std::hash::Hash;
use std::hash::Hasher;

use chain_hash::HashMap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, u16),
    Remove(u8),
    Get(u8),
    Clear,
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (any::<u8>(), any::<u16>()).prop_map(|(k, v)| MapOp::Put(k, v)),
            3 => any::<u8>().prop_map(MapOp::Remove),
            2 => any::<u8>().prop_map(MapOp::Get),
            1 => Just(MapOp::Clear),
        ],
        0..400,
    )
}

/// Key with a constant hash: every instance lands in the same chain.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Colliding(u8);

impl Hash for Colliding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        17u32.hash(state);
    }
}

proptest! {
    #[test]
    fn prop_matches_std_map(ops in map_ops_strategy(), slots in 1usize..64) {
        let mut map = HashMap::with_capacity(slots).unwrap();
        let mut reference = StdHashMap::new();

        for op in ops {
            match op {
                MapOp::Put(k, v) => {
                    prop_assert_eq!(*map.put(k, v), v);
                    reference.insert(k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), reference.remove(&k));
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(&k), reference.get(&k));
                }
                MapOp::Clear => {
                    map.clear();
                    reference.clear();
                    prop_assert!(map.is_empty());
                }
            }
            prop_assert_eq!(map.len(), reference.len());
        }

        for (k, v) in &reference {
            prop_assert_eq!(map.get(k), Some(v));
            prop_assert!(map.contains_key(k));
            prop_assert!(map.contains_value(v));
        }
    }

    #[test]
    fn prop_last_put_wins(pairs in prop::collection::vec((any::<u8>(), any::<u32>()), 0..300)) {
        let mut map = HashMap::with_capacity(1).unwrap();
        let mut last = StdHashMap::new();
        for (k, v) in pairs {
            map.put(k, v);
            last.insert(k, v);
        }

        prop_assert_eq!(map.len(), last.len());
        for (k, v) in &last {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }

    #[test]
    fn prop_round_trip_any_size(
        seed in prop::collection::vec((any::<u16>(), any::<u16>()), 0..200),
        key in any::<u16>(),
        value in any::<u16>(),
        slots in 1usize..8,
    ) {
        let mut map = HashMap::with_capacity(slots).unwrap();
        map.extend(seed);

        map.put(key, value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }

    #[test]
    fn prop_remove_missing_keeps_size(keys in prop::collection::hash_set(0u8..128, 0..100), missing in 128u8..=255) {
        let mut map: HashMap<u8, u8> = keys.iter().map(|&k| (k, k)).collect();
        let before = map.len();

        prop_assert_eq!(map.remove(&missing), None);
        prop_assert_eq!(map.len(), before);
    }

    #[test]
    fn prop_colliding_keys_behave_like_distinct(
        keys in prop::collection::hash_set(any::<u8>(), 1..40),
        remove_mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let mut map = HashMap::new();
        for &k in &keys {
            map.put(Colliding(k), k);
        }
        prop_assert_eq!(map.len(), keys.len());

        let mut kept = StdHashSet::new();
        for (i, &k) in keys.iter().enumerate() {
            if remove_mask[i] {
                prop_assert_eq!(map.remove(&Colliding(k)), Some(k));
            } else {
                kept.insert(k);
            }
        }

        prop_assert_eq!(map.len(), kept.len());
        for &k in &keys {
            let expected = if kept.contains(&k) { Some(&k) } else { None };
            prop_assert_eq!(map.get(&Colliding(k)), expected);
        }
    }

    #[test]
    fn prop_views_sizes(pairs in prop::collection::vec((any::<u8>(), 0u8..8), 0..200)) {
        let map: HashMap<u8, u8> = pairs.into_iter().collect();

        let distinct_values: StdHashSet<u8> = map.iter().map(|(_, v)| *v).collect();
        prop_assert_eq!(map.keys().len(), map.len());
        prop_assert_eq!(map.entries().len(), map.len());
        prop_assert_eq!(map.values().len(), distinct_values.len());
        prop_assert!(map.values().len() <= map.len());
    }

    #[test]
    fn prop_put_all_copies_everything(keys in prop::collection::hash_set(any::<u16>(), 0..200)) {
        let source: HashMap<u16, u16> = keys.iter().map(|&k| (k, k.wrapping_mul(3))).collect();
        let mut dest = HashMap::with_capacity(1).unwrap();

        dest.put_all(&source);
        prop_assert_eq!(dest.len(), source.len());
        prop_assert_eq!(&dest, &source);
    }

    #[test]
    fn prop_slot_count_only_doubles(count in 0usize..500, slots in 1usize..50) {
        let mut map = HashMap::with_capacity(slots).unwrap();
        let mut expected_slots = slots;

        for k in 0..count {
            // Growth happens before insertion once len >= 0.7 * slots.
            if map.len() * 10 >= expected_slots * 7 {
                expected_slots *= 2;
            }
            map.put(k, ());
            prop_assert_eq!(map.slot_count(), expected_slots);
        }
    }
}

#[test]
fn three_keys_into_single_slot() {
    let mut map = HashMap::with_capacity(1).unwrap();
    map.put("K1", "1");
    map.put("K2", "2");
    map.put("K3", "3");

    assert_eq!(map.get(&"K1"), Some(&"1"));
    assert_eq!(map.get(&"K2"), Some(&"2"));
    assert_eq!(map.get(&"K3"), Some(&"3"));
    assert_eq!(map.len(), 3);
}

#[test]
fn clear_then_round_trip() {
    let mut map: HashMap<String, u32> = (0..100).map(|i| (format!("k{i}"), i)).collect();
    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());

    map.put("again".to_string(), 7);
    assert_eq!(map.get(&"again".to_string()), Some(&7));
}
