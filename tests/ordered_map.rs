use std::collections::BTreeMap;

use arena_maps::{Error, OrderedMap};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Keys from a range smaller than `TEST_SIZE` so that operations collide.
fn key_strategy() -> impl Strategy<Value = i64> {
    -5_000i64..5_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ValueOf(i64),
    ContainsKey(i64),
    GetOrInsertDefault(i64),
    FirstKeyValue,
    LastKeyValue,
    RemoveFront,
    RemoveBack,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        8 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        4 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        2 => key_strategy().prop_map(MapOp::ValueOf),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        2 => key_strategy().prop_map(MapOp::GetOrInsertDefault),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::RemoveFront),
        1 => Just(MapOp::RemoveBack),
    ]
}

/// Collects the map through a cursor walk from the front.
fn walk_forward(map: &OrderedMap<i64, i64>) -> Vec<(i64, i64)> {
    let mut out = Vec::with_capacity(map.len());
    let mut cursor = map.cursor_front();
    while let Ok((k, v)) = cursor.current() {
        out.push((*k, *v));
        cursor.move_next().unwrap();
    }
    assert_eq!(cursor.move_next(), Err(Error::InvalidPosition));
    out
}

// ─── Core operations against BTreeMap ────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderedMap and BTreeMap and
    /// asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = OrderedMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(*k, *v), bt_map.insert(*k, *v), "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let result = map.remove(k);
                    match bt_map.remove(k) {
                        Some(v) => prop_assert_eq!(result, Ok(v), "remove({})", k),
                        None => prop_assert_eq!(result, Err(Error::KeyNotFound), "remove({})", k),
                    }
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(k), bt_map.get(k), "get({})", k);
                }
                MapOp::ValueOf(k) => {
                    prop_assert_eq!(map.value_of(k).ok(), bt_map.get(k), "value_of({})", k);
                    prop_assert_eq!(map.find(k).is_end(), !bt_map.contains_key(k), "find({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::GetOrInsertDefault(k) => {
                    let value = *map.get_or_insert_default(*k);
                    prop_assert_eq!(value, *bt_map.entry(*k).or_default(), "get_or_insert_default({})", k);
                }
                MapOp::FirstKeyValue => {
                    prop_assert_eq!(map.first_key_value(), bt_map.first_key_value(), "first_key_value");
                }
                MapOp::LastKeyValue => {
                    prop_assert_eq!(map.last_key_value(), bt_map.last_key_value(), "last_key_value");
                }
                MapOp::RemoveFront => {
                    let result = map.cursor_front_mut().remove().ok();
                    prop_assert_eq!(result, bt_map.pop_first(), "remove at front");
                }
                MapOp::RemoveBack => {
                    let mut cursor = map.cursor_end_mut();
                    let result = match cursor.move_prev() {
                        Ok(()) => cursor.remove().ok(),
                        Err(_) => None,
                    };
                    prop_assert_eq!(result, bt_map.pop_last(), "remove at back");
                }
            }
            prop_assert_eq!(map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
        }

        let bt_items: Vec<_> = bt_map.into_iter().collect();
        prop_assert_eq!(walk_forward(&map), bt_items);
    }

    /// Tests that every iterator visits entries in BTreeMap order.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = OrderedMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        let items: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&items, &bt_items, "iter() mismatch");

        let rev: Vec<_> = map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let bt_rev: Vec<_> = bt_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rev, &bt_rev, "iter().rev() mismatch");

        let keys: Vec<_> = map.keys().copied().collect();
        let bt_keys: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&keys, &bt_keys, "keys() mismatch");

        let vals: Vec<_> = map.values().copied().collect();
        let bt_vals: Vec<_> = bt_map.values().copied().collect();
        prop_assert_eq!(&vals, &bt_vals, "values() mismatch");

        let into: Vec<_> = map.clone().into_iter().collect();
        prop_assert_eq!(&into, &bt_items, "into_iter() mismatch");

        prop_assert_eq!(walk_forward(&map), bt_items, "cursor walk mismatch");
    }

    /// Tests that walking a cursor backwards from the end mirrors the forward walk.
    #[test]
    fn cursor_walks_back_from_end(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000)) {
        let map: OrderedMap<i64, i64> = entries.into_iter().collect();

        let mut backward = Vec::new();
        let mut cursor = map.cursor_end();
        while cursor.move_prev().is_ok() {
            let (k, v) = cursor.current().unwrap();
            backward.push((*k, *v));
        }
        backward.reverse();

        prop_assert_eq!(cursor, map.cursor_front());
        prop_assert_eq!(backward, walk_forward(&map));
    }

    /// Tests mutable iteration and value edits through `value_of_mut`.
    #[test]
    fn mutation_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        lookups in proptest::collection::vec(key_strategy(), 100),
    ) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (_, v) in map.iter_mut() {
            *v = v.wrapping_mul(3);
        }
        for v in bt_map.values_mut() {
            *v = v.wrapping_mul(3);
        }

        for k in &lookups {
            match map.value_of_mut(k) {
                Ok(v) => *v = v.wrapping_add(1),
                Err(e) => prop_assert_eq!(e, Error::KeyNotFound),
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v = v.wrapping_add(1);
            }
        }

        for v in map.values_mut().rev().take(10) {
            *v = 0;
        }
        for v in bt_map.values_mut().rev().take(10) {
            *v = 0;
        }

        let items: Vec<_> = map.into_iter().collect();
        let bt_items: Vec<_> = bt_map.into_iter().collect();
        prop_assert_eq!(items, bt_items);
    }

    /// Tests that removing every key through `find_mut` in random order empties the map
    /// while it stays sorted.
    #[test]
    fn remove_through_cursor_until_empty(keys in proptest::collection::vec(key_strategy(), 1..1_000)) {
        let mut map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let mut bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        for k in keys.iter().rev() {
            let result = map.find_mut(k).remove();
            match bt_map.remove_entry(k) {
                Some(pair) => prop_assert_eq!(result, Ok(pair)),
                None => prop_assert_eq!(result, Err(Error::InvalidPosition)),
            }
            let sorted = map.keys().zip(map.keys().skip(1)).all(|(a, b)| a < b);
            prop_assert!(sorted, "keys out of order after removing {}", k);
        }

        prop_assert!(map.is_empty());
        prop_assert_eq!(map.cursor_front(), map.cursor_end());
    }

    /// Tests equality and ordering against BTreeMap.
    #[test]
    fn eq_and_ord_match_btreemap(
        a in proptest::collection::vec((0i64..50, 0i64..4), 0..30),
        b in proptest::collection::vec((0i64..50, 0i64..4), 0..30),
    ) {
        let map_a: OrderedMap<i64, i64> = a.iter().copied().collect();
        let map_b: OrderedMap<i64, i64> = b.iter().copied().collect();
        let bt_a: BTreeMap<i64, i64> = a.iter().copied().collect();
        let bt_b: BTreeMap<i64, i64> = b.iter().copied().collect();

        prop_assert_eq!(map_a == map_b, bt_a == bt_b);
        prop_assert_eq!(map_a.cmp(&map_b), bt_a.cmp(&bt_b));
        prop_assert_eq!(map_a.partial_cmp(&map_b), bt_a.partial_cmp(&bt_b));
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

/// Three pairs iterate back in key order.
#[test]
fn three_pairs_iterate_in_order() {
    let map = OrderedMap::from([(1, "a"), (2, "b"), (3, "c")]);
    let items: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(items, vec![(1, "a"), (2, "b"), (3, "c")]);
}

/// Removing a root with two children promotes its successor.
#[test]
fn remove_root_with_two_children() {
    let mut map: OrderedMap<i32, ()> = [10, 5, 15, 3, 7].into_iter().map(|k| (k, ())).collect();
    assert_eq!(map.remove(&10), Ok(()));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 5, 7, 15]);
    assert_eq!(map.value_of(&10), Err(Error::KeyNotFound));
    assert_eq!(map.first_key_value(), Some((&3, &())));
    assert_eq!(map.last_key_value(), Some((&15, &())));
}

/// Sorted insertion builds a chain; everything still works at that depth.
#[test]
fn sorted_insertion_degenerates_but_works() {
    let n = 3_000;
    let mut map: OrderedMap<u32, u32> = OrderedMap::new();
    for k in 0..n {
        map.insert(k, k);
    }
    assert_eq!(map.len(), n as usize);
    assert_eq!(map.value_of(&(n - 1)), Ok(&(n - 1)));
    assert!(map.iter().map(|(k, _)| *k).eq(0..n));

    for k in (0..n).step_by(2) {
        assert_eq!(map.remove(&k), Ok(k));
    }
    assert!(map.keys().copied().eq((1..n).step_by(2)));
}

#[test]
fn get_or_insert_default_then_value_of() {
    let mut map: OrderedMap<&str, u32> = OrderedMap::new();
    *map.get_or_insert_default("k") = 9;
    assert_eq!(map.value_of(&"k"), Ok(&9));
    assert!(!map.find(&"k").is_end());
    assert_eq!(map.len(), 1);
}

#[test]
fn remove_absent_key_leaves_len() {
    let mut map = OrderedMap::from([(1, 1)]);
    assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
    assert_eq!(map.remove_entry(&2), Err(Error::KeyNotFound));
    assert_eq!(map.len(), 1);
}

#[test]
fn clear_keeps_map_usable() {
    let mut map: OrderedMap<i32, i32> = (0..100).map(|k| (k * 7 % 100, k)).collect();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.cursor_end_mut().move_prev(), Err(Error::InvalidPosition));

    map.insert(5, 5);
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&5, &5)]);
}

#[test]
fn take_leaves_source_empty() {
    let mut map = OrderedMap::from([(1, 'a'), (2, 'b')]);
    let moved = map.take();
    assert!(map.is_empty());
    assert_eq!(map.cursor_front(), map.cursor_end());
    assert_eq!(moved, OrderedMap::from([(2, 'b'), (1, 'a')]));

    map.insert(3, 'c');
    assert_eq!(moved.len(), 2);
}

#[test]
fn clone_is_independent() {
    let mut map: OrderedMap<i32, String> = (0..50).map(|k| (k, k.to_string())).collect();
    let snapshot = map.clone();
    assert_eq!(map, snapshot);

    for k in 0..25 {
        map.remove(&k).unwrap();
    }
    map.get_mut(&30).unwrap().push('!');

    assert_eq!(snapshot.len(), 50);
    assert_eq!(snapshot[&30], "30");
    assert_eq!(snapshot.first_key_value(), Some((&0, &"0".to_string())));
}

#[test]
fn debug_formats_as_map() {
    let map = OrderedMap::from([(2, "two"), (1, "one")]);
    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
    assert_eq!(format!("{:?}", map.cursor_end()), "Cursor(None)");
}

#[test]
fn error_messages() {
    assert_eq!(Error::KeyNotFound.to_string(), "no entry found for key");
    assert_eq!(Error::InvalidPosition.to_string(), "cursor does not reference a live element");
}
