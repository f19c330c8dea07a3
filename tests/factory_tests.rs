//! Unit tests for the map factory functions.
//!
//! Covers pre-sizing, fixed maps, extension, sorted maps and immutable
//! snapshots, including every failure mode of the flat-list variants.

use micromaps::error::{MapError, NullArgumentError, UnpairedKeyError};
use micromaps::factory::{
    extend, fixed_map, fixed_sorted_map, sized_unordered_map, to_immutable_map, try_extend,
    try_fixed_map, try_fixed_sorted_map,
};
use micromaps::hasher::UnorderedMap;
use micromaps::immutable::Representation;
use micromaps::mapping::Mapping;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

fn numbered(size: usize) -> HashMap<String, String> {
    (0..size)
        .map(|index| (format!("key-{index}"), format!("value-{index}")))
        .collect()
}

// =============================================================================
// sized_unordered_map
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(100)]
#[case(1_000)]
fn test_sized_unordered_map_never_resizes(#[case] size: usize) {
    let mut map: UnorderedMap<String, String> = sized_unordered_map(size);
    let initial_capacity = map.capacity();

    for index in 0..size {
        map.insert(format!("key-{index}"), format!("value-{index}"));
        assert_eq!(map.capacity(), initial_capacity);
    }
    assert_eq!(map.len(), size);
}

#[rstest]
fn test_sized_unordered_map_starts_empty() {
    let map: UnorderedMap<i32, i32> = sized_unordered_map(0);
    assert!(map.is_empty());
    assert!(map.capacity() >= 4);
}

// =============================================================================
// fixed_map
// =============================================================================

#[rstest]
fn test_fixed_map_single_entry() {
    let map = fixed_map("x", 1, []);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x"), Some(&1));
}

#[rstest]
fn test_fixed_map_two_entries() {
    let map = fixed_map("x", "y", [("a", "b")]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x"), Some(&"y"));
    assert_eq!(map.get("a"), Some(&"b"));
}

#[rstest]
fn test_fixed_map_integer_values() {
    let map = fixed_map("x".to_string(), 1, [("a".to_string(), 2)]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x"), Some(&1));
    assert_eq!(map.get("a"), Some(&2));
}

#[rstest]
fn test_fixed_map_repeated_first_key_last_write_wins() {
    let map = fixed_map("x", 1, [("x", 2), ("x", 3)]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x"), Some(&3));
}

#[rstest]
fn test_fixed_map_presizes_for_exact_rest() {
    let map = fixed_map(0, 0, (1..100).map(|index| (index, index)));
    assert_eq!(map.len(), 100);
    assert!(map.capacity() >= 100);
}

#[rstest]
fn test_fixed_map_keeps_every_pair_of_filtered_rest() {
    let thirds = (1..100).filter(|index| index % 3 == 0).map(|index| (index, index));
    let map = fixed_map(0, 0, thirds);
    assert_eq!(map.len(), 34);
    assert!((0..100).step_by(3).all(|index| map.get(&index) == Some(&index)));
}

#[rstest]
fn test_extend_keeps_every_pair_of_filtered_rest() {
    let old = fixed_map(-1, -1, []);
    let evens = (1..50).filter(|index| index % 2 == 0).map(|index| (index, index));
    let map = extend(&old, 0, 0, evens);
    assert_eq!(map.len(), 26);
    assert_eq!(map.get(&-1), Some(&-1));
    assert_eq!(map.get(&48), Some(&48));
}

#[rstest]
fn test_try_fixed_map_even_list() {
    let map = try_fixed_map("x", "y", ["a", "b"]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&"b"));
}

#[rstest]
fn test_try_fixed_map_empty_list() {
    let map = try_fixed_map("x", "y", Vec::new()).unwrap();
    assert_eq!(map.len(), 1);
}

#[rstest]
#[case(vec!["a"])]
#[case(vec!["a", "b", "c"])]
fn test_try_fixed_map_odd_list_fails(#[case] rest: Vec<&str>) {
    let length = rest.len();
    let result = try_fixed_map("x", "y", rest);
    assert_eq!(
        result.unwrap_err(),
        MapError::InvalidArgument(UnpairedKeyError { length })
    );
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn test_extend_adds_and_overwrites() {
    let old = fixed_map("old1", "old1", [("old2", "old2"), ("x", "y")]);
    let map = extend(&old, "x", "y", [("a", "b")]);

    assert_eq!(map.len(), 4);
    assert_eq!(map.get("old1"), Some(&"old1"));
    assert_eq!(map.get("old2"), Some(&"old2"));
    assert_eq!(map.get("x"), Some(&"y"));
    assert_eq!(map.get("a"), Some(&"b"));
}

#[rstest]
fn test_extend_does_not_modify_original() {
    let old = fixed_map("old1", "old1", [("old2", "old2"), ("x", "y")]);
    let snapshot = old.clone();
    let _ = extend(&old, "x", "changed", [("a", "b")]);

    assert_eq!(old, snapshot);
    assert_eq!(old.len(), 3);
    assert_eq!(old.get("a"), None);
}

#[rstest]
fn test_extend_accepts_sorted_source() {
    let old: BTreeMap<i32, i32> = (0..5).map(|index| (index, index)).collect();
    let map = extend(&old, 5, 5, [(0, 100)]);
    assert_eq!(map.len(), 6);
    assert_eq!(map.get(&0), Some(&100));
}

#[rstest]
fn test_extend_presizes_for_every_entry() {
    let old = numbered(40);
    let map = extend(&old, "x".to_string(), "y".to_string(), []);
    assert_eq!(map.len(), 41);
    assert!(map.capacity() >= 41);
}

#[rstest]
fn test_try_extend_odd_list_fails_even_for_empty_original() {
    let empty: HashMap<&str, &str> = HashMap::new();
    let result = try_extend(Some(&empty), "x", "y", ["a"]);
    assert_eq!(
        result.unwrap_err(),
        MapError::InvalidArgument(UnpairedKeyError { length: 1 })
    );
}

#[rstest]
fn test_try_extend_missing_original_fails() {
    let missing: Option<&HashMap<&str, &str>> = None;
    let result = try_extend(missing, "x", "y", ["a", "b"]);
    assert_eq!(
        result.unwrap_err(),
        MapError::NullArgument(NullArgumentError {
            function_name: "try_extend",
            parameter_name: "original",
        })
    );
}

#[rstest]
fn test_try_extend_even_list() {
    let old = fixed_map("old", "old", []);
    let map = try_extend(Some(&old), "x", "y", ["a", "b"]).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(old.len(), 1);
}

// =============================================================================
// fixed_sorted_map
// =============================================================================

#[rstest]
fn test_fixed_sorted_map_orders_keys() {
    let map = fixed_sorted_map("x", "y", [("a", "b")]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x"), Some(&"y"));
    assert_eq!(map.get("a"), Some(&"b"));

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec!["a", "x"]);
}

#[rstest]
fn test_try_fixed_sorted_map_odd_list_fails() {
    let result = try_fixed_sorted_map("x", "y", ["a"]);
    assert!(matches!(result, Err(MapError::InvalidArgument(_))));
}

#[rstest]
fn test_try_fixed_sorted_map_even_list() {
    let map = try_fixed_sorted_map(3, 30, [1, 10, 2, 20]).unwrap();
    let entries: Vec<_> = map.into_iter().collect();
    assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
}

// =============================================================================
// to_immutable_map
// =============================================================================

#[rstest]
fn test_to_immutable_map_of_none_is_empty() {
    let missing: Option<&HashMap<String, String>> = None;
    let map = to_immutable_map(missing);
    assert!(map.is_empty());
    assert_eq!(map.representation(), Representation::Empty);
}

#[rstest]
#[case(0, Representation::Empty)]
#[case(1, Representation::Single)]
#[case(100, Representation::General)]
fn test_to_immutable_map_equals_source(#[case] size: usize, #[case] expected: Representation) {
    let source = numbered(size);
    let map = to_immutable_map(Some(&source));

    assert_eq!(map, source);
    assert_eq!(source, map);
    assert_eq!(map.representation(), expected);
}

#[rstest]
fn test_to_immutable_map_single_entry() {
    let source = fixed_map("x".to_string(), "y".to_string(), []);
    let map = to_immutable_map(Some(&source));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x").map(String::as_str), Some("y"));
}

#[rstest]
fn test_to_immutable_map_is_snapshot() {
    let mut source = numbered(10);
    let map = to_immutable_map(Some(&source));

    source.insert("late".to_string(), "value".to_string());
    source.remove("key-0");
    source.clear();

    assert_eq!(map.len(), 10);
    assert!(map.contains_key("key-0"));
    assert!(!map.contains_key("late"));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(100)]
fn test_to_immutable_map_rejects_mutation(#[case] size: usize) {
    let source = numbered(size);
    let mut map = to_immutable_map(Some(&source));

    let is_unsupported = |error: MapError| matches!(error, MapError::UnsupportedOperation(_));

    assert!(map.put("bla".to_string(), "blub".to_string()).is_err_and(is_unsupported));
    assert!(
        map.put_all([("bla".to_string(), "blub".to_string())])
            .is_err_and(is_unsupported)
    );
    assert!(map.remove_key(&"key-0".to_string()).is_err_and(is_unsupported));
    assert!(map.remove_all().is_err_and(is_unsupported));
    assert!(map.remove_where(|_, _| false).is_err_and(is_unsupported));
    assert!(map.remove_where(|_, _| true).is_err_and(is_unsupported));

    assert_eq!(map, source);
}

#[rstest]
fn test_to_immutable_map_of_immutable_map() {
    let first = to_immutable_map(Some(&numbered(5)));
    let second = to_immutable_map(Some(&first));
    assert_eq!(first, second);
}
