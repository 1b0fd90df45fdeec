//! Construction, ordering and plain map operations

use collection::OrderedMap;
use indexmap::IndexMap;

use crate::helpers::*;

#[test]
fn test_new_map_is_empty() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.values().is_empty());
    assert!(map.keys().is_empty());

    let map: OrderedMap<String, i32> = OrderedMap::default();
    assert!(map.is_empty());
}

#[test]
fn test_insertion_order_preserved() {
    let mut map = OrderedMap::new();
    for (key, value) in [("zeta", 1), ("alpha", 2), ("mid", 3)] {
        map.set(key, value);
    }

    assert_eq!(map.keys(), &["zeta", "alpha", "mid"]);
    assert_eq!(map.values(), &[1, 2, 3]);
}

#[test]
fn test_set_existing_key_keeps_position() {
    let mut map = setup_letters();
    map.set("b", 20);

    assert_eq!(map.keys(), &["a", "b", "c", "d", "e"]);
    assert_eq!(map.values(), &[1, 20, 3, 4, 5]);
    assert_eq!(map.len(), 5);
}

#[test]
fn test_delete_and_reinsert_moves_to_end() {
    let mut map = setup_letters();

    assert!(map.delete("b"));
    assert!(!map.delete("b"));
    assert_eq!(map.keys(), &["a", "c", "d", "e"]);

    map.set("b", 2);
    assert_eq!(map.keys(), &["a", "c", "d", "e", "b"]);
}

#[test]
fn test_set_is_chainable() {
    let mut map = OrderedMap::new();
    map.set(1, "one").set(2, "two").set(3, "three");
    assert_eq!(map.values(), &["one", "two", "three"]);
}

#[test]
fn test_construction_duplicate_keys_keep_first_position() {
    let map: OrderedMap<&str, i32> = vec![("x", 1), ("y", 2), ("x", 3)].into_iter().collect();

    assert_eq!(map.len(), 2);
    assert_eq!(map.keys(), &["x", "y"]);
    assert_eq!(map.get("x"), Some(&3));
}

#[test]
fn test_lookup_operations() {
    let map = setup_letters();

    assert_eq!(map.get("c"), Some(&3));
    assert_eq!(map.get("z"), None);
    assert!(map.contains_key("a"));
    assert!(!map.contains_key("z"));
    assert_eq!(map["e"], 5);
}

#[test]
#[should_panic]
fn test_index_missing_key_panics() {
    let map = setup_letters();
    let _ = map["z"];
}

#[test]
fn test_extend_routes_through_set() {
    let mut map = setup_letters();
    map.values();

    map.extend([("b", 22), ("f", 6)]);

    assert_eq!(map.keys(), &["a", "b", "c", "d", "e", "f"]);
    assert_eq!(map.values(), &[1, 22, 3, 4, 5, 6]);
}

#[test]
fn test_iteration_in_order() {
    let map = setup_letters();

    let pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);

    let keys: Vec<_> = map.iter_keys().copied().collect();
    assert_eq!(keys, map.keys());

    let borrowed: Vec<_> = (&map).into_iter().map(|(_, v)| *v).collect();
    assert_eq!(borrowed, map.values());

    let owned_pairs: Vec<_> = map.into_iter().collect();
    assert_eq!(owned_pairs.first(), Some(&("a", 1)));
    assert_eq!(owned_pairs.last(), Some(&("e", 5)));
}

#[test]
fn test_for_each_visits_value_key_map() {
    let map = setup_letters();
    let mut seen = Vec::new();

    map.for_each(|value, key, whole| {
        assert_eq!(whole.get(key), Some(value));
        seen.push(*key);
    });

    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_clear_removes_everything() {
    let mut map = setup_letters();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
}

#[test]
fn test_index_map_conversions() {
    let mut source = IndexMap::new();
    source.insert("k1", 10);
    source.insert("k2", 20);

    let map = OrderedMap::from(source.clone());
    assert_eq!(map.as_index_map(), &source);
    assert_eq!(map.keys(), &["k1", "k2"]);

    let back: IndexMap<_, _> = map.into();
    assert_eq!(back, source);
}

#[test]
fn test_debug_renders_in_order() {
    let map = OrderedMap::from([("b", 2), ("a", 1)]);
    assert_eq!(format!("{map:?}"), r#"{"b": 2, "a": 1}"#);
}
