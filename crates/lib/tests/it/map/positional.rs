//! first/last/random and count validation

use std::collections::HashSet;

use collection::{Error, OrderedMap};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::helpers::*;

// ===== SINGLE ELEMENT FORMS =====

#[test]
fn test_single_forms_on_populated_map() {
    let map = setup_letters();

    assert_eq!(map.first(), Some(&1));
    assert_eq!(map.first_key(), Some(&"a"));
    assert_eq!(map.last(), Some(&5));
    assert_eq!(map.last_key(), Some(&"e"));

    let value = map.random().unwrap();
    assert!(map.values().contains(value));
    let key = map.random_key().unwrap();
    assert!(map.contains_key(*key));
}

#[test]
fn test_single_forms_on_empty_map_return_none() {
    let map: OrderedMap<&str, i32> = OrderedMap::new();

    assert_eq!(map.first(), None);
    assert_eq!(map.first_key(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.last_key(), None);
    assert_eq!(map.random(), None);
    assert_eq!(map.random_key(), None);
}

// ===== COUNTED FORMS =====

#[test]
fn test_first_n_is_prefix_and_last_n_is_suffix() {
    let map = setup_letters();
    let values = map.values().to_vec();
    let keys = map.keys().to_vec();

    for n in 1..=map.len() {
        assert_eq!(owned(&map.first_n(n).unwrap()), values[..n]);
        assert_eq!(map.last_n(n).unwrap(), &values[values.len() - n..]);
        assert_eq!(owned(&map.first_key_n(n).unwrap()), keys[..n]);
        assert_eq!(map.last_key_n(n).unwrap(), &keys[keys.len() - n..]);
    }
}

#[test]
fn test_counts_clamped_to_size() {
    let map = setup_letters();

    assert_eq!(map.first_n(50).unwrap().len(), 5);
    assert_eq!(map.last_n(50).unwrap(), &[1, 2, 3, 4, 5]);
    assert_eq!(map.first_key_n(6u64).unwrap().len(), 5);
    assert_eq!(map.last_key_n(6.0).unwrap().len(), 5);
}

#[test]
fn test_counted_forms_on_empty_map_return_empty() {
    let map: OrderedMap<&str, i32> = OrderedMap::new();

    assert!(map.first_n(3).unwrap().is_empty());
    assert!(map.first_key_n(3).unwrap().is_empty());
    assert!(map.last_n(3).unwrap().is_empty());
    assert!(map.last_key_n(3).unwrap().is_empty());
    assert!(map.random_n(3).unwrap().is_empty());
    assert!(map.random_key_n(3).unwrap().is_empty());
}

#[test]
fn test_counts_accept_json_numbers() {
    let map = setup_letters();
    assert_eq!(owned(&map.first_n(json!(2)).unwrap()), vec![1, 2]);
    assert_eq!(map.last_n(json!(2.0)).unwrap(), &[4, 5]);
}

// ===== COUNT VALIDATION =====

#[test]
fn test_negative_count_is_range_error() {
    let map = setup_letters();
    let err = map.first_n(-1).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(err.argument(), Some("count"));
}

#[test]
fn test_fractional_count_is_range_error() {
    let map = setup_letters();
    assert!(matches!(
        map.first_n(1.5),
        Err(Error::InvalidArgumentRange { .. })
    ));
    assert!(map.last_n(json!(0.5)).unwrap_err().is_range_error());
}

#[test]
fn test_zero_count_is_range_error() {
    let map = setup_letters();
    assert!(map.first_n(0).unwrap_err().is_range_error());
    assert!(map.last_key_n(0u8).unwrap_err().is_range_error());
    assert!(map.random_n(0).unwrap_err().is_range_error());
}

#[test]
fn test_non_numeric_count_is_type_error() {
    let map = setup_letters();
    assert!(matches!(
        map.first_n(json!("x")),
        Err(Error::InvalidArgumentType { .. })
    ));
    assert!(map.first_key_n(json!(null)).unwrap_err().is_type_error());
    assert!(map.last_n(json!([3])).unwrap_err().is_type_error());
    assert!(map.random_key_n(json!({"count": 1})).unwrap_err().is_type_error());
}

#[test]
fn test_validation_precedes_empty_check() {
    let map: OrderedMap<&str, i32> = OrderedMap::new();

    assert!(map.first_n(-2).is_err());
    assert!(map.last_n(json!("x")).is_err());
    assert!(map.random_n(2.5).is_err());
    assert!(map.random_key_n(0).is_err());
}

// ===== RANDOM SAMPLING =====

#[test]
fn test_random_n_draws_distinct_members() {
    let map = setup_letters();
    let mut rng = StdRng::seed_from_u64(7);

    for n in 1..=map.len() {
        let drawn = map.random_n_with(n, &mut rng).unwrap();
        assert_eq!(drawn.len(), n);

        let unique: HashSet<i32> = drawn.iter().map(|v| **v).collect();
        assert_eq!(unique.len(), n, "sample repeated an element");
        assert!(drawn.iter().all(|v| map.values().contains(v)));
    }
}

#[test]
fn test_random_n_clamped_to_size() {
    let map = setup_letters();
    let mut rng = StdRng::seed_from_u64(11);

    let drawn = map.random_n_with(12, &mut rng).unwrap();
    let unique: HashSet<i32> = drawn.iter().map(|v| **v).collect();
    assert_eq!(drawn.len(), 5);
    assert_eq!(unique, HashSet::from([1, 2, 3, 4, 5]));

    let keys = map.random_key_n_with(12, &mut rng).unwrap();
    let unique_keys: HashSet<&str> = keys.iter().map(|k| **k).collect();
    assert_eq!(unique_keys.len(), 5);
}

#[test]
fn test_random_n_is_reproducible_with_seed() {
    let map = setup_letters();

    let first = map
        .random_n_with(3, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let second = map
        .random_n_with(3, &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_random_draws_cover_all_values() {
    let map = setup_letters();
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen_values = HashSet::new();
    let mut seen_keys = HashSet::new();

    for _ in 0..500 {
        seen_values.insert(*map.random_with(&mut rng).unwrap());
        seen_keys.insert(*map.random_key_with(&mut rng).unwrap());
    }

    assert_eq!(seen_values, HashSet::from([1, 2, 3, 4, 5]));
    assert_eq!(seen_keys, HashSet::from(["a", "b", "c", "d", "e"]));
}

#[test]
fn test_random_does_not_mutate_map() {
    let map = setup_letters();
    let _ = map.random_n(5).unwrap();
    let _ = map.random_key_n(5).unwrap();

    assert_eq!(map.values(), &[1, 2, 3, 4, 5]);
    assert_eq!(map.keys(), &["a", "b", "c", "d", "e"]);
}
