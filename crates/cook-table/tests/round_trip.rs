//! Integration test: lookups survive repeated rehashing.

use cook_table::{fnv1a_str, ProbeTable, TableError};

#[test]
fn keys_one_to_thousand_round_trip() {
    let mut table = ProbeTable::new();
    let mut capacities = vec![table.capacity()];
    for key in 1..=1000u32 {
        assert_eq!(table.set(key, key * 3 + 1), Ok(None));
        if table.capacity() != *capacities.last().unwrap() {
            capacities.push(table.capacity());
        }
    }
    assert_eq!(table.len(), 1000);
    // 0 -> 16 -> 32 -> ... -> 2048: crossed the load bound many times.
    assert_eq!(capacities, [0, 16, 32, 64, 128, 256, 512, 1024, 2048]);

    for key in 1..=1000u32 {
        assert_eq!(table.get(key), Ok(Some(key * 3 + 1)), "key {key}");
    }
}

#[test]
fn absent_keys_miss_on_a_populated_table() {
    let mut table = ProbeTable::new();
    for key in (2..=2000u32).step_by(2) {
        table.set(key, key).unwrap();
    }
    for key in (1..2000u32).step_by(2) {
        assert_eq!(table.get(key), Ok(None), "odd key {key} was never inserted");
    }
    assert_eq!(table.get(u32::MAX), Ok(None));
}

#[test]
fn sparse_high_keys_round_trip() {
    let mut table = ProbeTable::new();
    let keys: Vec<u32> = (1..=300u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    for (i, &key) in keys.iter().enumerate() {
        table.set(key, i as u32).unwrap();
    }
    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(table.get(key), Ok(Some(i as u32)));
    }
}

#[test]
fn string_keys_through_fnv1a() {
    let names = ["cook.h", "nob.c", "deque.c", "mini_hash.c", "temp_allocator.c"];
    let mut lines = ProbeTable::new();
    for (i, name) in names.iter().enumerate() {
        let key = fnv1a_str(name);
        assert_ne!(key, 0);
        lines.set(key, i as u32 * 100).unwrap();
    }
    assert_eq!(lines.get(fnv1a_str("deque.c")), Ok(Some(200)));
    assert_eq!(lines.get(fnv1a_str("missing.c")), Ok(None));
}

#[test]
fn errors_are_reportable() {
    let mut table = ProbeTable::new();
    let err = table.set(0, 1).unwrap_err();
    assert_eq!(err, TableError::InvalidKey);
    assert_eq!(err.to_string(), "key 0 is reserved for empty buckets");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
