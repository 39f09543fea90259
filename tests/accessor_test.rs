//! Read-only accessors: keys, entries, lookup.

use std::collections::BTreeSet;
use topn::prelude::*;

#[test]
fn test_entries_empty_on_create() {
    let topn: TopN<i32, i32> = TopN::new(2, Direction::Top).unwrap();
    assert_eq!(topn.iter().count(), 0);
    assert!(topn.store().is_empty());
}

#[test]
fn test_entries_have_keys() {
    let mut topn = TopN::new(2, Direction::Top).unwrap();
    topn.extend([(1, 1), (2, 2), (3, 3)]);

    let entries: Vec<(i32, Vec<i32>)> = topn.iter().map(|(k, v)| (*k, v.to_vec())).collect();
    assert_eq!(entries, vec![(2, vec![2]), (3, vec![3])]);
}

#[test]
fn test_keys() {
    let mut topn = TopN::new(2, Direction::Top).unwrap();
    topn.extend([(1, 1), (2, 2), (3, 3)]);
    assert_eq!(topn.keys(), BTreeSet::from([2, 3]));
}

#[test]
fn test_keys_is_a_snapshot() {
    let mut topn = TopN::new(2, Direction::Top).unwrap();
    topn.extend([(1, 'a'), (2, 'b')]);
    let snapshot = topn.keys();

    assert!(topn.insert(3, 'c').is_accepted());
    assert_eq!(snapshot, BTreeSet::from([1, 2]));
    assert_eq!(topn.keys(), BTreeSet::from([2, 3]));
}

#[test]
fn test_find_missing_key() {
    let mut topn = TopN::new(2, Direction::Bottom).unwrap();
    assert!(topn.insert("a", 1).is_accepted());
    assert_eq!(topn.find(&"b"), None);
    assert!(!topn.contains(&"b"));
    assert!(topn.contains(&"a"));
}

#[test]
fn test_is_full() {
    let mut topn = TopN::new(2, Direction::Bottom).unwrap();
    assert!(!topn.is_full());
    assert!(topn.insert(1, ()).is_accepted());
    assert!(!topn.is_full());
    assert!(topn.insert(2, ()).is_accepted());
    assert!(topn.is_full());
}

#[test]
fn test_scan_backend_entries() {
    let mut topn: ScanTopN<i32, i32> =
        TopN::with_store(2, Direction::Top, ScanStore::new()).unwrap();
    topn.extend([(1, 1), (2, 2), (3, 3), (3, 4)]);

    let mut entries: Vec<(i32, Vec<i32>)> =
        topn.iter().map(|(k, v)| (*k, v.to_vec())).collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![(2, vec![2]), (3, vec![3, 4])]);
    assert_eq!(topn.store().len(), 2);
}
