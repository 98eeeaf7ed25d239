//! Store lifecycle: insert, remove_all, lengths
//!
//! Mirrors the lifecycle a caller drives in production: grow the store,
//! sweep types out, observe lengths. Timestamps come from `chrono` the way
//! callers stamp real events.

use chrono::Utc;
use memlog::Event;

use crate::test_utils::{insert_all, setup, timestamps};

/// Test: three inserts leave a store of length 3
#[test]
fn insert_accumulates_events() {
    let store = setup();
    let now = Utc::now();

    store.insert(Event::at("read_event", now));
    store.insert(Event::at("write_event", now));
    store.insert(Event::at("update_event", now));

    assert_eq!(store.len(), 3);
}

/// Test: removing the only event of a type empties the store
#[test]
fn remove_all_single_match() {
    let store = setup();
    store.insert(Event::at("write_event", Utc::now()));
    assert_eq!(store.len(), 1);

    let removed = store.remove_all("write_event");
    assert_eq!(removed, 1);
    assert!(store.is_empty());
}

/// Test: remove_all("B") on [A, B, C] leaves [A, C] in order
#[test]
fn remove_all_preserves_survivor_order() {
    let store = setup();
    insert_all(&store, &[("a", 100), ("b", 100), ("c", 100)]);

    assert_eq!(store.remove_all("b"), 1);

    let mut cursor = store.scan();
    let mut types = Vec::new();
    while cursor.move_next() {
        types.push(cursor.current().unwrap().event_type().to_string());
    }
    assert_eq!(types, vec!["a", "c"]);
}

/// Test: remove_all on an empty store is a silent no-op
#[test]
fn remove_all_on_empty_store() {
    let store = setup();
    assert_eq!(store.len(), 0);
    assert_eq!(store.remove_all("keyboard_event"), 0);
    assert_eq!(store.len(), 0);
}

/// Test: store length tracks inserts minus removals
#[test]
fn length_is_inserts_minus_removals() {
    let store = setup();
    for i in 0..50 {
        let t = if i % 2 == 0 { "even" } else { "odd" };
        store.insert(Event::new(t, i));
    }
    assert_eq!(store.len(), 50);

    let removed = store.remove_all("even");
    assert_eq!(removed, 25);
    assert_eq!(store.len(), 50 - removed);

    let removed = store.remove_all("odd");
    assert_eq!(removed, 25);
    assert!(store.is_empty());
}

/// Test: bulk removal leaves unrelated windows intact
#[test]
fn remove_all_leaves_other_types_queryable() {
    let store = setup();
    insert_all(&store, &[("keep", 10), ("drop", 20), ("keep", 30), ("drop", 40)]);

    store.remove_all("drop");

    let mut cursor = store.query("keep", 0, 100);
    assert_eq!(timestamps(&mut cursor), vec![10, 30]);
    let mut cursor = store.query("drop", 0, 100);
    assert!(!cursor.move_next());
}
