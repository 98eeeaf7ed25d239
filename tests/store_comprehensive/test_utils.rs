//! Shared helpers for the comprehensive suite

use memlog::{Event, EventStore};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
});

/// Build an empty store with test logging wired up
pub fn setup() -> EventStore {
    Lazy::force(&TRACING);
    EventStore::new()
}

/// Insert `(type, timestamp)` pairs in order
pub fn insert_all(store: &EventStore, events: &[(&str, i64)]) {
    for (t, ts) in events {
        store.insert(Event::new(*t, *ts));
    }
}

/// Drain a cursor, collecting the visited timestamps
pub fn timestamps(cursor: &mut memlog::EventCursor) -> Vec<i64> {
    let mut seen = Vec::new();
    while cursor.move_next() {
        seen.push(cursor.current().unwrap().timestamp());
    }
    seen
}
