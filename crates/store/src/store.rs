//! Event store
//!
//! Mutex-guarded, insertion-ordered sequence of events. Supports append,
//! bulk removal by type, and range queries that hand back a snapshot cursor.
//!
//! # Design
//!
//! One coarse `parking_lot::Mutex` wraps the whole sequence. Each mutation
//! (`insert`, `remove_all`) and each snapshot-take (the first step of
//! `query`/`scan`) holds the lock for its entire critical section, so
//! mutations are mutually exclusive with each other and with snapshotting,
//! and a snapshot reflects one atomic point in time. Filtering runs after
//! the lock is released: a slow predicate never blocks writers, and
//! concurrent mutation cannot reorder, repeat, or drop records in an
//! already-taken snapshot.
//!
//! The individually-synchronized-calls alternative (a "thread-safe list"
//! scanned across several calls) does not compose into an atomic scan; the
//! single-critical-section snapshot is the production path.
//!
//! # Thread Safety
//!
//! `EventStore` is `Send + Sync`; share it via `Arc`. Cursors it returns own
//! private copies and need no further coordination with the store.

use std::sync::Arc;

use parking_lot::Mutex;

use memlog_core::Event;

use crate::cursor::EventCursor;
use crate::observer::{NoopObserver, StoreObserver};

/// In-memory event repository
///
/// Created empty; grows via `insert`, shrinks via `remove_all`. Insertion
/// order is the canonical order: queries yield matching records exactly in
/// the order they were inserted.
pub struct EventStore {
    /// The authoritative sequence, insertion-ordered
    events: Mutex<Vec<Event>>,
    /// Injected observability sink, shared with every cursor
    observer: Arc<dyn StoreObserver>,
}

impl EventStore {
    /// Create an empty store with no observability sink
    pub fn new() -> Self {
        Self::with_observer(Arc::new(NoopObserver))
    }

    /// Create an empty store that reports operation outcomes to `observer`
    pub fn with_observer(observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            observer,
        }
    }

    /// Append an event
    ///
    /// Infallible; the only observable effect is a length increase of 1.
    pub fn insert(&self, event: Event) {
        let len = {
            let mut events = self.events.lock();
            events.push(event.clone());
            events.len()
        };
        tracing::debug!(
            event_type = event.event_type(),
            timestamp = event.timestamp(),
            store_len = len,
            "inserted event"
        );
        self.observer.on_insert(&event, len);
    }

    /// Remove every event whose type equals `event_type`
    ///
    /// Exact value equality on the type label; relative order of survivors
    /// is preserved. Returns the number removed; 0 on an empty store or
    /// when nothing matches, which is a valid outcome, not an error.
    pub fn remove_all(&self, event_type: &str) -> usize {
        let (removed, remaining) = {
            let mut events = self.events.lock();
            let before = events.len();
            events.retain(|e| e.event_type() != event_type);
            (before - events.len(), events.len())
        };
        if removed == 0 {
            tracing::debug!(event_type, remaining, "remove_all matched nothing");
        } else {
            tracing::debug!(event_type, removed, remaining, "removed events by type");
        }
        self.observer.on_remove_all(event_type, removed, remaining);
        removed
    }

    /// Query events by type and inclusive time window
    ///
    /// Returns a cursor over exactly the records whose type equals
    /// `event_type` and whose timestamp lies in `[start, end]`, in original
    /// insertion order. Zero matches yield a valid cursor whose first
    /// `move_next` returns false.
    ///
    /// The snapshot is taken under a single lock acquisition and filtered
    /// after release; inserts and removals that land afterwards do not
    /// affect the returned cursor.
    pub fn query(&self, event_type: &str, start: i64, end: i64) -> EventCursor {
        let snapshot = self.snapshot();
        let matches: Vec<Event> = snapshot
            .into_iter()
            .filter(|e| e.event_type() == event_type && e.in_window(start, end))
            .collect();
        tracing::debug!(
            event_type,
            start,
            end,
            matches = matches.len(),
            "query snapshot filtered"
        );
        self.observer
            .on_query(event_type, start, end, matches.len());
        EventCursor::new(matches, Arc::clone(&self.observer))
    }

    /// Cursor over a snapshot of the entire sequence, unfiltered
    ///
    /// Same snapshot discipline as `query`; useful for full sweeps and for
    /// driving cursor primitives directly. Not a query: the observer's
    /// `on_query` is not fired.
    pub fn scan(&self) -> EventCursor {
        let snapshot = self.snapshot();
        tracing::debug!(len = snapshot.len(), "full scan snapshot");
        EventCursor::new(snapshot, Arc::clone(&self.observer))
    }

    /// Number of events currently in the store
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether the store holds no events
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Copy the live sequence under one critical section
    fn snapshot(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
