//! # memlog
//!
//! Embedded in-memory event store with snapshot cursors.
//!
//! A store holds an insertion-ordered sequence of immutable `(type,
//! timestamp)` records. Callers append with [`EventStore::insert`], bulk-drop
//! a type with [`EventStore::remove_all`], and read back with
//! [`EventStore::query`], which captures a point-in-time snapshot under one
//! lock acquisition and hands it to an [`EventCursor`]. The cursor walks
//! forward, exposes the visited record, and can delete it from its own
//! working sequence without disturbing the live store.
//!
//! # Example
//!
//! ```
//! use memlog::{Event, EventStore};
//!
//! let store = EventStore::new();
//! store.insert(Event::new("reading", 0));
//! store.insert(Event::new("reading", 600));
//! store.insert(Event::new("heartbeat", 700));
//!
//! let mut cursor = store.query("reading", 0, 600);
//! while cursor.move_next() {
//!     let event = cursor.current()?;
//!     println!("{event}");
//! }
//! cursor.close();
//! # Ok::<(), memlog::StoreError>(())
//! ```
//!
//! # Crates
//!
//! - `memlog-core`: `Event`, `StoreError` (leaf types, no behavior)
//! - `memlog-store`: `EventStore`, `EventCursor`, `StoreObserver` (all
//!   locking, snapshotting and traversal semantics)
//!
//! This facade re-exports the public surface of both.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;

pub use types::*;
