//! Event store engine for memlog
//!
//! This crate implements the two stateful pieces of the system:
//! - `EventStore`: mutex-guarded, insertion-ordered sequence of events
//! - `EventCursor`: forward-only traversal over a point-in-time snapshot
//!
//! plus the `StoreObserver` seam through which an observability sink can
//! watch operation counts without participating in the functional contract.
//!
//! # Design
//!
//! All synchronization lives in `EventStore`: one coarse `parking_lot::Mutex`
//! around the event sequence. A query holds the lock only long enough to copy
//! the sequence; filtering and all cursor traffic happen on the private copy,
//! so an in-flight traversal is never disturbed by concurrent inserts or
//! removals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod observer;
pub mod store;

// Re-exports
pub use cursor::EventCursor;
pub use observer::{NoopObserver, StoreObserver};
pub use store::EventStore;
