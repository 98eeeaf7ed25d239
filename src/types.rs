//! Public types for the memlog unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core value type
pub use memlog_core::Event;

// Error surface
pub use memlog_core::{Result, StoreError};

// Store and cursor
pub use memlog_store::{EventCursor, EventStore};

// Observability seam (injected sink; not part of the functional contract)
pub use memlog_store::{NoopObserver, StoreObserver};
