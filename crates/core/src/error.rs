//! Error types for the event store
//!
//! The store has exactly one failure condition: driving a cursor accessor
//! (`current` or `remove`) while the cursor has no current record. Everything
//! else (empty store, zero query matches, remove_all matching nothing) is a
//! valid outcome reported through return values, not errors.

use thiserror::Error;

/// Errors produced by store and cursor operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A cursor accessor was called while no record is current.
    ///
    /// Raised before the first `move_next`, after `move_next` returned
    /// false, after a `remove`, and after `close`. This is a precondition
    /// violation by the caller; it is never retried or recovered internally.
    #[error("no current record for `{operation}`: call move_next and check it returned true")]
    InvalidState {
        /// Name of the cursor operation that was attempted
        operation: &'static str,
    },
}

impl StoreError {
    /// Construct an InvalidState error for the named cursor operation
    pub fn invalid_state(operation: &'static str) -> Self {
        StoreError::InvalidState { operation }
    }
}

/// Result alias used across all memlog crates
pub type Result<T> = std::result::Result<T, StoreError>;
