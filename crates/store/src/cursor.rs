//! Snapshot cursor over query results
//!
//! A cursor owns a private, point-in-time sequence of events and walks it
//! forward, one `move_next` at a time. The currently-visited record can be
//! read with `current` and deleted from the working sequence with `remove`.
//!
//! # State machine
//!
//! ```text
//! NotStarted ──move_next:true──▶ Positioned ──move_next:false──▶ Exhausted
//!     ▲                             │
//!     └────────── remove ───────────┘          (close, from anywhere) ──▶ Closed
//! ```
//!
//! `remove` rejoins `NotStarted` with the resume point set to the vacated
//! slot, so the record that shifted into it is visited next, with no skip and no
//! repeat. `Exhausted` is sticky: once `move_next` has returned false it
//! keeps returning false. `Closed` is terminal and reached only via `close`.
//!
//! # Thread Safety
//!
//! Every method takes `&mut self`; driving one cursor from two threads
//! requires an external lock, and interleaving guarantees are whatever that
//! lock provides. The cursor itself only promises single-caller semantics.

use std::sync::Arc;

use memlog_core::{Event, Result, StoreError};

use crate::observer::StoreObserver;

/// Traversal position within the working sequence
///
/// Every reachable situation is a named variant; the accessors check the
/// variant rather than a sentinel index or a cleared reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    /// No current record; the next `move_next` visits index `next`.
    ///
    /// Fresh cursors start here with `next == 0`; `remove` returns here
    /// with `next` at the vacated slot.
    NotStarted { next: usize },
    /// The most recent `move_next` returned true; `index` is current.
    Positioned { index: usize },
    /// `move_next` ran off the end; stays here until `close`.
    Exhausted,
    /// `close` released the working sequence.
    Closed,
}

/// Forward-only cursor over a point-in-time sequence of events
///
/// Returned by `EventStore::query` and `EventStore::scan`. The working
/// sequence is a private snapshot: removing records through the cursor
/// affects only this cursor, never the live store.
pub struct EventCursor {
    /// Working sequence; emptied on close
    events: Vec<Event>,
    state: CursorState,
    observer: Arc<dyn StoreObserver>,
}

impl EventCursor {
    /// Bind a cursor to its working sequence
    pub(crate) fn new(events: Vec<Event>, observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            events,
            state: CursorState::NotStarted { next: 0 },
            observer,
        }
    }

    /// Advance to the next record
    ///
    /// Returns true if a record became current, false once the working
    /// sequence is exhausted (or was empty, or the cursor is closed).
    /// Exhaustion is monotonic: after the first false every later call is
    /// false too, with no further state change.
    pub fn move_next(&mut self) -> bool {
        let next = match self.state {
            CursorState::NotStarted { next } => next,
            CursorState::Positioned { index } => index + 1,
            CursorState::Exhausted | CursorState::Closed => return false,
        };

        if next < self.events.len() {
            self.state = CursorState::Positioned { index: next };
            true
        } else {
            tracing::debug!(len = self.events.len(), "cursor exhausted");
            self.state = CursorState::Exhausted;
            false
        }
    }

    /// The currently-visited record
    ///
    /// ## Errors
    ///
    /// `InvalidState` unless the most recent `move_next` returned true and
    /// neither `remove` nor `close` has been called since.
    pub fn current(&self) -> Result<&Event> {
        match self.state {
            CursorState::Positioned { index } => Ok(&self.events[index]),
            _ => Err(self.invalid_state("current")),
        }
    }

    /// Remove the currently-visited record from the working sequence
    ///
    /// Removes exactly the record occupying the current slot, by position,
    /// not by value search, so when equal-valued records exist only the
    /// visited one goes. The record that shifts into the vacated slot is
    /// visited by the next `move_next`. Hands back the removed event.
    ///
    /// ## Errors
    ///
    /// `InvalidState`, with the same precondition as `current`.
    pub fn remove(&mut self) -> Result<Event> {
        match self.state {
            CursorState::Positioned { index } => {
                let event = self.events.remove(index);
                self.state = CursorState::NotStarted { next: index };
                tracing::debug!(
                    event_type = event.event_type(),
                    timestamp = event.timestamp(),
                    remaining = self.events.len(),
                    "removed event via cursor"
                );
                Ok(event)
            }
            _ => Err(self.invalid_state("remove")),
        }
    }

    /// Release the working sequence
    ///
    /// Idempotent. After close, `move_next` deterministically returns false
    /// and `current`/`remove` fail with `InvalidState` via an explicit
    /// closed-state check; they never touch the released sequence.
    pub fn close(&mut self) {
        if self.state != CursorState::Closed {
            tracing::debug!(dropped = self.events.len(), "closing cursor");
        }
        self.events = Vec::new();
        self.state = CursorState::Closed;
    }

    /// Number of records remaining in the working sequence (0 once closed)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the working sequence is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn invalid_state(&self, operation: &'static str) -> StoreError {
        tracing::debug!(operation, state = ?self.state, "cursor accessor without current record");
        self.observer.on_invalid_state(operation);
        StoreError::invalid_state(operation)
    }
}

impl Drop for EventCursor {
    fn drop(&mut self) {
        self.close();
    }
}
