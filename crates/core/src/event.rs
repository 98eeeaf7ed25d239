//! Event record type
//!
//! An `Event` is an immutable (type, timestamp) pair. The type is an opaque
//! non-empty label compared by exact value equality; the timestamp is epoch
//! milliseconds. Events carry no identity of their own: two events with equal
//! type and timestamp compare equal, and it is the store's cursor that
//! distinguishes occupied slots when removing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, timestamped, typed record
///
/// Fields are private; once constructed an event never changes. Clone is
/// cheap relative to store operations (one `String` clone) and the store
/// clones events freely when taking query snapshots.
///
/// # Examples
///
/// ```
/// use memlog_core::Event;
///
/// let e = Event::new("sensor_reading", 1_700_000_000_000);
/// assert_eq!(e.event_type(), "sensor_reading");
/// assert_eq!(e.timestamp(), 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Opaque type label, compared by value
    event_type: String,
    /// Epoch milliseconds
    timestamp: i64,
}

impl Event {
    /// Create an event from a type label and an epoch-millisecond timestamp
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }

    /// Create an event stamped from a `chrono` instant
    ///
    /// Convenience for callers that hold a `DateTime<Utc>` rather than raw
    /// epoch milliseconds.
    pub fn at(event_type: impl Into<String>, instant: DateTime<Utc>) -> Self {
        Self::new(event_type, instant.timestamp_millis())
    }

    /// The event's type label
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The event's timestamp in epoch milliseconds
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Whether this event falls inside `[start, end]` (inclusive both ends)
    pub fn in_window(&self, start: i64, end: i64) -> bool {
        self.timestamp >= start && self.timestamp <= end
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.event_type, self.timestamp)
    }
}
