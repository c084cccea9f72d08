//! History store port
//!
//! Durable key-value persistence of the full thread list under a single
//! fixed record. The port is infallible from the caller's perspective:
//! adapters tolerate a missing or corrupt record by returning no data, and
//! swallow write failures (logging them) so the in-memory state stays
//! authoritative for the running session.

use haichat_domain::Thread;

/// Durable store for the serialized thread list.
///
/// `save` must run synchronously with the state mutation that triggered it
/// (no batching or debouncing) so an abrupt termination loses at most the
/// current turn.
pub trait HistoryStore: Send + Sync {
    /// Load the persisted thread list, or `None` when no usable record exists.
    fn load(&self) -> Option<Vec<Thread>>;

    /// Persist the full thread list, replacing any previous record.
    fn save(&self, threads: &[Thread]);

    /// Remove the persisted record entirely.
    fn clear(&self);
}

/// Null store: loads nothing, persists nothing. Used for ephemeral sessions
/// and as a default in tests.
pub struct NoHistoryStore;

impl HistoryStore for NoHistoryStore {
    fn load(&self) -> Option<Vec<Thread>> {
        None
    }

    fn save(&self, _threads: &[Thread]) {}

    fn clear(&self) {}
}
