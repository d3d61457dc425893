//! Global serialization of room-membership mutations.

use tokio::sync::{Mutex, MutexGuard};

/// Coarse lock held across a membership mutation and its broadcasts.
///
/// Two simultaneous joins to the same room must not lose a participant, and
/// no member may observe the effects of a later membership change before an
/// earlier one. Given expected room sizes, serializing all membership
/// mutations globally is sufficient; finer-grained per-room locking is
/// deliberately not attempted.
#[derive(Default)]
pub struct SessionGate {
    gate: Mutex<()>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self { gate: Mutex::new(()) }
    }

    /// Acquire the gate for the duration of one membership operation.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
