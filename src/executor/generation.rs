//! Latest-response-wins tracking for overlapping calls.
//!
//! A user can trigger the same flow repeatedly (double-clicking "verify")
//! before the first call resolves. Each flow takes a [`RequestTicket`] when it
//! starts; when its response arrives the caller checks the ticket with
//! [`GenerationGuard::is_current`] and drops the result if a newer flow has
//! started since. Nothing is aborted on the wire.

use uuid::Uuid;

/// Identifies one started flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Unique identifier, used to correlate log lines.
    pub request_id: String,

    /// Monotonic generation this ticket was issued at.
    pub generation: u64,
}

/// Issues tickets and remembers which one is the latest.
#[derive(Debug, Default)]
pub struct GenerationGuard {
    generation: u64,
}

impl GenerationGuard {
    /// Creates a guard that has issued no tickets.
    pub fn new() -> Self {
        Self { generation: 0 }
    }

    /// Starts a new flow, superseding every ticket issued before.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            request_id: Uuid::new_v4().to_string(),
            generation: self.generation,
        }
    }

    /// Whether `ticket` belongs to the most recently started flow.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Supersedes every outstanding ticket without starting a new flow.
    ///
    /// Used on logout so late responses cannot resurrect the session.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Current generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
