//! Per-operation request status tracking.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Lifecycle of one async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Latest status per operation plus the number of requests in flight.
///
/// Overlapping dispatches of the same operation share one entry; the last
/// transition wins.
#[derive(Debug, Clone)]
pub struct RequestLog<Op> {
    statuses: HashMap<Op, RequestStatus>,
    in_flight: usize,
}

impl<Op> Default for RequestLog<Op> {
    fn default() -> Self {
        Self {
            statuses: HashMap::new(),
            in_flight: 0,
        }
    }
}

impl<Op: Eq + Hash> PartialEq for RequestLog<Op> {
    fn eq(&self, other: &Self) -> bool {
        self.statuses == other.statuses && self.in_flight == other.in_flight
    }
}

impl<Op: Eq + Hash> Eq for RequestLog<Op> {}

impl<Op: Copy + Eq + Hash> RequestLog<Op> {
    /// Mark an operation as started.
    pub fn begin(&mut self, operation: Op) {
        self.statuses.insert(operation, RequestStatus::Pending);
        self.in_flight += 1;
    }

    /// Mark an operation as settled with `status`.
    pub fn finish(&mut self, operation: Op, status: RequestStatus) {
        self.statuses.insert(operation, status);
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn status(&self, operation: Op) -> RequestStatus {
        self.statuses.get(&operation).copied().unwrap_or_default()
    }

    /// Whether any request is still pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
