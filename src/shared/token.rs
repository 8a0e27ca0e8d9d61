//! Time-based Record Tokens
//!
//! Snowflake-style identifiers rendered with a collection prefix, e.g.
//! `client_1718035200000_00003`. The millisecond timestamp keeps them
//! time-ordered; the sequence keeps ids minted within one millisecond unique.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Generator for prefixed, time-based unique tokens.
#[derive(Debug, Default)]
pub struct TokenGenerator {
    /// Packed `(millis << 16) | sequence` of the last issued token
    last: AtomicU64,
}

impl TokenGenerator {
    /// Create a new token generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a token such as `plan_1718035200000_00000`.
    pub fn generate(&self, prefix: &str) -> String {
        let (millis, sequence) = self.next();
        format_token(prefix, millis, sequence)
    }

    /// Reserve the next `(millis, sequence)` pair.
    ///
    /// Never goes backwards even if the wall clock does.
    fn next(&self) -> (u64, u64) {
        let now = current_millis();
        let mut current = self.last.load(Ordering::SeqCst);
        loop {
            let last_millis = current >> 16;
            let candidate = if now > last_millis {
                now << 16
            } else {
                current + 1
            };

            match self
                .last
                .compare_exchange(current, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return (candidate >> 16, candidate & 0xFFFF),
                Err(actual) => current = actual,
            }
        }
    }
}

fn current_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// The sequence fills 16 bits, so five digits keep every token the same width.
fn format_token(prefix: &str, millis: u64, sequence: u64) -> String {
    format!("{}_{}_{:05}", prefix, millis, sequence)
}
