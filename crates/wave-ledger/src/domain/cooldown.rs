//! Per-sender rate limiting keyed by the last accepted submission time.

use shared_types::entities::{Address, Timestamp};
use std::collections::HashMap;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownDecision {
    Allowed,
    /// Seconds left until the sender may wave again.
    Denied { remaining_secs: u64 },
}

/// Tracks when each sender last had a wave accepted.
///
/// Entries are only written after a submission is fully accepted and are never
/// removed. A clock that moves backwards counts as zero elapsed time.
#[derive(Debug, Clone)]
pub struct CooldownGuard {
    window_secs: u64,
    last_waved: HashMap<Address, Timestamp>,
}

impl CooldownGuard {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_secs,
            last_waved: HashMap::new(),
        }
    }

    /// Rebuild from persisted `(sender, last_time)` pairs.
    pub fn restore(window_secs: u64, entries: impl IntoIterator<Item = (Address, Timestamp)>) -> Self {
        Self {
            window_secs,
            last_waved: entries.into_iter().collect(),
        }
    }

    /// Denied iff the sender waved before and fewer than `window_secs` have passed.
    pub fn check(&self, sender: &Address, now: Timestamp) -> CooldownDecision {
        match self.remaining(sender, now) {
            0 => CooldownDecision::Allowed,
            remaining_secs => CooldownDecision::Denied { remaining_secs },
        }
    }

    /// Seconds until `sender` is allowed again; 0 when allowed now.
    pub fn remaining(&self, sender: &Address, now: Timestamp) -> u64 {
        let Some(&last) = self.last_waved.get(sender) else {
            return 0;
        };
        let elapsed = now.saturating_sub(last);
        self.window_secs.saturating_sub(elapsed)
    }

    /// Overwrites the sender's last time unconditionally.
    pub fn record(&mut self, sender: Address, now: Timestamp) {
        self.last_waved.insert(sender, now);
    }

    pub fn last_time(&self, sender: &Address) -> Option<Timestamp> {
        self.last_waved.get(sender).copied()
    }

    pub fn window_secs(&self) -> u64 {
        self.window_secs
    }

    /// Number of senders that ever waved.
    pub fn len(&self) -> usize {
        self.last_waved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_waved.is_empty()
    }
}
