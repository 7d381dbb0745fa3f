//! Core entities and named constants of the wave ledger.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Amount, Timestamp};

/// Minimum seconds between two accepted waves from one sender (15 minutes).
pub const DEFAULT_COOLDOWN_SECS: u64 = 900;

/// Amount paid for an awarded wave: 0.0001 ether in wei.
pub const DEFAULT_PAYOUT_UNIT: Amount = 100_000_000_000_000;

/// Seeds at or below this value are awarded.
pub const DEFAULT_AWARD_THRESHOLD: u8 = 50;

/// Seeds are reduced modulo this value, so they fall in `[0, 99]`.
pub const SEED_MODULUS: u8 = 100;

/// Maximum message length in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 280;

/// Pool balance at first construction: 0.1 ether in wei.
pub const DEFAULT_INITIAL_FUNDING: Amount = 100_000_000_000_000_000;

/// One accepted wave. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveRecord {
    pub sender: Address,
    pub timestamp: Timestamp,
    pub message: String,
    /// Randomizer output in `[0, 99]`.
    pub seed: u8,
}

/// What happened to the pool after a wave was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutOutcome {
    /// The payout unit left the pool and reached the sender.
    Transferred { amount: Amount },
    /// The seed was above the threshold.
    Skipped,
    /// Awarded, but the pool held less than one payout unit.
    InsufficientFunds,
    /// The hand-off failed and the pool was re-credited.
    TransferFailed,
}

impl PayoutOutcome {
    /// Whether funds actually left the pool for good.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Transferred { .. })
    }
}

/// Result of a successful `submit_wave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Wave count including the one just accepted.
    pub total_waves: usize,
    pub seed: u8,
    pub payout: PayoutOutcome,
}

/// Counters describing everything the service has processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub waves_accepted: u64,
    pub rejected_invalid: u64,
    pub rejected_cooldown: u64,
    pub payouts_transferred: u64,
    pub payouts_skipped: u64,
    pub payouts_underfunded: u64,
    pub payouts_failed: u64,
    /// Sum of amounts that left the pool and stayed out.
    pub total_paid_out: Amount,
    /// Failed hand-offs whose re-credit could not be persisted.
    pub refunds_failed: u64,
    /// Debited from the pool but neither paid out nor re-credited.
    pub unrefunded: Amount,
}
