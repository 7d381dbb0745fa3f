//! Reward decision derived from external entropy, the sender and the time.

use super::entities::SEED_MODULUS;
use shared_crypto::Sha256Hasher;
use shared_types::entities::{Address, Timestamp};

/// Domain tag for seed derivation.
const SEED_DOMAIN: &[u8] = b"wave-ledger/seed/v1";

/// A seed and whether it earned a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardDecision {
    /// In `[0, 99]`.
    pub seed: u8,
    pub awarded: bool,
}

/// Pure decision function: identical inputs always yield the same decision.
#[derive(Debug, Clone, Copy)]
pub struct RewardRandomizer {
    threshold: u8,
}

impl RewardRandomizer {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// `seed = H(entropy || sender || now) mod 100`, awarded when `seed <= threshold`.
    pub fn decide(&self, sender: &Address, now: Timestamp, entropy: &[u8; 32]) -> RewardDecision {
        let seed = Self::seed(sender, now, entropy);
        RewardDecision {
            seed,
            awarded: seed <= self.threshold,
        }
    }

    fn seed(sender: &Address, now: Timestamp, entropy: &[u8; 32]) -> u8 {
        let mut hasher = Sha256Hasher::with_domain(SEED_DOMAIN);
        hasher.update(entropy).update(sender).update(&now.to_be_bytes());
        let digest = hasher.finalize();

        // 128 bits keeps the modulo bias far below one part in 10^30.
        let mut wide = [0u8; 16];
        wide.copy_from_slice(&digest[..16]);
        (u128::from_be_bytes(wide) % u128::from(SEED_MODULUS)) as u8
    }
}
