//! Balance-safe payout settlement.

use super::entities::PayoutOutcome;
use shared_types::entities::Amount;

/// Outcome of settling one wave and the pool balance that results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: PayoutOutcome,
    pub balance_after: Amount,
}

/// Decides whether the pool pays out and by how much it shrinks.
///
/// Settlement only computes the new balance. The caller applies it to ledger
/// state before any funds are handed off.
#[derive(Debug, Clone, Copy)]
pub struct PayoutController {
    unit: Amount,
}

impl PayoutController {
    pub fn new(unit: Amount) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Amount {
        self.unit
    }

    pub fn settle(&self, awarded: bool, balance: Amount) -> Settlement {
        if !awarded {
            return Settlement {
                outcome: PayoutOutcome::Skipped,
                balance_after: balance,
            };
        }

        match balance.checked_sub(self.unit) {
            Some(balance_after) => Settlement {
                outcome: PayoutOutcome::Transferred { amount: self.unit },
                balance_after,
            },
            None => Settlement {
                outcome: PayoutOutcome::InsufficientFunds,
                balance_after: balance,
            },
        }
    }
}
