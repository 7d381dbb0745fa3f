//! In-memory recipient accounts for paid-out funds.

use crate::domain::TransferError;
use crate::ports::outbound::FundTransfer;
use parking_lot::RwLock;
use shared_types::entities::{Address, Amount};
use std::collections::HashMap;

/// Credits recipients' accounts. Stands in for the chain's native transfer.
#[derive(Debug, Default)]
pub struct InMemoryTreasury {
    accounts: RwLock<HashMap<Address, Amount>>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total received by `recipient`.
    pub fn paid(&self, recipient: &Address) -> Amount {
        self.accounts.read().get(recipient).copied().unwrap_or(0)
    }

    pub fn total_paid(&self) -> Amount {
        self.accounts.read().values().sum()
    }
}

impl FundTransfer for InMemoryTreasury {
    fn transfer(&self, recipient: &Address, amount: Amount) -> Result<(), TransferError> {
        let mut accounts = self.accounts.write();
        let entry = accounts.entry(*recipient).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or(TransferError::RecipientOverflow)?;
        Ok(())
    }
}
