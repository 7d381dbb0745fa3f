//! Outbound (Driven) ports for the wave ledger.
//!
//! These traits define the external systems the ledger depends on.

use crate::domain::{EntropyError, TransferError, WaveRecord};
use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Amount, Timestamp};
use shared_types::errors::StorageError;
use std::sync::Arc;

/// One atomic unit of durable ledger change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommit {
    /// An accepted wave. The sender's cooldown entry is implied by the record.
    Wave {
        record: WaveRecord,
        balance_after: Amount,
    },
    /// Pool credit: operator funding or a refund after a failed hand-off.
    Funding { amount: Amount, balance_after: Amount },
}

/// Ledger state rebuilt from persisted commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Oldest first.
    pub records: Vec<WaveRecord>,
    pub balance: Amount,
}

impl LedgerSnapshot {
    /// Replays one commit on top of this snapshot.
    pub fn apply(&mut self, commit: &LedgerCommit) {
        match commit {
            LedgerCommit::Wave {
                record,
                balance_after,
            } => {
                self.records.push(record.clone());
                self.balance = *balance_after;
            }
            LedgerCommit::Funding { balance_after, .. } => {
                self.balance = *balance_after;
            }
        }
    }

    /// Last accepted time per sender, derived from the records.
    pub fn cooldown_entries(&self) -> impl Iterator<Item = (Address, Timestamp)> + '_ {
        self.records.iter().map(|r| (r.sender, r.timestamp))
    }
}

/// Durable storage for ledger state.
///
/// A commit either persists completely or returns an error having persisted
/// nothing that a later `load` would observe.
pub trait LedgerStore: Send + Sync {
    /// Restores state. `Ok(None)` for a store that never saw a commit.
    fn load(&mut self) -> Result<Option<LedgerSnapshot>, StorageError>;

    fn commit(&mut self, commit: &LedgerCommit) -> Result<(), StorageError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn load(&mut self) -> Result<Option<LedgerSnapshot>, StorageError> {
        (**self).load()
    }

    fn commit(&mut self, commit: &LedgerCommit) -> Result<(), StorageError> {
        (**self).commit(commit)
    }
}

/// Source of randomness the sender cannot predict or choose.
pub trait EntropySource: Send + Sync {
    fn entropy(&self, sender: &Address, now: Timestamp) -> Result<[u8; 32], EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for Arc<E> {
    fn entropy(&self, sender: &Address, now: Timestamp) -> Result<[u8; 32], EntropyError> {
        (**self).entropy(sender, now)
    }
}

/// Moves funds out of the pool to a recipient.
///
/// Called after ledger state is updated and the ledger lock is released, so an
/// implementation may call back into the ledger.
pub trait FundTransfer: Send + Sync {
    fn transfer(&self, recipient: &Address, amount: Amount) -> Result<(), TransferError>;
}

impl<T: FundTransfer + ?Sized> FundTransfer for Arc<T> {
    fn transfer(&self, recipient: &Address, amount: Amount) -> Result<(), TransferError> {
        (**self).transfer(recipient, amount)
    }
}

/// Notification sink. Delivery is best-effort and never fails a write.
pub trait WaveEventPublisher: Send + Sync {
    fn publish_new_wave(&self, record: &WaveRecord);

    fn publish_payout(&self, recipient: &Address, amount: Amount);

    fn publish_funded(&self, amount: Amount, balance: Amount);
}

impl<P: WaveEventPublisher + ?Sized> WaveEventPublisher for Arc<P> {
    fn publish_new_wave(&self, record: &WaveRecord) {
        (**self).publish_new_wave(record)
    }

    fn publish_payout(&self, recipient: &Address, amount: Amount) {
        (**self).publish_payout(recipient, amount)
    }

    fn publish_funded(&self, amount: Amount, balance: Amount) {
        (**self).publish_funded(amount, balance)
    }
}

/// Time source for wall-clock Unix seconds.
///
/// The ledger takes `now` from its caller. Drivers use this to obtain it.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Mock time source for testing.
#[cfg(test)]
pub struct MockTimeSource {
    time: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.time.fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Entropy source returning the same bytes for every call.
#[cfg(test)]
pub struct FixedEntropy(pub [u8; 32]);

#[cfg(test)]
impl EntropySource for FixedEntropy {
    fn entropy(&self, _sender: &Address, _now: Timestamp) -> Result<[u8; 32], EntropyError> {
        Ok(self.0)
    }
}

/// Transfer that always fails.
#[cfg(test)]
pub struct FailingTransfer;

#[cfg(test)]
impl FundTransfer for FailingTransfer {
    fn transfer(&self, _recipient: &Address, _amount: Amount) -> Result<(), TransferError> {
        Err(TransferError::Rejected("recipient refused funds".into()))
    }
}
