//! Wave ledger error types.

use shared_types::entities::Amount;
use shared_types::errors::StorageError;
use thiserror::Error;

/// Why a message was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMessageReason {
    /// Empty or whitespace only.
    Empty,
    /// Longer than the configured maximum, counted in characters.
    TooLong { len: usize, max: usize },
}

impl std::fmt::Display for InvalidMessageReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "message is empty"),
            Self::TooLong { len, max } => {
                write!(f, "message has {} characters, maximum is {}", len, max)
            }
        }
    }
}

/// Errors returned by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Caller must fix the message and retry.
    #[error("Invalid message: {0}")]
    InvalidMessage(InvalidMessageReason),

    /// The zero address cannot wave.
    #[error("Invalid sender: the zero address cannot wave")]
    InvalidSender,

    /// Sender is still cooling down.
    #[error("Wave denied: retry in {remaining_secs}s")]
    Denied { remaining_secs: u64 },

    #[error("Wave index {index} out of range (total {len})")]
    OutOfRange { index: usize, len: usize },

    /// Funding amount must be positive.
    #[error("Invalid amount: funding must be greater than zero")]
    InvalidAmount,

    #[error("Balance overflow: {balance} + {amount}")]
    BalanceOverflow { balance: Amount, amount: Amount },

    /// Commit to the ledger store failed. Nothing was applied.
    #[error("Storage fault: {0}")]
    Storage(#[from] StorageError),

    #[error("Entropy unavailable: {0}")]
    Entropy(#[from] EntropyError),
}

impl LedgerError {
    /// Whether the caller can succeed by retrying with different input or later.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessage(_)
                | Self::InvalidSender
                | Self::Denied { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidAmount
                | Self::Entropy(EntropyError::RoundConsumed { .. })
        )
    }
}

/// Errors from an entropy source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// No beacon has been accepted yet.
    #[error("No randomness beacon available")]
    NoBeacon,

    #[error("Beacon round {round} is not newer than round {latest}")]
    StaleRound { round: u64, latest: u64 },

    #[error("Beacon signature does not verify")]
    BadSignature,

    /// The current round already decided a submission; wait for the next one.
    #[error("Beacon round {round} already spent")]
    RoundConsumed { round: u64 },
}

/// Errors from handing funds to a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Transfer rejected: {0}")]
    Rejected(String),

    #[error("Recipient balance overflow")]
    RecipientOverflow,
}
