//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised by ledger persistence backends.
///
/// Every variant is fatal for the operation that hit it; the ledger leaves its
/// in-memory state untouched when a commit fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// An entry could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Data corruption detected during read.
    #[error("Data corruption: checksum mismatch at offset {offset}")]
    DataCorruption { offset: u64 },

    /// The backend refuses further writes.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Another store instance holds the data directory.
    #[error("Data directory already in use{}: {path}", .pid.map(|p| format!(" by process {}", p)).unwrap_or_default())]
    Locked { path: String, pid: Option<u32> },
}

/// Errors parsing a textual address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Wrong number of hex digits.
    #[error("Invalid address length: expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-hex characters.
    #[error("Invalid address hex: {0}")]
    InvalidHex(String),
}
