//! # Inbound Port - WaveLedgerApi
//!
//! Primary driving port exposing the wave ledger.

use crate::domain::{LedgerError, ServiceStats, SubmitReceipt, WaveRecord};
use shared_types::entities::{Address, Amount, Timestamp};

/// Primary API of the wave ledger.
///
/// Writes (`submit_wave`, `fund`) are serialized against each other. Reads may
/// run concurrently and return a copy consistent with some completed write.
///
/// # Example
///
/// ```rust,ignore
/// use wave_ledger::ports::WaveLedgerApi;
///
/// fn example(ledger: &impl WaveLedgerApi, now: u64) {
///     let receipt = ledger.submit_wave([0xAA; 20], "hi", now)?;
///     assert_eq!(receipt.total_waves, ledger.total_waves());
/// }
/// ```
pub trait WaveLedgerApi: Send + Sync {
    /// Submits a wave from `sender` at caller-supplied time `now` (Unix seconds).
    ///
    /// # Errors
    /// - `InvalidSender`: `sender` is the zero address. Nothing changes.
    /// - `InvalidMessage`: empty, blank or too long. Nothing changes.
    /// - `Denied`: sender is cooling down. Nothing changes.
    /// - `Entropy`: no unspent randomness round. Nothing changes.
    /// - `Storage`: commit failed. Nothing changes.
    ///
    /// A payout that cannot be made is reported in the receipt, not as an error.
    fn submit_wave(
        &self,
        sender: Address,
        message: &str,
        now: Timestamp,
    ) -> Result<SubmitReceipt, LedgerError>;

    fn total_waves(&self) -> usize;

    /// Every wave, oldest first.
    fn all_waves(&self) -> Vec<WaveRecord>;

    /// # Errors
    /// - `OutOfRange`: `index >= total_waves()`
    fn wave(&self, index: usize) -> Result<WaveRecord, LedgerError>;

    /// Waves from one sender, oldest first.
    fn waves_by(&self, sender: &Address) -> Vec<WaveRecord>;

    fn last_waved_at(&self, sender: &Address) -> Option<Timestamp>;

    /// Seconds until `sender` may wave again; 0 when allowed at `now`.
    fn cooldown_remaining(&self, sender: &Address, now: Timestamp) -> u64;

    fn balance(&self) -> Amount;

    /// Credits the pool and returns the new balance.
    ///
    /// # Errors
    /// - `InvalidAmount`: `amount == 0`
    /// - `BalanceOverflow`: the pool cannot hold the sum
    /// - `Storage`: commit failed
    fn fund(&self, amount: Amount) -> Result<Amount, LedgerError>;

    fn stats(&self) -> ServiceStats;
}
