//! # Wave Ledger Service
//!
//! Orchestrates the domain components behind `WaveLedgerApi`.
//!
//! ## Submission pipeline
//!
//! ```text
//! Received ─validate─→ CooldownChecked ─decide/commit─→ Recorded ─settle─→ Settled ─publish─→ Notified
//! ```
//!
//! Steps up to `Recorded` run under one exclusive lock. Ledger state is staged,
//! committed to the store, and only then applied in memory, so a failed commit
//! leaves nothing behind. The lock is released before funds are handed off,
//! so a transfer that calls back into the ledger observes the already
//! decremented balance and the sender's new cooldown.


use crate::domain::{
    validate_message, CooldownDecision, CooldownGuard, LedgerConfig, LedgerError, PayoutController,
    PayoutOutcome, RewardRandomizer, ServiceStats, SubmitReceipt, WaveRecord, WaveStore,
};
use crate::ports::inbound::WaveLedgerApi;
use crate::ports::outbound::{
    EntropySource, FundTransfer, LedgerCommit, LedgerStore, WaveEventPublisher,
};
use parking_lot::RwLock;
use shared_types::entities::{address_to_hex, Address, Amount, Timestamp, ZERO_ADDRESS};
use tracing::{debug, error, info, instrument, warn};

/// Dependencies for LedgerService
pub struct LedgerDependencies<S, E, T, P> {
    pub store: S,
    pub entropy: E,
    pub transfer: T,
    pub publisher: P,
}

/// Mutable ledger state and the store that persists it, guarded together.
struct LedgerState<S> {
    store: S,
    waves: WaveStore,
    cooldown: CooldownGuard,
    balance: Amount,
}

/// The wave ledger service.
pub struct LedgerService<S, E, T, P>
where
    S: LedgerStore,
    E: EntropySource,
    T: FundTransfer,
    P: WaveEventPublisher,
{
    state: RwLock<LedgerState<S>>,
    entropy: E,
    transfer: T,
    publisher: P,
    randomizer: RewardRandomizer,
    payout: PayoutController,
    config: LedgerConfig,
    stats: RwLock<ServiceStats>,
}

impl<S, E, T, P> LedgerService<S, E, T, P>
where
    S: LedgerStore,
    E: EntropySource,
    T: FundTransfer,
    P: WaveEventPublisher,
{
    /// Create the service, restoring state from the store.
    ///
    /// A store with no history is seeded with `config.initial_funding`. A
    /// restored store keeps its persisted balance.
    pub fn new(deps: LedgerDependencies<S, E, T, P>, config: LedgerConfig) -> Result<Self, LedgerError> {
        let mut store = deps.store;

        let (waves, cooldown, balance) = match store.load()? {
            Some(snapshot) => {
                let cooldown = CooldownGuard::restore(config.cooldown_secs, snapshot.cooldown_entries());
                info!(
                    waves = snapshot.records.len(),
                    balance = %snapshot.balance,
                    "Ledger restored"
                );
                (WaveStore::from_records(snapshot.records), cooldown, snapshot.balance)
            }
            None => {
                let balance = config.initial_funding;
                if balance > 0 {
                    store.commit(&LedgerCommit::Funding {
                        amount: balance,
                        balance_after: balance,
                    })?;
                }
                info!(balance = %balance, "Ledger created");
                (WaveStore::new(), CooldownGuard::new(config.cooldown_secs), balance)
            }
        };

        Ok(Self {
            state: RwLock::new(LedgerState {
                store,
                waves,
                cooldown,
                balance,
            }),
            entropy: deps.entropy,
            transfer: deps.transfer,
            publisher: deps.publisher,
            randomizer: RewardRandomizer::new(config.award_threshold),
            payout: PayoutController::new(config.payout_unit),
            config,
            stats: RwLock::new(ServiceStats::default()),
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Hand the payout to the recipient. On failure the pool is re-credited.
    fn hand_off(&self, recipient: &Address, amount: Amount) -> PayoutOutcome {
        match self.transfer.transfer(recipient, amount) {
            Ok(()) => {
                self.publisher.publish_payout(recipient, amount);
                PayoutOutcome::Transferred { amount }
            }
            Err(e) => {
                warn!(
                    recipient = %address_to_hex(recipient),
                    error = %e,
                    "Payout hand-off failed, re-crediting pool"
                );
                self.refund(amount);
                PayoutOutcome::TransferFailed
            }
        }
    }

    /// Re-credit a payout that never reached its recipient. A refund that
    /// cannot be persisted is counted in `refunds_failed` and `unrefunded`.
    fn refund(&self, amount: Amount) {
        let committed = {
            let mut state = self.state.write();
            let balance_after = state.balance.saturating_add(amount);
            let commit = LedgerCommit::Funding {
                amount,
                balance_after,
            };
            match state.store.commit(&commit) {
                Ok(()) => {
                    state.balance = balance_after;
                    true
                }
                Err(e) => {
                    error!(error = %e, amount = %amount, "Failed to persist payout refund");
                    false
                }
            }
        };

        if !committed {
            let mut stats = self.stats.write();
            stats.refunds_failed += 1;
            stats.unrefunded = stats.unrefunded.saturating_add(amount);
        }
    }

    fn record_outcome(&self, outcome: PayoutOutcome) {
        let mut stats = self.stats.write();
        stats.waves_accepted += 1;
        match outcome {
            PayoutOutcome::Transferred { amount } => {
                stats.payouts_transferred += 1;
                stats.total_paid_out = stats.total_paid_out.saturating_add(amount);
            }
            PayoutOutcome::Skipped => stats.payouts_skipped += 1,
            PayoutOutcome::InsufficientFunds => stats.payouts_underfunded += 1,
            PayoutOutcome::TransferFailed => stats.payouts_failed += 1,
        }
    }
}

impl<S, E, T, P> WaveLedgerApi for LedgerService<S, E, T, P>
where
    S: LedgerStore,
    E: EntropySource,
    T: FundTransfer,
    P: WaveEventPublisher,
{
    #[instrument(skip(self, sender, message), fields(sender = %address_to_hex(&sender)))]
    fn submit_wave(
        &self,
        sender: Address,
        message: &str,
        now: Timestamp,
    ) -> Result<SubmitReceipt, LedgerError> {
        if sender == ZERO_ADDRESS {
            self.stats.write().rejected_invalid += 1;
            debug!("Wave from the zero address rejected");
            return Err(LedgerError::InvalidSender);
        }
        if let Err(reason) = validate_message(message, self.config.max_message_len) {
            self.stats.write().rejected_invalid += 1;
            debug!(%reason, "Wave rejected");
            return Err(LedgerError::InvalidMessage(reason));
        }

        let (record, settlement, total_waves) = {
            let mut state = self.state.write();

            if let CooldownDecision::Denied { remaining_secs } = state.cooldown.check(&sender, now) {
                drop(state);
                self.stats.write().rejected_cooldown += 1;
                warn!(remaining_secs, "Wave denied by cooldown");
                return Err(LedgerError::Denied { remaining_secs });
            }

            let entropy = self.entropy.entropy(&sender, now)?;
            let decision = self.randomizer.decide(&sender, now, &entropy);
            debug!(seed = decision.seed, awarded = decision.awarded, "Reward decided");

            let record = WaveRecord {
                sender,
                timestamp: now,
                message: message.to_string(),
                seed: decision.seed,
            };
            let settlement = self.payout.settle(decision.awarded, state.balance);

            let commit = LedgerCommit::Wave {
                record: record.clone(),
                balance_after: settlement.balance_after,
            };
            if let Err(e) = state.store.commit(&commit) {
                error!(error = %e, "Ledger commit failed, wave not recorded");
                return Err(e.into());
            }

            state.waves.append(record.clone());
            state.cooldown.record(sender, now);
            state.balance = settlement.balance_after;
            (record, settlement, state.waves.len())
        };

        let payout = match settlement.outcome {
            PayoutOutcome::Transferred { amount } => self.hand_off(&sender, amount),
            other => other,
        };
        if payout == PayoutOutcome::InsufficientFunds {
            warn!(unit = %self.payout.unit(), "Awarded wave but pool is underfunded");
        }

        self.publisher.publish_new_wave(&record);
        self.record_outcome(payout);

        info!(total_waves, seed = record.seed, payout = ?payout, "Wave accepted");
        Ok(SubmitReceipt {
            total_waves,
            seed: record.seed,
            payout,
        })
    }

    fn total_waves(&self) -> usize {
        self.state.read().waves.len()
    }

    fn all_waves(&self) -> Vec<WaveRecord> {
        self.state.read().waves.records().to_vec()
    }

    fn wave(&self, index: usize) -> Result<WaveRecord, LedgerError> {
        self.state.read().waves.get(index).cloned()
    }

    fn waves_by(&self, sender: &Address) -> Vec<WaveRecord> {
        self.state.read().waves.by_sender(sender).cloned().collect()
    }

    fn last_waved_at(&self, sender: &Address) -> Option<Timestamp> {
        self.state.read().cooldown.last_time(sender)
    }

    fn cooldown_remaining(&self, sender: &Address, now: Timestamp) -> u64 {
        self.state.read().cooldown.remaining(sender, now)
    }

    fn balance(&self) -> Amount {
        self.state.read().balance
    }

    #[instrument(skip(self))]
    fn fund(&self, amount: Amount) -> Result<Amount, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let balance = {
            let mut state = self.state.write();
            let balance_after =
                state
                    .balance
                    .checked_add(amount)
                    .ok_or(LedgerError::BalanceOverflow {
                        balance: state.balance,
                        amount,
                    })?;

            state.store.commit(&LedgerCommit::Funding {
                amount,
                balance_after,
            })?;
            state.balance = balance_after;
            balance_after
        };

        self.publisher.publish_funded(amount, balance);
        info!(balance = %balance, "Ledger funded");
        Ok(balance)
    }

    fn stats(&self) -> ServiceStats {
        *self.stats.read()
    }
}
