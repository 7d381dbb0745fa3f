//! Ledger wiring shared by the integration tests, properties and benchmarks.

use shared_bus::InMemoryEventBus;
use shared_crypto::{hash_domain, OracleKeyPair};
use shared_types::entities::{Address, Amount, Timestamp};
use std::sync::Arc;
use wave_ledger::adapters::{
    BeaconSigner, BusEventPublisher, InMemoryLedgerStore, InMemoryTreasury, SignedBeaconEntropy,
};
use wave_ledger::domain::{LedgerConfig, LedgerError, SubmitReceipt, DEFAULT_AWARD_THRESHOLD};
use wave_ledger::ports::{LedgerStore, WaveLedgerApi};
use wave_ledger::service::{LedgerDependencies, LedgerService};
use wave_ledger::RewardRandomizer;

/// 0.1 ether, as the portal is deployed with.
pub const DEPLOY_FUNDING: Amount = 100_000_000_000_000_000;

pub type PortalLedger<S> = LedgerService<
    S,
    Arc<SignedBeaconEntropy>,
    Arc<InMemoryTreasury>,
    BusEventPublisher<Arc<InMemoryEventBus>>,
>;

/// A ledger wired to a bus, a treasury and a deterministic beacon oracle.
///
/// The oracle publishes nothing on its own: every round comes from
/// `publish_round`, `wave` or `time_where`, and decides one submission.
pub struct Portal<S: LedgerStore> {
    pub ledger: PortalLedger<S>,
    pub bus: Arc<InMemoryEventBus>,
    pub treasury: Arc<InMemoryTreasury>,
    pub entropy: Arc<SignedBeaconEntropy>,
    pub oracle: BeaconSigner,
}

impl Portal<InMemoryLedgerStore> {
    pub fn in_memory(config: LedgerConfig) -> Self {
        Self::with_store(InMemoryLedgerStore::new(), config)
    }
}

impl<S: LedgerStore> Portal<S> {
    pub fn with_store(store: S, config: LedgerConfig) -> Self {
        let oracle = BeaconSigner::new(OracleKeyPair::from_seed([0x42; 32]));
        let entropy = Arc::new(SignedBeaconEntropy::new(oracle.public_key()));

        let bus = Arc::new(InMemoryEventBus::new());
        let treasury = Arc::new(InMemoryTreasury::new());
        let deps = LedgerDependencies {
            store,
            entropy: entropy.clone(),
            transfer: treasury.clone(),
            publisher: BusEventPublisher::new(bus.clone()),
        };
        Self {
            ledger: LedgerService::new(deps, config).expect("ledger init"),
            bus,
            treasury,
            entropy,
            oracle,
        }
    }

    /// Sign and install the oracle's next round. Randomness is derived from
    /// the round number so runs are reproducible.
    pub fn publish_round(&self) -> u64 {
        let round = self.entropy.latest_round().map_or(1, |r| r + 1);
        let randomness = hash_domain(b"wave-tests/beacon", &round.to_be_bytes());
        self.entropy
            .accept(self.oracle.sign(round, randomness))
            .expect("next round is fresh")
    }

    /// Publish a round, then submit against it.
    pub fn wave(
        &self,
        sender: Address,
        message: &str,
        now: Timestamp,
    ) -> Result<SubmitReceipt, LedgerError> {
        self.publish_round();
        self.ledger.submit_wave(sender, message, now)
    }

    /// Publish a round and return the first time at or after `from` for which
    /// `sender` is (not) awarded under it. Submit through `ledger` directly so
    /// the decision uses that round.
    pub fn time_where(&self, sender: &Address, awarded: bool, from: Timestamp) -> Timestamp {
        self.publish_round();
        let beacon = self.entropy.unspent_beacon().expect("round just published");
        let randomizer = RewardRandomizer::new(DEFAULT_AWARD_THRESHOLD);
        (from..)
            .find(|&t| randomizer.decide(sender, t, &beacon.randomness).awarded == awarded)
            .expect("award outcome reachable")
    }
}

/// Deterministic distinct address for test participant `n`.
pub fn participant(n: u8) -> Address {
    let mut address = [0u8; 20];
    address[0] = 0xEE;
    address[19] = n;
    address
}
