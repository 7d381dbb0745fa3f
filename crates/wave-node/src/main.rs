//! # Wave Node
//!
//! Runtime harness for the wave ledger.
//!
//! ## Startup Sequence
//!
//! 1. Initialize tracing (`WAVE_LOG_LEVEL`, then `RUST_LOG`, default `info`)
//! 2. Load `LedgerConfig` from the environment and validate it
//! 3. Build the event bus, ledger store, beacon oracle and treasury
//! 4. Construct the ledger (seeded with the initial funding on first run)
//! 5. Spawn a subscriber that logs every new wave
//! 6. Submit two demo waves and log the outcome, balance and ledger contents

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, LedgerEvent};
use shared_types::entities::{address_from_hex, address_to_hex, Address};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wave_ledger::adapters::{
    BeaconSigner, BusEventPublisher, FileLedgerStore, InMemoryLedgerStore, InMemoryTreasury,
    SignedBeaconEntropy,
};
use wave_ledger::domain::{LedgerConfig, SubmitReceipt};
use wave_ledger::ports::{LedgerStore, SystemTimeSource, TimeSource, WaveLedgerApi};
use wave_ledger::service::{LedgerDependencies, LedgerService};

/// Demo participants.
const OWNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const VISITOR: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

type NodeLedger = LedgerService<
    Box<dyn LedgerStore>,
    Arc<SignedBeaconEntropy>,
    Arc<InMemoryTreasury>,
    BusEventPublisher<Arc<InMemoryEventBus>>,
>;

/// The ledger together with the adapters the harness drives directly.
struct WaveNode {
    ledger: NodeLedger,
    bus: Arc<InMemoryEventBus>,
    oracle: BeaconSigner,
    entropy: Arc<SignedBeaconEntropy>,
    treasury: Arc<InMemoryTreasury>,
    clock: SystemTimeSource,
}

impl WaveNode {
    fn new(config: LedgerConfig) -> Result<Self> {
        let bus = Arc::new(InMemoryEventBus::new());

        let store: Box<dyn LedgerStore> = match &config.data_dir {
            Some(dir) => Box::new(
                FileLedgerStore::open(dir)
                    .with_context(|| format!("opening ledger log in {}", dir.display()))?,
            ),
            None => {
                info!("No WAVE_DATA_DIR set, ledger state is in-memory only");
                Box::new(InMemoryLedgerStore::new())
            }
        };

        // A local oracle stands in for an external beacon network.
        let oracle = BeaconSigner::generate();
        info!(
            oracle_key = %hex::encode(oracle.public_key().as_bytes()),
            "Local beacon oracle ready"
        );
        let entropy = Arc::new(SignedBeaconEntropy::new(oracle.public_key()));
        let treasury = Arc::new(InMemoryTreasury::new());

        let deps = LedgerDependencies {
            store,
            entropy: entropy.clone(),
            transfer: treasury.clone(),
            publisher: BusEventPublisher::new(bus.clone()),
        };
        let ledger = LedgerService::new(deps, config).context("initializing ledger")?;

        Ok(Self {
            ledger,
            bus,
            oracle,
            entropy,
            treasury,
            clock: SystemTimeSource,
        })
    }

    /// Publish a fresh beacon round, then submit at the current wall-clock time.
    /// Each round decides at most one wave.
    fn wave(&mut self, sender: Address, message: &str) -> Result<SubmitReceipt> {
        let round = self.entropy.accept(self.oracle.next_beacon())?;
        let now = self.clock.now();
        let receipt = self.ledger.submit_wave(sender, message, now)?;
        info!(
            sender = %address_to_hex(&sender),
            round,
            seed = receipt.seed,
            payout = ?receipt.payout,
            total_waves = receipt.total_waves,
            "Wave submitted"
        );
        Ok(receipt)
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("WAVE_LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = LedgerConfig::from_env();
    config.validate().context("invalid ledger configuration")?;
    info!(?config, "Configuration loaded");

    let mut node = WaveNode::new(config)?;
    info!(balance = %node.ledger.balance(), "Ledger balance");

    let mut waves = node.bus.subscribe(EventFilter::topics(vec![EventTopic::Waves]));
    let listener = tokio::spawn(async move {
        while let Some(event) = waves.recv().await {
            if let LedgerEvent::NewWave {
                sender,
                timestamp,
                message,
            } = event
            {
                info!(sender = %address_to_hex(&sender), timestamp, %message, "NewWave");
            }
        }
    });

    let owner = address_from_hex(OWNER)?;
    let visitor = address_from_hex(VISITOR)?;

    node.wave(owner, "A message!")?;
    node.wave(visitor, "Another message!")?;

    // The owner is still cooling down.
    if let Err(e) = node.wave(owner, "Too soon?") {
        warn!(error = %e, "Second wave from owner refused");
    }

    info!(
        balance = %node.ledger.balance(),
        owner_paid = %node.treasury.paid(&owner),
        visitor_paid = %node.treasury.paid(&visitor),
        "Balances after demo"
    );
    for (index, record) in node.ledger.all_waves().iter().enumerate() {
        info!(
            index,
            sender = %address_to_hex(&record.sender),
            timestamp = record.timestamp,
            seed = record.seed,
            message = %record.message,
            "Ledger entry"
        );
    }
    info!(stats = ?node.ledger.stats(), "Service stats");

    // Closing the bus ends the listener after it drains.
    drop(node);
    listener.await.context("wave listener task")?;

    Ok(())
}
