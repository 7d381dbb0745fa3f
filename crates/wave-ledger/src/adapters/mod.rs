//! Adapters layer for the wave ledger.
//!
//! Concrete implementations of the outbound ports.

pub mod entropy;
pub mod publisher;
pub mod storage;
pub mod treasury;

pub use entropy::{Beacon, BeaconSigner, SignedBeaconEntropy};
pub use publisher::{BusEventPublisher, NoOpPublisher};
pub use storage::{FileLedgerStore, InMemoryLedgerStore};
pub use treasury::InMemoryTreasury;
