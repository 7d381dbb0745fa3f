//! Ports layer for the wave ledger.
//!
//! - Inbound (Driving) port: `WaveLedgerApi`
//! - Outbound (Driven) ports: persistence, entropy, fund hand-off, events, time

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
