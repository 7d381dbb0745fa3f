//! # Domain Layer - Wave Ledger
//!
//! Pure ledger logic. Nothing here performs I/O or reads a clock.
//!
//! ## Components
//!
//! - `entities`: WaveRecord, PayoutOutcome, SubmitReceipt, named constants
//! - `wave_store`: WaveStore, the append-only record sequence
//! - `cooldown`: CooldownGuard per-sender rate limiter
//! - `randomizer`: RewardRandomizer seed and award decision
//! - `payout`: PayoutController balance-safe settlement
//! - `message`: message validation
//! - `config`: LedgerConfig and its environment loader
//! - `errors`: LedgerError and port error enums

pub mod config;
pub mod cooldown;
pub mod entities;
pub mod errors;
pub mod message;
pub mod payout;
pub mod randomizer;
pub mod wave_store;

pub use config::*;
pub use cooldown::*;
pub use entities::*;
pub use errors::*;
pub use message::*;
pub use payout::*;
pub use randomizer::*;
pub use wave_store::*;
