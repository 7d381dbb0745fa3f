//! # Wave Ledger
//!
//! Public wave ledger with probabilistic payouts. Anyone may submit a short
//! message ("wave"); every accepted wave is appended to an ordered ledger and
//! has a roughly 51% chance of earning a fixed payout from a pooled balance.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Balance never negative | `domain/payout.rs` - `checked_sub` in `settle()` |
//! | Wave count only grows, records immutable | `domain/wave_store.rs` - append-only API |
//! | Accepted waves per sender at least one cooldown apart | `domain/cooldown.rs` - `check()` |
//! | No partial state on storage fault | `service/mod.rs` - commit before apply |
//! | State updated before funds move | `service/mod.rs` - lock released before `hand_off()` |
//! | One payout decision per beacon round | `adapters/entropy.rs` - `RoundConsumed` |
//! | One writer per data directory | `adapters/storage/lock.rs` - `fs2` exclusive lock |
//!
//! ## Submission
//!
//! ```text
//! submit_wave(sender, message, now)
//!     │
//!     ├─ validate message ────────────→ InvalidMessage
//!     ├─ CooldownGuard::check ────────→ Denied { remaining_secs }
//!     ├─ EntropySource + RewardRandomizer::decide → seed, awarded
//!     ├─ PayoutController::settle → Transferred | Skipped | InsufficientFunds
//!     ├─ LedgerStore::commit, then apply in memory
//!     ├─ (lock released) FundTransfer::transfer → refund on failure
//!     └─ WaveEventPublisher::publish_new_wave
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose | Adapters |
//! |-------|---------|----------|
//! | `LedgerStore` | Durable commits | `InMemoryLedgerStore`, `FileLedgerStore` |
//! | `EntropySource` | Unpredictable randomness | `SignedBeaconEntropy` |
//! | `FundTransfer` | Move payouts to recipients | `InMemoryTreasury` |
//! | `WaveEventPublisher` | Notifications | `BusEventPublisher`, `NoOpPublisher` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - stores, beacon entropy, treasury, bus publisher    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - WaveLedgerApi trait                        │
//! │  ports/outbound.rs - LedgerStore, EntropySource, FundTransfer,  │
//! │                      WaveEventPublisher, TimeSource             │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/wave_store.rs - WaveStore                               │
//! │  domain/cooldown.rs   - CooldownGuard                           │
//! │  domain/randomizer.rs - RewardRandomizer                        │
//! │  domain/payout.rs     - PayoutController                        │
//! │  domain/config.rs     - LedgerConfig                            │
//! │  domain/errors.rs     - LedgerError                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::{LedgerDependencies, LedgerService};
