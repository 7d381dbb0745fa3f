//! # Shared Types Crate
//!
//! Primitive aliases and error types used across the wave ledger workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Timestamp` and `Amount` are defined
//!   once here so the core, the bus and the runtime agree on representation.
//! - **No Behaviour**: this crate holds data definitions and small helpers only.
//!   The ledger state machine lives in `wave-ledger`.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
