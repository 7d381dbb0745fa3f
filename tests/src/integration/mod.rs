//! # Integration Tests
//!
//! The ledger wired to its real adapters: signed beacon entropy, the shared
//! event bus, the in-memory treasury and the file-backed store.

pub mod persistence;
pub mod portal;
