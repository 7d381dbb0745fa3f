//! # Wave Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared ledger wiring for tests and benches
//! ├── integration/      # Cross-crate flows (ledger + bus + store)
//! │   ├── portal.rs     # Public wave flows
//! │   ├── events.rs     # Notifications over the event bus
//! │   └── persistence.rs# Restart from the file-backed log
//! └── properties.rs     # Property tests over submission sequences
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wave-tests
//! cargo test -p wave-tests integration::
//! cargo bench -p wave-tests
//! ```

pub mod fixtures;
pub mod integration;
pub mod properties;
