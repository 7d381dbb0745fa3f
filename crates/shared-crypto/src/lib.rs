//! # Shared Crypto
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, domain-separated | Seed derivation, log checksums |
//! | `signatures` | Ed25519 | Randomness beacon signing/verification |
//!
//! ## Security Properties
//!
//! - **Domain separation**: every hash and signature is bound to a tag, so a
//!   value produced for one purpose cannot be replayed as another.
//! - **Ed25519**: deterministic nonces, no RNG dependency when signing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{hash_domain, sha256, Sha256Hasher};
pub use signatures::{OracleKeyPair, OraclePublicKey, OracleSignature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
