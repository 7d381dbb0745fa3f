//! # SHA-256 Hashing
//!
//! Domain-separated SHA-256. The domain tag is length-prefixed so that
//! `("ab", "c")` and `("a", "bc")` never collide.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Incremental SHA-256 hasher bound to a domain tag.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create a hasher with no domain tag.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Create a hasher whose output is bound to `domain`.
    pub fn with_domain(domain: &[u8]) -> Self {
        let mut hasher = Self::new();
        hasher.update(&(domain.len() as u64).to_be_bytes());
        hasher.update(domain);
        hasher
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Consume and return the digest.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data under a domain tag (one-shot).
pub fn hash_domain(domain: &[u8], data: &[u8]) -> Hash {
    let mut hasher = Sha256Hasher::with_domain(domain);
    hasher.update(data);
    hasher.finalize()
}
