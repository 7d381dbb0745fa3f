//! # Oracle Signatures (Ed25519)
//!
//! Keys and signatures for an external randomness oracle. Every signed message
//! is prefixed with a domain tag so a beacon signature can't be reused as
//! anything else the oracle signs.

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

/// Oracle public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OraclePublicKey([u8; 32]);

impl OraclePublicKey {
    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify `signature` over `domain || message`.
    pub fn verify(
        &self,
        domain: &[u8],
        message: &[u8],
        signature: &OracleSignature,
    ) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        verifying_key
            .verify(&tagged(domain, message), &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Oracle signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleSignature([u8; 64]);

/// Oracle signing keypair. `SigningKey` wipes its secret on drop.
pub struct OracleKeyPair {
    signing_key: SigningKey,
}

impl OracleKeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::rngs::OsRng),
        }
    }

    /// Create from a 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Get the public key.
    pub fn public_key(&self) -> OraclePublicKey {
        OraclePublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign `domain || message`.
    pub fn sign(&self, domain: &[u8], message: &[u8]) -> OracleSignature {
        let sig = self.signing_key.sign(&tagged(domain, message));
        OracleSignature(sig.to_bytes())
    }
}

fn tagged(domain: &[u8], message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + domain.len() + message.len());
    out.extend_from_slice(&(domain.len() as u64).to_be_bytes());
    out.extend_from_slice(domain);
    out.extend_from_slice(message);
    out
}
