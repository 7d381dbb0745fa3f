//! Signed randomness beacon.
//!
//! An oracle publishes numbered rounds of 32 random bytes, each signed with its
//! Ed25519 key. The ledger accepts a round only if the signature verifies and
//! the round is newer than the last one accepted, then serves its randomness
//! to exactly one submission. Senders cannot influence the bytes, cannot
//! replay an older round, and cannot ride a round someone else already drew
//! from: once a round is spent, submissions fail with `RoundConsumed` until
//! the oracle publishes the next one.

use crate::domain::EntropyError;
use crate::ports::outbound::EntropySource;
use parking_lot::RwLock;
use rand::RngCore;
use shared_crypto::{OracleKeyPair, OraclePublicKey, OracleSignature};
use shared_types::entities::{address_to_hex, Address, Timestamp};
use tracing::{debug, warn};

/// Domain tag for beacon signatures.
const BEACON_DOMAIN: &[u8] = b"wave-ledger/beacon/v1";

/// One round of oracle randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beacon {
    pub round: u64,
    pub randomness: [u8; 32],
    pub signature: OracleSignature,
}

impl Beacon {
    /// Bytes covered by the signature: `round (BE) || randomness`.
    fn signing_message(round: u64, randomness: &[u8; 32]) -> [u8; 40] {
        let mut message = [0u8; 40];
        message[..8].copy_from_slice(&round.to_be_bytes());
        message[8..].copy_from_slice(randomness);
        message
    }
}

/// Oracle side: issues signed beacons.
pub struct BeaconSigner {
    keypair: OracleKeyPair,
    next_round: u64,
}

impl BeaconSigner {
    pub fn new(keypair: OracleKeyPair) -> Self {
        Self {
            keypair,
            next_round: 1,
        }
    }

    pub fn generate() -> Self {
        Self::new(OracleKeyPair::generate())
    }

    pub fn public_key(&self) -> OraclePublicKey {
        self.keypair.public_key()
    }

    /// Sign caller-chosen randomness for `round`.
    pub fn sign(&self, round: u64, randomness: [u8; 32]) -> Beacon {
        let message = Beacon::signing_message(round, &randomness);
        Beacon {
            round,
            randomness,
            signature: self.keypair.sign(BEACON_DOMAIN, &message),
        }
    }

    /// Draw fresh randomness from the OS and sign it as the next round.
    pub fn next_beacon(&mut self) -> Beacon {
        let mut randomness = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut randomness);
        let beacon = self.sign(self.next_round, randomness);
        self.next_round += 1;
        beacon
    }
}

/// The installed beacon and whether a submission has drawn from it.
#[derive(Debug, Clone, Copy)]
struct Round {
    beacon: Beacon,
    consumed: bool,
}

/// Entropy source backed by the latest verified beacon, one draw per round.
pub struct SignedBeaconEntropy {
    oracle: OraclePublicKey,
    latest: RwLock<Option<Round>>,
}

impl SignedBeaconEntropy {
    pub fn new(oracle: OraclePublicKey) -> Self {
        Self {
            oracle,
            latest: RwLock::new(None),
        }
    }

    /// Verify and install `beacon`. Returns the accepted round.
    pub fn accept(&self, beacon: Beacon) -> Result<u64, EntropyError> {
        let message = Beacon::signing_message(beacon.round, &beacon.randomness);
        if self
            .oracle
            .verify(BEACON_DOMAIN, &message, &beacon.signature)
            .is_err()
        {
            warn!(round = beacon.round, "Rejected beacon with bad signature");
            return Err(EntropyError::BadSignature);
        }

        let mut latest = self.latest.write();
        if let Some(current) = latest.as_ref() {
            if beacon.round <= current.beacon.round {
                return Err(EntropyError::StaleRound {
                    round: beacon.round,
                    latest: current.beacon.round,
                });
            }
        }

        debug!(round = beacon.round, "Beacon accepted");
        *latest = Some(Round {
            beacon,
            consumed: false,
        });
        Ok(beacon.round)
    }

    pub fn latest_round(&self) -> Option<u64> {
        self.latest.read().as_ref().map(|r| r.beacon.round)
    }

    /// The installed beacon, if no submission has drawn from it yet.
    pub fn unspent_beacon(&self) -> Option<Beacon> {
        self.latest
            .read()
            .as_ref()
            .filter(|r| !r.consumed)
            .map(|r| r.beacon)
    }
}

impl EntropySource for SignedBeaconEntropy {
    fn entropy(&self, sender: &Address, now: Timestamp) -> Result<[u8; 32], EntropyError> {
        let mut latest = self.latest.write();
        let round = latest.as_mut().ok_or(EntropyError::NoBeacon)?;
        if round.consumed {
            return Err(EntropyError::RoundConsumed {
                round: round.beacon.round,
            });
        }

        round.consumed = true;
        debug!(
            round = round.beacon.round,
            sender = %address_to_hex(sender),
            now,
            "Beacon round spent"
        );
        Ok(round.beacon.randomness)
    }
}
