//! # Core Entities
//!
//! Primitive aliases shared by the ledger core, the event bus and the runtime.

use crate::errors::AddressError;

/// A 20-byte Ethereum-style account address.
pub type Address = [u8; 20];

/// Unix time in seconds.
pub type Timestamp = u64;

/// A monetary quantity in the smallest unit (wei-like).
pub type Amount = u128;

/// The all-zero address. Never a valid sender.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Render an address as `0x`-prefixed lowercase hex.
#[must_use]
pub fn address_to_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parse a `0x`-prefixed (or bare) 40-digit hex string into an address.
pub fn address_from_hex(s: &str) -> Result<Address, AddressError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() != 40 {
        return Err(AddressError::InvalidLength {
            expected: 40,
            actual: digits.len(),
        });
    }

    let mut address = [0u8; 20];
    hex::decode_to_slice(digits, &mut address)
        .map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    Ok(address)
}
