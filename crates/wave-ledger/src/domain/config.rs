//! Ledger configuration from environment variables.

use super::entities::{
    DEFAULT_AWARD_THRESHOLD, DEFAULT_COOLDOWN_SECS, DEFAULT_INITIAL_FUNDING,
    DEFAULT_MAX_MESSAGE_LEN, DEFAULT_PAYOUT_UNIT, SEED_MODULUS,
};
use shared_types::entities::Amount;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Operator-tunable ledger parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Minimum seconds between accepted waves from one sender.
    pub cooldown_secs: u64,

    /// Amount paid per awarded wave.
    pub payout_unit: Amount,

    /// Seeds at or below this are awarded. Must be below 100.
    pub award_threshold: u8,

    /// Maximum message length in characters.
    pub max_message_len: usize,

    /// Pool balance for a fresh ledger. Ignored when state is restored.
    pub initial_funding: Amount,

    /// Directory for the ledger log. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            payout_unit: DEFAULT_PAYOUT_UNIT,
            award_threshold: DEFAULT_AWARD_THRESHOLD,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            initial_funding: DEFAULT_INITIAL_FUNDING,
            data_dir: None,
        }
    }
}

/// Configuration rejected by `LedgerConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cooldown_secs must be greater than zero")]
    ZeroCooldown,

    #[error("payout_unit must be greater than zero")]
    ZeroPayoutUnit,

    #[error("award_threshold {0} must be below 100")]
    ThresholdOutOfRange(u8),

    #[error("max_message_len must be greater than zero")]
    ZeroMessageLength,
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WAVE_COOLDOWN_SECS`: Cooldown window (default: 900)
    /// - `WAVE_PAYOUT_UNIT`: Payout per awarded wave in wei (default: 10^14)
    /// - `WAVE_AWARD_THRESHOLD`: Inclusive award threshold (default: 50)
    /// - `WAVE_MAX_MESSAGE_LEN`: Message limit in characters (default: 280)
    /// - `WAVE_INITIAL_FUNDING`: Starting pool in wei (default: 10^17)
    /// - `WAVE_DATA_DIR`: Ledger log directory (default: in-memory)
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cooldown_secs: parse_or(&lookup, "WAVE_COOLDOWN_SECS", defaults.cooldown_secs),
            payout_unit: parse_or(&lookup, "WAVE_PAYOUT_UNIT", defaults.payout_unit),
            award_threshold: parse_or(&lookup, "WAVE_AWARD_THRESHOLD", defaults.award_threshold),
            max_message_len: parse_or(&lookup, "WAVE_MAX_MESSAGE_LEN", defaults.max_message_len),
            initial_funding: parse_or(&lookup, "WAVE_INITIAL_FUNDING", defaults.initial_funding),
            data_dir: lookup("WAVE_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cooldown_secs == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        if self.payout_unit == 0 {
            return Err(ConfigError::ZeroPayoutUnit);
        }
        if self.award_threshold >= SEED_MODULUS {
            return Err(ConfigError::ThresholdOutOfRange(self.award_threshold));
        }
        if self.max_message_len == 0 {
            return Err(ConfigError::ZeroMessageLength);
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, default = %default, "Unparseable config value, using default");
            default
        }
    }
}
