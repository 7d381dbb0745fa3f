//! # Ledger Events
//!
//! Every notification the wave ledger emits.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Amount, Timestamp};

/// All events that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A wave was accepted and recorded. One per accepted submission.
    NewWave {
        sender: Address,
        timestamp: Timestamp,
        message: String,
    },

    /// A payout left the pool and was handed to the recipient.
    PayoutSettled { recipient: Address, amount: Amount },

    /// The pool was credited by the operator.
    LedgerFunded { amount: Amount, balance: Amount },
}

impl LedgerEvent {
    /// Topic this event is published under.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::NewWave { .. } => EventTopic::Waves,
            Self::PayoutSettled { .. } => EventTopic::Payouts,
            Self::LedgerFunded { .. } => EventTopic::Treasury,
        }
    }

    /// Account the event concerns, if any.
    #[must_use]
    pub fn account(&self) -> Option<&Address> {
        match self {
            Self::NewWave { sender, .. } => Some(sender),
            Self::PayoutSettled { recipient, .. } => Some(recipient),
            Self::LedgerFunded { .. } => None,
        }
    }
}

/// Event topics for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    Waves,
    Payouts,
    Treasury,
    All,
}

/// Subscription filter. Empty lists match everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub topics: Vec<EventTopic>,
    pub accounts: Vec<Address>,
}

impl EventFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            accounts: Vec::new(),
        }
    }

    /// Only events concerning one of `accounts`. Account-less events never match.
    #[must_use]
    pub fn for_accounts(accounts: Vec<Address>) -> Self {
        Self {
            topics: Vec::new(),
            accounts,
        }
    }

    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let account_match = self.accounts.is_empty()
            || event
                .account()
                .is_some_and(|account| self.accounts.contains(account));

        topic_match && account_match
    }
}
