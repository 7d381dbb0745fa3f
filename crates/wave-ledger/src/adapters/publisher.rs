//! Event publisher adapters for the wave ledger.

use crate::domain::WaveRecord;
use crate::ports::outbound::WaveEventPublisher;
use shared_bus::{EventPublisher, LedgerEvent};
use shared_types::entities::{Address, Amount};

/// Publishes ledger notifications onto the shared event bus.
pub struct BusEventPublisher<B: EventPublisher> {
    bus: B,
}

impl<B: EventPublisher> BusEventPublisher<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: EventPublisher> WaveEventPublisher for BusEventPublisher<B> {
    fn publish_new_wave(&self, record: &WaveRecord) {
        self.bus.publish(LedgerEvent::NewWave {
            sender: record.sender,
            timestamp: record.timestamp,
            message: record.message.clone(),
        });
    }

    fn publish_payout(&self, recipient: &Address, amount: Amount) {
        self.bus.publish(LedgerEvent::PayoutSettled {
            recipient: *recipient,
            amount,
        });
    }

    fn publish_funded(&self, amount: Amount, balance: Amount) {
        self.bus.publish(LedgerEvent::LedgerFunded { amount, balance });
    }
}

/// No-op publisher for running without an event bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPublisher;

impl WaveEventPublisher for NoOpPublisher {
    fn publish_new_wave(&self, _record: &WaveRecord) {}

    fn publish_payout(&self, _recipient: &Address, _amount: Amount) {}

    fn publish_funded(&self, _amount: Amount, _balance: Amount) {}
}

/// Recording publisher for testing.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingPublisher {
    pub events: parking_lot::Mutex<Vec<LedgerEvent>>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().clone()
    }
}

#[cfg(test)]
impl WaveEventPublisher for RecordingPublisher {
    fn publish_new_wave(&self, record: &WaveRecord) {
        self.events.lock().push(LedgerEvent::NewWave {
            sender: record.sender,
            timestamp: record.timestamp,
            message: record.message.clone(),
        });
    }

    fn publish_payout(&self, recipient: &Address, amount: Amount) {
        self.events.lock().push(LedgerEvent::PayoutSettled {
            recipient: *recipient,
            amount,
        });
    }

    fn publish_funded(&self, amount: Amount, balance: Amount) {
        self.events.lock().push(LedgerEvent::LedgerFunded { amount, balance });
    }
}
