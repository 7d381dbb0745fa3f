//! Append-only, ordered collection of accepted waves.

use super::entities::WaveRecord;
use super::errors::LedgerError;
use shared_types::entities::Address;

/// Waves in submission order. Length only grows and records are never mutated.
#[derive(Debug, Clone, Default)]
pub struct WaveStore {
    records: Vec<WaveRecord>,
}

impl WaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted records, oldest first.
    pub fn from_records(records: Vec<WaveRecord>) -> Self {
        Self { records }
    }

    /// Append at the end and return the 0-based position.
    pub fn append(&mut self, record: WaveRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&WaveRecord, LedgerError> {
        self.records.get(index).ok_or(LedgerError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[WaveRecord] {
        &self.records
    }

    /// Records from one sender, oldest first.
    pub fn by_sender<'a>(&'a self, sender: &'a Address) -> impl Iterator<Item = &'a WaveRecord> {
        self.records.iter().filter(move |r| &r.sender == sender)
    }
}
