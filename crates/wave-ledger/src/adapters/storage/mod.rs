//! Ledger store adapters.

mod file;
mod lock;
mod memory;

pub use file::{FileLedgerStore, LOG_FILE_NAME};
pub use lock::{DataDirLock, LOCK_FILE_NAME};
pub use memory::InMemoryLedgerStore;
