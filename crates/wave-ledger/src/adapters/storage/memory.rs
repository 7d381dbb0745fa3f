use crate::ports::outbound::{LedgerCommit, LedgerSnapshot, LedgerStore};
use parking_lot::Mutex;
use shared_types::errors::StorageError;
use std::sync::Arc;

#[derive(Debug, Default)]
struct MemoryLog {
    commits: Vec<LedgerCommit>,
    fail_commits: bool,
}

/// In-memory ledger store for testing and ephemeral nodes.
///
/// Clones share the same log, so a test can keep a handle after moving the
/// store into a service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerStore {
    log: Arc<Mutex<MemoryLog>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following commit fail with `Unavailable` until reset.
    pub fn set_fail_commits(&self, fail: bool) {
        self.log.lock().fail_commits = fail;
    }

    /// Commits accepted so far, oldest first.
    pub fn commits(&self) -> Vec<LedgerCommit> {
        self.log.lock().commits.clone()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&mut self) -> Result<Option<LedgerSnapshot>, StorageError> {
        let log = self.log.lock();
        if log.commits.is_empty() {
            return Ok(None);
        }
        let mut snapshot = LedgerSnapshot::default();
        for commit in &log.commits {
            snapshot.apply(commit);
        }
        Ok(Some(snapshot))
    }

    fn commit(&mut self, commit: &LedgerCommit) -> Result<(), StorageError> {
        let mut log = self.log.lock();
        if log.fail_commits {
            return Err(StorageError::Unavailable("injected commit failure".into()));
        }
        log.commits.push(commit.clone());
        Ok(())
    }
}
