//! # Data Directory Locking
//!
//! One `FileLedgerStore` per data directory. Two writers appending to the same
//! log would each accept waves the other's cooldown map never saw.
//!
//! Uses `fs2` (flock on Unix, LockFileEx on Windows). The lock belongs to the
//! open file handle, so a second open in the same process is refused too.

use fs2::FileExt;
use shared_types::errors::StorageError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the lock file inside the data directory.
pub const LOCK_FILE_NAME: &str = "LOCK";

/// Exclusive lock on a data directory, released on drop.
#[derive(Debug)]
pub struct DataDirLock {
    file: File,
    path: PathBuf,
}

impl DataDirLock {
    /// Take the lock without blocking.
    ///
    /// # Errors
    ///
    /// `StorageError::Locked` if another handle holds it.
    pub fn acquire(dir: &Path) -> Result<Self, StorageError> {
        let path = dir.join(LOCK_FILE_NAME);
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StorageError::Io(e.to_string()))?;

        if file.try_lock_exclusive().is_err() {
            return Err(StorageError::Locked {
                path: path.display().to_string(),
                pid: read_pid(&path),
            });
        }

        // Holder's pid, for the error a second opener sees.
        file.set_len(0)
            .and_then(|()| writeln!(file, "{}", std::process::id()))
            .and_then(|()| file.sync_all())
            .map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(path = %path.display(), "Data directory locked");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_pid(path: &Path) -> Option<u32> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

impl Drop for DataDirLock {
    fn drop(&mut self) {
        // The file stays so every opener locks the same inode.
        let _ = self.file.unlock();
    }
}
