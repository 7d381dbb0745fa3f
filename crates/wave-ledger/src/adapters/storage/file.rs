use super::lock::DataDirLock;
use crate::ports::outbound::{LedgerCommit, LedgerSnapshot, LedgerStore};
use shared_types::errors::StorageError;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "ledger.log";

/// `[len:u32 LE][crc32:u32 LE]` before every payload.
const FRAME_HEADER_LEN: usize = 8;

/// Frames claiming a larger payload are treated as corruption.
const MAX_PAYLOAD_LEN: usize = 1 << 20;

/// Append-only, file-backed ledger store.
///
/// Each commit is one frame: length, CRC32 of the payload, bincode payload.
/// Frames are fsynced before `commit` returns. On load, replay stops at the
/// first incomplete or corrupt frame and the file is truncated there.
///
/// The data directory stays locked for the lifetime of the store.
pub struct FileLedgerStore {
    path: PathBuf,
    file: File,
    /// Length of the valid prefix of the log.
    len: u64,
    _lock: DataDirLock,
}

impl FileLedgerStore {
    /// Open or create the log in `dir`.
    ///
    /// # Errors
    ///
    /// `StorageError::Locked` while another store has `dir` open.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(io_error)?;
        let lock = DataDirLock::acquire(dir)?;

        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();

        info!(path = %path.display(), bytes = len, "Opened ledger log");
        Ok(Self {
            path,
            file,
            len,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode_frame(commit: &LedgerCommit) -> Result<Vec<u8>, StorageError> {
        let payload =
            bincode::serialize(commit).map_err(|e| StorageError::Serialization(e.to_string()))?;
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(StorageError::Serialization(format!(
                "entry of {} bytes exceeds {}",
                payload.len(),
                MAX_PAYLOAD_LEN
            )));
        }

        let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
        frame.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        frame.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        frame.extend_from_slice(&payload);
        Ok(frame)
    }
}

/// Replays every intact frame. Returns the snapshot, the length of the intact
/// prefix and the number of frames replayed.
fn replay(bytes: &[u8]) -> (LedgerSnapshot, usize, usize) {
    let mut snapshot = LedgerSnapshot::default();
    let mut cursor = 0;
    let mut frames = 0;

    while cursor + FRAME_HEADER_LEN <= bytes.len() {
        let payload_len = read_u32(&bytes[cursor..cursor + 4]) as usize;
        let checksum = read_u32(&bytes[cursor + 4..cursor + 8]);
        let start = cursor + FRAME_HEADER_LEN;
        let end = start + payload_len;

        if payload_len > MAX_PAYLOAD_LEN || end > bytes.len() {
            break;
        }
        let payload = &bytes[start..end];
        if crc32fast::hash(payload) != checksum {
            break;
        }
        let Ok(commit) = bincode::deserialize::<LedgerCommit>(payload) else {
            break;
        };

        snapshot.apply(&commit);
        frames += 1;
        cursor = end;
    }

    (snapshot, cursor, frames)
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

fn io_error(e: std::io::Error) -> StorageError {
    StorageError::Io(e.to_string())
}

impl LedgerStore for FileLedgerStore {
    fn load(&mut self) -> Result<Option<LedgerSnapshot>, StorageError> {
        let mut bytes = Vec::new();
        File::open(&self.path)
            .and_then(|mut f| f.read_to_end(&mut bytes))
            .map_err(io_error)?;

        let (snapshot, valid_len, frames) = replay(&bytes);
        if valid_len < bytes.len() {
            let corruption = StorageError::DataCorruption {
                offset: valid_len as u64,
            };
            warn!(
                path = %self.path.display(),
                discarded = bytes.len() - valid_len,
                "{}, truncating ledger log",
                corruption
            );
            self.file.set_len(valid_len as u64).map_err(io_error)?;
            self.file.sync_all().map_err(io_error)?;
        }
        self.len = valid_len as u64;

        info!(frames, waves = snapshot.records.len(), "Ledger log replayed");
        Ok((frames > 0).then_some(snapshot))
    }

    fn commit(&mut self, commit: &LedgerCommit) -> Result<(), StorageError> {
        let frame = Self::encode_frame(commit)?;

        let written = self
            .file
            .write_all(&frame)
            .and_then(|()| self.file.sync_data());
        if let Err(e) = written {
            // Drop any partial frame so later commits stay readable.
            if let Err(rollback) = self.file.set_len(self.len) {
                error!(error = %rollback, "Failed to roll back partial ledger frame");
            }
            return Err(io_error(e));
        }

        self.len += frame.len() as u64;
        Ok(())
    }
}
