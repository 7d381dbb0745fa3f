//! # Restart From Disk
//!
//! A ledger backed by `FileLedgerStore` comes back with the same waves,
//! balance and cooldowns after a restart.

#[cfg(test)]
mod tests {
    use crate::fixtures::{participant, Portal};
    use shared_types::errors::StorageError;
    use wave_ledger::adapters::FileLedgerStore;
    use wave_ledger::domain::{LedgerConfig, LedgerError};
    use wave_ledger::ports::WaveLedgerApi;

    const T0: u64 = 1_700_000_000;

    fn open(dir: &std::path::Path, config: LedgerConfig) -> Portal<FileLedgerStore> {
        Portal::with_store(FileLedgerStore::open(dir).unwrap(), config)
    }

    #[test]
    fn test_restart_restores_ledger() {
        let dir = tempfile::tempdir().unwrap();

        let (waves, balance) = {
            let portal = open(dir.path(), LedgerConfig::default());
            portal.wave(participant(1), "first", T0).unwrap();
            portal.wave(participant(2), "second", T0 + 5).unwrap();
            portal.ledger.fund(42).unwrap();
            (portal.ledger.all_waves(), portal.ledger.balance())
        };

        let restarted = open(dir.path(), LedgerConfig::default());
        assert_eq!(restarted.ledger.all_waves(), waves);
        assert_eq!(restarted.ledger.balance(), balance);
        assert_eq!(restarted.ledger.last_waved_at(&participant(2)), Some(T0 + 5));
        assert_eq!(
            restarted.wave(participant(1), "again", T0 + 100),
            Err(LedgerError::Denied { remaining_secs: 800 })
        );
    }

    #[test]
    fn test_second_writer_on_same_dir_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let writer = open(dir.path(), LedgerConfig::default());

        let rival = FileLedgerStore::open(dir.path());
        assert!(matches!(rival, Err(StorageError::Locked { .. })));

        writer.wave(participant(1), "only writer", T0).unwrap();
        drop(writer);

        // Once the writer closes, a restart sees its wave and its cooldown
        let restarted = open(dir.path(), LedgerConfig::default());
        assert_eq!(restarted.ledger.waves_by(&participant(1)).len(), 1);
        assert_eq!(
            restarted.wave(participant(1), "second writer", T0 + 1),
            Err(LedgerError::Denied { remaining_secs: 899 })
        );
    }

    #[test]
    fn test_initial_funding_applied_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig {
            initial_funding: 5_000,
            ..LedgerConfig::default()
        };

        drop(open(dir.path(), config.clone()));
        let restarted = open(dir.path(), config);

        assert_eq!(restarted.ledger.balance(), 5_000);
    }

    #[test]
    fn test_torn_write_loses_only_the_tail() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        {
            let portal = open(dir.path(), LedgerConfig::default());
            portal.wave(participant(1), "durable", T0).unwrap();
        }

        let log = dir.path().join(wave_ledger::adapters::storage::LOG_FILE_NAME);
        let mut file = std::fs::OpenOptions::new().append(true).open(&log).unwrap();
        file.write_all(&[0x20, 0, 0, 0, 1, 2, 3]).unwrap();
        drop(file);

        let restarted = open(dir.path(), LedgerConfig::default());
        assert_eq!(restarted.ledger.total_waves(), 1);
        restarted.wave(participant(2), "after repair", T0 + 1).unwrap();

        drop(restarted);
        let again = open(dir.path(), LedgerConfig::default());
        assert_eq!(again.ledger.total_waves(), 2);
    }
}
