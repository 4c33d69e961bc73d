//! In-memory record store.

use crate::{RecordStore, StoreError};
use std::io;
use std::path::PathBuf;
use stockledger_core::{Record, RecordSet};

/// A record store that keeps its contents in memory and counts saves.
///
/// Used for dry runs and by tests that need to observe whether a durable
/// write happened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: RecordSet,
    saves: usize,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `records`.
    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The records as of the last successful save.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful saves.
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<RecordSet, StoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::Other, "writes disabled"),
            });
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_counts_and_replaces() {
        let mut store = MemoryStore::new();
        let record = Record::new("1", "Milk", "g", "m", "b", "1", "2024-01-01", "1");
        store.save(&[record.clone()]).unwrap();
        store.save(&[record.clone(), record]).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_failing_writes() {
        let mut store = MemoryStore::new().failing_writes();
        let err = store.save(&[]).unwrap_err();
        assert!(err.is_write_error());
        assert_eq!(store.save_count(), 0);
    }
}
