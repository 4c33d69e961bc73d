//! Durable storage for stockledger record sets.
//!
//! The store always reads and writes the whole record set. Inventories are
//! operator-sized, so rewriting every row on each mutation costs little and
//! rules out partially patched rows.
//!
//! # Example
//!
//! ```no_run
//! use stockledger_store::{CsvStore, RecordStore};
//!
//! let mut store = CsvStore::new("warehouse_inventory.csv");
//! let records = store.load()?;
//! store.save(&records)?;
//! # Ok::<(), stockledger_store::StoreError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod csv_store;
mod memory;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use stockledger_core::{Record, RecordSet, HEADER};
use thiserror::Error;

/// Errors that can occur while loading or saving a record set.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading the inventory file.
    #[error("failed to read inventory {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but has no header row.
    #[error("inventory {path} has no header row")]
    MissingHeader {
        /// The inventory file.
        path: PathBuf,
    },

    /// The header row does not name the expected columns.
    #[error("inventory {path} has header '{found}', expected '{}'", HEADER.join(","))]
    HeaderMismatch {
        /// The inventory file.
        path: PathBuf,
        /// The header row that was found.
        found: String,
    },

    /// A data row could not be read (wrong field count, bad quoting).
    #[error("inventory {path} line {line}: {message}")]
    Malformed {
        /// The inventory file.
        path: PathBuf,
        /// 1-based line number of the bad row.
        line: u64,
        /// What was wrong with it.
        message: String,
    },

    /// IO error writing the inventory file.
    #[error("failed to write inventory {path}: {source}")]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns `true` for failures of the load path.
    pub const fn is_read_error(&self) -> bool {
        !self.is_write_error()
    }

    /// Returns `true` for failures of the save path.
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// The persistence boundary for a record set.
pub trait RecordStore {
    /// Read the full record set.
    ///
    /// Returns an empty set when no records exist.
    fn load(&self) -> Result<RecordSet, StoreError>;

    /// Replace the stored record set with `records`.
    fn save(&mut self, records: &[Record]) -> Result<(), StoreError>;
}
