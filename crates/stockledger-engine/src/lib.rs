//! Inventory record engine for stockledger.
//!
//! This crate ties a record set to a store and implements the operations on
//! it:
//!
//! - Mutations ([`mutation`]): add, remove and update, the latter two behind a
//!   presence guard ([`Guarded`])
//! - Views on [`Ledger`]: full report, search, expired items, full listing
//! - Progress indication around every operation ([`progress`])
//!
//! # Example
//!
//! ```
//! use stockledger_core::{NewRecord, RecordPatch};
//! use stockledger_engine::{Ledger, Outcome};
//! use stockledger_seed::FakeMinter;
//! use stockledger_store::MemoryStore;
//!
//! let mut ledger = Ledger::load(MemoryStore::new(), FakeMinter::seeded(1))?;
//! ledger.add(NewRecord::new("Widget", "10", "2024-01-01", "4.99"))?;
//!
//! let outcome = ledger.update("Widget", RecordPatch::new().price("5.49"))?;
//! assert_eq!(outcome, Outcome::Applied { affected: 1 });
//!
//! let outcome = ledger.remove("Sprocket")?;
//! assert!(!outcome.is_applied());
//! assert_eq!(ledger.store().save_count(), 2);
//! # Ok::<(), stockledger_engine::LedgerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod ledger;
pub mod mutation;
pub mod progress;

pub use config::{LedgerConfig, ProgressStyle};
pub use ledger::Ledger;
pub use mutation::{Guarded, Mutation, Outcome, Targeted};
pub use progress::{Progress, ProgressBar, Silent};

use stockledger_core::DateParseError;
use stockledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur while running ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Loading or saving the record set failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record's expiration date is not a calendar date.
    #[error(transparent)]
    Date(#[from] DateParseError),

    /// Writing a view failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// An engine invariant did not hold.
    #[error("internal error: {0}")]
    Internal(&'static str),
}
