//! The ledger: one in-memory record set bound to one store.

use crate::config::LedgerConfig;
use crate::mutation::{self, Mutation, Outcome};
use crate::progress::{with_progress, Progress, Silent};
use crate::LedgerError;
use std::io::Write;
use stockledger_core::format::{self, EMPTY_INVENTORY, NO_EXPIRED};
use stockledger_core::{view, Clock, MintIdentity, NewRecord, Record, RecordPatch, RecordSet};
use stockledger_store::{CsvStore, RecordStore};

/// An inventory loaded from a store.
///
/// Every mutation is applied to a staged copy of the record set, written to
/// the store, and only then adopted, so the in-memory set always equals the
/// last successful save. Views read the set and never write.
pub struct Ledger<S, M> {
    records: RecordSet,
    store: S,
    minter: M,
    progress: Box<dyn Progress>,
}

impl<M: MintIdentity> Ledger<CsvStore, M> {
    /// Open the CSV inventory named by `config`.
    pub fn open(config: &LedgerConfig, minter: M) -> Result<Self, LedgerError> {
        let store = CsvStore::new(&config.data_file);
        Ok(Self::load(store, minter)?.with_progress(config.progress_indicator()))
    }
}

impl<S: RecordStore, M: MintIdentity> Ledger<S, M> {
    /// Load the record set from `store`.
    pub fn load(store: S, minter: M) -> Result<Self, LedgerError> {
        let records = store.load()?;
        tracing::debug!(count = records.len(), "ledger loaded");
        Ok(Self {
            records,
            store,
            minter,
            progress: Box::new(Silent),
        })
    }

    /// Replace the progress indicator.
    pub fn with_progress(mut self, progress: Box<dyn Progress>) -> Self {
        self.progress = progress;
        self
    }

    /// The current record set, in stored order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Apply `mutation` and persist the result.
    ///
    /// A [`Outcome::NotFound`] outcome performs no write.
    pub fn commit<T: Mutation>(&mut self, mutation: T) -> Result<Outcome, LedgerError> {
        let label = mutation.label();
        let mut staged = self.records.clone();
        let outcome = with_progress(self.progress.as_mut(), label, || {
            mutation.apply(&mut staged)
        });

        match &outcome {
            Outcome::Applied { affected } => {
                self.store.save(&staged)?;
                self.records = staged;
                tracing::info!(operation = label, affected, "committed");
            }
            Outcome::NotFound { name } => {
                tracing::warn!(operation = label, name = %name, "no record with this exact name");
            }
        }
        Ok(outcome)
    }

    /// Add a record built from `fields` and freshly minted identity.
    ///
    /// Not idempotent: every call mints a new identity.
    pub fn add(&mut self, fields: NewRecord) -> Result<&Record, LedgerError> {
        let record = Record::from_parts(self.minter.mint_identity(), fields);
        tracing::debug!(id = %record.id, name = %record.name, "minted record");
        self.commit(mutation::insert(record))?;
        self.records
            .last()
            .ok_or(LedgerError::Internal("record set empty after insert"))
    }

    /// Remove every record named `name`, ignoring case.
    ///
    /// Runs only if some record's name equals `name` exactly.
    pub fn remove(&mut self, name: &str) -> Result<Outcome, LedgerError> {
        self.commit(mutation::remove(name))
    }

    /// Patch every record named exactly `name`.
    pub fn update(&mut self, name: &str, patch: RecordPatch) -> Result<Outcome, LedgerError> {
        self.commit(mutation::update(name, patch))
    }

    /// Write every record with all fields, in stored order.
    pub fn list<W: Write>(&mut self, writer: &mut W) -> Result<(), LedgerError> {
        let records = &self.records;
        with_progress(self.progress.as_mut(), "list", || {
            format::write_listing(records, writer)
        })?;
        Ok(())
    }

    /// Write the full report, sorted by expiration date.
    pub fn report<W: Write>(&mut self, writer: &mut W) -> Result<(), LedgerError> {
        let records = &self.records;
        with_progress(self.progress.as_mut(), "report", || -> Result<(), LedgerError> {
            if records.is_empty() {
                writeln!(writer, "{EMPTY_INVENTORY}")?;
                return Ok(());
            }
            let sorted = view::sort_by_expiration(records)?;
            format::write_report(&sorted, writer)?;
            Ok(())
        })
    }

    /// Write and return the records named exactly `name`, in stored order.
    pub fn search<W: Write>(
        &mut self,
        name: &str,
        writer: &mut W,
    ) -> Result<RecordSet, LedgerError> {
        let records = &self.records;
        with_progress(self.progress.as_mut(), "search", || -> Result<RecordSet, LedgerError> {
            let found = view::search(records, name);
            format::write_search(name, &found, writer)?;
            Ok(found)
        })
    }

    /// Write and return the records that expired before `clock`'s today.
    pub fn expired<W: Write>(
        &mut self,
        clock: &dyn Clock,
        writer: &mut W,
    ) -> Result<RecordSet, LedgerError> {
        let records = &self.records;
        with_progress(self.progress.as_mut(), "expired", || -> Result<RecordSet, LedgerError> {
            let expired = view::expired(records, clock.today())?;
            if expired.is_empty() {
                writeln!(writer, "{NO_EXPIRED}")?;
            } else {
                format::write_expired(&expired, writer)?;
            }
            Ok(expired)
        })
    }
}
