//! Mutation operations and the presence guard.
//!
//! Each mutation is a value implementing [`Mutation`]. Remove and update are
//! only ever handed out wrapped in [`Guarded`], which checks for an exact name
//! match before the inner operation runs.

use stockledger_core::{NameMatch, Record, RecordPatch, RecordSet};

/// Result of applying a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation ran; `affected` records were inserted, removed or changed.
    Applied {
        /// Number of records touched.
        affected: usize,
    },
    /// The presence guard found no record with this exact name. Nothing ran.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl Outcome {
    /// Returns `true` if the mutation ran.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// A transformation of the in-memory record set.
pub trait Mutation {
    /// Short name for logs and the progress indicator.
    fn label(&self) -> &'static str;

    /// Apply to `records`.
    fn apply(self, records: &mut RecordSet) -> Outcome;
}

/// A mutation aimed at records with a given name.
pub trait Targeted {
    /// The name the mutation acts on.
    fn target(&self) -> &str;
}

/// Append one record.
#[derive(Debug, Clone)]
pub struct Insert(pub Record);

impl Mutation for Insert {
    fn label(&self) -> &'static str {
        "add"
    }

    fn apply(self, records: &mut RecordSet) -> Outcome {
        records.push(self.0);
        Outcome::Applied { affected: 1 }
    }
}

/// Delete every record whose name matches case-insensitively.
#[derive(Debug, Clone)]
pub struct Remove {
    name: String,
}

impl Remove {
    /// Remove records named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Targeted for Remove {
    fn target(&self) -> &str {
        &self.name
    }
}

impl Mutation for Remove {
    fn label(&self) -> &'static str {
        "remove"
    }

    fn apply(self, records: &mut RecordSet) -> Outcome {
        let before = records.len();
        records.retain(|r| !NameMatch::CaseInsensitive.matches_record(r, &self.name));
        Outcome::Applied {
            affected: before - records.len(),
        }
    }
}

/// Patch every record whose name matches exactly.
#[derive(Debug, Clone)]
pub struct Update {
    name: String,
    patch: RecordPatch,
}

impl Update {
    /// Apply `patch` to records named `name`.
    pub fn new(name: impl Into<String>, patch: RecordPatch) -> Self {
        Self {
            name: name.into(),
            patch,
        }
    }
}

impl Targeted for Update {
    fn target(&self) -> &str {
        &self.name
    }
}

impl Mutation for Update {
    fn label(&self) -> &'static str {
        "update"
    }

    fn apply(self, records: &mut RecordSet) -> Outcome {
        let mut affected = 0;
        for record in records
            .iter_mut()
            .filter(|r| NameMatch::Exact.matches_record(r, &self.name))
        {
            self.patch.apply(record);
            affected += 1;
        }
        Outcome::Applied { affected }
    }
}

/// Runs the inner mutation only if a record's name exactly equals its target.
#[derive(Debug, Clone)]
pub struct Guarded<M> {
    inner: M,
}

impl<M: Mutation + Targeted> Guarded<M> {
    /// Wrap `inner` in a presence check.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Mutation + Targeted> Mutation for Guarded<M> {
    fn label(&self) -> &'static str {
        self.inner.label()
    }

    fn apply(self, records: &mut RecordSet) -> Outcome {
        if NameMatch::Exact.any(records, self.inner.target()) {
            self.inner.apply(records)
        } else {
            Outcome::NotFound {
                name: self.inner.target().to_string(),
            }
        }
    }
}

/// Append `record`.
pub const fn insert(record: Record) -> Insert {
    Insert(record)
}

/// Remove all records named `name` (case-insensitive), guarded by an exact match.
pub fn remove(name: impl Into<String>) -> Guarded<Remove> {
    Guarded::new(Remove::new(name))
}

/// Patch all records named exactly `name`, guarded by an exact match.
pub fn update(name: impl Into<String>, patch: RecordPatch) -> Guarded<Update> {
    Guarded::new(Update::new(name, patch))
}
