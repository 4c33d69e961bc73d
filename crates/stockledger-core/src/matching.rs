//! Name-matching policies.
//!
//! The presence guard and the update predicate use [`NameMatch::Exact`]; the
//! removal predicate uses [`NameMatch::CaseInsensitive`]. The two are kept as
//! separate named policies so callers choose one explicitly.

use crate::Record;

/// How a target name is compared against a record's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after Unicode lowercasing both sides.
    CaseInsensitive,
}

impl NameMatch {
    /// Check whether `candidate` matches `target` under this policy.
    pub fn matches(self, candidate: &str, target: &str) -> bool {
        match self {
            Self::Exact => candidate == target,
            Self::CaseInsensitive => candidate.to_lowercase() == target.to_lowercase(),
        }
    }

    /// Check whether `record`'s name matches `target` under this policy.
    pub fn matches_record(self, record: &Record, target: &str) -> bool {
        self.matches(&record.name, target)
    }

    /// Check whether any record in `records` matches `target`.
    pub fn any(self, records: &[Record], target: &str) -> bool {
        records.iter().any(|r| self.matches_record(r, target))
    }

    /// Count the records in `records` matching `target`.
    pub fn count(self, records: &[Record], target: &str) -> usize {
        records
            .iter()
            .filter(|r| self.matches_record(r, target))
            .count()
    }
}
