//! Read-only projections over a record set.
//!
//! None of these functions mutate their input. Sorting works on a copy and is
//! stable: records with equal expiration dates keep their stored relative order.

use crate::{DateParseError, NameMatch, Record, RecordSet};
use chrono::NaiveDate;

/// Pair every record with its parsed expiration date.
///
/// Fails on the first record whose date does not parse.
fn with_dates<'a, I>(records: I) -> Result<Vec<(NaiveDate, &'a Record)>, DateParseError>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|r| r.expiration().map(|date| (date, r)))
        .collect()
}

fn sorted_copy(mut dated: Vec<(NaiveDate, &Record)>) -> RecordSet {
    // `sort_by_key` is stable.
    dated.sort_by_key(|(date, _)| *date);
    dated.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Return a copy of `records` sorted ascending by expiration date.
pub fn sort_by_expiration(records: &[Record]) -> Result<RecordSet, DateParseError> {
    Ok(sorted_copy(with_dates(records)?))
}

/// Return the records whose name exactly equals `name`, in stored order.
pub fn search(records: &[Record], name: &str) -> RecordSet {
    records
        .iter()
        .filter(|r| NameMatch::Exact.matches_record(r, name))
        .cloned()
        .collect()
}

/// Return the records that expired strictly before `today`, sorted by date.
///
/// A record expiring on `today` is not expired.
pub fn expired(records: &[Record], today: NaiveDate) -> Result<RecordSet, DateParseError> {
    let dated = with_dates(records)?
        .into_iter()
        .filter(|(date, _)| *date < today)
        .collect();
    Ok(sorted_copy(dated))
}
