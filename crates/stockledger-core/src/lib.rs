//! Core types for stockledger
//!
//! This crate provides the fundamental types shared by every other stockledger crate:
//!
//! - [`Record`] - One stocked item line (identity, catalog metadata, quantity, expiry, price)
//! - [`RecordSet`] - The ordered collection of records, the unit of load and save
//! - [`RecordPatch`] / [`FieldUpdate`] - Per-field "set or leave unchanged" updates
//! - [`NameMatch`] - The two name-matching policies used by the mutation operations
//! - [`Clock`] - Source of "today" for the expiration filter
//! - [`view`] - Read-only projections: sorted report, search, expiration filter
//! - [`format`] - Fixed-width table rendering of those projections
//!
//! # Example
//!
//! ```
//! use stockledger_core::{view, FixedClock, Clock, Record};
//! use chrono::NaiveDate;
//!
//! let records = vec![
//!     Record::new("id-1", "Milk", "4006381333931", "96385074", "Acme", "4", "2024-01-09", "1.99"),
//!     Record::new("id-2", "Bread", "4006381333932", "96385075", "Acme", "2", "2024-01-10", "2.49"),
//! ];
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
//! let expired = view::expired(&records, clock.today()).unwrap();
//! assert_eq!(expired.len(), 1);
//! assert_eq!(expired[0].name, "Milk");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod format;
pub mod matching;
pub mod patch;
pub mod record;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use matching::NameMatch;
pub use patch::{FieldUpdate, RecordPatch};
pub use record::{
    DateParseError, Identity, MintIdentity, NewRecord, Record, RecordSet, DATE_FORMAT, HEADER,
};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
