//! The inventory record and its creation-time collaborators.
//!
//! A [`Record`] keeps `quantity`, `expiration_date` and `price` exactly as the
//! operator typed them. Nothing in the engine coerces or range-checks those
//! fields; typed accessors parse them on demand for consumers that need numbers
//! or dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Date format used by `expiration_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column order of the durable inventory file.
pub const HEADER: [&str; 8] = [
    "id",
    "name",
    "gtin",
    "mpn",
    "brand",
    "quantity",
    "expiration_date",
    "price",
];

/// The full ordered collection of records.
///
/// Order is insertion order. Views may sort a copy but never reorder this.
pub type RecordSet = Vec<Record>;

/// An expiration date that is not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record '{name}' has invalid expiration date '{value}' (expected YYYY-MM-DD)")]
pub struct DateParseError {
    /// Name of the offending record.
    pub name: String,
    /// The raw value that failed to parse.
    pub value: String,
}

/// One stocked item line.
///
/// Field order matches [`HEADER`] so serializing a record positionally yields
/// a row of the durable file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier, minted once at creation.
    pub id: String,
    /// Item label. Not unique: re-stocked batches share a name.
    pub name: String,
    /// Global trade item number (catalog metadata).
    pub gtin: String,
    /// Manufacturer part number (catalog metadata).
    pub mpn: String,
    /// Brand (catalog metadata).
    pub brand: String,
    /// Count on hand, as entered.
    pub quantity: String,
    /// Expiration date, `YYYY-MM-DD`, as entered.
    pub expiration_date: String,
    /// Unit price, as entered.
    pub price: String,
}

impl Record {
    /// Create a record from all eight fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gtin: impl Into<String>,
        mpn: impl Into<String>,
        brand: impl Into<String>,
        quantity: impl Into<String>,
        expiration_date: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gtin: gtin.into(),
            mpn: mpn.into(),
            brand: brand.into(),
            quantity: quantity.into(),
            expiration_date: expiration_date.into(),
            price: price.into(),
        }
    }

    /// Assemble a record from a minted identity and the caller-supplied fields.
    pub fn from_parts(identity: Identity, fields: NewRecord) -> Self {
        Self {
            id: identity.id,
            name: fields.name,
            gtin: identity.gtin,
            mpn: identity.mpn,
            brand: identity.brand,
            quantity: fields.quantity,
            expiration_date: fields.expiration_date,
            price: fields.price,
        }
    }

    /// Parse the expiration date.
    ///
    /// Surrounding whitespace is an error, not something to strip.
    pub fn expiration(&self) -> Result<NaiveDate, DateParseError> {
        let value = self.expiration_date.as_str();
        let invalid = || DateParseError {
            name: self.name.clone(),
            value: self.expiration_date.clone(),
        };
        if value.trim() != value {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
    }

    /// The quantity as an integer, if it is one.
    pub fn quantity_value(&self) -> Option<u64> {
        self.quantity.trim().parse().ok()
    }

    /// The price as a decimal, if it is one.
    pub fn price_value(&self) -> Option<Decimal> {
        Decimal::from_str(self.price.trim()).ok()
    }

    /// The record's fields in [`HEADER`] order.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.id,
            &self.name,
            &self.gtin,
            &self.mpn,
            &self.brand,
            &self.quantity,
            &self.expiration_date,
            &self.price,
        ]
    }
}

/// Creation-time metadata supplied by the data-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Unique identifier.
    pub id: String,
    /// Global trade item number.
    pub gtin: String,
    /// Manufacturer part number.
    pub mpn: String,
    /// Brand name.
    pub brand: String,
}

/// The four fields an operator supplies when adding a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Item label.
    pub name: String,
    /// Count on hand.
    pub quantity: String,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration_date: String,
    /// Unit price.
    pub price: String,
}

impl NewRecord {
    /// Create a new set of caller-supplied fields.
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        expiration_date: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            expiration_date: expiration_date.into(),
            price: price.into(),
        }
    }
}

/// Source of creation-time identity for new records.
///
/// The engine trusts implementors to avoid collisions; it does not check
/// uniqueness itself.
pub trait MintIdentity {
    /// Mint the identifier and catalog metadata for one new record.
    fn mint_identity(&mut self) -> Identity;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(expiration_date: &str) -> Record {
        Record::new(
            "3f1c", "Widget", "4006381333931", "96385074", "Acme", "10", expiration_date, "9.99",
        )
    }

    #[test]
    fn test_expiration_parses_iso_date() {
        let record = widget("2024-02-29");
        assert_eq!(
            record.expiration().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_expiration_rejects_impossible_date() {
        let err = widget("2023-02-29").expiration().unwrap_err();
        assert_eq!(err.name, "Widget");
        assert_eq!(err.value, "2023-02-29");
        assert!(err.to_string().contains("2023-02-29"));
    }

    #[test]
    fn test_expiration_rejects_other_formats() {
        assert!(widget("01/15/2024").expiration().is_err());
        assert!(widget("").expiration().is_err());
    }

    #[test]
    fn test_expiration_rejects_padding() {
        assert!(widget(" 2024-01-01").expiration().is_err());
        assert!(widget("2024-01-01 ").expiration().is_err());
        assert!(widget(" 2024-01-01 ").expiration().is_err());
        assert!(widget("2024-01-01\n").expiration().is_err());
    }

    #[test]
    fn test_numeric_accessors() {
        let record = widget("2024-01-01");
        assert_eq!(record.quantity_value(), Some(10));
        assert_eq!(record.price_value(), Some(Decimal::new(999, 2)));

        let mut loose = record;
        loose.quantity = "ten".to_string();
        loose.price = "free".to_string();
        assert_eq!(loose.quantity_value(), None);
        assert_eq!(loose.price_value(), None);
    }

    #[test]
    fn test_from_parts_keeps_fields_verbatim() {
        let identity = Identity {
            id: "abc".to_string(),
            gtin: "1".to_string(),
            mpn: "2".to_string(),
            brand: "Initech".to_string(),
        };
        let record = Record::from_parts(identity, NewRecord::new("Gadget", " 7 ", "soon", "x"));
        assert_eq!(record.id, "abc");
        assert_eq!(record.brand, "Initech");
        assert_eq!(record.quantity, " 7 ");
        assert_eq!(record.expiration_date, "soon");
        assert_eq!(record.price, "x");
    }

    #[test]
    fn test_fields_follow_header_order() {
        let record = widget("2024-01-01");
        let fields = record.fields();
        assert_eq!(fields.len(), HEADER.len());
        assert_eq!(fields[1], "Widget");
        assert_eq!(fields[6], "2024-01-01");
        assert_eq!(fields[7], "9.99");
    }
}
