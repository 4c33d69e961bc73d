//! Identity minting and synthetic inventory for stockledger.
//!
//! [`FakeMinter`] supplies the creation-time metadata of new records (UUID,
//! EAN-13 GTIN, EAN-8 MPN, company-name brand) and can produce whole
//! synthetic records for seeding or stress-testing an inventory.
//!
//! # Example
//!
//! ```
//! use stockledger_core::{MintIdentity, NaiveDate};
//! use stockledger_seed::FakeMinter;
//!
//! let mut minter = FakeMinter::seeded(42);
//! let identity = minter.mint_identity();
//! assert_eq!(identity.gtin.len(), 13);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let records = minter.generate(5, today);
//! assert_eq!(records.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod barcode;

use chrono::{Duration, NaiveDate};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use stockledger_core::{Identity, MintIdentity, Record, RecordSet, DATE_FORMAT};

/// Number of records the seeding tool generates by default.
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Furthest a generated expiration date lies from today, in days.
const EXPIRY_SPREAD_DAYS: i64 = 365;

/// Generates identities and synthetic records from a random source.
#[derive(Debug, Clone)]
pub struct FakeMinter<R = StdRng> {
    rng: R,
}

impl FakeMinter<StdRng> {
    /// Create a minter seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic minter.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FakeMinter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FakeMinter<R> {
    /// Create a minter drawing from `rng`.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce one synthetic record with an expiry within a year of `today`.
    pub fn fake_record(&mut self, today: NaiveDate) -> Record {
        let identity = self.mint_identity();
        let word: String = Word().fake_with_rng(&mut self.rng);
        let quantity: u32 = self.rng.gen_range(1..=100);
        let offset = self.rng.gen_range(-EXPIRY_SPREAD_DAYS..=EXPIRY_SPREAD_DAYS);
        let expiration = today + Duration::days(offset);
        let price = Decimal::new(self.rng.gen_range(100..=10_000), 2);

        Record {
            id: identity.id,
            name: capitalize(&word),
            gtin: identity.gtin,
            mpn: identity.mpn,
            brand: identity.brand,
            quantity: quantity.to_string(),
            expiration_date: expiration.format(DATE_FORMAT).to_string(),
            price: price.to_string(),
        }
    }

    /// Produce `count` synthetic records.
    pub fn generate(&mut self, count: usize, today: NaiveDate) -> RecordSet {
        (0..count).map(|_| self.fake_record(today)).collect()
    }
}

impl<R: Rng> MintIdentity for FakeMinter<R> {
    fn mint_identity(&mut self) -> Identity {
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        Identity {
            id: id.to_string(),
            gtin: barcode::ean13(&mut self.rng),
            mpn: barcode::ean8(&mut self.rng),
            brand: CompanyName().fake_with_rng(&mut self.rng),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("widget"), "Widget");
        assert_eq!(capitalize("wIDGET"), "Widget");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_identity_shape() {
        let identity = FakeMinter::seeded(1).mint_identity();
        let parsed = uuid::Uuid::parse_str(&identity.id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert!(barcode::is_valid(&identity.gtin));
        assert!(barcode::is_valid(&identity.mpn));
        assert!(!identity.brand.is_empty());
    }

    #[test]
    fn test_identities_are_distinct() {
        let mut minter = FakeMinter::seeded(2);
        let ids: HashSet<String> = (0..200).map(|_| minter.mint_identity().id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = FakeMinter::seeded(9).generate(3, today());
        let b = FakeMinter::seeded(9).generate(3, today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_fields_in_range() {
        let records = FakeMinter::seeded(3).generate(100, today());
        assert_eq!(records.len(), 100);
        for record in &records {
            let quantity = record.quantity_value().unwrap();
            assert!((1..=100).contains(&quantity));

            let price = record.price_value().unwrap();
            assert!(price >= Decimal::new(100, 2) && price <= Decimal::new(10_000, 2));
            assert_eq!(price.scale(), 2);

            let days = (record.expiration().unwrap() - today()).num_days();
            assert!((-EXPIRY_SPREAD_DAYS..=EXPIRY_SPREAD_DAYS).contains(&days));

            assert!(record.name.chars().next().unwrap().is_uppercase());
        }
    }
}
