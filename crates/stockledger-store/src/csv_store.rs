//! CSV-backed record store.

use crate::{RecordStore, StoreError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use stockledger_core::{Record, RecordSet, HEADER};
use tempfile::NamedTempFile;

/// Historical name of the second column.
const LEGACY_NAME_COLUMN: &str = "item";

/// A record store backed by one CSV file.
///
/// Saves go to a temporary file in the same directory which then replaces the
/// target, so readers never observe a half-written inventory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the inventory file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, err: &csv::Error) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            line: err.position().map_or(0, csv::Position::line),
            message: err.to_string(),
        }
    }

    fn parse(&self, content: &str) -> Result<RecordSet, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers().map_err(|e| self.malformed(&e))?.clone();
        if headers.is_empty() {
            return Err(StoreError::MissingHeader {
                path: self.path.clone(),
            });
        }
        if !header_matches(&headers) {
            return Err(StoreError::HeaderMismatch {
                path: self.path.clone(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| self.malformed(&e))?;
            // Positional: the header may use the legacy column name.
            let record: Record = row.deserialize(None).map_err(|e| self.malformed(&e))?;
            records.push(record);
        }
        Ok(records)
    }
}

fn header_matches(headers: &csv::StringRecord) -> bool {
    headers.len() == HEADER.len()
        && headers
            .iter()
            .zip(HEADER)
            .enumerate()
            .all(|(i, (found, expected))| {
                found == expected || (i == 1 && found == LEGACY_NAME_COLUMN)
            })
}

/// Write `records` as CSV, header first.
fn write_records<W: Write>(records: &[Record], writer: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<RecordSet, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "inventory file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records = self.parse(&content)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded inventory");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        // The replacement keeps the mode of the file it replaces.
        match fs::metadata(&self.path) {
            Ok(existing) => staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(write_err(e)),
        }
        write_records(records, staged.as_file_mut()).map_err(|e| write_err(e.into()))?;
        staged.as_file().sync_all().map_err(write_err)?;
        staged
            .persist(&self.path)
            .map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved inventory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CsvStore {
        CsvStore::new("inventory.csv")
    }

    #[test]
    fn test_parse_header_only() {
        let content = "id,name,gtin,mpn,brand,quantity,expiration_date,price\n";
        assert!(store().parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = "id,name,gtin,mpn,brand,quantity,expiration_date,price\n\
                       1,\"Bolts, M6\",4006381333931,96385074,\"Smith, Jones and Co\",40,2024-03-01,0.10\n";
        let records = store().parse(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bolts, M6");
        assert_eq!(records[0].brand, "Smith, Jones and Co");
        assert_eq!(records[0].price, "0.10");
    }

    #[test]
    fn test_parse_legacy_item_header() {
        let content = "id,item,gtin,mpn,brand,quantity,expiration_date,price\n\
                       1,Milk,4006381333931,96385074,Acme,4,2024-01-09,1.99\n";
        let records = store().parse(content).unwrap();
        assert_eq!(records[0].name, "Milk");
    }

    #[test]
    fn test_parse_empty_file_is_missing_header() {
        let err = store().parse("").unwrap_err();
        assert!(matches!(err, StoreError::MissingHeader { .. }));
        assert!(err.is_read_error());
    }

    #[test]
    fn test_parse_wrong_header() {
        let err = store().parse("item,quantity,expiration_date,price\n").unwrap_err();
        assert!(matches!(err, StoreError::HeaderMismatch { .. }));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let content = "id,name,gtin,mpn,brand,quantity,expiration_date,price\n\
                       1,Milk,4006381333931,96385074,Acme,4,2024-01-09\n";
        match store().parse(content).unwrap_err() {
            StoreError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_write_records_always_writes_header() {
        let mut out = Vec::new();
        write_records(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,name,gtin,mpn,brand,quantity,expiration_date,price\n"
        );
    }
}
