//! Integration tests for the CSV record store.

use std::fs;
use stockledger_core::Record;
use stockledger_store::{CsvStore, RecordStore, StoreError};
use tempfile::TempDir;

fn sample() -> Vec<Record> {
    vec![
        Record::new(
            "0d1f6c3e-8c52-4c1e-9d43-6a1f2f0c7b11",
            "Widget",
            "4006381333931",
            "96385074",
            "Acme",
            "10",
            "2024-01-01",
            "9.99",
        ),
        Record::new(
            "5b8e2a90-1f7d-4b36-a0f4-3c2d9e8b1a22",
            "Gadget",
            "4006381333948",
            "96385081",
            "Initech, LLC",
            "3",
            "2023-06-01",
            "1.50",
        ),
    ]
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("absent.csv"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("inventory.csv"));

    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn test_save_writes_fixed_header_and_field_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    let mut store = CsvStore::new(&path);

    store.save(&sample()[..1]).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "id,name,gtin,mpn,brand,quantity,expiration_date,price\n\
         0d1f6c3e-8c52-4c1e-9d43-6a1f2f0c7b11,Widget,4006381333931,96385074,Acme,10,2024-01-01,9.99\n"
    );
}

#[test]
fn test_save_replaces_previous_content() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("inventory.csv"));

    store.save(&sample()).unwrap();
    store.save(&sample()[1..]).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Gadget");
}

#[test]
fn test_save_leaves_no_staging_files() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("inventory.csv"));

    store.save(&sample()).unwrap();
    store.save(&[]).unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_into_missing_directory_is_write_error() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("nope").join("inventory.csv"));

    let err = store.save(&sample()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}

#[test]
fn test_header_only_file_is_empty_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(&path, "id,name,gtin,mpn,brand,quantity,expiration_date,price\n").unwrap();

    assert!(CsvStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn test_file_without_header_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(&path, "").unwrap();

    let err = CsvStore::new(&path).load().unwrap_err();
    assert!(err.is_read_error());
}

#[test]
fn test_short_row_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(
        &path,
        "id,name,gtin,mpn,brand,quantity,expiration_date,price\n1,Milk,4,2024-01-09\n",
    )
    .unwrap();

    let err = CsvStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn test_legacy_file_is_rewritten_with_canonical_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(
        &path,
        "id,item,gtin,mpn,brand,quantity,expiration_date,price\n\
         1,Milk,4006381333931,96385074,Acme,4,2024-01-09,1.99\n",
    )
    .unwrap();

    let mut store = CsvStore::new(&path);
    let records = store.load().unwrap();
    store.save(&records).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("id,name,"));
    assert_eq!(store.load().unwrap(), records);
}

#[cfg(unix)]
#[test]
fn test_save_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    let mut store = CsvStore::new(&path);
    store.save(&sample()).unwrap();

    for mode in [0o644, 0o664, 0o600] {
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        let records = store.load().unwrap();
        store.save(&records).unwrap();
        let after = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(after, mode);
    }
}
