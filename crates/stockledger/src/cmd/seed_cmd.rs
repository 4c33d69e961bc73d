//! stockledger-seed - Fill an inventory file with synthetic records.
//!
//! # Usage
//!
//! ```bash
//! stockledger-seed            # 100 records into warehouse_inventory.csv
//! stockledger-seed 500 --seed 42 --file stock.csv
//! stockledger-seed 10 --append
//! ```

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stockledger_engine::config::DEFAULT_DATA_FILE;
use stockledger_seed::{FakeMinter, DEFAULT_RECORD_COUNT};
use stockledger_store::{CsvStore, RecordStore};

use crate::logging;

/// Fill an inventory file with synthetic records.
#[derive(Parser, Debug)]
#[command(name = "stockledger-seed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of records to generate
    #[arg(value_name = "COUNT", default_value_t = DEFAULT_RECORD_COUNT)]
    count: usize,

    /// The inventory CSV file
    #[arg(short, long, value_name = "FILE", env = "STOCKLEDGER_FILE", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Keep existing records and add the new ones after them
    #[arg(short, long)]
    append: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the seed command.
pub fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut minter = args.seed.map_or_else(FakeMinter::new, FakeMinter::seeded);
    let generated = minter.generate(args.count, Local::now().date_naive());

    let mut store = CsvStore::new(&args.file);
    let mut records = if args.append {
        store
            .load()
            .with_context(|| format!("failed to read {}", args.file.display()))?
    } else {
        Vec::new()
    };
    records.extend(generated);
    store.save(&records)?;

    tracing::info!(count = args.count, total = records.len(), "seeded inventory");
    println!(
        "Generated {} fake records and saved to {}.",
        args.count,
        args.file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_seed_then_append() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("inventory.csv");
        let mut args = Args::parse_from(["stockledger-seed", "5", "--seed", "7"]);
        args.file = file.clone();

        run(&args).unwrap();
        assert_eq!(CsvStore::new(&file).load().unwrap().len(), 5);

        args.append = true;
        args.count = 3;
        run(&args).unwrap();
        assert_eq!(CsvStore::new(&file).load().unwrap().len(), 8);
    }
}
