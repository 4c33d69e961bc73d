//! stockledger - Manage a warehouse inventory file.
//!
//! With no subcommand the interactive menu runs; every menu action is also
//! available as a one-shot subcommand.
//!
//! # Usage
//!
//! ```bash
//! stockledger add Laptop 10 2023-12-31 899.99
//! stockledger update Laptop --price 849.99
//! stockledger expired --today 2024-01-10
//! stockledger --file stock.csv
//! ```

use super::args::LedgerArgs;
use super::menu::{Menu, ReadlinePrompt};
use super::outcome_notice;
use crate::logging;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use stockledger_core::{Clock, FieldUpdate, FixedClock, NewRecord, RecordPatch, SystemClock};
use stockledger_engine::Ledger;
use stockledger_export::{PdfReport, DEFAULT_REPORT_FILE};
use stockledger_seed::FakeMinter;

/// Manage a warehouse inventory file.
#[derive(Parser, Debug)]
#[command(name = "stockledger")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    ledger: LedgerArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu (default)
    Menu {
        /// Where option 8 writes the PDF report
        #[arg(short, long, value_name = "OUTPUT_FILE", default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },

    /// Add an item with a fresh identity
    Add {
        /// Item name
        name: String,
        /// Quantity on hand
        quantity: String,
        /// Expiration date (YYYY-MM-DD)
        expiration_date: String,
        /// Unit price
        price: String,
    },

    /// Remove every item with this name, ignoring case
    Remove {
        /// Item name; some item must carry it exactly
        name: String,
    },

    /// Change the quantity, expiration date or price of every item with this name
    Update {
        /// Item name, matched exactly
        name: String,
        /// New quantity
        #[arg(long)]
        quantity: Option<String>,
        /// New expiration date (YYYY-MM-DD)
        #[arg(long)]
        expiration_date: Option<String>,
        /// New price
        #[arg(long)]
        price: Option<String>,
    },

    /// List every record with all fields
    List {
        /// Output format
        #[arg(long, default_value = "text")]
        format: ListFormat,
    },

    /// Full report sorted by expiration date
    Report,

    /// Items whose expiration date has passed
    Expired {
        /// Judge expiry as of this date instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
    },

    /// Items with exactly this name
    Search {
        /// Item name
        name: String,
    },

    /// Export the full inventory to PDF
    Export {
        /// Output file
        #[arg(short, long, value_name = "OUTPUT_FILE", default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Order rows by expiration date instead of stored order
        #[arg(long)]
        sorted: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

/// Main entry point for the inventory command.
pub fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.ledger.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.ledger.to_config();
    let mut ledger = Ledger::open(&config, FakeMinter::new())
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;
    tracing::debug!(file = %config.data_file.display(), "inventory opened");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = args.command.unwrap_or(Command::Menu {
        output: PathBuf::from(DEFAULT_REPORT_FILE),
    });
    match command {
        Command::Menu { output } => {
            let mut prompt = ReadlinePrompt::new()?;
            let result = Menu::new(&mut ledger, &SystemClock, output).run(&mut prompt, &mut out);
            prompt.finish();
            result?;
        }
        Command::Add {
            name,
            quantity,
            expiration_date,
            price,
        } => {
            ledger.add(NewRecord::new(name.as_str(), quantity, expiration_date, price))?;
            writeln!(out, "Item '{name}' added successfully.")?;
        }
        Command::Remove { name } => {
            let outcome = ledger.remove(&name)?;
            writeln!(out, "{}", outcome_notice("removed", &name, &outcome))?;
        }
        Command::Update {
            name,
            quantity,
            expiration_date,
            price,
        } => {
            let patch = RecordPatch {
                quantity: FieldUpdate::from(quantity),
                expiration_date: FieldUpdate::from(expiration_date),
                price: FieldUpdate::from(price),
            };
            let outcome = ledger.update(&name, patch)?;
            writeln!(out, "{}", outcome_notice("updated", &name, &outcome))?;
        }
        Command::List { format } => match format {
            ListFormat::Text => ledger.list(&mut out)?,
            ListFormat::Json => {
                serde_json::to_writer_pretty(&mut out, ledger.records())?;
                writeln!(out)?;
            }
        },
        Command::Report => ledger.report(&mut out)?,
        Command::Expired { today } => {
            let clock: Box<dyn Clock> = match today {
                Some(date) => Box::new(FixedClock::new(date)),
                None => Box::new(SystemClock),
            };
            ledger.expired(clock.as_ref(), &mut out)?;
        }
        Command::Search { name } => {
            ledger.search(&name, &mut out)?;
        }
        Command::Export { output, sorted } => {
            let records = if sorted {
                stockledger_core::view::sort_by_expiration(ledger.records())?
            } else {
                ledger.records().to_vec()
            };
            PdfReport::new(Local::now().naive_local()).write_to_file(&records, &output)?;
            writeln!(out, "Report exported to {}", output.display())?;
        }
    }
    Ok(())
}
