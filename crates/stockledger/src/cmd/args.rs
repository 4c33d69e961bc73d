//! Options shared by every command that opens an inventory.

use clap::builder::BoolishValueParser;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use stockledger_engine::config::DEFAULT_DATA_FILE;
use stockledger_engine::{LedgerConfig, ProgressStyle};

/// Inventory file and presentation options.
#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// The inventory CSV file
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "STOCKLEDGER_FILE",
        default_value = DEFAULT_DATA_FILE,
        global = true
    )]
    pub file: PathBuf,

    /// Do not draw the progress bar
    #[arg(
        long,
        env = "STOCKLEDGER_NO_PROGRESS",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub no_progress: bool,

    /// Pause between progress bar frames, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 25, global = true)]
    pub progress_delay_ms: u64,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl LedgerArgs {
    /// The ledger configuration these options describe.
    pub fn to_config(&self) -> LedgerConfig {
        let progress = if self.no_progress {
            ProgressStyle::Silent
        } else {
            ProgressStyle::Bar
        };
        LedgerConfig::builder()
            .data_file(&self.file)
            .progress(progress)
            .frame_delay(Duration::from_millis(self.progress_delay_ms))
            .build()
    }
}
