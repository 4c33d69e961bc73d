//! Ledger configuration.

use crate::progress::{Progress, ProgressBar, Silent};
use std::path::PathBuf;
use std::time::Duration;

/// File the ledger reads and writes when none is given.
pub const DEFAULT_DATA_FILE: &str = "warehouse_inventory.csv";

/// Pause between progress bar frames when none is given.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(25);

/// How operations show progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    /// A text bar on stderr.
    #[default]
    Bar,
    /// Nothing.
    Silent,
}

/// Configuration for a [`crate::Ledger`].
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// The CSV inventory file.
    pub data_file: PathBuf,
    /// Progress indicator style.
    pub progress: ProgressStyle,
    /// Pause between progress bar frames.
    pub frame_delay: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            progress: ProgressStyle::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

impl LedgerConfig {
    /// Start building a configuration.
    pub fn builder() -> LedgerConfigBuilder {
        LedgerConfigBuilder::new()
    }

    /// Build the progress indicator this configuration asks for.
    pub fn progress_indicator(&self) -> Box<dyn Progress> {
        match self.progress {
            ProgressStyle::Bar => Box::new(ProgressBar::stderr(self.frame_delay)),
            ProgressStyle::Silent => Box::new(Silent),
        }
    }
}

/// Builder for [`LedgerConfig`].
#[derive(Debug, Default)]
pub struct LedgerConfigBuilder {
    config: LedgerConfig,
}

impl LedgerConfigBuilder {
    /// Create a builder holding the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inventory file.
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the progress style.
    pub const fn progress(mut self, style: ProgressStyle) -> Self {
        self.config.progress = style;
        self
    }

    /// Set the pause between progress bar frames.
    pub const fn frame_delay(mut self, delay: Duration) -> Self {
        self.config.frame_delay = delay;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LedgerConfig {
        self.config
    }
}
