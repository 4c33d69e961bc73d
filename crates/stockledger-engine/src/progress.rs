//! Progress indication around ledger operations.
//!
//! The indicator runs before the wrapped operation and never affects its
//! result. [`Silent`] turns it off entirely.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Something that shows the operator that work is happening.
pub trait Progress {
    /// Show progress for the operation called `label`.
    fn run(&mut self, label: &str);
}

/// Show `progress`, then run `op` and return its result untouched.
pub fn with_progress<T, F>(progress: &mut dyn Progress, label: &str, op: F) -> T
where
    F: FnOnce() -> T,
{
    progress.run(label);
    op()
}

/// No progress output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn run(&mut self, label: &str) {
        tracing::trace!(label, "progress suppressed");
    }
}

/// A blocking text progress bar: `[====    ]  40%`.
#[derive(Debug)]
pub struct ProgressBar<W = io::Stderr> {
    writer: W,
    width: usize,
    frame_delay: Duration,
}

/// Bar width in cells; each cell is five percent.
const BAR_WIDTH: usize = 20;

impl ProgressBar<io::Stderr> {
    /// A bar on stderr pausing `frame_delay` between frames.
    pub fn stderr(frame_delay: Duration) -> Self {
        Self::new(io::stderr(), frame_delay)
    }
}

impl<W: Write> ProgressBar<W> {
    /// A bar drawn on `writer`.
    pub const fn new(writer: W, frame_delay: Duration) -> Self {
        Self {
            writer,
            width: BAR_WIDTH,
            frame_delay,
        }
    }

    /// Consume the bar and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Processing...")?;
        for filled in 0..=self.width {
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
            let percent = filled * 100 / self.width;
            write!(
                self.writer,
                "\r[{:<width$}] {percent}%",
                "=".repeat(filled),
                width = self.width
            )?;
            self.writer.flush()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Done")
    }
}

impl<W: Write> Progress for ProgressBar<W> {
    fn run(&mut self, label: &str) {
        tracing::debug!(label, "running");
        // Draw errors are logged, never returned.
        if let Err(e) = self.draw() {
            tracing::debug!(error = %e, "progress output failed");
        }
    }
}
