//! PDF inventory reports for stockledger.
//!
//! Renders records in the order given; sorting or filtering is up to the
//! caller. The document is A4 portrait with a heading block on the first page
//! and a four-column table (item, quantity, expiration date, price) that
//! continues onto as many pages as needed.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use stockledger_export::{PdfReport, DEFAULT_REPORT_FILE};
//!
//! let records = Vec::new();
//! PdfReport::new(Local::now().naive_local()).write_to_file(&records, DEFAULT_REPORT_FILE)?;
//! # Ok::<(), stockledger_export::ExportError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use chrono::NaiveDateTime;
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use stockledger_core::Record;
use thiserror::Error;

/// File the report is written to when none is given.
pub const DEFAULT_REPORT_FILE: &str = "inventory_report.pdf";

const TITLE: &str = "Warehouse Inventory Report";
const SUBTITLE: &str = "Full Inventory Report";
const COLUMNS: [&str; 4] = ["Item", "Quantity", "Expiration Date", "Price"];

// Page geometry, millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const BOTTOM_LIMIT: f32 = 20.0;
const COLUMN_WIDTH: f32 = 50.0;
const ROW_HEIGHT: f32 = 12.0;
const CELL_PADDING: f32 = 2.0;
// Text baseline sits this far above the bottom edge of its cell.
const BASELINE_OFFSET: f32 = 4.0;
const BORDER_THICKNESS: f32 = 0.5;
const PT_TO_MM: f32 = 25.4 / 72.0;
const PAGE_TOP: f32 = PAGE_HEIGHT - BOTTOM_LIMIT;
const FIRST_TABLE_TOP: f32 = PAGE_TOP - 40.0;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write report {path}: {source}")]
    Io {
        /// The output path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Flushing the rendered document failed.
    #[error("failed to write PDF output: {0}")]
    Output(#[source] std::io::Error),

    /// The PDF library rejected the document.
    #[error("failed to render PDF: {0}")]
    Pdf(String),
}

fn pdf_error(err: printpdf::Error) -> ExportError {
    ExportError::Pdf(format!("{err:?}"))
}

/// Number of table rows that fit below a header row drawn at `header_y`.
fn rows_fitting(header_y: f32) -> usize {
    ((header_y - ROW_HEIGHT - BOTTOM_LIMIT) / ROW_HEIGHT).floor() as usize + 1
}

/// Split `rows` table rows into per-page counts.
///
/// There is always at least one page, even for zero rows.
pub fn plan_pages(rows: usize) -> Vec<usize> {
    let first = rows_fitting(FIRST_TABLE_TOP);
    let rest = rows_fitting(PAGE_TOP);

    let mut pages = vec![rows.min(first)];
    let mut remaining = rows.saturating_sub(first);
    while remaining > 0 {
        let count = remaining.min(rest);
        pages.push(count);
        remaining -= count;
    }
    pages
}

/// A printable inventory report.
#[derive(Debug, Clone)]
pub struct PdfReport {
    generated_at: NaiveDateTime,
}

impl PdfReport {
    /// A report stamped with `generated_at`.
    pub const fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    /// Render `records` as PDF into `writer`.
    pub fn render<W: Write>(&self, records: &[Record], writer: W) -> Result<(), ExportError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let pages = plan_pages(records.len());
        let mut rows = records.iter();
        for (index, count) in pages.iter().enumerate() {
            let (layer, mut y) = if index == 0 {
                let layer = doc.get_page(first_page).get_layer(first_layer);
                self.write_heading(&layer, &regular, &bold);
                (layer, FIRST_TABLE_TOP)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                (doc.get_page(page).get_layer(layer), PAGE_TOP)
            };

            write_row(&layer, COLUMNS, y, &bold);
            for record in rows.by_ref().take(*count) {
                y -= ROW_HEIGHT;
                write_row(
                    &layer,
                    [
                        &record.name,
                        &record.quantity,
                        &record.expiration_date,
                        &record.price,
                    ],
                    y,
                    &regular,
                );
            }
        }

        let mut target = BufWriter::new(writer);
        doc.save(&mut target).map_err(pdf_error)?;
        target.flush().map_err(ExportError::Output)?;
        tracing::debug!(records = records.len(), pages = pages.len(), "rendered PDF report");
        Ok(())
    }

    /// Render `records` into a new file at `path`.
    pub fn write_to_file(
        &self,
        records: &[Record],
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.render(records, file)?;
        tracing::info!(path = %path.display(), "exported PDF report");
        Ok(())
    }

    fn write_heading(
        &self,
        layer: &PdfLayerReference,
        regular: &IndirectFontRef,
        bold: &IndirectFontRef,
    ) {
        layer.use_text(TITLE, TITLE_SIZE, Mm(MARGIN), Mm(PAGE_TOP), bold);
        layer.use_text(SUBTITLE, HEADING_SIZE, Mm(MARGIN), Mm(PAGE_TOP - 15.0), regular);
        let stamp = format!("Date: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"));
        layer.use_text(stamp, BODY_SIZE, Mm(MARGIN), Mm(PAGE_TOP - 25.0), regular);
    }
}

/// Approximate Helvetica advance width of `c`, in thousandths of an em.
///
/// Rounds up within each class so estimates err towards wider text.
const fn glyph_width(c: char) -> u32 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' => 222,
        ' ' | '.' | ',' | ':' | ';' | '!' | 'I' | 'f' | 't' | '/' | '[' | ']' => 278,
        'r' | '-' | '(' | ')' | '"' => 333,
        'm' | 'M' => 833,
        'w' => 722,
        'W' => 944,
        'A'..='Z' => 778,
        'a'..='z' | '0'..='9' => 556,
        _ => 1000,
    }
}

fn units(text: &str) -> u32 {
    text.chars().map(glyph_width).sum()
}

/// Shorten `text` with a trailing `...` so it fits inside one column.
fn fit_to_column(text: &str, size: f32) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    let limit = (2.0f32.mul_add(-CELL_PADDING, COLUMN_WIDTH) * 1000.0 / (size * PT_TO_MM)) as u32;
    if units(text) <= limit {
        return Cow::Borrowed(text);
    }

    let budget = limit.saturating_sub(units(ELLIPSIS));
    let mut used = 0;
    let mut fitted: String = text
        .chars()
        .take_while(|&c| {
            used += glyph_width(c);
            used <= budget
        })
        .collect();
    fitted.push_str(ELLIPSIS);
    Cow::Owned(fitted)
}

/// Closed outline of the cell whose text baseline is at (`x`, `y`).
fn cell_border(x: f32, y: f32) -> Line {
    let bottom = y - BASELINE_OFFSET;
    let top = bottom + ROW_HEIGHT;
    let right = x + COLUMN_WIDTH;
    Line {
        points: [(x, bottom), (right, bottom), (right, top), (x, top)]
            .into_iter()
            .map(|(px, py)| (Point::new(Mm(px), Mm(py)), false))
            .collect(),
        is_closed: true,
    }
}

fn write_row(layer: &PdfLayerReference, cells: [&str; 4], y: f32, font: &IndirectFontRef) {
    layer.set_outline_thickness(BORDER_THICKNESS);
    for (i, cell) in cells.iter().enumerate() {
        let x = (i as f32).mul_add(COLUMN_WIDTH, MARGIN);
        layer.add_line(cell_border(x, y));
        let text = fit_to_column(cell, BODY_SIZE);
        layer.use_text(text.as_ref(), BODY_SIZE, Mm(x + CELL_PADDING), Mm(y), font);
    }
}
