//! Fixed-width table rendering.
//!
//! Renders already-projected records; callers decide order and filtering via
//! [`crate::view`].

use crate::{Record, HEADER};
use std::io::{self, Write};

/// Notice printed when the inventory has no records.
pub const EMPTY_INVENTORY: &str = "No items in the inventory.";

/// Notice printed when no record has expired.
pub const NO_EXPIRED: &str = "No expired items found.";

/// Total width of a report table, borders included.
pub const TABLE_WIDTH: usize = 71;

/// How one view draws its name, quantity, expiration date and price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Length of the dashed rules.
    pub rule_width: usize,
    /// Text before the first cell.
    pub lead: &'static str,
    /// Text between cells.
    pub separator: &'static str,
    /// Whether a rule follows the last row.
    pub closing_rule: bool,
}

impl TableLayout {
    /// Bordered table of the full report.
    pub const REPORT: Self = Self {
        rule_width: TABLE_WIDTH,
        lead: "|",
        separator: " | ",
        closing_rule: true,
    };

    /// Expired items: no left border, one column narrower.
    pub const EXPIRED: Self = Self {
        rule_width: TABLE_WIDTH - 1,
        lead: "",
        separator: " | ",
        closing_rule: true,
    };

    /// Search results: space separated, open at the bottom.
    pub const SEARCH: Self = Self {
        rule_width: TABLE_WIDTH,
        lead: "",
        separator: " ",
        closing_rule: false,
    };

    fn rule<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", "-".repeat(self.rule_width))
    }

    fn row<W: Write>(&self, writer: &mut W, cells: [&str; 4]) -> io::Result<()> {
        let sep = self.separator;
        writeln!(
            writer,
            "{}{:<20}{sep}{:<10}{sep}{:<20}{sep}{:<10}|",
            self.lead, cells[0], cells[1], cells[2], cells[3]
        )
    }
}

/// Write a titled table of name, quantity, expiration date and price.
///
/// Rows are written in the order given. An empty slice still produces the
/// title and the column header.
pub fn write_table<W: Write>(
    layout: TableLayout,
    title: &str,
    records: &[Record],
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{title}")?;
    layout.rule(writer)?;
    layout.row(writer, ["Item", "Quantity", "Expiration Date", "Price"])?;
    layout.rule(writer)?;
    for record in records {
        layout.row(
            writer,
            [
                &record.name,
                &record.quantity,
                &record.expiration_date,
                &record.price,
            ],
        )?;
    }
    if layout.closing_rule {
        layout.rule(writer)?;
    }
    Ok(())
}

/// Write the full inventory report.
pub fn write_report<W: Write>(records: &[Record], writer: &mut W) -> io::Result<()> {
    write_table(TableLayout::REPORT, "Full Inventory Report", records, writer)
}

/// Write the expired-items report.
pub fn write_expired<W: Write>(records: &[Record], writer: &mut W) -> io::Result<()> {
    write_table(TableLayout::EXPIRED, "Expired Items", records, writer)
}

/// Write the results of a name search.
pub fn write_search<W: Write>(name: &str, records: &[Record], writer: &mut W) -> io::Result<()> {
    write_table(
        TableLayout::SEARCH,
        &format!("Search Results for '{name}'"),
        records,
        writer,
    )
}

/// Write every field of every record, sizing columns to their content.
pub fn write_listing<W: Write>(records: &[Record], writer: &mut W) -> io::Result<()> {
    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.chars().count()).collect();
    for record in records {
        for (width, field) in widths.iter_mut().zip(record.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let write_line = |writer: &mut W, cells: [&str; 8]| -> io::Result<()> {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(writer, "{}", line.trim_end())
    };

    write_line(writer, HEADER)?;
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(writer, "{}", separators.join("  "))?;
    for record in records {
        write_line(writer, record.fields())?;
    }

    writeln!(writer)?;
    writeln!(writer, "{} record(s)", records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("a1", "Widget", "4006381333931", "96385074", "Acme", "10", "2024-01-01", "9.99"),
            Record::new("b2", "Gadget", "4006381333948", "96385081", "Initech", "3", "2023-06-01", "1.50"),
        ]
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let output = render(|w| write_report(&sample(), w));
        let lines: Vec<&str> = output.lines().collect();
        let rule = "-".repeat(TABLE_WIDTH);

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Full Inventory Report");
        assert_eq!(lines[2], rule);
        assert_eq!(
            lines[3],
            "|Item                 | Quantity   | Expiration Date      | Price     |"
        );
        assert_eq!(lines[4], rule);
        assert_eq!(
            lines[5],
            "|Widget               | 10         | 2024-01-01           | 9.99      |"
        );
        assert_eq!(
            lines[6],
            "|Gadget               | 3          | 2023-06-01           | 1.50      |"
        );
        assert_eq!(lines[7], rule);
        assert_eq!(lines.len(), 8);
        assert!(lines[3..].iter().all(|l| l.chars().count() == TABLE_WIDTH));
    }

    #[test]
    fn test_search_layout() {
        let output = render(|w| write_search("Widget", &sample()[..1], w));
        let lines: Vec<&str> = output.lines().collect();
        let rule = "-".repeat(TABLE_WIDTH);

        assert_eq!(lines[1], "Search Results for 'Widget'");
        assert_eq!(lines[2], rule);
        assert_eq!(
            lines[3],
            "Item                 Quantity   Expiration Date      Price     |"
        );
        assert_eq!(lines[4], rule);
        assert_eq!(
            lines[5],
            "Widget               10         2024-01-01           9.99      |"
        );
        // No closing rule.
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_search_with_no_rows() {
        let output = render(|w| write_search("Sprocket", &[], w));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "Search Results for 'Sprocket'");
        // blank, title, rule, header, rule
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_expired_layout() {
        let output = render(|w| write_expired(&sample()[1..], w));
        let lines: Vec<&str> = output.lines().collect();
        let rule = "-".repeat(TABLE_WIDTH - 1);

        assert_eq!(lines[1], "Expired Items");
        assert_eq!(lines[2], rule);
        assert_eq!(
            lines[3],
            "Item                 | Quantity   | Expiration Date      | Price     |"
        );
        assert_eq!(lines[4], rule);
        assert_eq!(
            lines[5],
            "Gadget               | 3          | 2023-06-01           | 1.50      |"
        );
        assert_eq!(lines[6], rule);
        assert_eq!(lines.len(), 7);
        assert!(!output.contains("Widget"));
    }

    #[test]
    fn test_listing_shows_all_fields() {
        let output = render(|w| write_listing(&sample(), w));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("id  "));
        assert!(lines[0].ends_with("price"));
        assert!(lines[2].contains("4006381333931"));
        assert!(lines[3].contains("Initech"));
        assert_eq!(lines.last().copied(), Some("2 record(s)"));
    }

    #[test]
    fn test_listing_empty() {
        let output = render(|w| write_listing(&[], w));
        assert!(output.ends_with("0 record(s)\n"));
    }
}
