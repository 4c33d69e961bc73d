//! The interactive inventory menu.
//!
//! ```text
//! Warehouse Inventory Management
//! 1. Add Item
//! ...
//! q. Exit
//! ```
//!
//! Input comes through a [`Prompt`], so the loop runs the same against a
//! terminal ([`ReadlinePrompt`]) or a script.

use super::outcome_notice;
use anyhow::Result;
use chrono::Local;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use stockledger_core::{Clock, FieldUpdate, MintIdentity, NewRecord, RecordPatch};
use stockledger_engine::Ledger;
use stockledger_export::PdfReport;
use stockledger_store::RecordStore;

const MENU: &str = "\
1. Add Item
2. Remove Item
3. Update Item
4. View All Items
5. Get Full Report
6. Get Expired Items
7. Search for an Item
8. Export Full Report to PDF
q. Exit
";

/// A source of operator answers.
pub trait Prompt {
    /// Show `prompt` and read one line, or `None` once input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// A [`Prompt`] on the terminal, with history kept between sessions.
pub struct ReadlinePrompt {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

/// Get the history file path
fn get_history_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stockledger").join("history"))
}

impl ReadlinePrompt {
    /// Open the terminal and load any saved history.
    pub fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history = get_history_path();
        if let Some(history_path) = &history {
            if let Some(parent) = history_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = editor.load_history(history_path);
        }
        Ok(Self { editor, history })
    }

    /// Save history.
    pub fn finish(mut self) {
        if let Some(history_path) = &self.history {
            let _ = self.editor.save_history(history_path);
        }
    }
}

impl Prompt for ReadlinePrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted)");
                Ok(None)
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Read an answer or leave the menu when input ends.
macro_rules! answer {
    ($prompt:expr, $text:expr) => {
        match $prompt.ask($text)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

/// The menu loop over one ledger.
pub struct Menu<'a, S, M> {
    ledger: &'a mut Ledger<S, M>,
    clock: &'a dyn Clock,
    export_path: PathBuf,
}

impl<'a, S: RecordStore, M: MintIdentity> Menu<'a, S, M> {
    /// A menu over `ledger`, judging expiry by `clock` and exporting to `export_path`.
    pub fn new(ledger: &'a mut Ledger<S, M>, clock: &'a dyn Clock, export_path: PathBuf) -> Self {
        Self {
            ledger,
            clock,
            export_path,
        }
    }

    /// Run until the operator quits or input ends.
    ///
    /// A failed operation is reported and the loop carries on.
    pub fn run<P: Prompt, W: Write>(&mut self, prompt: &mut P, out: &mut W) -> Result<()> {
        loop {
            writeln!(out, "\nWarehouse Inventory Management\n")?;
            writeln!(out, "{MENU}")?;
            out.flush()?;

            let Some(choice) = prompt.ask("Choose an option: ")? else {
                break;
            };
            match self.dispatch(choice.trim(), prompt, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    tracing::warn!(choice = choice.trim(), "menu operation failed");
                    eprintln!("error: {e:#}");
                }
            }
        }
        Ok(())
    }

    fn dispatch<P: Prompt, W: Write>(
        &mut self,
        choice: &str,
        prompt: &mut P,
        out: &mut W,
    ) -> Result<Flow> {
        match choice {
            "1" => {
                let name = answer!(prompt, "Enter item name: ");
                let quantity = answer!(prompt, "Enter quantity: ");
                let expiration = answer!(prompt, "Enter expiration date (YYYY-MM-DD): ");
                let price = answer!(prompt, "Enter price: ");
                self.ledger
                    .add(NewRecord::new(name.as_str(), quantity, expiration, price))?;
                writeln!(out, "Item '{name}' added successfully.")?;
            }
            "2" => {
                let name = answer!(prompt, "Enter item name to remove: ");
                let outcome = self.ledger.remove(&name)?;
                writeln!(out, "{}", outcome_notice("removed", &name, &outcome))?;
            }
            "3" => {
                let name = answer!(prompt, "Enter item name to update: ");
                let quantity = answer!(prompt, "Enter new quantity (leave blank to keep current): ");
                let expiration = answer!(
                    prompt,
                    "Enter new expiration date (YYYY-MM-DD, leave blank to keep current): "
                );
                let price = answer!(prompt, "Enter new price (leave blank to keep current): ");
                let patch = RecordPatch {
                    quantity: FieldUpdate::from_input(&quantity),
                    expiration_date: FieldUpdate::from_input(&expiration),
                    price: FieldUpdate::from_input(&price),
                };
                let outcome = self.ledger.update(&name, patch)?;
                writeln!(out, "{}", outcome_notice("updated", &name, &outcome))?;
            }
            "4" => self.ledger.list(out)?,
            "5" => self.ledger.report(out)?,
            "6" => {
                self.ledger.expired(self.clock, out)?;
            }
            "7" => {
                let name = answer!(prompt, "Enter the name of the item to search for: ");
                self.ledger.search(&name, out)?;
            }
            "8" => {
                PdfReport::new(Local::now().naive_local())
                    .write_to_file(self.ledger.records(), &self.export_path)?;
                writeln!(out, "Report exported to {}", self.export_path.display())?;
            }
            "q" => return Ok(Flow::Quit),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use stockledger_core::{FixedClock, NaiveDate, Record};
    use stockledger_seed::FakeMinter;
    use stockledger_store::MemoryStore;

    struct Script(VecDeque<String>);

    impl Script {
        fn new(lines: &[&str]) -> Self {
            Self(lines.iter().map(|s| (*s).to_string()).collect())
        }
    }

    impl Prompt for Script {
        fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(self.0.pop_front())
        }
    }

    fn record(id: &str, name: &str, quantity: &str, date: &str, price: &str) -> Record {
        Record::new(id, name, "4006381333931", "96385074", "Acme", quantity, date, price)
    }

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
    }

    fn run_script(records: Vec<Record>, lines: &[&str]) -> (Ledger<MemoryStore, FakeMinter>, String) {
        let mut ledger =
            Ledger::load(MemoryStore::with_records(records), FakeMinter::seeded(3)).unwrap();
        let clock = clock();
        let mut out = Vec::new();
        Menu::new(&mut ledger, &clock, PathBuf::from("unused.pdf"))
            .run(&mut Script::new(lines), &mut out)
            .unwrap();
        (ledger, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_then_quit() {
        let (ledger, out) = run_script(
            Vec::new(),
            &["1", "Laptop", "10", "2023-12-31", "899.99", "q"],
        );
        assert!(out.contains("Item 'Laptop' added successfully."));
        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.records()[0].price, "899.99");
        assert_eq!(ledger.store().save_count(), 1);
    }

    #[test]
    fn test_update_blank_answers_keep_fields() {
        let (ledger, out) = run_script(
            vec![record("1", "Widget", "10", "2024-01-01", "5.00")],
            &["3", "Widget", "", "", "9.99", "q"],
        );
        assert!(out.contains("Item 'Widget' updated successfully."));
        assert_eq!(
            ledger.records()[0],
            record("1", "Widget", "10", "2024-01-01", "9.99")
        );
    }

    #[test]
    fn test_remove_missing_and_invalid_choice() {
        let (ledger, out) = run_script(
            vec![record("1", "Widget", "10", "2024-01-01", "5.00")],
            &["2", "Nonexistent", "9", "q"],
        );
        assert!(out.contains("Item Nonexistent not found."));
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.store().save_count(), 0);
    }

    #[test]
    fn test_views() {
        let (_, out) = run_script(
            vec![
                record("1", "Milk", "4", "2024-01-09", "1.99"),
                record("2", "Bread", "2", "2024-01-12", "2.49"),
            ],
            &["5", "6", "7", "Bread", "q"],
        );
        assert!(out.contains("Full Inventory Report"));
        assert!(out.contains("Expired Items"));
        assert!(out.contains("Search Results for 'Bread'"));
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (ledger, out) = run_script(Vec::new(), &["1", "Laptop"]);
        assert!(out.contains("Warehouse Inventory Management"));
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn test_failed_operation_keeps_looping() {
        let (_, out) = run_script(
            vec![record("1", "Widget", "10", "soon", "5.00")],
            &["5", "4", "q"],
        );
        // The report fails on the bad date; the listing still runs.
        assert!(out.contains("1 record(s)"));
    }
}
