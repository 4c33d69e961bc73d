//! Command implementations for CLI tools.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by thin wrapper binaries.

pub mod args;
pub mod inventory;
pub mod menu;
pub mod seed_cmd;

use stockledger_engine::Outcome;

/// The line printed after a mutation named by `verb` ("added", "removed", ...).
pub fn outcome_notice(verb: &str, name: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Applied { .. } => format!("Item '{name}' {verb} successfully."),
        Outcome::NotFound { .. } => format!("Item {name} not found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_notice() {
        let applied = Outcome::Applied { affected: 2 };
        let missing = Outcome::NotFound {
            name: "Widget".to_string(),
        };
        assert_eq!(
            outcome_notice("removed", "Widget", &applied),
            "Item 'Widget' removed successfully."
        );
        assert_eq!(
            outcome_notice("updated", "Widget", &missing),
            "Item Widget not found."
        );
    }
}
