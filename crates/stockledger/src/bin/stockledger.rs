//! stockledger - Warehouse inventory ledger.
//!
//! Runs the interactive menu when no subcommand is given.

fn main() -> std::process::ExitCode {
    stockledger::cmd::inventory::main()
}
