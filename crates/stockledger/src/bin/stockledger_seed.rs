//! stockledger-seed - Fill an inventory file with synthetic records.

fn main() -> std::process::ExitCode {
    stockledger::cmd::seed_cmd::main()
}
