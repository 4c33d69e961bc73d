//! Stockledger CLI tools.
//!
//! This crate provides the command-line front end for a stockledger inventory:
//!
//! - `stockledger`: Interactive menu, plus one-shot `add`, `remove`, `update`,
//!   `list`, `report`, `expired`, `search` and `export` subcommands
//! - `stockledger-seed`: Generate synthetic records into an inventory file
//!
//! # Example Usage
//!
//! ```bash
//! stockledger-seed 100
//! stockledger report
//! stockledger update Widget --price 9.99
//! stockledger            # interactive menu
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod logging;
