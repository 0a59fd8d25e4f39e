//! # Nordnet Statement
//!
//! Converts a Nordnet transaction export into a double-entry accounting
//! import file.
//!
//! ## Pipeline
//!
//! 1. Every transaction type is mapped to a debit/credit account pair
//! 2. Each transaction becomes one ledger entry with inflow/outflow columns
//! 3. Fee corrections and refunds sharing date and accounts are merged
//! 4. Entries are sorted by (date, debit, credit) and numbered from 1
//!
//! ## Example
//!
//! ```no_run
//! use nordnet_statement::StatementEngine;
//! use std::fs::File;
//!
//! let mut engine = StatementEngine::new();
//! engine.process_statement(File::open("transactions.csv").unwrap()).unwrap();
//! engine.write_output(std::io::stdout()).unwrap();
//! ```

pub mod account;
pub mod decimal;
pub mod encoding;
pub mod engine;
pub mod entry;
pub mod error;
pub mod merge;
pub mod transaction;

pub use account::AccountPair;
pub use decimal::Amount;
pub use engine::{sort_and_number, write_entries, write_transactions, StatementEngine};
pub use entry::LedgerEntry;
pub use error::{Result, StatementError};
pub use merge::merge_fee_corrections;
pub use transaction::{StatementRecord, Transaction, TxKind};
