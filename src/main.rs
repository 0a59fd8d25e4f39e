//! Nordnet Statement CLI
//!
//! Converts a Nordnet transaction export into an accounting import file
//! named `nordnet-account-statement.csv` in the current directory.
//!
//! # Usage
//!
//! ```bash
//! nordnet-statement transactions.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use nordnet_statement::{write_entries, write_transactions, Result, StatementEngine, StatementError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;

/// Output file, always written to the working directory.
const OUTPUT_FILE: &str = "nordnet-account-statement.csv";

/// Number of rows echoed to stdout for the input and the converted statement.
const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::init();

    match run() {
        Ok(()) => {}
        Err(StatementError::Usage) => {
            println!("{}", StatementError::Usage);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [input_path] = args.as_slice() else {
        return Err(StatementError::Usage);
    };

    let file = File::open(input_path)?;
    let mut engine = StatementEngine::new();
    engine.process_statement(BufReader::new(file))?;

    println!("Head of original file:");
    let transactions = engine.transactions();
    write_transactions(
        &transactions[..transactions.len().min(PREVIEW_ROWS)],
        io::stdout().lock(),
    )?;

    let entries = engine.entries();

    println!("Head of accounting statement:");
    let preview = &entries[..entries.len().min(PREVIEW_ROWS)];
    write_entries(preview, io::stdout().lock())?;

    let output = File::create(OUTPUT_FILE)?;
    write_entries(&entries, BufWriter::new(output))?;
    println!("Transformed file stored at: {}", OUTPUT_FILE);

    Ok(())
}
