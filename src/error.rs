//! Error types for the statement converter.

use thiserror::Error;

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors that can occur while converting a statement.
#[derive(Error, Debug)]
pub enum StatementError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input is not valid 16-bit encoded text
    #[error("Invalid UTF-16 input: {0}")]
    Encoding(String),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row could not be turned into a transaction
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Wrong number of command-line arguments
    #[error("Usage: nordnet-statement <nordnet-statement-file>")]
    Usage,
}
