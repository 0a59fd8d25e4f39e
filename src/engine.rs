//! Statement conversion pipeline.
//!
//! Reads the broker's tab-separated export, maps every transaction to a
//! ledger entry, merges fee corrections, and writes the entries ordered by
//! date and account pair.

use crate::account::AccountPair;
use crate::encoding::decode_utf16;
use crate::entry::{LedgerEntry, HEADERS};
use crate::error::{Result, StatementError};
use crate::merge::merge_fee_corrections;
use crate::transaction::{StatementRecord, Transaction};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info, warn};
use std::io::{Read, Write};

/// Columns that must be present in the export header.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Transaksjonstype", "Bokføringsdag", "Beløp"];

/// Export columns the conversion reads, in export order.
pub const INPUT_COLUMNS: [&str; 6] = [
    "Bokføringsdag",
    "Transaksjonstype",
    "Verdipapir",
    "Beløp",
    "Transaksjonstekst",
    "Verifikationsnummer",
];

/// The statement conversion engine.
///
/// Holds the transactions read so far. Conversion is a pure function of
/// those, so calling [`StatementEngine::entries`] repeatedly yields the same
/// result.
pub struct StatementEngine {
    transactions: Vec<Transaction>,
}

impl StatementEngine {
    /// Creates a new empty engine.
    pub fn new() -> Self {
        StatementEngine {
            transactions: Vec::new(),
        }
    }

    /// Reads a UTF-16 encoded export.
    pub fn process_statement<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_utf16(&bytes)?;
        self.process_tsv(text.as_bytes())
    }

    /// Reads already decoded tab-separated text.
    ///
    /// Fields are taken verbatim; only the header row is trimmed. Any
    /// malformed row aborts the read and leaves the engine unchanged.
    pub fn process_tsv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut tsv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = tsv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(StatementError::MissingColumn(column));
            }
        }

        let mut transactions = Vec::new();
        for (row_idx, result) in tsv_reader.deserialize::<StatementRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record: StatementRecord = result?;
            let tx = record
                .parse()
                .map_err(|message| StatementError::InvalidRecord {
                    row: row_num,
                    message,
                })?;

            if AccountPair::for_kind(tx.kind).is_unmapped() {
                warn!(
                    "Row {}: Unrecognized transaction type '{}', accounts left empty",
                    row_num, tx.tx_type
                );
            } else {
                debug!("Row {}: {} on {}", row_num, tx.tx_type, tx.booking_date);
            }
            transactions.push(tx);
        }

        info!("Read {} transactions", transactions.len());
        self.transactions.extend(transactions);
        Ok(())
    }

    /// Returns the transactions read so far.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Converts the transactions into numbered ledger entries.
    pub fn entries(&self) -> Vec<LedgerEntry> {
        let reshaped = self
            .transactions
            .iter()
            .map(|tx| (tx.kind, LedgerEntry::from_transaction(tx)))
            .collect();

        let mut entries = merge_fee_corrections(reshaped);
        sort_and_number(&mut entries);

        info!(
            "Converted {} transactions into {} ledger entries",
            self.transactions.len(),
            entries.len()
        );
        entries
    }

    /// Writes the converted entries as CSV.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        write_entries(&self.entries(), writer)
    }
}

impl Default for StatementEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders entries by (date, debit account, credit account) and numbers them
/// from 1.
///
/// The sort is stable, so entries with equal keys keep their relative order.
pub fn sort_and_number(entries: &mut [LedgerEntry]) {
    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.number = idx + 1;
    }
}

/// Writes transactions back out in the export's own tab-separated layout,
/// restricted to the columns the conversion reads.
pub fn write_transactions<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut tsv_writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    tsv_writer.write_record(INPUT_COLUMNS)?;
    for tx in transactions {
        let amount = tx.amount.map(|a| a.to_string()).unwrap_or_default();
        tsv_writer.write_record([
            tx.booking_date.as_str(),
            tx.tx_type.as_str(),
            tx.instrument.as_deref().unwrap_or(""),
            amount.as_str(),
            tx.description.as_deref().unwrap_or(""),
            tx.reference.as_deref().unwrap_or(""),
        ])?;
    }

    tsv_writer.flush()?;
    Ok(())
}

/// Writes entries as comma-separated values with a header row.
///
/// Fields are quoted only when needed; amounts use a comma as decimal
/// separator and are therefore always quoted.
pub fn write_entries<W: Write>(entries: &[LedgerEntry], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for entry in entries {
        csv_writer.serialize(entry)?;
    }

    csv_writer.flush()?;
    Ok(())
}
