//! Transaction models for statement parsing and classification.

use crate::decimal::Amount;
use serde::Deserialize;
use std::str::FromStr;

/// Raw transaction record as read from the statement export.
///
/// Only the columns the conversion needs are mapped; the export carries many
/// more which are ignored. Columns other than type, date and amount may be
/// absent from the file altogether.
#[derive(Debug, Deserialize)]
pub struct StatementRecord {
    #[serde(rename = "Bokføringsdag")]
    pub booking_date: String,

    #[serde(rename = "Transaksjonstype")]
    pub tx_type: String,

    /// Signed amount, empty for some informational rows
    #[serde(rename = "Beløp")]
    pub amount: Option<String>,

    #[serde(rename = "Verdipapir", default)]
    pub instrument: Option<String>,

    #[serde(rename = "Transaksjonstekst", default)]
    pub description: Option<String>,

    #[serde(rename = "Verifikationsnummer", default)]
    pub reference: Option<String>,
}

impl StatementRecord {
    /// Parses the raw record into a typed transaction.
    ///
    /// Fails only when an amount is present but not a number.
    pub fn parse(self) -> std::result::Result<Transaction, String> {
        let amount = match non_empty(self.amount).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(
                Amount::from_str(&raw).map_err(|e| format!("invalid amount '{}': {}", raw, e))?,
            ),
            None => None,
        };

        Ok(Transaction {
            kind: TxKind::classify(&self.tx_type),
            booking_date: self.booking_date,
            tx_type: self.tx_type,
            amount,
            instrument: non_empty(self.instrument),
            description: non_empty(self.description),
            reference: non_empty(self.reference),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A parsed transaction ready for conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Booking date, kept verbatim
    pub booking_date: String,

    /// Transaction type as written in the export
    pub tx_type: String,

    pub kind: TxKind,

    pub amount: Option<Amount>,

    pub instrument: Option<String>,

    pub description: Option<String>,

    pub reference: Option<String>,
}

/// Transaction types the ledger knows how to book.
///
/// Matching is exact and case-sensitive. Anything else is `Other` and gets no
/// accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// `INNSKUDD`
    Deposit,

    /// `KJØPT`, `KJØP, BYTTE AV FOND`
    Purchase,

    /// `SALG, BYTTE AV FOND`
    Sale,

    /// `PLATTFORMAVGIFT`
    PlatformFee,

    /// `TILBAKEBET. FOND AVG`
    FeeRefund,

    /// `OVERBELÅNINGSRENTE`, `DEBETRENTE`
    DebitInterest,

    /// `PLATTFORMAVG KORR`
    FeeCorrection,

    Other,
}

impl TxKind {
    pub fn classify(tx_type: &str) -> Self {
        match tx_type {
            "INNSKUDD" => TxKind::Deposit,
            "KJØPT" | "KJØP, BYTTE AV FOND" => TxKind::Purchase,
            "SALG, BYTTE AV FOND" => TxKind::Sale,
            "PLATTFORMAVGIFT" => TxKind::PlatformFee,
            "TILBAKEBET. FOND AVG" => TxKind::FeeRefund,
            "OVERBELÅNINGSRENTE" | "DEBETRENTE" => TxKind::DebitInterest,
            "PLATTFORMAVG KORR" => TxKind::FeeCorrection,
            _ => TxKind::Other,
        }
    }

    /// Kinds whose same-day rows on the same accounts become one ledger entry.
    pub fn is_mergeable(&self) -> bool {
        matches!(self, TxKind::FeeCorrection | TxKind::FeeRefund)
    }
}
