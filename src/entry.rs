//! Ledger entries in the accounting system's import layout.

use crate::account::AccountPair;
use crate::decimal::Amount;
use crate::transaction::Transaction;
use serde::Serialize;

/// Counterparty written for the broker's own fee rows.
pub const BROKER: &str = "Nordnet AS";

/// Transaction types containing this marker are charged by the broker.
const BROKER_FEE_MARKER: &str = "PLATTFORMAVG";

/// Value of the attachment column.
pub const ATTACHMENT: &str = "Ja";

/// Value of the details column.
pub const DETAILS: &str = "-";

/// Column headers in output order.
pub const HEADERS: [&str; 14] = [
    "#",
    "Dato",
    "Inn",
    "Ut",
    "Motpart",
    "Beskrivelse",
    "Kategori",
    "Debetkto",
    "Kreditkto",
    "Bilag",
    "Detaljer",
    "Referanse",
    "Notater",
    "Korteier",
];

/// One row of the accounting import file.
///
/// # Invariants
///
/// - `inflow` and `outflow` are never negative
/// - at most one of them is non-zero for an entry built from a single
///   transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    /// 1-based position in the final file, zero until numbered
    #[serde(rename = "#")]
    pub number: usize,

    #[serde(rename = "Dato")]
    pub date: String,

    #[serde(rename = "Inn")]
    pub inflow: Amount,

    #[serde(rename = "Ut")]
    pub outflow: Amount,

    #[serde(rename = "Motpart")]
    pub counterparty: String,

    #[serde(rename = "Beskrivelse")]
    pub description: String,

    #[serde(rename = "Kategori")]
    pub category: String,

    #[serde(rename = "Debetkto")]
    pub debit_account: &'static str,

    #[serde(rename = "Kreditkto")]
    pub credit_account: &'static str,

    #[serde(rename = "Bilag")]
    pub attachment: &'static str,

    #[serde(rename = "Detaljer")]
    pub details: &'static str,

    #[serde(rename = "Referanse")]
    pub reference: String,

    #[serde(rename = "Notater")]
    pub notes: String,

    #[serde(rename = "Korteier")]
    pub card_owner: String,
}

impl LedgerEntry {
    /// Builds the entry for a single transaction.
    pub fn from_transaction(tx: &Transaction) -> Self {
        let amount = tx.amount.unwrap_or(Amount::ZERO);
        let accounts = AccountPair::for_kind(tx.kind);

        // Substring match on purpose: refunds ("TILBAKEBET. FOND AVG") keep
        // their instrument as counterparty.
        let counterparty = if tx.tx_type.contains(BROKER_FEE_MARKER) {
            BROKER.to_string()
        } else {
            tx.instrument.clone().unwrap_or_default()
        };

        LedgerEntry {
            number: 0,
            date: tx.booking_date.clone(),
            inflow: amount.inflow(),
            outflow: amount.outflow(),
            counterparty,
            description: tx.description.clone().unwrap_or_default(),
            category: String::new(),
            debit_account: accounts.debit,
            credit_account: accounts.credit,
            attachment: ATTACHMENT,
            details: DETAILS,
            reference: tx.reference.clone().unwrap_or_default(),
            notes: String::new(),
            card_owner: String::new(),
        }
    }

    /// Key the final file is ordered by.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (self.date.as_str(), self.debit_account, self.credit_account)
    }
}
