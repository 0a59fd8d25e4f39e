//! Ledger accounts and the transaction type to account mapping.

use crate::transaction::TxKind;

/// Brokerage cash account.
pub const BROKERAGE_CASH: &str = "1920";

/// Transfers into the brokerage account.
pub const INCOMING_TRANSFERS: &str = "1925";

/// Securities held.
pub const SECURITIES: &str = "1811";

/// Bank and platform fees.
pub const FEES: &str = "7770";

/// Interest expense.
pub const INTEREST_EXPENSE: &str = "8150";

/// Debit and credit side of one ledger entry.
///
/// Both codes are empty when the transaction type is not recognized; the
/// entry is still written so it can be booked by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountPair {
    pub debit: &'static str,
    pub credit: &'static str,
}

impl AccountPair {
    pub const UNMAPPED: Self = AccountPair {
        debit: "",
        credit: "",
    };

    const fn new(debit: &'static str, credit: &'static str) -> Self {
        AccountPair { debit, credit }
    }

    /// Returns the account pair a transaction of `kind` is booked against.
    pub fn for_kind(kind: TxKind) -> Self {
        match kind {
            TxKind::Deposit => Self::new(BROKERAGE_CASH, INCOMING_TRANSFERS),
            TxKind::Purchase => Self::new(SECURITIES, BROKERAGE_CASH),
            TxKind::Sale => Self::new(BROKERAGE_CASH, SECURITIES),
            TxKind::PlatformFee => Self::new(FEES, BROKERAGE_CASH),
            TxKind::FeeRefund => Self::new(BROKERAGE_CASH, FEES),
            TxKind::DebitInterest => Self::new(INTEREST_EXPENSE, BROKERAGE_CASH),
            TxKind::FeeCorrection => Self::new(BROKERAGE_CASH, FEES),
            TxKind::Other => Self::UNMAPPED,
        }
    }

    /// Returns `true` if no accounts could be assigned.
    pub fn is_unmapped(&self) -> bool {
        self.debit.is_empty() && self.credit.is_empty()
    }
}
