//! Collapsing of fee correction and refund rows.
//!
//! The broker books platform fee corrections as many small rows per day.
//! Rows of a mergeable kind that share date and account pair become a single
//! entry; every other row passes through untouched.

use crate::entry::LedgerEntry;
use crate::transaction::TxKind;
use log::debug;
use std::collections::HashMap;

type GroupKey = (String, &'static str, &'static str);

/// Accumulator for one (date, debit, credit) group.
struct MergeGroup {
    entry: LedgerEntry,
    counterparties: Vec<String>,
    descriptions: Vec<String>,
    references: Vec<String>,
    rows: usize,
}

impl MergeGroup {
    fn new(entry: LedgerEntry) -> Self {
        let mut group = MergeGroup {
            entry: entry.clone(),
            counterparties: Vec::new(),
            descriptions: Vec::new(),
            references: Vec::new(),
            rows: 1,
        };
        group.collect_texts(&entry);
        group
    }

    fn absorb(&mut self, entry: &LedgerEntry) {
        self.entry.inflow += entry.inflow;
        self.entry.outflow += entry.outflow;
        self.rows += 1;
        self.collect_texts(entry);
    }

    fn collect_texts(&mut self, entry: &LedgerEntry) {
        push_distinct(&mut self.counterparties, &entry.counterparty);
        push_distinct(&mut self.descriptions, &entry.description);
        push_distinct(&mut self.references, &entry.reference);
    }

    fn finish(mut self) -> LedgerEntry {
        self.entry.counterparty = self.counterparties.join(", ");
        self.entry.description = self.descriptions.join(", ");
        self.entry.reference = self.references.join(", ");
        self.entry
    }
}

/// Appends `value` unless it is empty or already present.
fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Merges mergeable rows sharing (date, debit account, credit account).
///
/// Non-mergeable rows come first in their original order, followed by one
/// entry per group in order of first appearance. Amounts are summed; text
/// columns are the distinct non-empty values joined with `", "`; the other
/// columns are taken from the first row of the group.
pub fn merge_fee_corrections(entries: Vec<(TxKind, LedgerEntry)>) -> Vec<LedgerEntry> {
    let mut rest = Vec::with_capacity(entries.len());
    let mut groups: Vec<MergeGroup> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for (kind, entry) in entries {
        if !kind.is_mergeable() {
            rest.push(entry);
            continue;
        }

        let key = (
            entry.date.clone(),
            entry.debit_account,
            entry.credit_account,
        );
        match index.get(&key) {
            Some(&i) => groups[i].absorb(&entry),
            None => {
                index.insert(key, groups.len());
                groups.push(MergeGroup::new(entry));
            }
        }
    }

    for group in &groups {
        if group.rows > 1 {
            debug!(
                "Merged {} rows on {} ({} / {})",
                group.rows, group.entry.date, group.entry.debit_account, group.entry.credit_account
            );
        }
    }

    rest.extend(groups.into_iter().map(MergeGroup::finish));
    rest
}
