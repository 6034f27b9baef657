//! Ordered, index-addressable transaction lists.
//!
//! Positions are the only identity a transaction has: deleting an entry shifts
//! every later entry down by one.

use serde::{Deserialize, Serialize};

use super::{
    filter::TransactionFilter,
    transaction::{Expense, Income, StatementEntry},
};
use crate::currency::format_currency_value;
use crate::errors::LedgerError;

pub type ExpenseStatement = Statement<Expense>;
pub type IncomeStatement = Statement<Income>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement<T> {
    entries: Vec<T>,
}

impl<T> Default for Statement<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for Statement<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of a successful search: an echo line plus the matching entries and
/// their positions in the statement.
#[derive(Debug)]
pub struct Matches<'a, T> {
    pub summary: String,
    pub entries: Vec<(usize, &'a T)>,
}

impl<T: StatementEntry> Matches<'_, T> {
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.summary.clone());
        lines.extend(
            self.entries
                .iter()
                .map(|(index, txn)| format!("  {}. {}", index + 1, txn)),
        );
        lines
    }
}

impl<T: StatementEntry> Statement<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, transaction: T) {
        self.entries.push(transaction);
    }

    pub fn delete(&mut self, index: usize) -> Result<T, LedgerError> {
        if index >= self.entries.len() {
            return Err(missing(index));
        }
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T, LedgerError> {
        self.entries.get(index).ok_or_else(|| missing(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn total_amount(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |total, txn| total + txn.amount())
    }

    /// Entries satisfying every supplied predicate, in statement order.
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|txn| filter.matches(*txn))
            .collect()
    }

    /// Like [`Statement::filter`], but an empty result is reported as
    /// [`LedgerError::NoMatchingTransactions`].
    pub fn find(&self, filter: &TransactionFilter) -> Result<Matches<'_, T>, LedgerError> {
        let entries: Vec<(usize, &T)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, txn)| filter.matches(*txn))
            .collect();
        if entries.is_empty() {
            return Err(LedgerError::NoMatchingTransactions);
        }
        Ok(Matches {
            summary: filter.describe(T::KIND),
            entries,
        })
    }

    /// Summary line followed by one 1-indexed line per entry.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!(
            "The current sum of all your {} amounts to: {}",
            T::KIND.plural(),
            format_currency_value(self.total_amount())
        ));
        lines.extend(
            self.entries
                .iter()
                .enumerate()
                .map(|(index, txn)| format!("  {}. {}", index + 1, txn)),
        );
        lines
    }
}

fn missing(index: usize) -> LedgerError {
    LedgerError::MissingTransaction(i64::try_from(index).unwrap_or(i64::MAX))
}
