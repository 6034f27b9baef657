use std::fmt;

use chrono::NaiveDate;

use super::{
    category::Category,
    ledger::Ledger,
    transaction::{Expense, Income, Transaction, TransactionKind},
};
use crate::currency::{format_amount, format_currency_value, format_date};
use crate::errors::LedgerError;

/// One line of a financial statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Income(Income),
    Expense(Expense),
}

impl Entry {
    fn inner(&self) -> &dyn Transaction {
        match self {
            Entry::Income(income) => income,
            Entry::Expense(expense) => expense,
        }
    }
}

impl Transaction for Entry {
    fn kind(&self) -> TransactionKind {
        self.inner().kind()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn amount(&self) -> f64 {
        self.inner().amount()
    }

    fn date(&self) -> NaiveDate {
        self.inner().date()
    }

    fn category(&self) -> Option<Category> {
        self.inner().category()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self
            .category()
            .map(|category| category.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{:<7} | {} | {:>10} | {} | {}",
            self.kind(),
            format_date(self.date()),
            format_amount(self.amount()),
            self.description(),
            category
        )
    }
}

/// Point-in-time view over every income followed by every expense.
///
/// Later changes to the ledger are not reflected until a new snapshot is taken,
/// except for [`FinancialStatement::net_cash`], which always reads the live ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialStatement {
    entries: Vec<Entry>,
}

impl FinancialStatement {
    pub fn snapshot(ledger: &Ledger) -> Self {
        let incomes = ledger.incomes.iter().cloned().map(Entry::Income);
        let expenses = ledger.expenses.iter().cloned().map(Entry::Expense);
        Self {
            entries: incomes.chain(expenses).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Entry, LedgerError> {
        self.entries.get(index).ok_or_else(|| {
            LedgerError::MissingTransaction(i64::try_from(index).unwrap_or(i64::MAX))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Net cash of `ledger`, which must be the ledger this snapshot was taken
    /// from. The figure is live: it includes changes made after the snapshot.
    pub fn net_cash(&self, ledger: &Ledger) -> f64 {
        ledger.net_cash()
    }

    /// Same ledger contract as [`FinancialStatement::net_cash`].
    pub fn render(&self, ledger: &Ledger) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(format!(
            "Net cash on hand: {}",
            format_currency_value(self.net_cash(ledger))
        ));
        if self.is_empty() {
            lines.push("No transactions recorded yet.".to_string());
            return lines;
        }
        lines.push(format!(
            "{:<7} | {:<10} | {:>10} | {} | {}",
            "Type", "Date", "Amount", "Description", "Category"
        ));
        lines.extend(self.iter().map(Entry::to_string));
        lines
    }
}
