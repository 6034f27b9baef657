use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::currency::{format_currency_value, format_date};

/// Distinguishes money coming in from money going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn noun(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            TransactionKind::Income => "incomes",
            TransactionKind::Expense => "expenses",
        }
    }

    fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.pad(label)
    }
}

/// Read access shared by every dated, amount-bearing record.
pub trait Transaction: fmt::Display {
    fn kind(&self) -> TransactionKind;
    fn description(&self) -> &str;
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
    fn category(&self) -> Option<Category>;
}

/// Transactions that live in their own statement.
pub trait StatementEntry: Transaction {
    const KIND: TransactionKind;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

impl Transaction for Expense {
    fn kind(&self) -> TransactionKind {
        Self::KIND
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> Option<Category> {
        self.category
    }
}

impl StatementEntry for Expense {
    const KIND: TransactionKind = TransactionKind::Expense;
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_head(f, self)?;
        f.write_str(")")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub recurring: bool,
}

impl Income {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: None,
            recurring: false,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn set_recurring(&mut self, recurring: bool) {
        self.recurring = recurring;
    }

    pub fn recurrence_label(&self) -> &'static str {
        if self.recurring {
            "Recurring"
        } else {
            "One time"
        }
    }
}

impl Transaction for Income {
    fn kind(&self) -> TransactionKind {
        Self::KIND
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> Option<Category> {
        self.category
    }
}

impl StatementEntry for Income {
    const KIND: TransactionKind = TransactionKind::Income;
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_head(f, self)?;
        write!(f, ", {})", self.recurrence_label())
    }
}

// Everything up to, but excluding, the closing parenthesis.
fn write_head(f: &mut fmt::Formatter<'_>, txn: &impl Transaction) -> fmt::Result {
    write!(
        f,
        "{} {}: {} (date: {}",
        txn.kind().sign(),
        format_currency_value(txn.amount()),
        txn.description(),
        format_date(txn.date())
    )?;
    if let Some(category) = txn.category() {
        write!(f, ", category: {}", category)?;
    }
    Ok(())
}
