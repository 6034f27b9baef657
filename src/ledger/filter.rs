use chrono::NaiveDate;

use super::{category::Category, transaction::Transaction, TransactionKind};
use crate::currency::{format_amount, format_date};

/// Optional predicates for searching a statement. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }

    pub fn matches(&self, txn: &impl Transaction) -> bool {
        let description = self
            .description
            .as_deref()
            .map_or(true, |wanted| txn.description() == wanted.trim());
        let amount = self
            .amount
            .map_or(true, |wanted| (txn.amount() - wanted).abs() < f64::EPSILON);
        let date = self.date.map_or(true, |wanted| txn.date() == wanted);
        let category = self
            .category
            .map_or(true, |wanted| txn.category() == Some(wanted));
        description && amount && date && category
    }

    /// Echo line naming the predicates that were applied.
    pub fn describe(&self, kind: TransactionKind) -> String {
        if self.is_empty() {
            return format!("Here are all your {} (no filters applied):", kind.plural());
        }

        let mut parts = Vec::new();
        if let Some(description) = &self.description {
            parts.push(format!("description: {}", description.trim()));
        }
        if let Some(amount) = self.amount {
            parts.push(format!("amount: {}", format_amount(amount)));
        }
        if let Some(date) = self.date {
            parts.push(format!("date: {}", format_date(date)));
        }
        if let Some(category) = self.category {
            parts.push(format!("category: {}", category));
        }

        format!(
            "Here are your {} matching {}:",
            kind.plural(),
            parts.join(", ")
        )
    }
}
