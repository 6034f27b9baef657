use super::{
    financial::FinancialStatement,
    statement::{ExpenseStatement, IncomeStatement},
};

/// Session state: the single income and expense statement of a running shell.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub incomes: IncomeStatement,
    pub expenses: ExpenseStatement,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total income minus total expenses, read from the current statements.
    pub fn net_cash(&self) -> f64 {
        self.incomes.total_amount() - self.expenses.total_amount()
    }

    pub fn financial_statement(&self) -> FinancialStatement {
        FinancialStatement::snapshot(self)
    }

    pub fn transaction_count(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Expense, Income};
    use chrono::NaiveDate;

    #[test]
    fn net_cash_is_income_minus_expenses() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut ledger = Ledger::new();
        assert_eq!(ledger.net_cash(), 0.0);

        ledger.incomes.add(Income::new("salary", 1000.0, date));
        ledger.expenses.add(Expense::new("rent", 600.0, date));
        ledger.expenses.add(Expense::new("food", 150.25, date));
        assert!((ledger.net_cash() - 249.75).abs() < f64::EPSILON);
        assert_eq!(ledger.transaction_count(), 3);
    }
}
