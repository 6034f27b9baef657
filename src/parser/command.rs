use tracing::info;

use super::registry::registry;
use crate::errors::LedgerError;
use crate::ledger::{
    Expense, Income, Ledger, Statement, StatementEntry, TransactionFilter,
};

/// One parsed user intent. Commands carry only their payload; the statement
/// they act on is reached through the [`Ledger`] handed to [`Command::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddIncome(Income),
    AddExpense(Expense),
    DeleteIncome(i64),
    DeleteExpense(i64),
    ViewIncomes,
    ViewExpenses,
    FindIncome(TransactionFilter),
    FindExpense(TransactionFilter),
    ViewFinancialStatement,
    Help(Option<String>),
    Exit,
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(Vec<String>),
    Exit,
}

impl Command {
    /// Runs the command against `ledger`. Failed commands leave the ledger untouched.
    pub fn execute(self, ledger: &mut Ledger) -> Result<Outcome, LedgerError> {
        let lines = match self {
            Command::AddIncome(income) => add(&mut ledger.incomes, income),
            Command::AddExpense(expense) => add(&mut ledger.expenses, expense),
            Command::DeleteIncome(index) => delete(&mut ledger.incomes, index)?,
            Command::DeleteExpense(index) => delete(&mut ledger.expenses, index)?,
            Command::ViewIncomes => ledger.incomes.render(),
            Command::ViewExpenses => ledger.expenses.render(),
            Command::FindIncome(filter) => ledger.incomes.find(&filter)?.render(),
            Command::FindExpense(filter) => ledger.expenses.find(&filter)?.render(),
            Command::ViewFinancialStatement => ledger.financial_statement().render(ledger),
            Command::Help(topic) => help(topic.as_deref()),
            Command::Exit => return Ok(Outcome::Exit),
        };
        Ok(Outcome::Output(lines))
    }
}

fn add<T: StatementEntry>(statement: &mut Statement<T>, transaction: T) -> Vec<String> {
    let lines = vec![
        format!("Noted! I've added this {}:", T::KIND.noun()),
        format!("  {}", transaction),
    ];
    info!(kind = T::KIND.noun(), amount = transaction.amount(), "transaction added");
    statement.add(transaction);
    lines
}

fn delete<T: StatementEntry>(
    statement: &mut Statement<T>,
    index: i64,
) -> Result<Vec<String>, LedgerError> {
    let position = usize::try_from(index).map_err(|_| LedgerError::MissingTransaction(index))?;
    let removed = statement
        .delete(position)
        .map_err(|_| LedgerError::MissingTransaction(index))?;
    info!(kind = T::KIND.noun(), index, "transaction deleted");
    Ok(vec![
        format!("Got it! I've removed this {}:", T::KIND.noun()),
        format!("  {}", removed),
    ])
}

fn help(topic: Option<&str>) -> Vec<String> {
    let registry = registry();
    if let Some(name) = topic {
        return match registry.get(name) {
            Some(entry) => vec![
                format!("Help: {}", entry.name),
                format!("  Description: {}", entry.description),
                format!("  Usage: {}", entry.usage),
            ],
            None => vec![format!(
                "Unknown command `{}`. Type `help` to see available commands.",
                name
            )],
        };
    }

    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        registry
            .list()
            .into_iter()
            .map(|entry| format!("  {:<24} {}", entry.name, entry.description)),
    );
    lines.push("Use `help <command>` for details.".to_string());
    lines
}
