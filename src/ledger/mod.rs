//! Transaction models, statements, and the session ledger that owns them.

pub mod category;
pub mod filter;
pub mod financial;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod statement;
pub mod transaction;

pub use category::Category;
pub use filter::TransactionFilter;
pub use financial::{Entry, FinancialStatement};
pub use ledger::Ledger;
pub use statement::{ExpenseStatement, IncomeStatement, Matches, Statement};
pub use transaction::{Expense, Income, StatementEntry, Transaction, TransactionKind};
