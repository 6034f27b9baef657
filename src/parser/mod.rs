//! Turns raw input lines into executable [`Command`]s.

pub mod command;
pub mod date;
pub mod registry;
pub mod tokenizer;

pub use command::{Command, Outcome};
pub use date::{parse_date, DATE_FORMAT};
pub use registry::{registry, CommandEntry, CommandRegistry};
pub use tokenizer::{tokenize, Tokens};

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::errors::ParseError;
use crate::ledger::{Category, Expense, Income, TransactionFilter, TransactionKind};
use registry::{
    ADD_EXPENSE, ADD_INCOME, DELETE_EXPENSE, DELETE_INCOME, EXIT, FIND_EXPENSE, FIND_INCOME,
    HELP, VIEW_EXPENSES, VIEW_FINANCIAL_STATEMENT, VIEW_INCOMES,
};

const AMOUNT: &str = "/amt";
const DATE: &str = "/date";
const CATEGORY: &str = "/cat";
const DESCRIPTION: &str = "/desc";
const RECURRING: &str = "/recurring";

/// Stateless line-to-command translator. The clock only supplies the date of
/// transactions entered without `/date`.
#[derive(Debug, Default, Clone)]
pub struct Parser<C = SystemClock> {
    clock: C,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Parser<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn parse(&self, line: &str) -> Result<Command, ParseError> {
        let keyword = line.split_whitespace().next().ok_or(ParseError::EmptyInput)?;
        debug!(keyword, "dispatching command");

        match keyword {
            ADD_INCOME => {
                let details = self.transaction_details(line, ADD_INCOME, TransactionKind::Income)?;
                let mut income = Income::new(details.description, details.amount, details.date);
                income.category = details.category;
                income.set_recurring(details.recurring);
                Ok(Command::AddIncome(income))
            }
            ADD_EXPENSE => {
                let details =
                    self.transaction_details(line, ADD_EXPENSE, TransactionKind::Expense)?;
                let mut expense = Expense::new(details.description, details.amount, details.date);
                expense.category = details.category;
                Ok(Command::AddExpense(expense))
            }
            DELETE_INCOME => parse_index(line, DELETE_INCOME).map(Command::DeleteIncome),
            DELETE_EXPENSE => parse_index(line, DELETE_EXPENSE).map(Command::DeleteExpense),
            VIEW_INCOMES => Ok(Command::ViewIncomes),
            VIEW_EXPENSES => Ok(Command::ViewExpenses),
            FIND_INCOME => parse_filter(line, FIND_INCOME).map(Command::FindIncome),
            FIND_EXPENSE => parse_filter(line, FIND_EXPENSE).map(Command::FindExpense),
            VIEW_FINANCIAL_STATEMENT => Ok(Command::ViewFinancialStatement),
            HELP => Ok(Command::Help(
                line.split_whitespace().nth(1).map(str::to_string),
            )),
            EXIT => Ok(Command::Exit),
            other => Err(ParseError::UnknownCommand {
                input: other.to_string(),
                suggestion: registry().suggest(other),
            }),
        }
    }

    fn transaction_details(
        &self,
        line: &str,
        keyword: &str,
        kind: TransactionKind,
    ) -> Result<TransactionDetails, ParseError> {
        let mut format = vec![keyword, AMOUNT, "/date:optional", "/cat:optional"];
        if kind == TransactionKind::Income {
            format.push("/recurring:optional");
        }
        let tokens = tokenize(line, &format)?;

        let description = tokens.get(keyword).unwrap_or_default();
        if description.is_empty() {
            return Err(ParseError::MissingDescription(kind.noun()));
        }
        let amount = parse_amount(tokens.get(AMOUNT).unwrap_or_default())?;
        let date = match tokens.non_empty(DATE) {
            Some(raw) => parse_date(raw)?,
            None => self.clock.today(),
        };
        let category = tokens
            .non_empty(CATEGORY)
            .map(str::parse::<Category>)
            .transpose()?;
        // `/recurring` is a bare switch.
        if let Some(extra) = tokens.non_empty(RECURRING) {
            return Err(ParseError::UnexpectedArgument(extra.to_string()));
        }

        Ok(TransactionDetails {
            description: description.to_string(),
            amount,
            date,
            category,
            recurring: tokens.get(RECURRING).is_some(),
        })
    }
}

struct TransactionDetails {
    description: String,
    amount: f64,
    date: chrono::NaiveDate,
    category: Option<Category>,
    recurring: bool,
}

fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    raw.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ParseError::InvalidAmount(raw.to_string()))
}

fn parse_index(line: &str, keyword: &str) -> Result<i64, ParseError> {
    let remainder = line.trim().strip_prefix(keyword).unwrap_or_default().trim();
    if remainder.is_empty() {
        return Err(ParseError::MissingIndex);
    }
    remainder
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidIndex(remainder.to_string()))
}

fn parse_filter(line: &str, keyword: &str) -> Result<TransactionFilter, ParseError> {
    let format = [
        keyword,
        "/desc:optional",
        "/amt:optional",
        "/date:optional",
        "/cat:optional",
    ];
    let tokens = tokenize(line, &format)?;
    if let Some(stray) = tokens.non_empty(keyword) {
        return Err(ParseError::UnexpectedArgument(stray.to_string()));
    }

    let mut filter = TransactionFilter::new();
    if let Some(description) = tokens.non_empty(DESCRIPTION) {
        filter = filter.with_description(description);
    }
    if let Some(amount) = tokens.non_empty(AMOUNT) {
        filter = filter.with_amount(parse_amount(amount)?);
    }
    if let Some(date) = tokens.non_empty(DATE) {
        filter = filter.with_date(parse_date(date)?);
    }
    if let Some(category) = tokens.non_empty(CATEGORY) {
        filter = filter.with_category(category.parse()?);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn parser() -> Parser<FixedClock> {
        Parser::with_clock(FixedClock(today()))
    }

    #[test]
    fn add_income_keeps_name_and_amount() {
        let command = parser()
            .parse("addIncome pocket money /amt 200 /date 10/10/2023")
            .unwrap();
        let Command::AddIncome(income) = command else {
            panic!("expected AddIncome, got {command:?}");
        };
        assert_eq!(income.description, "pocket money");
        assert_eq!(income.amount, 200.0);
        assert_eq!(income.date, NaiveDate::from_ymd_opt(2023, 10, 10).unwrap());
        assert!(!income.recurring);
    }

    #[test]
    fn add_expense_defaults_to_today() {
        let command = parser().parse("addExpense  lunch  /amt 12.5").unwrap();
        assert_eq!(
            command,
            Command::AddExpense(Expense::new("lunch", 12.5, today()))
        );
    }

    #[test]
    fn add_expense_accepts_category() {
        let command = parser()
            .parse("addExpense dinner /amt 20 /cat food")
            .unwrap();
        let Command::AddExpense(expense) = command else {
            panic!("expected AddExpense");
        };
        assert_eq!(expense.category, Some(Category::Food));
    }

    #[test]
    fn add_rejects_bad_fields() {
        let parser = parser();
        assert_eq!(
            parser.parse("addIncome /amt 5").unwrap_err(),
            ParseError::MissingDescription("income")
        );
        assert_eq!(
            parser.parse("addExpense lunch /amt cheap").unwrap_err(),
            ParseError::InvalidAmount("cheap".into())
        );
        assert_eq!(
            parser.parse("addExpense lunch /amt NaN").unwrap_err(),
            ParseError::InvalidAmount("NaN".into())
        );
        assert_eq!(
            parser.parse("addExpense lunch").unwrap_err(),
            ParseError::MissingField("/amt".into())
        );
        assert_eq!(
            parser.parse("addExpense").unwrap_err(),
            ParseError::MissingContent("addExpense".into())
        );
        assert_eq!(
            parser
                .parse("addExpense lunch /amt 5 /date 2023-10-10")
                .unwrap_err(),
            ParseError::InvalidDate("2023-10-10".into())
        );
        assert_eq!(
            parser.parse("addExpense lunch /amt 5 /cat rocket").unwrap_err(),
            ParseError::InvalidCategory("rocket".into())
        );
    }

    #[test]
    fn delete_parses_integer_index() {
        assert_eq!(
            parser().parse("deleteIncome 2").unwrap(),
            Command::DeleteIncome(2)
        );
        assert_eq!(
            parser().parse("deleteExpense -1").unwrap(),
            Command::DeleteExpense(-1)
        );
    }

    #[test]
    fn delete_rejects_missing_or_non_integer_index() {
        assert_eq!(
            parser().parse("deleteIncome abc").unwrap_err(),
            ParseError::InvalidIndex("abc".into())
        );
        assert_eq!(
            parser().parse("deleteExpense 1 2").unwrap_err(),
            ParseError::InvalidIndex("1 2".into())
        );
        assert_eq!(
            parser().parse("deleteIncome").unwrap_err(),
            ParseError::MissingIndex
        );
    }

    #[test]
    fn zero_argument_commands() {
        let parser = parser();
        assert_eq!(parser.parse("viewIncomes").unwrap(), Command::ViewIncomes);
        assert_eq!(parser.parse("viewExpenses").unwrap(), Command::ViewExpenses);
        assert_eq!(
            parser.parse("viewFinancialStatement").unwrap(),
            Command::ViewFinancialStatement
        );
        assert_eq!(parser.parse("  exit  ").unwrap(), Command::Exit);
        assert_eq!(
            parser.parse("help addIncome").unwrap(),
            Command::Help(Some("addIncome".into()))
        );
    }

    #[test]
    fn find_builds_filter_from_supplied_fields() {
        let command = parser()
            .parse("findExpense /amt 12 /cat Food /desc lunch")
            .unwrap();
        let expected = TransactionFilter::new()
            .with_description("lunch")
            .with_amount(12.0)
            .with_category(Category::Food);
        assert_eq!(command, Command::FindExpense(expected));

        assert_eq!(
            parser().parse("findIncome").unwrap(),
            Command::FindIncome(TransactionFilter::new())
        );
    }

    #[test]
    fn find_rejects_text_outside_a_flag() {
        assert_eq!(
            parser().parse("findExpense lunch").unwrap_err(),
            ParseError::UnexpectedArgument("lunch".into())
        );
        assert_eq!(
            parser().parse("findIncome pay /amt 5").unwrap_err(),
            ParseError::UnexpectedArgument("pay".into())
        );
    }

    #[test]
    fn add_income_recurring_switch() {
        let command = parser()
            .parse("addIncome allowance /amt 50 /recurring /cat allowance")
            .unwrap();
        let Command::AddIncome(income) = command else {
            panic!("expected AddIncome");
        };
        assert!(income.recurring);
        assert_eq!(income.category, Some(Category::Allowance));

        assert_eq!(
            parser()
                .parse("addIncome allowance /amt 50 /recurring monthly")
                .unwrap_err(),
            ParseError::UnexpectedArgument("monthly".into())
        );
        assert_eq!(
            parser()
                .parse("addExpense rent /amt 500 /recurring")
                .unwrap_err(),
            ParseError::InvalidAmount("500 /recurring".into())
        );
    }

    #[test]
    fn keywords_are_case_sensitive_and_suggested() {
        let err = parser().parse("addincome gift /amt 5").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCommand {
                input: "addincome".into(),
                suggestion: Some(ADD_INCOME),
            }
        );
        assert_eq!(parser().parse("   ").unwrap_err(), ParseError::EmptyInput);
    }
}
