use std::collections::HashMap;

use once_cell::sync::Lazy;
use strsim::levenshtein;

pub const ADD_INCOME: &str = "addIncome";
pub const DELETE_INCOME: &str = "deleteIncome";
pub const VIEW_INCOMES: &str = "viewIncomes";
pub const FIND_INCOME: &str = "findIncome";
pub const ADD_EXPENSE: &str = "addExpense";
pub const DELETE_EXPENSE: &str = "deleteExpense";
pub const VIEW_EXPENSES: &str = "viewExpenses";
pub const FIND_EXPENSE: &str = "findExpense";
pub const VIEW_FINANCIAL_STATEMENT: &str = "viewFinancialStatement";
pub const HELP: &str = "help";
pub const EXIT: &str = "exit";

const MAX_SUGGESTION_DISTANCE: usize = 3;

static REGISTRY: Lazy<CommandRegistry> = Lazy::new(CommandRegistry::with_builtins);

/// The command vocabulary understood by the parser.
pub fn registry() -> &'static CommandRegistry {
    &REGISTRY
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

impl CommandEntry {
    pub const fn new(name: &'static str, description: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            description,
            usage,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn with_builtins() -> Self {
        let mut registry = Self::new();
        let entries = [
            CommandEntry::new(
                ADD_INCOME,
                "Record an income",
                "addIncome <name> /amt <amount> [/date DD/MM/YYYY] [/cat <category>] [/recurring]",
            ),
            CommandEntry::new(
                DELETE_INCOME,
                "Delete the income at a 0-based index",
                "deleteIncome <index>",
            ),
            CommandEntry::new(VIEW_INCOMES, "List all incomes", "viewIncomes"),
            CommandEntry::new(
                FIND_INCOME,
                "Search incomes by any combination of fields",
                "findIncome [/desc <text>] [/amt <amount>] [/date DD/MM/YYYY] [/cat <category>]",
            ),
            CommandEntry::new(
                ADD_EXPENSE,
                "Record an expense",
                "addExpense <name> /amt <amount> [/date DD/MM/YYYY] [/cat <category>]",
            ),
            CommandEntry::new(
                DELETE_EXPENSE,
                "Delete the expense at a 0-based index",
                "deleteExpense <index>",
            ),
            CommandEntry::new(VIEW_EXPENSES, "List all expenses", "viewExpenses"),
            CommandEntry::new(
                FIND_EXPENSE,
                "Search expenses by any combination of fields",
                "findExpense [/desc <text>] [/amt <amount>] [/date DD/MM/YYYY] [/cat <category>]",
            ),
            CommandEntry::new(
                VIEW_FINANCIAL_STATEMENT,
                "List incomes and expenses together with net cash",
                "viewFinancialStatement",
            ),
            CommandEntry::new(HELP, "Show available commands", "help [command]"),
            CommandEntry::new(EXIT, "Exit the shell", "exit"),
        ];
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Closest known command name, if any is within a few edits of `input`.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        self.names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_keep_registration_order() {
        let names: Vec<&str> = registry().names().collect();
        assert_eq!(names.first(), Some(&ADD_INCOME));
        assert_eq!(names.last(), Some(&EXIT));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn suggests_close_matches_only() {
        assert_eq!(registry().suggest("addincome"), Some(ADD_INCOME));
        assert_eq!(registry().suggest("viewExpense"), Some(VIEW_EXPENSES));
        assert_eq!(registry().suggest("launchRocket"), None);
    }

    #[test]
    fn duplicate_registration_keeps_single_entry() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("a", "first", "a"));
        registry.register(CommandEntry::new("a", "second", "a"));
        assert_eq!(registry.list().len(), 1);
        assert_eq!(registry.get("a").map(|entry| entry.description), Some("second"));
    }
}
