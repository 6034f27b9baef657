//! Enumerated tags attached to transactions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Supported transaction categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Utilities,
    Health,
    Education,
    Salary,
    Allowance,
    Investment,
    Others,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Utilities,
        Category::Health,
        Category::Education,
        Category::Salary,
        Category::Allowance,
        Category::Investment,
        Category::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Allowance => "Allowance",
            Category::Investment => "Investment",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::InvalidCategory(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" SALARY ".parse::<Category>().unwrap(), Category::Salary);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseError::InvalidCategory("groceries".into()));
    }
}
