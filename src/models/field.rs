//! The nine input fields of a budget
//!
//! Income plus eight fixed expense categories, in the order they are shown on
//! the form and written to the saved file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine budget inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetField {
    Income,
    Rent,
    Food,
    Utilities,
    Transportation,
    Entertainment,
    Health,
    Education,
    Miscellaneous,
}

impl BudgetField {
    /// All fields in display and file order
    pub const ALL: [BudgetField; 9] = [
        Self::Income,
        Self::Rent,
        Self::Food,
        Self::Utilities,
        Self::Transportation,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Miscellaneous,
    ];

    /// The eight expense categories, in order
    pub const EXPENSES: [BudgetField; 8] = [
        Self::Rent,
        Self::Food,
        Self::Utilities,
        Self::Transportation,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Miscellaneous,
    ];

    /// Human-readable label, also used as the CSV column header
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Rent => "Rent",
            Self::Food => "Food",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Position of this field in [`BudgetField::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next field, wrapping around to the first
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous field, wrapping around to the last
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BudgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
