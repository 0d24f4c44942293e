//! Budget records
//!
//! A [`BudgetRecord`] holds the nine values exactly as the user typed them.
//! A [`Budget`] is the same record after every value parsed as an amount.

use serde::{Deserialize, Serialize};

use super::field::BudgetField;
use super::money::Money;

/// The raw text of the nine budget inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub income: String,
    pub rent: String,
    pub food: String,
    pub utilities: String,
    pub transportation: String,
    pub entertainment: String,
    pub health: String,
    pub education: String,
    pub miscellaneous: String,
}

impl BudgetRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from values listed in [`BudgetField::ALL`] order
    pub fn from_values<S: Into<String>>(values: [S; 9]) -> Self {
        let mut record = Self::new();
        for (field, value) in BudgetField::ALL.into_iter().zip(values) {
            record.set(field, value);
        }
        record
    }

    /// Get the raw text of a field
    pub fn get(&self, field: BudgetField) -> &str {
        match field {
            BudgetField::Income => &self.income,
            BudgetField::Rent => &self.rent,
            BudgetField::Food => &self.food,
            BudgetField::Utilities => &self.utilities,
            BudgetField::Transportation => &self.transportation,
            BudgetField::Entertainment => &self.entertainment,
            BudgetField::Health => &self.health,
            BudgetField::Education => &self.education,
            BudgetField::Miscellaneous => &self.miscellaneous,
        }
    }

    /// Replace the raw text of a field
    pub fn set(&mut self, field: BudgetField, value: impl Into<String>) {
        let slot = match field {
            BudgetField::Income => &mut self.income,
            BudgetField::Rent => &mut self.rent,
            BudgetField::Food => &mut self.food,
            BudgetField::Utilities => &mut self.utilities,
            BudgetField::Transportation => &mut self.transportation,
            BudgetField::Entertainment => &mut self.entertainment,
            BudgetField::Health => &mut self.health,
            BudgetField::Education => &mut self.education,
            BudgetField::Miscellaneous => &mut self.miscellaneous,
        };
        *slot = value.into();
    }

    /// Iterate over `(field, raw text)` in file order
    pub fn values(&self) -> impl Iterator<Item = (BudgetField, &str)> + '_ {
        BudgetField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Parsed amounts for the eight expense categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expenses {
    pub rent: Money,
    pub food: Money,
    pub utilities: Money,
    pub transportation: Money,
    pub entertainment: Money,
    pub health: Money,
    pub education: Money,
    pub miscellaneous: Money,
}

impl Expenses {
    /// Amount for an expense field; income has no expense amount
    pub fn get(&self, field: BudgetField) -> Option<Money> {
        match field {
            BudgetField::Income => None,
            BudgetField::Rent => Some(self.rent),
            BudgetField::Food => Some(self.food),
            BudgetField::Utilities => Some(self.utilities),
            BudgetField::Transportation => Some(self.transportation),
            BudgetField::Entertainment => Some(self.entertainment),
            BudgetField::Health => Some(self.health),
            BudgetField::Education => Some(self.education),
            BudgetField::Miscellaneous => Some(self.miscellaneous),
        }
    }

    /// Iterate over `(category, amount)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (BudgetField, Money)> + '_ {
        BudgetField::EXPENSES
            .into_iter()
            .filter_map(move |f| self.get(f).map(|amount| (f, amount)))
    }

    /// Sum of all eight categories
    pub fn total(&self) -> Money {
        self.iter().map(|(_, amount)| amount).sum()
    }
}

/// A budget whose nine values are all valid amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    pub income: Money,
    pub expenses: Expenses,
}
