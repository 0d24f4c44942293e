//! Core data models for the budget planner
//!
//! The raw nine-field record, its validated form, and the money type used
//! for every amount.

pub mod field;
pub mod money;
pub mod record;

pub use field::BudgetField;
pub use money::{Money, MoneyParseError};
pub use record::{Budget, BudgetRecord, Expenses};
