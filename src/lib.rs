//! Budget Planner - personal monthly budget calculator
//!
//! Collects a monthly income and eight expense categories, computes total
//! expenses and the resulting balance, and offers rule-of-thumb tips when
//! rent or food take too large a share of income or the budget runs a
//! deficit. The raw inputs can be saved to, and loaded from, a CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The budget record, its fields, and the money type
//! - `services`: Budget evaluation (totals, balance, advisories)
//! - `storage`: CSV persistence of a single record
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive form
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use budget_planner::models::BudgetRecord;
//! use budget_planner::services::{evaluate, Outcome};
//!
//! let record = BudgetRecord::from_values(["1000", "400", "100", "50", "50", "0", "0", "0", "0"]);
//! let outcome = Outcome::from_summary(evaluate(&record).unwrap());
//! assert_eq!(outcome.summary().balance.to_string(), "$400.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult, ValidationError};
