//! Custom error types for the budget planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::BudgetField;

/// Message shown whenever a record fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers!";

/// Why a budget record could not be evaluated
///
/// Both variants remember which field was rejected so it can be logged, but
/// they display the same generic message to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field text is not a number
    #[error("{}", INVALID_INPUT_MESSAGE)]
    NotANumber { field: BudgetField },

    /// The field is a number, but negative or too large to be an amount
    #[error("{}", INVALID_INPUT_MESSAGE)]
    OutOfRange { field: BudgetField },
}

impl ValidationError {
    /// The field that failed validation
    pub fn field(&self) -> BudgetField {
        match self {
            Self::NotANumber { field } | Self::OutOfRange { field } => *field,
        }
    }
}

/// The main error type for budget planner operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The record could not be evaluated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A saved budget file could not be read back
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Storage(err.to_string())
        }
    }
}

/// Result type alias for budget planner operations
pub type BudgetResult<T> = Result<T, BudgetError>;
