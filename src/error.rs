//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// A user-supplied field failed a format or range check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date '{0}'. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Category is empty after trimming
    #[error("Category cannot be empty.")]
    EmptyCategory,

    /// Amount is not a number
    #[error("Invalid amount '{0}'. Please enter a numeric value.")]
    InvalidAmount(String),

    /// Amount is zero or negative
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    /// Description is empty after trimming
    #[error("Description cannot be empty.")]
    EmptyDescription,

    /// Budget is not a number
    #[error("Invalid budget '{0}'. Please enter a valid number.")]
    InvalidBudget(String),

    /// Budget is zero or negative
    #[error("Budget must be greater than zero.")]
    NonPositiveBudget,

    /// A line of input was not valid UTF-8
    #[error("Input could not be read as text.")]
    UnreadableInput,
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted row could not be turned into an expense (strict loading only)
    #[error("Corrupt row {row}: {reason}")]
    CorruptRow { row: usize, reason: String },

    /// Nothing more can be read from the input
    #[error("Input closed")]
    InputClosed,

    /// A sum of amounts does not fit in the money type
    #[error("Amounts are too large to total.")]
    AmountOverflow,
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
