//! Expense model
//!
//! A single logged expense: when, what kind, how much and what for.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;
use crate::error::ValidationError;

/// Date format used for input, display and persistence
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated expense fields as typed by the user or read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    /// Create an input from its four raw fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Category label (e.g. Food, Travel)
    pub category: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Build an expense from raw text, checking fields in prompt order
    ///
    /// The first violated constraint is reported.
    pub fn parse(input: &ExpenseInput) -> Result<Self, ValidationError> {
        let date_str = input.date.trim();
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date_str.to_string()))?;

        let category = input.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let amount_str = input.amount.trim();
        let amount = Money::parse(amount_str)
            .map_err(|_| ValidationError::InvalidAmount(amount_str.to_string()))?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }

        let description = input.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Self {
            date,
            category: category.to_string(),
            amount,
            description: description.to_string(),
        })
    }

    /// Re-check the invariants of an already constructed expense
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if !self.amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount,
            self.description
        )
    }
}
