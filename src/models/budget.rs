//! Budget model
//!
//! A single spending ceiling for the session and the report comparing it
//! against everything recorded so far.

use super::expense::Expense;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult, ValidationError};

/// The user's monthly budget, unset until supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget(Option<Money>);

impl Budget {
    /// Create an unset budget
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Parse a budget amount from user input
    pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
        let input = input.trim();
        let amount = Money::parse(input)
            .map_err(|_| ValidationError::InvalidBudget(input.to_string()))?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveBudget);
        }
        Ok(amount)
    }

    /// Set the budget from user input; on failure the budget is left unchanged
    pub fn set_from_input(&mut self, input: &str) -> Result<Money, ValidationError> {
        let amount = Self::parse_amount(input)?;
        self.0 = Some(amount);
        Ok(amount)
    }

    /// Get the budget amount, if set
    pub fn amount(&self) -> Option<Money> {
        self.0
    }

    /// Check if a budget has been supplied
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Spending compared against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    /// The budget ceiling
    pub budget: Money,
    /// Sum of all recorded amounts
    pub total_spent: Money,
    /// `budget - total_spent`, negative when overspent
    pub remaining: Money,
}

impl BudgetReport {
    /// Compare the total of `expenses` against `budget`
    ///
    /// Fails with `AmountOverflow` if the total cannot be represented.
    pub fn compute<'a>(
        expenses: impl IntoIterator<Item = &'a Expense>,
        budget: Money,
    ) -> ExpenseResult<Self> {
        let total_spent = Money::checked_sum(expenses.into_iter().map(|e| e.amount))
            .ok_or(ExpenseError::AmountOverflow)?;
        let remaining = budget
            .checked_sub(total_spent)
            .ok_or(ExpenseError::AmountOverflow)?;

        Ok(Self {
            budget,
            total_spent,
            remaining,
        })
    }

    /// Check if spending has gone past the budget
    pub fn is_exceeded(&self) -> bool {
        self.remaining.is_negative()
    }
}
