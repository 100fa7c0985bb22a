//! Budget service
//!
//! Keeps the session budget and compares it against recorded spending.

use log::debug;

use crate::error::ExpenseResult;
use crate::models::{Budget, BudgetReport, Money};
use crate::storage::ExpenseStore;

/// Service for budget tracking
pub struct BudgetService<'a> {
    store: &'a ExpenseStore,
    budget: &'a mut Budget,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a ExpenseStore, budget: &'a mut Budget) -> Self {
        Self { store, budget }
    }

    /// Check whether the user still has to supply a budget
    pub fn needs_budget(&self) -> bool {
        !self.budget.is_set()
    }

    /// Set the budget from raw input
    pub fn set_budget(&mut self, input: &str) -> ExpenseResult<Money> {
        let amount = self.budget.set_from_input(input)?;
        debug!("Budget set to {}", amount);
        Ok(amount)
    }

    /// Compare spending against the budget, if one has been set
    pub fn report(&self) -> ExpenseResult<Option<BudgetReport>> {
        self.budget
            .amount()
            .map(|budget| BudgetReport::compute(self.store, budget))
            .transpose()
    }
}
