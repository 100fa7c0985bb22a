//! Expense service
//!
//! Validates raw user input into expenses and appends them to the store.

use log::debug;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseInput};
use crate::storage::ExpenseStore;

/// Service for recording expenses
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over the session store
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate the input and append the resulting expense
    ///
    /// On a validation failure the store is left untouched.
    pub fn add(&mut self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::parse(input)?;
        debug!("Recording expense: {}", expense);
        self.store.push(expense.clone());
        Ok(expense)
    }
}
