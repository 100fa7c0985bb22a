//! In-memory expense store
//!
//! Holds the expenses of the current run in insertion order. Expenses are only
//! ever appended.

use crate::models::{Expense, Money};

/// Insertion-ordered collection of expenses for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all amounts, `None` if it overflows
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.expenses.iter().map(|e| e.amount))
    }
}

impl FromIterator<Expense> for ExpenseStore {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        Self {
            expenses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseInput;

    fn expense(category: &str, amount: &str) -> Expense {
        Expense::parse(&ExpenseInput::new("2025-02-01", category, amount, "test")).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total(), Some(Money::zero()));
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut store = ExpenseStore::new();
        store.push(expense("Travel", "40"));
        store.push(expense("Food", "2.50"));
        store.push(expense("Books", "15"));

        let categories: Vec<_> = store.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Travel", "Food", "Books"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_total() {
        let store: ExpenseStore = vec![expense("Food", "2.50"), expense("Travel", "40")]
            .into_iter()
            .collect();
        assert_eq!(store.total(), Some(Money::from_cents(4250)));
    }
}
