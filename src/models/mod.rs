//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: money
//! amounts, logged expenses and the session budget.

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::{Budget, BudgetReport};
pub use expense::{Expense, ExpenseInput, DATE_FORMAT};
pub use money::{Money, MoneyParseError, CURRENCY_SYMBOL};
