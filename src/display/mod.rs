//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and budget summaries for the
//! interactive session.

pub mod budget;
pub mod expense;

pub use budget::format_budget_report;
pub use expense::{format_expense_list, format_expense_row};
