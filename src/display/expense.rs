//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use log::warn;

use crate::models::{Expense, DATE_FORMAT};

/// Shown instead of a listing when nothing has been recorded
pub const EMPTY_NOTICE: &str = "No expenses to display.";

/// Shown in place of a record that is missing required fields
pub const INCOMPLETE_NOTICE: &str = "⚠️ Incomplete expense entry found. Skipping.";

/// Format a single expense as one line
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.date.format(DATE_FORMAT),
        expense.category,
        expense.amount,
        expense.description
    )
}

/// Format all expenses as a numbered listing
///
/// Incomplete records are replaced by a warning line rather than shown.
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_NOTICE);
    }

    let mut output = String::from("\nAll Expenses:\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (idx, expense) in expenses.iter().enumerate() {
        if let Err(e) = expense.validate() {
            warn!("Skipping incomplete expense #{}: {}", idx + 1, e);
            output.push_str(INCOMPLETE_NOTICE);
        } else {
            output.push_str(&format!("{:>3}. {}", idx + 1, format_expense_row(expense)));
        }
        output.push('\n');
    }

    output
}
