//! Business logic layer
//!
//! Services operate on the session's store and budget and are driven by the
//! interactive loop in `cli`.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::ExpenseService;
