//! Storage layer for the expense tracker
//!
//! Provides the in-memory expense store and CSV file persistence with
//! atomic writes.

pub mod csv_file;
pub mod file_io;
pub mod store;

use std::path::Path;

pub use csv_file::{read_expenses, write_expenses, CsvExpenseFile, LoadMode};
pub use file_io::write_atomic;
pub use store::ExpenseStore;

use crate::error::ExpenseResult;

/// Somewhere a whole expense store can be loaded from and saved to
pub trait ExpenseStorage {
    /// Load every persisted expense
    fn load(&self) -> ExpenseResult<ExpenseStore>;

    /// Replace the persisted expenses with `store`
    fn save(&self, store: &ExpenseStore) -> ExpenseResult<()>;

    /// Where the data lives, for user-facing messages
    fn location(&self) -> &Path;
}
