//! Personal Expense Tracker - log daily expenses from the terminal
//!
//! This library provides the core functionality for a single-user expense
//! logger: it records dated expenses, persists them to a CSV file and compares
//! total spending against a budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Location of the data file
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, budget)
//! - `storage`: In-memory store and CSV persistence
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: The interactive menu session
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::cli::Session;
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::storage::CsvExpenseFile;
//!
//! let paths = ExpensePaths::new()?;
//! let file = CsvExpenseFile::new(paths.expenses_file());
//! let stdin = std::io::stdin();
//! let mut session = Session::start(file, stdin.lock(), std::io::stdout())?;
//! session.run()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult, ValidationError};
