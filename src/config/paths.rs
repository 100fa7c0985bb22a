//! Path management for the expense tracker
//!
//! The data file lives next to the installed binary:
//! `<executable directory>/resources/expenses.csv`.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Name of the directory holding the data file
const RESOURCE_DIR: &str = "resources";

/// Name of the persisted expenses file
const EXPENSES_FILE: &str = "expenses.csv";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Installation directory
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths relative to the directory of the running executable
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let exe = std::env::current_exe().map_err(|e| {
            ExpenseError::Config(format!("Could not determine executable location: {}", e))
        })?;

        let base_dir = exe
            .parent()
            .map(PathBuf::from)
            .ok_or_else(|| ExpenseError::Config("Executable has no parent directory".into()))?;

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the resource directory (`<base>/resources/`)
    pub fn resource_dir(&self) -> PathBuf {
        self.base_dir.join(RESOURCE_DIR)
    }

    /// Get the path to the expenses CSV file
    pub fn expenses_file(&self) -> PathBuf {
        self.resource_dir().join(EXPENSES_FILE)
    }

    /// Ensure the resource directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(self.resource_dir()).map_err(|e| {
            ExpenseError::Io(format!("Failed to create resource directory: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.resource_dir(), temp_dir.path().join("resources"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("resources").join("expenses.csv")
        );
    }

    #[test]
    fn test_resolves_from_executable() {
        let paths = ExpensePaths::new().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(paths.base_dir().as_path(), exe.parent().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        assert!(paths.resource_dir().exists());
    }
}
