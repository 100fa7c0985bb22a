//! CSV persistence for expenses
//!
//! The data file is a plain CSV table with the header
//! `date,category,amount,description` and one row per expense, amounts written
//! as plain decimals (`12.50`).

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::file_io::write_atomic;
use super::store::ExpenseStore;
use super::ExpenseStorage;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseInput, DATE_FORMAT};

/// Header row written at the top of every data file
pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// How to treat rows that cannot be turned into an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Drop bad rows with a warning and keep the rest
    #[default]
    Lenient,
    /// Fail the whole load on the first bad row
    Strict,
}

/// A row as stored on disk, before validation
#[derive(Debug, Deserialize)]
struct ExpenseRow {
    date: String,
    category: String,
    amount: String,
    description: String,
}

impl From<ExpenseRow> for ExpenseInput {
    fn from(row: ExpenseRow) -> Self {
        ExpenseInput::new(row.date, row.category, row.amount, row.description)
    }
}

/// A row as written to disk
#[derive(Debug, Serialize)]
struct ExpenseRowOut<'a> {
    date: String,
    category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRowOut<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: &expense.category,
            amount: expense.amount.to_plain_string(),
            description: &expense.description,
        }
    }
}

/// Parse expenses from any CSV source
pub fn read_expenses<R: Read>(reader: R, mode: LoadMode) -> ExpenseResult<ExpenseStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut store = ExpenseStore::new();
    let mut skipped = 0usize;

    for (idx, result) in csv_reader.deserialize::<ExpenseRow>().enumerate() {
        let row = idx + 1;

        let parsed = match result {
            Ok(raw) => Expense::parse(&ExpenseInput::from(raw)).map_err(|e| e.to_string()),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(e.to_string()),
        };

        match parsed {
            Ok(expense) => store.push(expense),
            Err(reason) => match mode {
                LoadMode::Strict => return Err(ExpenseError::CorruptRow { row, reason }),
                LoadMode::Lenient => {
                    warn!("Skipping corrupt expense row {}: {}", row, reason);
                    skipped += 1;
                }
            },
        }
    }

    debug!("Read {} expenses, skipped {} rows", store.len(), skipped);
    Ok(store)
}

/// Write the header followed by every expense in store order
pub fn write_expenses<W: Write>(writer: W, store: &ExpenseStore) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for expense in store {
        csv_writer.serialize(ExpenseRowOut::from(expense))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// The expenses CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvExpenseFile {
    path: PathBuf,
    mode: LoadMode,
}

impl CsvExpenseFile {
    /// Use the file at `path`, loading leniently
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: LoadMode::Lenient,
        }
    }

    /// Set how corrupt rows are handled on load
    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }
}

impl ExpenseStorage for CsvExpenseFile {
    /// Load the file; a missing file is a first run and yields an empty store
    fn load(&self) -> ExpenseResult<ExpenseStore> {
        if !self.path.exists() {
            info!("No data file at {}, starting empty", self.path.display());
            return Ok(ExpenseStore::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let store = read_expenses(file, self.mode)?;
        info!(
            "Loaded {} expenses from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }

    /// Overwrite the file with the full store
    fn save(&self, store: &ExpenseStore) -> ExpenseResult<()> {
        write_atomic(&self.path, |w| write_expenses(w, store))?;
        info!("Saved {} expenses to {}", store.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn sample_store() -> ExpenseStore {
        vec![
            ExpenseInput::new("2025-01-15", "Food", "12.5", "Lunch"),
            ExpenseInput::new("2025-01-16", "Travel", "40", "Train, return"),
            ExpenseInput::new("2025-01-17", "Books", "0.99", "\"Quoted\" title"),
        ]
        .iter()
        .map(|input| Expense::parse(input).unwrap())
        .collect()
    }

    #[test]
    fn test_write_format() {
        let mut out = Vec::new();
        write_expenses(&mut out, &sample_store()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "date,category,amount,description");
        assert_eq!(lines[1], "2025-01-15,Food,12.50,Lunch");
        assert_eq!(lines[2], "2025-01-16,Travel,40.00,\"Train, return\"");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_store_still_writes_header() {
        let mut out = Vec::new();
        write_expenses(&mut out, &ExpenseStore::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "date,category,amount,description\n");
    }

    #[test]
    fn test_save_then_load_reproduces_store() {
        let temp_dir = TempDir::new().unwrap();
        let file = CsvExpenseFile::new(temp_dir.path().join("expenses.csv"));
        let store = sample_store();

        file.save(&store).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, store);
        assert_eq!(loaded.total(), Some(Money::from_cents(5349)));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = CsvExpenseFile::new(temp_dir.path().join("absent.csv"));

        let store = file.load().unwrap();
        assert!(store.is_empty());
        assert!(!file.path().exists());
    }

    #[test]
    fn test_lenient_load_drops_bad_rows() {
        let data = "date,category,amount,description\n\
                    2025-01-15,Food,12.50,Lunch\n\
                    2025-01-16,Food,twelve,Dinner\n";

        let store = read_expenses(data.as_bytes(), LoadMode::Lenient).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].description, "Lunch");
    }

    #[test]
    fn test_lenient_load_drops_short_and_invalid_rows() {
        let data = "date,category,amount,description\n\
                    2025-01-15,Food\n\
                    not-a-date,Food,3,Snack\n\
                    2025-01-17,,3,Snack\n\
                    2025-01-18,Fun,-2,Refund\n\
                    2025-01-19 , Fun , 7.5 , Movie \n";

        let store = read_expenses(data.as_bytes(), LoadMode::Lenient).unwrap();

        assert_eq!(store.len(), 1);
        let expense = &store.as_slice()[0];
        assert_eq!(expense.category, "Fun");
        assert_eq!(expense.amount, Money::from_cents(750));
        assert_eq!(expense.description, "Movie");
    }

    #[test]
    fn test_strict_load_reports_bad_row() {
        let data = "date,category,amount,description\n\
                    2025-01-15,Food,12.50,Lunch\n\
                    2025-01-16,Food,twelve,Dinner\n";

        let err = read_expenses(data.as_bytes(), LoadMode::Strict).unwrap_err();
        assert!(matches!(err, ExpenseError::CorruptRow { row: 2, .. }));
    }

    #[test]
    fn test_strict_load_accepts_clean_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = CsvExpenseFile::new(temp_dir.path().join("expenses.csv"))
            .with_mode(LoadMode::Strict);
        assert_eq!(file.mode(), LoadMode::Strict);

        file.save(&sample_store()).unwrap();
        assert_eq!(file.load().unwrap().len(), 3);
    }

    #[test]
    fn test_load_reads_float_formatted_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "date,category,amount,description\n2024-06-01,Food,12.5,Pizza\n2024-06-02,Food,3.0,Tea\n",
        )
        .unwrap();

        let store = CsvExpenseFile::new(&path).load().unwrap();
        assert_eq!(store.total(), Some(Money::from_cents(1550)));
    }

    #[test]
    fn test_header_only_and_empty_files() {
        assert!(read_expenses("date,category,amount,description\n".as_bytes(), LoadMode::Strict)
            .unwrap()
            .is_empty());
        assert!(read_expenses("".as_bytes(), LoadMode::Lenient).unwrap().is_empty());
    }
}
