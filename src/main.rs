use anyhow::{Context, Result};
use clap::Parser;

use expense_tracker::cli::Session;
use expense_tracker::config::ExpensePaths;
use expense_tracker::storage::CsvExpenseFile;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Log daily expenses and track them against a monthly budget",
    long_about = "Personal Expense Tracker is an interactive, menu-driven tool for \
                  logging daily expenses. Expenses are kept in a CSV file next to \
                  the installed binary and are saved automatically on exit."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Initialize paths
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let file = CsvExpenseFile::new(paths.expenses_file());

    let stdin = std::io::stdin();
    let mut session = Session::start(file, stdin.lock(), std::io::stdout())
        .with_context(|| format!("Failed to load {}", paths.expenses_file().display()))?;
    session.run()?;

    Ok(())
}
