//! Interactive menu session
//!
//! A `Session` owns the expense store and budget for one run, reads menu
//! choices from its input and writes everything the user sees to its output.
//! Operation failures are reported and the loop carries on; only Exit (or the
//! input closing) ends it, always after a save.

use std::io::{self, BufRead, Write};

use log::{error, info, warn};

use super::menu::MenuChoice;
use crate::display::{format_budget_report, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult, ValidationError};
use crate::models::{Budget, ExpenseInput};
use crate::services::{BudgetService, ExpenseService};
use crate::storage::{ExpenseStorage, ExpenseStore};

const TITLE: &str = "Personal Expense Tracker";
const RULE_WIDTH: usize = 80;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exiting,
}

/// One interactive run of the tracker
pub struct Session<S, R, W> {
    storage: S,
    store: ExpenseStore,
    budget: Budget,
    input: R,
    output: W,
    state: SessionState,
    input_closed: bool,
}

impl<S, R, W> Session<S, R, W>
where
    S: ExpenseStorage,
    R: BufRead,
    W: Write,
{
    /// Load persisted expenses and prepare a running session
    pub fn start(storage: S, input: R, output: W) -> ExpenseResult<Self> {
        let store = storage.load()?;
        Ok(Self {
            storage,
            store,
            budget: Budget::unset(),
            input,
            output,
            state: SessionState::Running,
            input_closed: false,
        })
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self) -> ExpenseResult<()> {
        while self.state == SessionState::Running {
            self.show_menu()?;

            let result = self
                .read_line("Enter your choice (1-5): ")
                .and_then(|line| match MenuChoice::parse(&line) {
                    Some(choice) => self.dispatch(choice),
                    None => self.banner("Invalid choice. Please enter a number from 1 to 5."),
                });

            match result {
                Ok(()) => {}
                Err(ExpenseError::InputClosed) => self.exit_on_closed_input()?,
                Err(e) => self.report_error(&e)?,
            }

            // Nothing more can be read, so don't spin on a failed exit save
            if self.input_closed {
                self.state = SessionState::Exiting;
            }
        }

        info!("Session ended with {} expenses", self.store.len());
        Ok(())
    }

    /// Perform one menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::TrackBudget => self.track_budget(),
            MenuChoice::SaveExpenses => self.save_expenses(),
            MenuChoice::Exit => self.exit(),
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the output, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        let date = self.read_line("Enter the date (YYYY-MM-DD): ")?;
        let category = self.read_line("Enter the category (e.g., Food, Travel): ")?;
        let amount = self.read_line("Enter the amount spent: ")?;
        let description = self.read_line("Enter a brief description: ")?;

        let input = ExpenseInput::new(date, category, amount, description);
        ExpenseService::new(&mut self.store).add(&input)?;

        let message = format!(
            "✅ Expense added successfully. Data file: {}",
            self.storage.location().display()
        );
        self.banner(&message)
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        write!(self.output, "{}", format_expense_list(self.store.as_slice()))?;
        Ok(())
    }

    fn track_budget(&mut self) -> ExpenseResult<()> {
        if !self.budget.is_set() {
            let input = self.read_line("Enter your monthly budget: ")?;
            let amount = BudgetService::new(&self.store, &mut self.budget).set_budget(&input)?;
            writeln!(self.output, "✅ Monthly budget set to {}", amount)?;
        }

        if let Some(report) = BudgetService::new(&self.store, &mut self.budget).report()? {
            write!(self.output, "{}", format_budget_report(&report))?;
        }
        Ok(())
    }

    fn save_expenses(&mut self) -> ExpenseResult<()> {
        self.storage.save(&self.store)?;
        let message = format!(
            "✅ Expenses saved to {}",
            self.storage.location().display()
        );
        self.banner(&message)
    }

    fn exit(&mut self) -> ExpenseResult<()> {
        self.storage.save(&self.store)?;
        self.state = SessionState::Exiting;
        let message = format!(
            "👋 Exiting. Expenses saved at {}",
            self.storage.location().display()
        );
        self.banner(&message)
    }

    /// Input ran out, possibly halfway through an operation: exit as if chosen
    fn exit_on_closed_input(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        if let Err(e) = self.exit() {
            self.report_error(&e)?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n=== {} ===", TITLE)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn report_error(&mut self, err: &ExpenseError) -> ExpenseResult<()> {
        let message = if err.is_validation() {
            format!("❌ Input Error: {}", err)
        } else {
            error!("Operation failed: {}", err);
            format!("❌ Unexpected error occurred: {}", err)
        };
        self.banner(&message)
    }

    fn banner(&mut self, message: &str) -> ExpenseResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{}\n{}\n{}", rule, message, rule)?;
        Ok(())
    }

    /// Prompt and read one line
    ///
    /// Fails with `InputClosed` at end of input or when the input can no longer
    /// be read, and with `UnreadableInput` for a line that is not UTF-8.
    fn read_line(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.input_closed = true;
                Err(ExpenseError::InputClosed)
            }
            Ok(_) => Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Discarding unreadable input line: {}", e);
                Err(ValidationError::UnreadableInput.into())
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                self.input_closed = true;
                Err(ExpenseError::InputClosed)
            }
        }
    }
}
