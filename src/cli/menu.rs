//! Main menu choices

use std::fmt;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    TrackBudget,
    SaveExpenses,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::TrackBudget,
        MenuChoice::SaveExpenses,
        MenuChoice::Exit,
    ];

    /// Parse the user's menu selection (`1`-`5`)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::ViewExpenses),
            "3" => Some(Self::TrackBudget),
            "4" => Some(Self::SaveExpenses),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Number the user types to pick this choice
    pub fn number(&self) -> u8 {
        match self {
            Self::AddExpense => 1,
            Self::ViewExpenses => 2,
            Self::TrackBudget => 3,
            Self::SaveExpenses => 4,
            Self::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add expense",
            Self::ViewExpenses => "View expenses",
            Self::TrackBudget => "Track budget",
            Self::SaveExpenses => "Save expenses",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
