//! Interactive command-line interface
//!
//! The menu-driven session that ties input validation, the expense store,
//! budget tracking and persistence together.

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::{Session, SessionState};
