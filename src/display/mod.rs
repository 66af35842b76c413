//! Display formatting for terminal output
//!
//! Renders expenses and reports as plain text and tables. Nothing here
//! touches storage; callers pass in the records to show.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_short, format_expense_table};
pub use report::{format_breakdown, format_history, format_summary};
