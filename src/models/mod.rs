//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record, its amount, and calendar selectors.

pub mod amount;
pub mod expense;
pub mod period;

pub use amount::Amount;
pub use expense::{Expense, ExpenseDocument, DEFAULT_CATEGORY};
pub use period::{parse_date, today, YearMonth, DATE_FORMAT};
