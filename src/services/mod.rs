//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment and queries.

pub mod expense;
pub mod filter;

pub use expense::{normalize_category, title_case, ExpenseStore, ExpenseUpdate, NewExpense};
pub use filter::ExpenseFilter;
