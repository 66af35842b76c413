//! Reports module for spendlog
//!
//! Aggregates over the expense collection: single-scope summaries and
//! grouped breakdowns.

pub mod summary;

pub use summary::{Breakdown, BreakdownRow, GroupBy, Summary, SummaryScope};
