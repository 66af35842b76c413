//! Change history for spendlog
//!
//! Every add, update and delete performed through the store is appended to a
//! JSONL file (`audit.log`) together with the affected record. Updates also
//! carry the list of changed fields. `spendlog history` reads it back.

mod diff;
mod entry;
mod logger;

pub use diff::{diff_expenses, summarize_changes, FieldChange};
pub use entry::{Action, AuditEntry};
pub use logger::AuditLogger;
