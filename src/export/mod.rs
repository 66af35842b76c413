//! Export module for spendlog
//!
//! Writes a list of expenses (all of them, or a filtered subset) in one of:
//! - CSV: spreadsheet-compatible, fixed column order
//! - JSON: machine-readable snapshot with metadata
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, CSV_HEADER};
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_expenses_yaml;
