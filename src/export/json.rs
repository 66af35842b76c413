//! JSON Export functionality
//!
//! Exports a set of expenses as a self-describing snapshot with schema
//! versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Amount, Expense};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported expenses
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_amount: Amount,
}

impl ExpenseExport {
    /// Build a snapshot of the given expenses
    pub fn new(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            metadata: ExportMetadata {
                expense_count: expenses.len(),
                total_amount: expenses.iter().map(|e| e.amount).sum(),
            },
        }
    }
}

/// Export expenses as JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> SpendlogResult<()> {
    let export = ExpenseExport::new(expenses);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SpendlogError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let expenses = vec![Expense::new(
            1,
            "Coffee",
            Amount::new(3.5),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Food",
        )];

        let mut output = Vec::new();
        export_expenses_json(&expenses, &mut output, true).unwrap();

        let export: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.total_amount.value(), 3.5);
        assert_eq!(export.expenses, expenses);
    }
}
