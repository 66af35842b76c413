//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export expenses as YAML with a comment header
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendlogResult<()> {
    let export = ExpenseExport::new(expenses);
    let export_err = |e: std::io::Error| SpendlogError::Export(e.to_string());

    writeln!(writer, "# spendlog expense export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let expenses = vec![Expense::new(
            1,
            "Groceries",
            Amount::new(45.2),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Food",
        )];

        let mut output = Vec::new();
        export_expenses_yaml(&expenses, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# spendlog expense export"));
        assert!(text.contains("description: Groceries"));

        let parsed: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.expenses, expenses);
    }
}
