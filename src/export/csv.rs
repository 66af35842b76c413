//! CSV Export functionality
//!
//! Writes expense records with a fixed column order:
//! `id, description, amount, date, category`.

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, DATE_FORMAT};

/// Column headers, in output order
pub const CSV_HEADER: [&str; 5] = ["id", "description", "amount", "date", "category"];

/// Export the given expenses to CSV, header row included
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.description.clone(),
                expense.amount.value().to_string(),
                expense.date.format(DATE_FORMAT).to_string(),
                expense.category.clone(),
            ])
            .map_err(|e| SpendlogError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new(
                1,
                "Coffee",
                Amount::new(3.5),
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                "Food",
            ),
            Expense::new(
                2,
                "Dinner, with \"friends\"",
                Amount::new(42.0),
                NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                "Food",
            ),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id,description,amount,date,category");
        assert_eq!(lines[1], "1,Coffee,3.5,2024-03-05,Food");
        assert_eq!(lines[2], "2,\"Dinner, with \"\"friends\"\"\",42,2024-03-06,Food");
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "id,description,amount,date,category\n");
    }
}
