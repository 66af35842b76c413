//! Report display formatting
//!
//! Renders summaries, breakdowns and the audit history.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::reports::{Breakdown, Summary, SummaryScope};

/// Format a single-scope summary
pub fn format_summary(scope: &SummaryScope, summary: &Summary, currency_symbol: &str) -> String {
    let mut output = format!("Summary for {}\n", scope);
    output.push_str(&format!("  Count:   {}\n", summary.count));
    output.push_str(&format!(
        "  Total:   {}\n",
        summary.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Average: {}\n",
        summary.average.format_with_symbol(currency_symbol)
    ));
    output
}

#[derive(Tabled)]
struct BreakdownLine {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format a breakdown as a table with a total row
pub fn format_breakdown(breakdown: &Breakdown, currency_symbol: &str) -> String {
    if breakdown.rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut lines: Vec<BreakdownLine> = breakdown
        .rows
        .iter()
        .map(|row| BreakdownLine {
            group: row.label.clone(),
            count: row.summary.count,
            total: row.summary.total.format_with_symbol(currency_symbol),
            average: row.summary.average.format_with_symbol(currency_symbol),
            share: format!("{:.1}%", row.percentage),
        })
        .collect();

    lines.push(BreakdownLine {
        group: "TOTAL".to_string(),
        count: breakdown.total.count,
        total: breakdown.total.total.format_with_symbol(currency_symbol),
        average: breakdown.total.average.format_with_symbol(currency_symbol),
        share: "100.0%".to_string(),
    });

    Table::new(lines)
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right())
        .to_string()
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::describe)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryMatch;
    use crate::models::{Amount, Expense};
    use crate::reports::GroupBy;
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let d = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
        vec![
            Expense::new(1, "Coffee", Amount::new(4.0), d(3), "Food"),
            Expense::new(2, "Rent", Amount::new(16.0), d(4), "Home"),
        ]
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary::from_expenses(&sample());
        let text = format_summary(&SummaryScope::Total, &summary, "$");
        assert!(text.contains("Summary for all expenses"));
        assert!(text.contains("Count:   2"));
        assert!(text.contains("Total:   $20.00"));
        assert!(text.contains("Average: $10.00"));
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = Breakdown::generate(&sample(), GroupBy::Category, CategoryMatch::Exact);
        let text = format_breakdown(&breakdown, "$");
        assert!(text.contains("Group"));
        assert!(text.contains("Food"));
        assert!(text.contains("80.0%"));
        assert!(text.contains("TOTAL"));
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[]), "No history recorded.");
    }
}
