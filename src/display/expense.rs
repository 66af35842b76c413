//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id,
        date: e.date.format(DATE_FORMAT).to_string(),
        description: truncate(&e.description, 40),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency_symbol),
    });

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right())
        .to_string()
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Date:        {}\n", expense.date.format(DATE_FORMAT)));
    output.push_str(&format!("Category:    {}\n", expense.category));

    output
}

/// Format a one-line summary of an expense
pub fn format_expense_short(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "#{} {} {} {} [{}]",
        expense.id,
        expense.date.format(DATE_FORMAT),
        expense.description,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category
    )
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
