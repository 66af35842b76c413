//! Expense CLI commands
//!
//! Add, list, show, update, delete and search expenses.

use clap::Subcommand;

use super::AppContext;
use crate::display::{format_expense_details, format_expense_short, format_expense_table};
use crate::error::SpendlogResult;
use crate::services::{ExpenseFilter, ExpenseUpdate, NewExpense};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long, default_value = "")]
        date: String,
        /// Category, defaults to "General"
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List expenses in the order they were added
    #[command(alias = "ls")]
    List {
        /// Show at most this many expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one expense
    Show {
        /// Expense ID
        id: u32,
    },
    /// Update fields of an expense; omitted or blank fields are unchanged
    #[command(alias = "edit")]
    Update {
        /// Expense ID
        id: u32,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: u32,
    },
    /// Search descriptions (case-insensitive)
    Search {
        /// Text to look for
        keyword: String,
    },
    /// List the categories in use
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &AppContext, cmd: ExpenseCommands) -> SpendlogResult<()> {
    let store = &ctx.store;

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            date,
            category,
        } => {
            let input = NewExpense::new(description, amount)
                .date(date)
                .category(category);
            let id = store.add(input)?;
            println!("Expense added successfully (ID: {})", id);
        }
        ExpenseCommands::List { limit } => {
            let filter = match limit {
                Some(limit) => ExpenseFilter::new().limit(limit),
                None => ExpenseFilter::new(),
            };
            let expenses = store.filter(&filter)?;
            println!("{}", format_expense_table(&expenses, ctx.currency()));
        }
        ExpenseCommands::Show { id } => {
            let expense = store.get(id)?;
            print!("{}", format_expense_details(&expense, ctx.currency()));
        }
        ExpenseCommands::Update {
            id,
            description,
            amount,
            date,
            category,
        } => {
            let changes = ExpenseUpdate {
                description,
                amount,
                date,
                category,
            };
            let expense = store.update(id, changes)?;
            println!("Expense with ID {} updated successfully.", id);
            println!("{}", format_expense_short(&expense, ctx.currency()));
        }
        ExpenseCommands::Delete { id } => {
            let removed = store.delete(id)?;
            println!("Expense with ID {} deleted successfully.", id);
            println!("{}", format_expense_short(&removed, ctx.currency()));
        }
        ExpenseCommands::Search { keyword } => {
            let expenses = store.search(&keyword)?;
            if expenses.is_empty() {
                println!("No expenses found matching '{}'", keyword);
            } else {
                println!("{}", format_expense_table(&expenses, ctx.currency()));
            }
        }
        ExpenseCommands::Categories => {
            let categories = store.categories()?;
            if categories.is_empty() {
                println!("No categories in use.");
            } else {
                for category in categories {
                    println!("{}", category);
                }
            }
        }
    }

    Ok(())
}
