//! Filter CLI commands
//!
//! One subcommand per filter dimension. Results keep insertion order.

use clap::Subcommand;

use super::AppContext;
use crate::display::format_expense_table;
use crate::error::SpendlogResult;
use crate::models::{parse_date, YearMonth};

/// Filter subcommands
#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Expenses in a category
    Category {
        /// Category name
        name: String,
    },
    /// Expenses on a date
    Date {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Expenses in a month
    Month {
        /// Month (YYYY-MM)
        month: String,
    },
    /// Expenses within an amount range (inclusive)
    Amount {
        /// Lower bound
        #[arg(long)]
        min: Option<f64>,
        /// Upper bound
        #[arg(long)]
        max: Option<f64>,
    },
}

/// Handle a filter command
pub fn handle_filter_command(ctx: &AppContext, cmd: FilterCommands) -> SpendlogResult<()> {
    let store = &ctx.store;

    let (expenses, label) = match cmd {
        FilterCommands::Category { name } => {
            let label = format!("category '{}'", name.trim());
            (store.filter_by_category(&name)?, label)
        }
        FilterCommands::Date { date } => {
            let date = parse_date(&date)?;
            (store.filter_by_date(date)?, format!("date '{}'", date))
        }
        FilterCommands::Month { month } => {
            let month = YearMonth::parse(&month)?;
            (store.filter_by_month(month)?, format!("month '{}'", month))
        }
        FilterCommands::Amount { min, max } => {
            let label = match (min, max) {
                (Some(lo), Some(hi)) => format!("amounts between {} and {}", lo.min(hi), lo.max(hi)),
                (Some(lo), None) => format!("amounts of at least {}", lo),
                (None, Some(hi)) => format!("amounts of at most {}", hi),
                (None, None) => "any amount".to_string(),
            };
            (store.filter_by_amount_range(min, max)?, label)
        }
    };

    if expenses.is_empty() {
        println!("No expenses found under: {}", label);
    } else {
        println!("Expenses under {}:", label);
        println!("{}", format_expense_table(&expenses, ctx.currency()));
    }

    Ok(())
}
