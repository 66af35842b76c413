//! Summary CLI commands
//!
//! Count, total and average over one scope, or grouped breakdowns.

use clap::{Subcommand, ValueEnum};

use super::AppContext;
use crate::display::{format_breakdown, format_summary};
use crate::error::SpendlogResult;
use crate::models::YearMonth;
use crate::reports::{GroupBy, SummaryScope};

/// Summary subcommands
#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// All expenses
    Total,
    /// One category
    Category {
        /// Category name
        name: String,
    },
    /// One calendar month across all years
    Month {
        /// Month number (1-12)
        month: u32,
    },
    /// One year
    Year {
        /// Year (e.g., 2024)
        year: i32,
    },
    /// One month of one year
    MonthYear {
        /// Month (YYYY-MM)
        period: String,
    },
    /// One category within one year
    CategoryYear {
        /// Category name
        name: String,
        /// Year (e.g., 2024)
        year: i32,
    },
}

impl SummaryCommands {
    fn into_scope(self) -> SpendlogResult<SummaryScope> {
        Ok(match self {
            Self::Total => SummaryScope::Total,
            Self::Category { name } => SummaryScope::Category(name),
            Self::Month { month } => SummaryScope::month(month)?,
            Self::Year { year } => SummaryScope::Year(year),
            Self::MonthYear { period } => SummaryScope::MonthYear(YearMonth::parse(&period)?),
            Self::CategoryYear { name, year } => SummaryScope::CategoryYear(name, year),
        })
    }
}

/// Breakdown dimension
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupByArg {
    Category,
    Month,
    Year,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Category => GroupBy::Category,
            GroupByArg::Month => GroupBy::Month,
            GroupByArg::Year => GroupBy::Year,
        }
    }
}

/// Handle a summary command
pub fn handle_summary_command(ctx: &AppContext, cmd: SummaryCommands) -> SpendlogResult<()> {
    let scope = cmd.into_scope()?;
    let summary = ctx.store.summarize(&scope)?;
    print!("{}", format_summary(&scope, &summary, ctx.currency()));
    Ok(())
}

/// Handle the breakdown command
pub fn handle_breakdown_command(ctx: &AppContext, by: GroupByArg) -> SpendlogResult<()> {
    let breakdown = ctx.store.breakdown(by.into())?;
    println!("{}", format_breakdown(&breakdown, ctx.currency()));
    Ok(())
}
