//! Expense summaries
//!
//! Count, sum and mean over a selected subset, and per-group breakdowns by
//! category, month or year.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;

use crate::config::CategoryMatch;
use crate::error::ValidationError;
use crate::models::{Amount, Expense, YearMonth};

/// Aggregate over a set of expenses
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Number of expenses
    pub count: usize,
    /// Sum of amounts
    pub total: Amount,
    /// Arithmetic mean of amounts; zero for an empty set
    pub average: Amount,
}

impl Summary {
    /// Summarize the given expenses
    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let (count, total) = expenses
            .into_iter()
            .fold((0usize, Amount::zero()), |(n, sum), e| (n + 1, sum + e.amount));

        let average = if count == 0 {
            Amount::zero()
        } else {
            Amount::new(total.value() / count as f64)
        };

        Self {
            count,
            total,
            average,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Which subset of expenses a summary covers
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryScope {
    /// Every expense
    Total,
    /// One category
    Category(String),
    /// One calendar month (1-12) across all years
    Month(u32),
    /// One year
    Year(i32),
    /// One month of one year
    MonthYear(YearMonth),
    /// One category within one year
    CategoryYear(String, i32),
}

impl SummaryScope {
    /// A calendar-month scope, validating the month number
    pub fn month(month: u32) -> Result<Self, ValidationError> {
        if (1..=12).contains(&month) {
            Ok(Self::Month(month))
        } else {
            Err(ValidationError::InvalidMonth(month.to_string()))
        }
    }

    /// Check whether an expense belongs to this scope
    pub fn matches(&self, expense: &Expense, mode: CategoryMatch) -> bool {
        match self {
            Self::Total => true,
            Self::Category(name) => mode.matches(&expense.category, name.trim()),
            Self::Month(month) => expense.date.month() == *month,
            Self::Year(year) => expense.date.year() == *year,
            Self::MonthYear(ym) => ym.contains(expense.date),
            Self::CategoryYear(name, year) => {
                expense.date.year() == *year && mode.matches(&expense.category, name.trim())
            }
        }
    }

    /// Summarize the expenses that fall in this scope
    pub fn summarize(&self, expenses: &[Expense], mode: CategoryMatch) -> Summary {
        Summary::from_expenses(expenses.iter().filter(|e| self.matches(e, mode)))
    }
}

impl fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => write!(f, "all expenses"),
            Self::Category(name) => write!(f, "category '{}'", name),
            Self::Month(month) => write!(f, "month {:02} (all years)", month),
            Self::Year(year) => write!(f, "year {}", year),
            Self::MonthYear(ym) => write!(f, "month {}", ym),
            Self::CategoryYear(name, year) => write!(f, "category '{}' in {}", name, year),
        }
    }
}

/// Dimension for a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Month,
    Year,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "Category"),
            Self::Month => write!(f, "Month"),
            Self::Year => write!(f, "Year"),
        }
    }
}

/// One group of a breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// Group label (category name, `YYYY-MM`, or `YYYY`)
    pub label: String,
    pub summary: Summary,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Summaries per group, ordered by group key
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub group_by: GroupBy,
    pub rows: Vec<BreakdownRow>,
    pub total: Summary,
}

impl Breakdown {
    /// Group expenses and summarize each group
    ///
    /// Under case-insensitive matching, categories differing only in case
    /// share a group labelled with the first spelling seen.
    pub fn generate(expenses: &[Expense], group_by: GroupBy, mode: CategoryMatch) -> Self {
        let mut groups: BTreeMap<String, (String, Vec<&Expense>)> = BTreeMap::new();

        for expense in expenses {
            let (key, label) = match group_by {
                GroupBy::Category => {
                    let key = match mode {
                        CategoryMatch::CaseInsensitive => expense.category.to_lowercase(),
                        CategoryMatch::Exact => expense.category.clone(),
                    };
                    (key, expense.category.clone())
                }
                GroupBy::Month => {
                    let ym = YearMonth::of(expense.date).to_string();
                    (ym.clone(), ym)
                }
                GroupBy::Year => {
                    let year = format!("{:04}", expense.date.year());
                    (year.clone(), year)
                }
            };

            groups
                .entry(key)
                .or_insert_with(|| (label, Vec::new()))
                .1
                .push(expense);
        }

        let total = Summary::from_expenses(expenses);
        let rows = groups
            .into_values()
            .map(|(label, members)| {
                let summary = Summary::from_expenses(members);
                let percentage = if total.total.value() > 0.0 {
                    summary.total.value() / total.total.value() * 100.0
                } else {
                    0.0
                };
                BreakdownRow {
                    label,
                    summary,
                    percentage,
                }
            })
            .collect();

        Self {
            group_by,
            rows,
            total,
        }
    }
}
