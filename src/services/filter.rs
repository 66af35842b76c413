//! Expense filtering
//!
//! Every filter keeps the original insertion order of the records it
//! returns.

use chrono::NaiveDate;

use crate::config::CategoryMatch;
use crate::models::{Expense, YearMonth};

/// Options for filtering expenses
///
/// Criteria combine with AND. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Filter by category name
    pub category: Option<String>,
    /// Filter by exact date
    pub date: Option<NaiveDate>,
    /// Filter by calendar month
    pub month: Option<YearMonth>,
    /// Inclusive lower bound on amount
    pub min_amount: Option<f64>,
    /// Inclusive upper bound on amount
    pub max_amount: Option<f64>,
    /// Case-insensitive substring of the description
    pub keyword: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Filter by month
    pub fn month(mut self, month: YearMonth) -> Self {
        self.month = Some(month);
        self
    }

    /// Filter by amount range; either side may be unbounded
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        let (min, max) = match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
            other => other,
        };
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Filter by description keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single expense against every criterion
    pub fn matches(&self, expense: &Expense, mode: CategoryMatch) -> bool {
        if let Some(category) = &self.category {
            if !mode.matches(&expense.category, category.trim()) {
                return false;
            }
        }
        if let Some(date) = self.date {
            if expense.date != date {
                return false;
            }
        }
        if let Some(month) = self.month {
            if !month.contains(expense.date) {
                return false;
            }
        }
        let amount = expense.amount.value();
        if self.min_amount.is_some_and(|min| amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| amount > max) {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            if !contains_ignore_case(&expense.description, keyword) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving order
    pub fn apply(&self, expenses: &[Expense], mode: CategoryMatch) -> Vec<Expense> {
        let matching = expenses.iter().filter(|e| self.matches(e, mode)).cloned();
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn sample() -> Vec<Expense> {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        vec![
            Expense::new(1, "Morning coffee", Amount::new(3.5), d(2024, 3, 5), "Food"),
            Expense::new(2, "Rent", Amount::new(900.0), d(2024, 3, 1), "Home"),
            Expense::new(3, "Cinema", Amount::new(12.0), d(2024, 4, 2), "Entertainment"),
            Expense::new(4, "Coffee beans", Amount::new(15.0), d(2024, 4, 2), "food"),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<u32> {
        expenses.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let result = ExpenseFilter::new().apply(&sample(), CategoryMatch::Exact);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_modes() {
        let filter = ExpenseFilter::new().category("FOOD");
        assert_eq!(ids(&filter.apply(&sample(), CategoryMatch::CaseInsensitive)), vec![1, 4]);
        assert!(filter.apply(&sample(), CategoryMatch::Exact).is_empty());
    }

    #[test]
    fn test_amount_range_swaps_bounds() {
        let ordered = ExpenseFilter::new().amount_range(Some(10.0), Some(20.0));
        let swapped = ExpenseFilter::new().amount_range(Some(20.0), Some(10.0));
        assert_eq!(ordered, swapped);
        assert_eq!(ids(&ordered.apply(&sample(), CategoryMatch::Exact)), vec![3, 4]);
    }

    #[test]
    fn test_amount_range_open_ends_inclusive() {
        let at_least = ExpenseFilter::new().amount_range(Some(12.0), None);
        assert_eq!(ids(&at_least.apply(&sample(), CategoryMatch::Exact)), vec![2, 3, 4]);

        let at_most = ExpenseFilter::new().amount_range(None, Some(12.0));
        assert_eq!(ids(&at_most.apply(&sample(), CategoryMatch::Exact)), vec![1, 3]);
    }

    #[test]
    fn test_keyword_and_month_combined() {
        let filter = ExpenseFilter::new()
            .keyword("COFFEE")
            .month(YearMonth::parse("2024-04").unwrap());
        assert_eq!(ids(&filter.apply(&sample(), CategoryMatch::Exact)), vec![4]);
    }

    #[test]
    fn test_limit() {
        let result = ExpenseFilter::new().limit(2).apply(&sample(), CategoryMatch::Exact);
        assert_eq!(ids(&result), vec![1, 2]);
    }
}
