//! Expense model
//!
//! Represents a single tracked expense and the store document that holds
//! all of them.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Missing, null and blank categories all read as the default
fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default_category))
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the store
    pub id: u32,

    /// What the money was spent on
    pub description: String,

    /// Positive amount
    pub amount: Amount,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-form category label
    #[serde(default = "default_category", deserialize_with = "deserialize_category")]
    pub category: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: u32,
        description: impl Into<String>,
        amount: Amount,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Check whether the record satisfies the store invariants
    pub fn is_valid(&self) -> bool {
        self.id > 0 && !self.description.trim().is_empty() && self.amount.is_valid_expense()
    }
}

/// The full persisted store document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDocument {
    /// Last id handed out (advisory; uniqueness comes from scanning ids)
    #[serde(default)]
    pub last_id: u32,

    /// All expenses, in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl ExpenseDocument {
    /// The id the next added expense receives
    ///
    /// `None` once the largest id in use is `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        self.expenses
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// First record that breaks the store invariants, described
    ///
    /// Ids must be positive and unique, descriptions non-blank and amounts
    /// positive and finite.
    pub fn find_violation(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !expense.is_valid() {
                return Some(format!(
                    "expense {} has an empty description or a non-positive amount, or id 0",
                    expense.id
                ));
            }
            if !seen.insert(expense.id) {
                return Some(format!("expense id {} appears more than once", expense.id));
            }
        }
        None
    }

    /// Find an expense by id
    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by id for modification
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Remove the expense with the given id, returning it if present
    pub fn remove(&mut self, id: u32) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
