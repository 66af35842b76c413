//! History entries for expense mutations

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::{diff_expenses, summarize_changes, FieldChange};
use crate::models::Expense;

/// What happened to the expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Added,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Added => "ADD",
            Action::Updated => "UPDATE",
            Action::Deleted => "DELETE",
        };
        f.write_str(label)
    }
}

/// One recorded mutation
///
/// `record` is the expense as it stands after the action (absent for
/// deletes); `previous` is the expense before it (absent for adds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub expense_id: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Expense>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Expense>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,
}

impl AuditEntry {
    pub fn added(expense: &Expense) -> Self {
        Self {
            at: Utc::now(),
            action: Action::Added,
            expense_id: expense.id,
            record: Some(expense.clone()),
            previous: None,
            changes: Vec::new(),
        }
    }

    /// Entry for an update; the changed fields are computed here
    pub fn updated(before: &Expense, after: &Expense) -> Self {
        Self {
            at: Utc::now(),
            action: Action::Updated,
            expense_id: after.id,
            record: Some(after.clone()),
            previous: Some(before.clone()),
            changes: diff_expenses(before, after),
        }
    }

    pub fn deleted(expense: &Expense) -> Self {
        Self {
            at: Utc::now(),
            action: Action::Deleted,
            expense_id: expense.id,
            record: None,
            previous: Some(expense.clone()),
            changes: Vec::new(),
        }
    }

    /// Description of the expense this entry is about
    pub fn description(&self) -> Option<&str> {
        self.record
            .as_ref()
            .or(self.previous.as_ref())
            .map(|e| e.description.as_str())
    }

    /// All changes on one line, `None` if the update changed nothing
    pub fn change_summary(&self) -> Option<String> {
        summarize_changes(&self.changes)
    }

    /// Render as `[time] ACTION #id (description)` plus a changes line
    pub fn describe(&self) -> String {
        let mut line = format!(
            "[{}] {} #{}",
            self.at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.expense_id
        );
        if let Some(description) = self.description() {
            line.push_str(&format!(" ({})", description));
        }
        match (self.action, self.change_summary()) {
            (_, Some(summary)) => line.push_str(&format!("\n  Changes: {}", summary)),
            (Action::Updated, None) => line.push_str("\n  Changes: none"),
            _ => {}
        }
        line
    }
}
