//! Field-level changes between two versions of an expense

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, DATE_FORMAT};

/// One changed field, rendered as display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub from: String,
    pub to: String,
}

impl FieldChange {
    fn new(field: &str, from: String, to: String) -> Self {
        Self {
            field: field.to_string(),
            from,
            to,
        }
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.from, self.to)
    }
}

/// Compare the user-editable fields of two expenses
///
/// The id is never compared. Fields are reported in record order.
pub fn diff_expenses(before: &Expense, after: &Expense) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(FieldChange::new(
            "description",
            quoted(&before.description),
            quoted(&after.description),
        ));
    }
    if before.amount != after.amount {
        changes.push(FieldChange::new(
            "amount",
            before.amount.to_string(),
            after.amount.to_string(),
        ));
    }
    if before.date != after.date {
        changes.push(FieldChange::new(
            "date",
            before.date.format(DATE_FORMAT).to_string(),
            after.date.format(DATE_FORMAT).to_string(),
        ));
    }
    if before.category != after.category {
        changes.push(FieldChange::new(
            "category",
            quoted(&before.category),
            quoted(&after.category),
        ));
    }

    changes
}

/// Join changes into one line, `None` when nothing changed
pub fn summarize_changes(changes: &[FieldChange]) -> Option<String> {
    if changes.is_empty() {
        return None;
    }
    Some(
        changes
            .iter()
            .map(FieldChange::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn quoted(s: &str) -> String {
    if s.chars().count() > 40 {
        let head: String = s.chars().take(37).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}
