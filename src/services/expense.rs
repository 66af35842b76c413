//! Expense store
//!
//! Business logic for expense management: validation, id assignment, CRUD,
//! filtering and summaries. Every operation loads the whole document,
//! works on it in memory and, for mutations, writes it back in full.
//!
//! The store holds a process-local lock across each load/mutate/save
//! sequence, so threads sharing one `ExpenseStore` cannot lose each other's
//! writes. Separate processes writing the same file are not supported: the
//! last writer wins for the whole document.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{CategoryMatch, Settings, SpendlogPaths};
use crate::error::{SpendlogError, SpendlogResult, ValidationError};
use crate::models::{parse_date, today, Amount, Expense, ExpenseDocument, YearMonth, DEFAULT_CATEGORY};
use crate::reports::{Breakdown, GroupBy, Summary, SummaryScope};
use crate::storage::ExpenseRepository;

use super::filter::ExpenseFilter;

/// Raw input for a new expense
///
/// Fields hold user text as typed; the store validates them. Blank `date`
/// means today and blank `category` means "General".
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Changes to apply to an existing expense
///
/// `None` and blank text both leave the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Non-blank, trimmed text or `None`
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn validate_description(description: &str) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        Err(ValidationError::EmptyDescription)
    } else {
        Ok(description.to_string())
    }
}

/// Capitalize the first letter of every word and lowercase the rest
///
/// "fast food" becomes "Fast Food", "o'neil's" becomes "O'Neil'S".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Trimmed, title-cased category, or the default for blank input
pub fn normalize_category(category: &str) -> String {
    let category = category.trim();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        title_case(category)
    }
}

/// Store for expense records
pub struct ExpenseStore {
    repository: ExpenseRepository,
    audit: Option<AuditLogger>,
    category_match: CategoryMatch,
    lock: Mutex<()>,
    warnings: Mutex<Vec<String>>,
}

impl ExpenseStore {
    /// Create a store over a repository, without audit logging
    pub fn new(repository: ExpenseRepository) -> Self {
        Self {
            repository,
            audit: None,
            category_match: CategoryMatch::default(),
            lock: Mutex::new(()),
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Create a store for the configured paths and settings
    pub fn open(paths: &SpendlogPaths, settings: &Settings) -> Self {
        let store = Self::new(ExpenseRepository::new(paths.expenses_file()))
            .with_category_match(settings.category_match);

        if settings.audit_enabled {
            store.with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            store
        }
    }

    /// Record mutations in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Set how category names are compared
    pub fn with_category_match(mut self, mode: CategoryMatch) -> Self {
        self.category_match = mode;
        self
    }

    pub fn repository(&self) -> &ExpenseRepository {
        &self.repository
    }

    pub fn category_match(&self) -> CategoryMatch {
        self.category_match
    }

    fn guard(&self) -> SpendlogResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| SpendlogError::Storage(format!("Failed to acquire store lock: {}", e)))
    }

    // Runs after a successful save; append failures become warnings
    fn audit(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry) {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(format!(
                    "{} of expense {} was saved but not recorded in history: {}",
                    entry.action, entry.expense_id, e
                ));
            }
        }
    }

    /// Drain warnings raised by completed operations
    pub fn take_warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .map(|mut warnings| std::mem::take(&mut *warnings))
            .unwrap_or_default()
    }

    /// Load the persisted document; missing or corrupt files are empty
    pub fn load(&self) -> SpendlogResult<ExpenseDocument> {
        let _guard = self.guard()?;
        Ok(self.repository.load())
    }

    /// Replace the persisted document
    pub fn save(&self, document: &ExpenseDocument) -> SpendlogResult<()> {
        let _guard = self.guard()?;
        self.repository.save(document)
    }

    /// Add a new expense and return its id
    pub fn add(&self, input: NewExpense) -> SpendlogResult<u32> {
        let description = validate_description(&input.description)?;
        let amount = Amount::parse(&input.amount)?;
        let date = match input.date.trim() {
            "" => today(),
            raw => parse_date(raw)?,
        };
        let category = normalize_category(&input.category);

        let _guard = self.guard()?;
        let mut document = self.repository.load();

        let id = document
            .next_id()
            .ok_or(SpendlogError::IdsExhausted(u32::MAX))?;
        let expense = Expense::new(id, description, amount, date, category);
        document.last_id = id;
        document.expenses.push(expense.clone());

        self.repository.save(&document)?;
        self.audit(AuditEntry::added(&expense));

        Ok(id)
    }

    /// Get a single expense
    pub fn get(&self, id: u32) -> SpendlogResult<Expense> {
        self.load()?
            .get(id)
            .cloned()
            .ok_or_else(|| SpendlogError::expense_not_found(id))
    }

    /// Delete an expense, returning the removed record
    ///
    /// The document is only written when something was removed.
    pub fn delete(&self, id: u32) -> SpendlogResult<Expense> {
        let _guard = self.guard()?;
        let mut document = self.repository.load();

        let removed = document
            .remove(id)
            .ok_or_else(|| SpendlogError::expense_not_found(id))?;

        self.repository.save(&document)?;
        self.audit(AuditEntry::deleted(&removed));

        Ok(removed)
    }

    /// Update the provided fields of an expense
    ///
    /// All provided fields are validated before anything changes. The
    /// document is written even when no field was provided.
    pub fn update(&self, id: u32, changes: ExpenseUpdate) -> SpendlogResult<Expense> {
        let description = provided(&changes.description)
            .map(validate_description)
            .transpose()?;
        let amount = provided(&changes.amount).map(Amount::parse).transpose()?;
        let date = provided(&changes.date).map(parse_date).transpose()?;
        let category = provided(&changes.category).map(normalize_category);

        let _guard = self.guard()?;
        let mut document = self.repository.load();

        let expense = document
            .get_mut(id)
            .ok_or_else(|| SpendlogError::expense_not_found(id))?;
        let before = expense.clone();

        if let Some(description) = description {
            expense.description = description;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(date) = date {
            expense.date = date;
        }
        if let Some(category) = category {
            expense.category = category;
        }
        let after = expense.clone();

        self.repository.save(&document)?;

        self.audit(AuditEntry::updated(&before, &after));

        Ok(after)
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> SpendlogResult<Vec<Expense>> {
        Ok(self.load()?.expenses)
    }

    /// Expenses matching an arbitrary filter
    pub fn filter(&self, filter: &ExpenseFilter) -> SpendlogResult<Vec<Expense>> {
        let document = self.load()?;
        Ok(filter.apply(&document.expenses, self.category_match))
    }

    pub fn filter_by_category(&self, category: &str) -> SpendlogResult<Vec<Expense>> {
        self.filter(&ExpenseFilter::new().category(category))
    }

    pub fn filter_by_date(&self, date: NaiveDate) -> SpendlogResult<Vec<Expense>> {
        self.filter(&ExpenseFilter::new().date(date))
    }

    pub fn filter_by_month(&self, month: YearMonth) -> SpendlogResult<Vec<Expense>> {
        self.filter(&ExpenseFilter::new().month(month))
    }

    /// Expenses with `min <= amount <= max`; a missing bound is unbounded
    ///
    /// NaN and infinite bounds are rejected.
    pub fn filter_by_amount_range(
        &self,
        min: Option<f64>,
        max: Option<f64>,
    ) -> SpendlogResult<Vec<Expense>> {
        if let Some(bound) = min.into_iter().chain(max).find(|b| !b.is_finite()) {
            return Err(ValidationError::NonFiniteAmount(bound.to_string()).into());
        }
        self.filter(&ExpenseFilter::new().amount_range(min, max))
    }

    /// Case-insensitive substring search on descriptions
    pub fn search(&self, keyword: &str) -> SpendlogResult<Vec<Expense>> {
        self.filter(&ExpenseFilter::new().keyword(keyword))
    }

    /// Distinct categories in use, sorted
    pub fn categories(&self) -> SpendlogResult<Vec<String>> {
        let mut categories: Vec<String> = self
            .load()?
            .expenses
            .into_iter()
            .map(|e| e.category)
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Count, sum and mean over one scope
    pub fn summarize(&self, scope: &SummaryScope) -> SpendlogResult<Summary> {
        let document = self.load()?;
        Ok(scope.summarize(&document.expenses, self.category_match))
    }

    /// Per-group summaries
    pub fn breakdown(&self, group_by: GroupBy) -> SpendlogResult<Breakdown> {
        let document = self.load()?;
        Ok(Breakdown::generate(
            &document.expenses,
            group_by,
            self.category_match,
        ))
    }
}
