//! Expense repository for JSON storage
//!
//! Manages loading and saving the store document (`expenses.json`). The
//! whole document is read and written on every call; there is no cache.

use std::path::{Path, PathBuf};

use crate::error::SpendlogError;
use crate::models::ExpenseDocument;

use super::file_io::{read_document, write_document};

/// Repository for the expense store document
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the store document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, surfacing read, parse and invariant failures
    pub fn try_load(&self) -> Result<ExpenseDocument, SpendlogError> {
        let document: ExpenseDocument = read_document(&self.path)?.unwrap_or_default();
        match document.find_violation() {
            Some(problem) => Err(SpendlogError::Json(format!(
                "{}: {}",
                self.path.display(),
                problem
            ))),
            None => Ok(document),
        }
    }

    /// Load the document
    ///
    /// A missing, unparsable or inconsistent document is the empty store.
    pub fn load(&self) -> ExpenseDocument {
        self.try_load().unwrap_or_default()
    }

    /// Write the full document, replacing whatever was there
    pub fn save(&self, document: &ExpenseDocument) -> Result<(), SpendlogError> {
        write_document(&self.path, document)
    }

    /// Whether a document exists on disk and loads cleanly
    pub fn is_valid(&self) -> bool {
        self.path.exists() && self.try_load().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        let doc = repo.load();
        assert_eq!(doc.last_id, 0);
        assert!(doc.is_empty());
        assert!(!repo.is_valid());
    }

    #[test]
    fn test_corrupt_document_loads_empty() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "{\"last_id\": 3, \"expenses\": [").unwrap();

        assert!(repo.try_load().is_err());
        assert_eq!(repo.load(), ExpenseDocument::default());
        assert!(!repo.is_valid());
    }

    #[test]
    fn test_invalid_records_load_empty() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"last_id": 0, "expenses": [
                {"id": 0, "description": "", "amount": -3, "date": "2024-01-01"},
                {"id": 0, "description": "x", "amount": 0, "date": "2024-01-01"}
            ]}"#,
        )
        .unwrap();

        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
        assert!(!repo.is_valid());
    }

    #[test]
    fn test_duplicate_ids_load_empty() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"last_id": 1, "expenses": [
                {"id": 1, "description": "Tea", "amount": 2, "date": "2024-01-01"},
                {"id": 1, "description": "Bun", "amount": 3, "date": "2024-01-02"}
            ]}"#,
        )
        .unwrap();

        let err = repo.try_load().unwrap_err();
        assert!(err.to_string().contains("more than once"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();

        let mut doc = ExpenseDocument::default();
        doc.last_id = 1;
        doc.expenses.push(Expense::new(
            1,
            "Groceries",
            Amount::new(45.2),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Food",
        ));
        repo.save(&doc).unwrap();

        assert!(repo.is_valid());
        assert_eq!(repo.load(), doc);
    }

    #[test]
    fn test_save_of_load_is_byte_identical() {
        let (_temp_dir, repo) = create_test_repo();

        let mut doc = ExpenseDocument::default();
        doc.last_id = 2;
        doc.expenses.push(Expense::new(
            2,
            "Cinema \"late show\"",
            Amount::new(12.0),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            "Entertainment",
        ));
        repo.save(&doc).unwrap();
        let first = fs::read(repo.path()).unwrap();

        repo.save(&repo.load()).unwrap();
        let second = fs::read(repo.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_reads_hand_written_document() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{
    "last_id": 2,
    "expenses": [
        {"id": 1, "description": "Bus", "amount": 2.5, "date": "2024-03-01"},
        {"id": 2, "description": "Lunch", "amount": 11, "date": "2024-03-02", "category": "Food"}
    ]
}"#,
        )
        .unwrap();

        let doc = repo.load();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.expenses[0].category, "General");
        assert_eq!(doc.expenses[1].amount.value(), 11.0);
    }
}
