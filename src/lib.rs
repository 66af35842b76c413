//! spendlog - personal expense tracker
//!
//! This library provides the core of the spendlog expense tracker: a single
//! JSON document of expenses with create, update, delete, filter, summary and
//! export operations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, months)
//! - `storage`: JSON file storage layer
//! - `services`: The expense store and filters
//! - `reports`: Summaries and breakdowns
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{Settings, SpendlogPaths};
//! use spendlog::services::{ExpenseStore, NewExpense};
//!
//! let paths = SpendlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = ExpenseStore::open(&paths, &settings);
//! let id = store.add(NewExpense::new("Coffee", "3.50").category("food"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult, ValidationError};
