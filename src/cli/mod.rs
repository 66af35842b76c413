//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the expense store. Each subcommand maps to
//! exactly one store operation.

pub mod config;
pub mod expense;
pub mod export;
pub mod filter;
pub mod history;
pub mod summary;

pub use config::{handle_config_command, handle_init_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use filter::{handle_filter_command, FilterCommands};
pub use history::handle_history_command;
pub use summary::{handle_breakdown_command, handle_summary_command, GroupByArg, SummaryCommands};

use crate::config::{Settings, SpendlogPaths};
use crate::services::ExpenseStore;

/// Everything a command handler needs, owned by `main`
pub struct AppContext {
    pub paths: SpendlogPaths,
    pub settings: Settings,
    pub store: ExpenseStore,
}

impl AppContext {
    /// Build the context for the given paths and settings
    pub fn new(paths: SpendlogPaths, settings: Settings) -> Self {
        let store = ExpenseStore::open(&paths, &settings);
        Self {
            paths,
            settings,
            store,
        }
    }

    /// Currency symbol for display
    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Rebuild the store after settings changed
    pub fn reload_store(&mut self) {
        self.store = ExpenseStore::open(&self.paths, &self.settings);
    }
}
