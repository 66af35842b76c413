//! User settings for spendlog
//!
//! Display preferences and the category comparison mode. These live in
//! their own document next to the data directory and are never part of the
//! expense store itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::{SpendlogError, ValidationError};
use crate::storage::{read_document, write_document};

/// How category names are compared when filtering and summarizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryMatch {
    /// "food" matches "Food"
    #[default]
    CaseInsensitive,
    /// Byte-for-byte comparison
    Exact,
}

impl CategoryMatch {
    /// Compare two category names under this mode
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
            Self::Exact => a == b,
        }
    }
}

impl fmt::Display for CategoryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseInsensitive => write!(f, "case-insensitive"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for CategoryMatch {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "case-insensitive" | "insensitive" | "ci" => Ok(Self::CaseInsensitive),
            "exact" | "case-sensitive" => Ok(Self::Exact),
            _ => Err(ValidationError::InvalidSetting {
                key: "category_match".into(),
                value: s.to_string(),
            }),
        }
    }
}

/// User settings for spendlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Theme name for presentation layers
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Category comparison mode
    #[serde(default)]
    pub category_match: CategoryMatch,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            theme: default_theme(),
            category_match: CategoryMatch::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Keys accepted by [`Settings::set`]
    pub const KEYS: [&'static str; 4] = ["currency_symbol", "theme", "category_match", "audit_enabled"];

    /// Load settings, falling back to defaults when no file exists yet
    ///
    /// Nothing is written here; `init` and `config set` persist.
    pub fn load_or_create(paths: &SpendlogPaths) -> Result<Self, SpendlogError> {
        read_document::<Settings>(&paths.settings_file())
            .map(Option::unwrap_or_default)
            .map_err(|e| SpendlogError::Config(format!("Unreadable settings: {}", e)))
    }

    pub fn save(&self, paths: &SpendlogPaths) -> Result<(), SpendlogError> {
        write_document(&paths.settings_file(), self)
    }

    /// Update a single setting from its textual form
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let invalid = || ValidationError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "currency_symbol" | "currency" => {
                self.currency_symbol = value.trim().to_string();
            }
            "theme" => {
                let theme = value.trim();
                if theme.is_empty() {
                    return Err(invalid());
                }
                self.theme = theme.to_string();
            }
            "category_match" => {
                self.category_match = value.parse()?;
            }
            "audit_enabled" | "audit" => {
                self.audit_enabled = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(invalid()),
        }

        Ok(())
    }
}
