//! Append-only JSONL history file

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::entry::AuditEntry;
use crate::error::{SpendlogError, SpendlogResult};

/// Writes one JSON object per line and reads them back in order
#[derive(Debug, Clone)]
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file and its directory on first use
    pub fn log(&self, entry: &AuditEntry) -> SpendlogResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SpendlogError::Io(format!("Cannot create {}: {}", dir.display(), e))
            })?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| {
                SpendlogError::Io(format!("Cannot append to {}: {}", self.path.display(), e))
            })
    }

    /// Every entry, oldest first; a missing file is an empty history
    pub fn read_all(&self) -> SpendlogResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SpendlogError::Io(format!(
                    "Cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    SpendlogError::Json(format!("History line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendlogResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}
