//! Whole-document JSON files
//!
//! Documents are read in full and replaced in full. A replacement goes
//! through a hidden sibling file that is renamed over the target, so a
//! crash mid-write leaves the previous document intact.

use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::SpendlogError;

const INDENT: &[u8] = b"    ";

/// Read and parse a document; `Ok(None)` when the file does not exist
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SpendlogError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SpendlogError::Storage(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| SpendlogError::Json(format!("{}: {}", path.display(), e)))
}

/// Encode a document exactly as it is stored: four-space indent, trailing newline
pub fn encode_document<T: Serialize>(value: &T) -> Result<Vec<u8>, SpendlogError> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .map_err(|e| SpendlogError::Storage(format!("Cannot encode document: {}", e)))?;
    out.push(b'\n');
    Ok(out)
}

/// Encode and atomically replace the document at `path`
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), SpendlogError> {
    replace_file(path, &encode_document(value)?)
}

/// Replace `path` with `contents`, creating parent directories as needed
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<(), SpendlogError> {
    let storage_err = |what: &str, e: std::io::Error| {
        SpendlogError::Storage(format!("Cannot {} {}: {}", what, path.display(), e))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| storage_err("create directory for", e))?;
    }

    let staging = staging_path(path);
    let written = fs::File::create(&staging).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(storage_err("write", e));
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_err("replace", e)
    })
}

// `expenses.json` -> `.expenses.json.tmp` in the same directory
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pages: Vec<u32>,
    }

    fn note() -> Note {
        Note {
            title: "ledger".into(),
            pages: vec![1, 2],
        }
    }

    #[test]
    fn test_missing_document_is_none() {
        let dir = TempDir::new().unwrap();
        let read: Option<Note> = read_document(&dir.path().join("absent.json")).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("note.json");

        write_document(&path, &note()).unwrap();

        assert_eq!(read_document::<Note>(&path).unwrap(), Some(note()));
        assert!(!dir.path().join("a").join("b").join(".note.json.tmp").exists());
    }

    #[test]
    fn test_encoding_layout() {
        let text = String::from_utf8(encode_document(&note()).unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"title\": \"ledger\",\n    \"pages\": [\n        1,\n        2\n    ]\n}\n"
        );
    }

    #[test]
    fn test_unparsable_document_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = read_document::<Note>(&path).unwrap_err();
        assert!(matches!(err, SpendlogError::Json(_)));
    }

    #[test]
    fn test_replace_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.json");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        replace_file(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}
