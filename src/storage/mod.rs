//! Storage layer for spendlog
//!
//! One JSON document per file, replaced atomically on every save.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{encode_document, read_document, write_document};
