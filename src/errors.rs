use std::path::PathBuf;
use thiserror::Error;

/// Failures that reject an invoice source as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file is missing or could not be read.
    #[error("file not found or unreadable: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row could not be read.
    #[error("failed to read header row: {0}")]
    Header(#[source] csv::Error),

    /// The header row lacks a column that every record needs.
    #[error("missing required column `{0}` in header row")]
    MissingColumn(&'static str),
}

/// A single row that could not be turned into an invoice record. The row is
/// skipped and loading carries on.
#[derive(Debug, Error)]
#[error("Error parsing amounts in row {row:?}: {source}")]
pub struct MalformedRecord {
    row: Vec<String>,
    #[source]
    source: csv::Error,
}

impl MalformedRecord {
    pub fn new(row: Vec<String>, source: csv::Error) -> Self {
        Self { row, source }
    }
}
