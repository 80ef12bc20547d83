//! Error types for weighted-table

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Weighted core error: {0}")]
    Core(#[from] weighted_core::Error),

    /// A row could not be read as the declared number of numeric fields
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    /// The source could not be read or the destination could not be written
    #[error("IO failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach `path` to I/O failures surfaced through the CSV layer
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Csv(err) if err.is_io_error() => match err.into_kind() {
                csv::ErrorKind::Io(source) => Self::io(path, source),
                kind => Self::InvalidParameter(format!("unexpected CSV error: {kind:?}")),
            },
            other => other,
        }
    }
}
