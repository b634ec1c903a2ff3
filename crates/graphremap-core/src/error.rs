//! Errors raised while remapping a dataset.
//!
//! Every variant aborts the run. Files rewritten before the failure are not
//! restored, so callers should point the tool at a copy of the dataset.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RemapError>;

#[derive(Debug, thiserror::Error)]
pub enum RemapError {
    /// An edge table references an entity type whose vertex table was never remapped.
    #[error("no lookup table for entity type `{entity_type}` (referenced by {})", .table.display())]
    MissingMapping { entity_type: String, table: PathBuf },

    #[error("malformed table file name {}: {reason}", .path.display())]
    MalformedFileName { path: PathBuf, reason: String },

    #[error("table {} has no column {column}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error(
        "invalid identifier `{value}` in {} (line {line}, column `{column}`)",
        .path.display()
    )]
    InvalidIdentifier {
        path: PathBuf,
        /// 1-based line in the file; the header is line 1.
        line: usize,
        column: String,
        value: String,
    },

    #[error("expected directory: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to list {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read or write table {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RemapError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
