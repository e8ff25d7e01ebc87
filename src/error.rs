//! Error types for corpus loading, index construction, and queries
//!
//! Startup failures (`Io`, `Configuration`) are fatal for the process.
//! Request failures (`QuerySyntax`, `Validation`) are scoped to the request
//! that caused them and never touch the shared read-only state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors produced by the search core
#[derive(Debug, Error)]
pub enum FolioError {
    /// Corpus (or title list) could not be read from disk
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Title list and corpus disagree, or the corpus cannot be indexed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Compiled query is not a valid regular expression
    #[error("invalid query pattern `{pattern}`: {message}")]
    QuerySyntax { pattern: String, message: String },

    /// Request rejected before it reached the index
    #[error("invalid request: {0}")]
    Validation(String),
}

/// Serializable error classification, sent to server clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Io,
    Configuration,
    QuerySyntax,
    Validation,
}

impl FolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FolioError::Io { .. } => ErrorKind::Io,
            FolioError::Configuration(_) => ErrorKind::Configuration,
            FolioError::QuerySyntax { .. } => ErrorKind::QuerySyntax,
            FolioError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Whether the error only affects the current request
    pub fn is_request_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::QuerySyntax | ErrorKind::Validation)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn query_syntax(pattern: &str, err: regex::Error) -> Self {
        FolioError::QuerySyntax {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
